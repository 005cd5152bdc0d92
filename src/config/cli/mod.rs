//! CLI argument parsing
//!
//! ```bash
//! evaluar configs/fashion_mnist.yaml
//! evaluar configs/fashion_mnist.yaml --verbose
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Evaluar: evaluation reports for image classifiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(version)]
#[command(
    about = "Accuracy, confusion matrices, classification reports and annotated samples for image classifiers"
)]
pub struct Cli {
    /// Path to YAML evaluation manifest
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
