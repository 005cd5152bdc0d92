//! Evaluar CLI
//!
//! Single-command evaluation entry point for the evaluar library.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate from a manifest
//! evaluar configs/fashion_mnist.yaml
//!
//! # Print sampled examples and timings too
//! evaluar configs/fashion_mnist.yaml --verbose
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
