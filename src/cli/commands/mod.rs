//! CLI command implementations

mod evaluate;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::Cli;

/// Execute the evaluation described by the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);
    evaluate::run_evaluate(&cli.config, log_level)
}
