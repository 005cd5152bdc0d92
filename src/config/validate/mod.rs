//! Configuration validation
//!
//! Validates evaluation specifications for correctness before execution.

mod error;
mod validator;

#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
