//! Declarative evaluation configuration
//!
//! - `schema`: YAML manifest types (`EvalSpec`)
//! - `loader`: reading manifests, resolving relative paths
//! - `validate`: range and consistency checks
//! - `cli`: command-line arguments for the binary

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{parse_args, Cli};
pub use loader::{load_and_validate, load_config};
pub use schema::{DataSpec, EvalSpec, EvaluationParams, OutputSpec, PredictionsSpec};
pub use validate::{validate_config, ValidationError};
