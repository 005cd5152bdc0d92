//! Model Evaluator for standardized evaluation
//!
//! Runs a classifier over a labeled image set and derives predictions,
//! accuracy, confusion matrices, the classification report, and an
//! annotated random sample.

mod classifier;
mod config;
mod model_evaluator;
mod result;
mod sample;

#[cfg(test)]
mod tests;

// Re-export all public types for API compatibility
pub use classifier::{argmax, predict_classes, Classifier};
pub use config::EvalConfig;
pub use model_evaluator::{evaluate, ModelEvaluator};
pub use result::EvaluationResult;
pub use sample::{draw_samples, VisualSample};
