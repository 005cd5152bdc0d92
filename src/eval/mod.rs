//! Classifier evaluation
//!
//! ## Architecture
//!
//! - `classification`: confusion matrix, normalization, per-class metrics, reports
//! - `evaluator`: `ModelEvaluator` running a `Classifier` over a labeled set
//!
//! ## Example
//!
//! ```ignore
//! use evaluar::eval::{EvalConfig, ModelEvaluator};
//!
//! let evaluator = ModelEvaluator::new(EvalConfig { sample_size: 20, seed: 42 });
//! let result = evaluator.evaluate_seeded(&classifier, &test_set, &class_names)?;
//! println!("Accuracy: {:.3}%", result.accuracy * 100.0);
//! ```

pub mod classification;
pub mod evaluator;

// Re-export main types
pub use classification::{
    classification_report, confusion_matrix, Average, ClassificationReport, ConfusionMatrix,
    MultiClassMetrics, NormalizedConfusionMatrix, ReportRow,
};
pub use evaluator::{
    argmax, draw_samples, evaluate, predict_classes, Classifier, EvalConfig, EvaluationResult,
    ModelEvaluator, VisualSample,
};
