//! Classification metrics for model evaluation
//!
//! Provides multi-class classification metrics including:
//! - Confusion matrix computation and row normalization
//! - Per-class precision, recall, F1
//! - Macro, micro, and weighted averaging
//! - sklearn-style classification reports

mod average;
mod confusion;
mod metrics;
mod report;



// Re-export all public types and functions
pub use average::Average;
pub use confusion::{ConfusionMatrix, NormalizedConfusionMatrix};
pub use metrics::MultiClassMetrics;
pub use report::{classification_report, confusion_matrix, ClassificationReport, ReportRow};
