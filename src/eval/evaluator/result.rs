//! Evaluation result structure

use super::sample::VisualSample;
use crate::data::ClassNameTable;
use crate::eval::classification::{ClassificationReport, ConfusionMatrix, NormalizedConfusionMatrix};
use std::fmt;

/// Everything one evaluation pass produces
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    /// Predicted class index per example
    pub predictions: Vec<usize>,
    /// Fraction of examples predicted correctly
    pub accuracy: f64,
    /// Counts of (true, predicted) pairs
    pub confusion: ConfusionMatrix,
    /// Row-normalized confusion matrix
    pub normalized: NormalizedConfusionMatrix,
    /// Per-class precision/recall/F1/support
    pub report: ClassificationReport,
    /// Randomly drawn annotated examples
    pub samples: Vec<VisualSample>,
    /// Time spent in the classifier, in milliseconds
    pub inference_time_ms: f64,
}

impl EvaluationResult {
    /// Number of evaluated examples
    pub fn n_examples(&self) -> usize {
        self.predictions.len()
    }

    /// Number of wrong predictions
    pub fn misclassified(&self) -> usize {
        self.confusion.total() - self.confusion.correct()
    }

    /// Human-readable report: accuracy, confusion table, classification report
    pub fn render(&self, names: &ClassNameTable) -> String {
        format!(
            "Accuracy: {:.3}%\n\n{}\n{}",
            self.accuracy * 100.0,
            self.confusion.render(names),
            self.report.render(names)
        )
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Examples: {}", self.n_examples())?;
        writeln!(f, "Accuracy: {:.3}%", self.accuracy * 100.0)?;
        writeln!(f, "{}", self.confusion)?;
        writeln!(f, "{}", self.report)?;
        writeln!(f, "Inference time: {:.2}ms", self.inference_time_ms)?;
        Ok(())
    }
}
