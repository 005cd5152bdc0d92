//! Classification report functions

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;
use crate::data::ClassNameTable;
use crate::error::Result;
use std::fmt;

/// One row of a classification report
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportRow {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class precision/recall/F1/support plus aggregate rows
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationReport {
    /// One row per class index
    pub classes: Vec<ReportRow>,
    /// Overall accuracy
    pub accuracy: f64,
    /// Unweighted mean over classes
    pub macro_avg: ReportRow,
    /// Support-weighted mean over classes
    pub weighted_avg: ReportRow,
}

impl ClassificationReport {
    /// Derive the report from a confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let metrics = MultiClassMetrics::from_confusion_matrix(cm);
        let total_support = metrics.total_support();

        let classes = (0..metrics.n_classes)
            .map(|class| ReportRow {
                precision: metrics.precision[class],
                recall: metrics.recall[class],
                f1: metrics.f1[class],
                support: metrics.support[class],
            })
            .collect();

        let averaged = |average: Average| ReportRow {
            precision: metrics.precision_avg(average),
            recall: metrics.recall_avg(average),
            f1: metrics.f1_avg(average),
            support: total_support,
        };

        Self {
            classes,
            accuracy: cm.accuracy(),
            macro_avg: averaged(Average::Macro),
            weighted_avg: averaged(Average::Weighted),
        }
    }

    /// Row for one class
    pub fn class(&self, class: usize) -> Option<&ReportRow> {
        self.classes.get(class)
    }

    /// Total number of evaluated examples
    pub fn total_support(&self) -> usize {
        self.classes.iter().map(|r| r.support).sum()
    }

    /// sklearn-style text table using class names as row labels
    pub fn render(&self, names: &ClassNameTable) -> String {
        let labels: Vec<String> = (0..self.classes.len())
            .map(|class| names.name(class).map_or_else(|| format!("Class {class}"), str::to_string))
            .collect();
        self.render_with_labels(&labels)
    }

    fn render_with_labels(&self, labels: &[String]) -> String {
        let width = labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(Average::Weighted.label().len()))
            .max()
            .unwrap_or(0);

        let mut report = String::new();

        // Header
        report.push_str(&format!(
            "{:>width$} {:>10} {:>10} {:>10} {:>10}\n\n",
            "", "precision", "recall", "f1-score", "support"
        ));

        // Per-class metrics
        for (label, row) in labels.iter().zip(&self.classes) {
            report.push_str(&format_row(label, row, width));
        }
        report.push('\n');

        // Averages
        report.push_str(&format!(
            "{:>width$} {:>10} {:>10} {:>10.2} {:>10}\n",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.total_support()
        ));
        report.push_str(&format_row(Average::Macro.label(), &self.macro_avg, width));
        report.push_str(&format_row(Average::Weighted.label(), &self.weighted_avg, width));

        report
    }
}

fn format_row(label: &str, row: &ReportRow, width: usize) -> String {
    format!(
        "{:>width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        label, row.precision, row.recall, row.f1, row.support
    )
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = (0..self.classes.len()).map(|c| format!("Class {c}")).collect();
        f.write_str(&self.render_with_labels(&labels))
    }
}

/// Compute confusion matrix from predictions and ground truth
///
/// # Arguments
/// * `y_pred` - Predicted class labels
/// * `y_true` - Ground truth class labels
/// * `n_classes` - Size of the label space
///
/// # Returns
/// A ConfusionMatrix where element [i][j] is count of true label i predicted as j
///
/// # Example
/// ```
/// use evaluar::eval::confusion_matrix;
///
/// let y_pred = vec![0, 1, 1, 2, 0];
/// let y_true = vec![0, 1, 0, 2, 1];
/// let cm = confusion_matrix(&y_pred, &y_true, 3).unwrap();
///
/// assert_eq!(cm.get(0, 0), 1);  // True 0, predicted 0
/// assert_eq!(cm.get(0, 1), 1);  // True 0, predicted 1
/// ```
pub fn confusion_matrix(
    y_pred: &[usize],
    y_true: &[usize],
    n_classes: usize,
) -> Result<ConfusionMatrix> {
    ConfusionMatrix::from_predictions(y_pred, y_true, n_classes)
}

/// Generate sklearn-style classification report
///
/// # Example
/// ```
/// use evaluar::eval::classification_report;
///
/// let report = classification_report(&[0, 1, 0, 2], &[0, 1, 1, 2], 3).unwrap();
/// assert!((report.accuracy - 0.75).abs() < 1e-12);
/// println!("{report}");
/// ```
pub fn classification_report(
    y_pred: &[usize],
    y_true: &[usize],
    n_classes: usize,
) -> Result<ClassificationReport> {
    let cm = ConfusionMatrix::from_predictions(y_pred, y_true, n_classes)?;
    Ok(ClassificationReport::from_confusion_matrix(&cm))
}
