//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;
use crate::error::Result;

/// Multi-class classification metrics
#[derive(Clone, Debug, PartialEq)]
pub struct MultiClassMetrics {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    /// Global (TP, FP, FN) totals for micro averaging
    totals: (usize, usize, usize),
}

impl MultiClassMetrics {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);
        let mut totals = (0, 0, 0);

        for class in 0..n_classes {
            let (tp, fp, fn_) = (
                cm.true_positives(class),
                cm.false_positives(class),
                cm.false_negatives(class),
            );
            totals.0 += tp;
            totals.1 += fp;
            totals.2 += fn_;

            let (p, r, f) = precision_recall_f1(tp, fp, fn_);
            precision.push(p);
            recall.push(r);
            f1.push(f);
            support.push(cm.support(class));
        }

        Self {
            precision,
            recall,
            f1,
            support,
            n_classes,
            totals,
        }
    }

    /// Compute from predictions and ground truth over `n_classes` labels
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<Self> {
        let cm = ConfusionMatrix::from_predictions(y_pred, y_true, n_classes)?;
        Ok(Self::from_confusion_matrix(&cm))
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro().0,
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro().1,
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro().2,
            _ => self.average_metric(&self.f1, average),
        }
    }

    /// Total support across classes
    pub fn total_support(&self) -> usize {
        self.support.iter().sum()
    }

    fn micro(&self) -> (f64, f64, f64) {
        let (tp, fp, fn_) = self.totals;
        precision_recall_f1(tp, fp, fn_)
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro | Average::Micro => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Average::Weighted => {
                let total_support = self.total_support();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
        }
    }
}

/// Precision, recall and F1 from raw counts; zero wherever a denominator is zero
fn precision_recall_f1(tp: usize, fp: usize, fn_: usize) -> (f64, f64, f64) {
    let (tp, fp, fn_) = (tp as f64, fp as f64, fn_ as f64);
    let p = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
    let r = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
    let f = if p + r > 0.0 {
        2.0 * p * r / (p + r)
    } else {
        0.0
    };
    (p, r, f)
}
