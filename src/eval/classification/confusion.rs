//! Confusion matrix for multi-class classification

use crate::data::ClassNameTable;
use crate::error::{Error, Result};
use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Element [i][j] represents count of samples with true label i predicted as j
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<usize>>,
    /// Number of classes
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Create an empty confusion matrix over `n_classes` labels
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
        }
    }

    /// Tally predictions against ground truth over a fixed label space
    ///
    /// The label space is fixed up front so that classes absent from both
    /// slices still get a (zero) row and column.
    pub fn from_predictions(y_pred: &[usize], y_true: &[usize], n_classes: usize) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::ShapeMismatch {
                expected: vec![y_true.len()],
                actual: vec![y_pred.len()],
            });
        }

        let mut cm = Self::new(n_classes);

        for (index, (&pred, &true_label)) in y_pred.iter().zip(y_true.iter()).enumerate() {
            for label in [true_label, pred] {
                if label >= n_classes {
                    return Err(Error::LabelOutOfRange {
                        index,
                        label,
                        n_classes,
                    });
                }
            }
            cm.matrix[true_label][pred] += 1;
        }

        Ok(cm)
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Get element at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    /// Calculate true positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes).filter(|&i| i != class).map(|i| self.matrix[i][class]).sum()
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes).filter(|&j| j != class).map(|j| self.matrix[class][j]).sum()
    }

    /// Calculate true negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Calculate support (total true instances) for a class
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Number of samples predicted as a class
    pub fn predicted_count(&self, class: usize) -> usize {
        self.matrix.iter().map(|row| row[class]).sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Number of samples on the diagonal
    pub fn correct(&self) -> usize {
        (0..self.n_classes).map(|i| self.matrix[i][i]).sum()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.correct() as f64 / total as f64
    }

    /// Row-normalize: each row divided by its support
    pub fn normalized(&self) -> NormalizedConfusionMatrix {
        NormalizedConfusionMatrix::from_counts(self)
    }

    /// Render with class names as row labels and class indices as column headers
    pub fn render(&self, names: &ClassNameTable) -> String {
        let name_width = names.max_name_width();
        let digits = self.matrix.iter().flatten().max().map_or(1, |m| m.to_string().len());
        let cell = digits.max(self.n_classes.to_string().len()).max(4) + 1;

        let mut out = String::new();
        out.push_str("Confusion matrix (rows: true, columns: predicted)\n");
        out.push_str(&" ".repeat(name_width + 4));
        for j in 0..self.n_classes {
            out.push_str(&format!("{j:>cell$}"));
        }
        out.push('\n');

        for i in 0..self.n_classes {
            let name = names.name(i).unwrap_or("?");
            out.push_str(&format!("{i:>2} {name:<name_width$} "));
            for j in 0..self.n_classes {
                out.push_str(&format!("{:>cell$}", self.matrix[i][j]));
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "      ")?;
        for j in 0..self.n_classes {
            write!(f, "Pred {j} ")?;
        }
        writeln!(f)?;

        // Rows
        for i in 0..self.n_classes {
            write!(f, "True {i}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Confusion matrix with each row divided by its support
///
/// A class with no true examples keeps an all-zero row instead of dividing by zero.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedConfusionMatrix {
    rows: Vec<Vec<f64>>,
}

impl NormalizedConfusionMatrix {
    /// Normalize a count matrix row by row
    pub fn from_counts(cm: &ConfusionMatrix) -> Self {
        let rows = cm
            .matrix()
            .iter()
            .map(|row| {
                let support: usize = row.iter().sum();
                if support == 0 {
                    vec![0.0; row.len()]
                } else {
                    row.iter().map(|&c| c as f64 / support as f64).collect()
                }
            })
            .collect();
        Self { rows }
    }

    /// Row-normalized values
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.rows.len()
    }

    /// Fraction of true class `true_label` predicted as `predicted_label`
    pub fn get(&self, true_label: usize, predicted_label: usize) -> f64 {
        self.rows[true_label][predicted_label]
    }

    /// Sum of one row: 1 for a present class, 0 for an absent one
    pub fn row_sum(&self, true_label: usize) -> f64 {
        self.rows[true_label].iter().sum()
    }

    /// Per-class recall, read off the diagonal
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.len()).map(|i| self.rows[i][i]).collect()
    }
}

impl fmt::Display for NormalizedConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Normalized Confusion Matrix:")?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "True {i}")?;
            for value in row {
                write!(f, " {value:>5.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
