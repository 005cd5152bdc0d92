//! Class probabilities exported by a training framework
//!
//! The training run writes its `predict` output as JSON:
//!
//! ```json
//! { "probabilities": [[0.01, 0.97, ...], ...] }
//! ```
//!
//! `ProbabilityTable` replays those rows as a [`Classifier`].

use crate::error::{Error, Result};
use crate::eval::Classifier;
use ndarray::{Array2, ArrayView2, ArrayView4, Axis};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct PredictionExport {
    probabilities: Vec<Vec<f32>>,
}

/// Precomputed class probabilities, one row per example
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
    probabilities: Array2<f32>,
}

impl ProbabilityTable {
    /// Wrap an `(examples, classes)` probability matrix
    pub fn new(probabilities: Array2<f32>) -> Self {
        Self { probabilities }
    }

    /// Build from row vectors; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if let Some(bad) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(Error::ShapeMismatch {
                expected: vec![n_cols],
                actual: vec![bad.len()],
            });
        }

        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let probabilities = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| Error::Serialization(format!("Invalid probability matrix: {e}")))?;
        Ok(Self { probabilities })
    }

    /// Load an exported JSON probability file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Serialization(format!("Failed to read predictions {}: {e}", path.display()))
        })?;
        let export: PredictionExport = serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?;
        Self::from_rows(export.probabilities)
    }

    /// Write the table in the same JSON layout [`ProbabilityTable::load`] reads
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let export = PredictionExport {
            probabilities: self.probabilities.outer_iter().map(|row| row.to_vec()).collect(),
        };
        let json = serde_json::to_string(&export)
            .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Number of examples covered
    pub fn len(&self) -> usize {
        self.probabilities.len_of(Axis(0))
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The probability matrix
    pub fn probabilities(&self) -> ArrayView2<'_, f32> {
        self.probabilities.view()
    }
}

impl Classifier for ProbabilityTable {
    fn n_classes(&self) -> usize {
        self.probabilities.len_of(Axis(1))
    }

    fn predict_proba(&self, images: ArrayView4<'_, f32>) -> Result<Array2<f32>> {
        let batch = images.len_of(Axis(0));
        if batch != self.len() {
            return Err(Error::ShapeMismatch {
                expected: vec![batch, self.n_classes()],
                actual: vec![self.len(), self.n_classes()],
            });
        }
        Ok(self.probabilities.clone())
    }
}
