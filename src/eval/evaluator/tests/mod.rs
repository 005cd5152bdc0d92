//! Evaluator tests

mod core_tests;

use crate::data::LabeledImageSet;
use crate::error::{Error, Result};
use crate::eval::evaluator::Classifier;
use ndarray::{Array2, Array4, ArrayView4, Axis};
use std::cell::Cell;

/// Returns a fixed probability matrix and counts how often it was called
pub(super) struct FixedClassifier {
    pub probabilities: Array2<f32>,
    pub calls: Cell<usize>,
}

impl FixedClassifier {
    pub fn new(probabilities: Array2<f32>) -> Self {
        Self {
            probabilities,
            calls: Cell::new(0),
        }
    }

    /// One-hot probabilities for the given predicted classes
    pub fn one_hot(predictions: &[usize], n_classes: usize) -> Self {
        let mut probabilities = Array2::zeros((predictions.len(), n_classes));
        for (row, &class) in predictions.iter().enumerate() {
            probabilities[[row, class]] = 1.0;
        }
        Self::new(probabilities)
    }
}

impl Classifier for FixedClassifier {
    fn n_classes(&self) -> usize {
        self.probabilities.len_of(Axis(1))
    }

    fn predict_proba(&self, _images: ArrayView4<'_, f32>) -> Result<Array2<f32>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.probabilities.clone())
    }
}

/// Always fails the way a framework would on a bad input tensor
pub(super) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn n_classes(&self) -> usize {
        2
    }

    fn predict_proba(&self, _images: ArrayView4<'_, f32>) -> Result<Array2<f32>> {
        Err(Error::classifier("expected input of rank 4 with 3 channels"))
    }
}

/// Labeled set of tiny images whose pixel value encodes the example index
pub(super) fn labeled_set(labels: &[usize]) -> LabeledImageSet {
    let n = labels.len();
    let images = Array4::from_shape_fn((n, 3, 3, 1), |(i, _, _, _)| i as f32 / n.max(1) as f32);
    LabeledImageSet::new(images, labels.to_vec()).unwrap()
}
