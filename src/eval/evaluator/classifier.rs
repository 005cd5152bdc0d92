//! Classifier collaborator interface and argmax reduction

use crate::error::Result;
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayView4, Axis};

/// Anything that maps a batch of images to per-class probabilities
///
/// Implementations return one row per image and `n_classes()` columns.
/// Errors are handed back to the caller of the evaluator untouched.
pub trait Classifier {
    /// Output cardinality (number of probability columns)
    fn n_classes(&self) -> usize;

    /// Class probabilities for every image in `images` (`(n, height, width, 1)`)
    fn predict_proba(&self, images: ArrayView4<'_, f32>) -> Result<Array2<f32>>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn n_classes(&self) -> usize {
        (**self).n_classes()
    }

    fn predict_proba(&self, images: ArrayView4<'_, f32>) -> Result<Array2<f32>> {
        (**self).predict_proba(images)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn n_classes(&self) -> usize {
        (**self).n_classes()
    }

    fn predict_proba(&self, images: ArrayView4<'_, f32>) -> Result<Array2<f32>> {
        (**self).predict_proba(images)
    }
}

/// Index of the largest value, lowest index on ties
///
/// NaN never compares greater, so a row of NaN (or an empty row) yields 0.
pub fn argmax(row: ArrayView1<'_, f32>) -> usize {
    let mut best_index = 0;
    let mut best = f32::NEG_INFINITY;
    for (index, &value) in row.iter().enumerate() {
        if value > best {
            best = value;
            best_index = index;
        }
    }
    best_index
}

/// Reduce each probability row to its argmax class
pub fn predict_classes(probabilities: ArrayView2<'_, f32>) -> Vec<usize> {
    probabilities.axis_iter(Axis(0)).map(argmax).collect()
}
