//! Labeled image sets

use crate::error::{Error, Result};
use ndarray::{s, Array2, Array4, ArrayView2, ArrayView4, Axis};

/// Ordered (image, label) pairs held as one `(n, height, width, 1)` tensor
///
/// All images share the same dimensions by construction; labels are class
/// indices checked against a class table at evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledImageSet {
    images: Array4<f32>,
    labels: Vec<usize>,
}

impl LabeledImageSet {
    /// Pair a single-channel image tensor with its labels
    pub fn new(images: Array4<f32>, labels: Vec<usize>) -> Result<Self> {
        let (n, height, width, channels) = images.dim();
        if n != labels.len() {
            return Err(Error::ShapeMismatch {
                expected: vec![labels.len(), height, width, channels],
                actual: vec![n, height, width, channels],
            });
        }
        if channels != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![n, height, width, 1],
                actual: vec![n, height, width, channels],
            });
        }
        Ok(Self { images, labels })
    }

    /// The full image batch
    pub fn images(&self) -> ArrayView4<'_, f32> {
        self.images.view()
    }

    /// True class index per example
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set has no examples
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(height, width)` shared by every image
    pub fn image_dims(&self) -> (usize, usize) {
        let (_, height, width, _) = self.images.dim();
        (height, width)
    }

    /// One image with the channel axis squeezed out
    pub fn image(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        (index < self.len()).then(|| self.images.slice(s![index, .., .., 0]))
    }

    /// Owned copy of one image
    pub fn image_owned(&self, index: usize) -> Option<Array2<f32>> {
        self.image(index).map(|view| view.to_owned())
    }

    /// Split off the first `k` examples
    ///
    /// Returns `(head, tail)`; `k` larger than the set yields an empty tail.
    pub fn split_at(&self, k: usize) -> (Self, Self) {
        let k = k.min(self.len());
        let head = Self {
            images: self.images.slice_axis(Axis(0), (..k).into()).to_owned(),
            labels: self.labels[..k].to_vec(),
        };
        let tail = Self {
            images: self.images.slice_axis(Axis(0), (k..).into()).to_owned(),
            labels: self.labels[k..].to_vec(),
        };
        (head, tail)
    }

    /// Per-class example counts for a label space of `n_classes`
    ///
    /// Labels outside the label space are not counted.
    pub fn class_counts(&self, n_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; n_classes];
        for &label in &self.labels {
            if let Some(count) = counts.get_mut(label) {
                *count += 1;
            }
        }
        counts
    }
}
