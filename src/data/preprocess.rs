//! Preprocessing: channel expansion and intensity normalization

use super::dataset::LabeledImageSet;
use super::idx::{read_images, read_labels, RawImages};
use crate::error::{Error, Result};
use ndarray::Array4;
use std::path::Path;

/// Largest raw pixel intensity
pub const PIXEL_MAX: f32 = 255.0;

/// Reshape raw images to `(n, rows, cols, 1)` and scale intensities into `[0, 1]`
pub fn preprocess(raw: &RawImages, labels: &[u8]) -> Result<LabeledImageSet> {
    if raw.count != labels.len() {
        return Err(Error::ShapeMismatch {
            expected: vec![raw.count],
            actual: vec![labels.len()],
        });
    }

    let data: Vec<f32> = raw.pixels.iter().map(|&p| f32::from(p) / PIXEL_MAX).collect();
    let images = Array4::from_shape_vec((raw.count, raw.rows, raw.cols, 1), data)
        .map_err(|e| Error::Dataset(format!("Failed to reshape images: {e}")))?;

    LabeledImageSet::new(images, labels.iter().map(|&l| usize::from(l)).collect())
}

/// Load an IDX image/label pair and preprocess it
pub fn load_labeled_set(
    images_path: impl AsRef<Path>,
    labels_path: impl AsRef<Path>,
) -> Result<LabeledImageSet> {
    let raw = read_images(images_path)?;
    let labels = read_labels(labels_path)?;
    preprocess(&raw, &labels)
}
