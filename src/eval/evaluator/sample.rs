//! Annotated example sample for visual inspection

use crate::data::{ClassNameTable, LabeledImageSet};
use crate::error::{Error, Result};
use ndarray::Array2;
use rand::seq::index;
use rand::Rng;

/// One sampled example with its predicted and true class
#[derive(Clone, Debug, PartialEq)]
pub struct VisualSample {
    /// Position of the example in the evaluated set
    pub index: usize,
    /// Image with the channel axis squeezed out
    pub image: Array2<f32>,
    /// Predicted class index
    pub predicted: usize,
    /// True class index
    pub actual: usize,
    /// Predicted class name
    pub predicted_name: String,
    /// True class name
    pub true_name: String,
    /// Whether the prediction is correct
    pub is_match: bool,
}

impl VisualSample {
    /// Two-line caption: ground truth first, then the prediction
    pub fn caption(&self) -> String {
        format!("Ground truth: {}\nPredicted: {}", self.true_name, self.predicted_name)
    }
}

/// Draw `min(sample_size, n)` distinct examples uniformly at random
///
/// `predictions` must run parallel to `data`, and every predicted and true
/// label must have a name in `names`.
pub fn draw_samples<R: Rng + ?Sized>(
    rng: &mut R,
    data: &LabeledImageSet,
    predictions: &[usize],
    names: &ClassNameTable,
    sample_size: usize,
) -> Result<Vec<VisualSample>> {
    if predictions.len() != data.len() {
        return Err(Error::ShapeMismatch {
            expected: vec![data.len()],
            actual: vec![predictions.len()],
        });
    }

    let amount = sample_size.min(data.len());
    index::sample(rng, data.len(), amount)
        .into_iter()
        .map(|index| {
            let predicted = predictions[index];
            let actual = data.labels()[index];
            Ok(VisualSample {
                index,
                image: data.image_owned(index).ok_or_else(|| Error::ShapeMismatch {
                    expected: vec![data.len()],
                    actual: vec![index],
                })?,
                predicted,
                actual,
                predicted_name: class_name(names, index, predicted)?,
                true_name: class_name(names, index, actual)?,
                is_match: predicted == actual,
            })
        })
        .collect()
}

fn class_name(names: &ClassNameTable, index: usize, label: usize) -> Result<String> {
    names
        .name(label)
        .map(str::to_string)
        .ok_or(Error::LabelOutOfRange {
            index,
            label,
            n_classes: names.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn fixture(n: usize) -> (LabeledImageSet, Vec<usize>, ClassNameTable) {
        let images = Array4::from_shape_fn((n, 2, 2, 1), |(i, _, _, _)| i as f32 / n as f32);
        let labels: Vec<usize> = (0..n).map(|i| i % 2).collect();
        let predictions: Vec<usize> = (0..n).map(|i| usize::from(i % 3 == 0)).collect();
        let set = LabeledImageSet::new(images, labels).unwrap();
        (set, predictions, ClassNameTable::new(["even", "odd"]).unwrap())
    }

    #[test]
    fn test_sample_without_replacement() {
        let (set, preds, names) = fixture(30);
        let mut rng = StdRng::seed_from_u64(7);
        let samples = draw_samples(&mut rng, &set, &preds, &names, 20).unwrap();

        assert_eq!(samples.len(), 20);
        let unique: HashSet<_> = samples.iter().map(|s| s.index).collect();
        assert_eq!(unique.len(), 20);
        assert!(samples.iter().all(|s| s.index < 30));
    }

    #[test]
    fn test_sample_clamped_to_set_size() {
        let (set, preds, names) = fixture(5);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(draw_samples(&mut rng, &set, &preds, &names, 20).unwrap().len(), 5);
    }

    #[test]
    fn test_sample_fields_consistent() {
        let (set, preds, names) = fixture(12);
        let mut rng = StdRng::seed_from_u64(3);
        for sample in draw_samples(&mut rng, &set, &preds, &names, 12).unwrap() {
            assert_eq!(sample.actual, set.labels()[sample.index]);
            assert_eq!(sample.predicted, preds[sample.index]);
            assert_eq!(sample.is_match, sample.actual == sample.predicted);
            assert_eq!(&sample.true_name, &names[sample.actual]);
            assert_eq!(sample.image, set.image_owned(sample.index).unwrap());
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let (set, preds, names) = fixture(50);
        let a = draw_samples(&mut StdRng::seed_from_u64(42), &set, &preds, &names, 10).unwrap();
        let b = draw_samples(&mut StdRng::seed_from_u64(42), &set, &preds, &names, 10).unwrap();
        let ia: Vec<_> = a.iter().map(|s| s.index).collect();
        let ib: Vec<_> = b.iter().map(|s| s.index).collect();
        assert_eq!(ia, ib);
    }

    #[test]
    fn test_short_predictions_rejected() {
        let (set, _, names) = fixture(50);
        let mut rng = StdRng::seed_from_u64(7);
        let err = draw_samples(&mut rng, &set, &[0, 0, 0], &names, 3).unwrap_err();

        match err {
            Error::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, vec![50]);
                assert_eq!(actual, vec![3]);
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_unnamed_predicted_label_is_an_error() {
        let (set, _, names) = fixture(4);
        let mut rng = StdRng::seed_from_u64(7);
        let err = draw_samples(&mut rng, &set, &[0, 7, 0, 7], &names, 4).unwrap_err();

        assert!(matches!(
            err,
            Error::LabelOutOfRange {
                label: 7,
                n_classes: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_caption_puts_ground_truth_first() {
        let sample = VisualSample {
            index: 0,
            image: Array2::zeros((1, 1)),
            predicted: 1,
            actual: 0,
            predicted_name: "Shirt".into(),
            true_name: "Coat".into(),
            is_match: false,
        };
        assert_eq!(sample.caption(), "Ground truth: Coat\nPredicted: Shirt");
    }
}
