//! Model Evaluator for running evaluations

use super::classifier::{predict_classes, Classifier};
use super::config::EvalConfig;
use super::result::EvaluationResult;
use super::sample::draw_samples;
use crate::data::{ClassNameTable, LabeledImageSet};
use crate::error::{Error, Result};
use crate::eval::classification::{ClassificationReport, ConfusionMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Model Evaluator for running evaluations
#[derive(Clone, Debug, Default)]
pub struct ModelEvaluator {
    config: EvalConfig,
}

impl ModelEvaluator {
    /// Create a new evaluator with given configuration
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate a classifier on a labeled set
    ///
    /// Preconditions are checked before the classifier runs: the class table
    /// must match the classifier's output cardinality, the set must be
    /// non-empty, and every label must fall inside the label space.
    /// The visualization sample draws from `rng` and nothing else.
    pub fn evaluate<C, R>(
        &self,
        classifier: &C,
        data: &LabeledImageSet,
        names: &ClassNameTable,
        rng: &mut R,
    ) -> Result<EvaluationResult>
    where
        C: Classifier + ?Sized,
        R: Rng + ?Sized,
    {
        let n_classes = classifier.n_classes();
        if names.len() != n_classes {
            return Err(Error::ClassCountMismatch {
                names: names.len(),
                outputs: n_classes,
            });
        }
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some((index, &label)) =
            data.labels().iter().enumerate().find(|(_, &label)| label >= n_classes)
        {
            return Err(Error::LabelOutOfRange {
                index,
                label,
                n_classes,
            });
        }

        let start = Instant::now();
        let probabilities = classifier.predict_proba(data.images())?;
        let inference_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let (rows, cols) = probabilities.dim();
        if rows != data.len() || cols != n_classes {
            return Err(Error::ShapeMismatch {
                expected: vec![data.len(), n_classes],
                actual: vec![rows, cols],
            });
        }

        let predictions = predict_classes(probabilities.view());

        let correct = predictions.iter().zip(data.labels()).filter(|(p, t)| p == t).count();
        let accuracy = correct as f64 / data.len() as f64;

        let confusion = ConfusionMatrix::from_predictions(&predictions, data.labels(), n_classes)?;
        let normalized = confusion.normalized();
        let report = ClassificationReport::from_confusion_matrix(&confusion);
        let samples = draw_samples(rng, data, &predictions, names, self.config.sample_size)?;

        Ok(EvaluationResult {
            predictions,
            accuracy,
            confusion,
            normalized,
            report,
            samples,
            inference_time_ms,
        })
    }

    /// Evaluate with a `StdRng` seeded from the configured seed
    pub fn evaluate_seeded<C>(
        &self,
        classifier: &C,
        data: &LabeledImageSet,
        names: &ClassNameTable,
    ) -> Result<EvaluationResult>
    where
        C: Classifier + ?Sized,
    {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.evaluate(classifier, data, names, &mut rng)
    }
}

/// Evaluate a classifier on a labeled set in one call
///
/// # Example
/// ```
/// use evaluar::data::{ClassNameTable, LabeledImageSet};
/// use evaluar::eval::{evaluate, EvalConfig};
/// use evaluar::io::ProbabilityTable;
/// use ndarray::{arr2, Array4};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let data = LabeledImageSet::new(Array4::zeros((2, 28, 28, 1)), vec![0, 1]).unwrap();
/// let classifier = ProbabilityTable::new(arr2(&[[0.9, 0.1], [0.2, 0.8]]));
/// let names = ClassNameTable::new(["Sandal", "Sneaker"]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = evaluate(&classifier, &data, &names, &EvalConfig::default(), &mut rng).unwrap();
/// assert_eq!(result.accuracy, 1.0);
/// ```
pub fn evaluate<C, R>(
    classifier: &C,
    data: &LabeledImageSet,
    names: &ClassNameTable,
    config: &EvalConfig,
    rng: &mut R,
) -> Result<EvaluationResult>
where
    C: Classifier + ?Sized,
    R: Rng + ?Sized,
{
    ModelEvaluator::new(config.clone()).evaluate(classifier, data, names, rng)
}
