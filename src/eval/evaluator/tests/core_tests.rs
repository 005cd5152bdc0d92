//! Core tests for config, results, and argmax reduction

use super::{labeled_set, FixedClassifier};
use crate::data::ClassNameTable;
use crate::eval::evaluator::*;
use ndarray::arr2;

#[test]
fn test_eval_config_default() {
    let config = EvalConfig::default();
    assert_eq!(config.sample_size, 20);
    assert_eq!(config.seed, 42);
}

#[test]
fn test_eval_config_builders() {
    let config = EvalConfig::default().with_sample_size(5).with_seed(7);
    assert_eq!(config.sample_size, 5);
    assert_eq!(config.seed, 7);

    let evaluator = ModelEvaluator::new(config.clone());
    assert_eq!(evaluator.config(), &config);
}

#[test]
fn test_probability_rows_reduced_with_tie_break() {
    let classifier = FixedClassifier::new(arr2(&[[0.1, 0.1, 0.8], [0.5, 0.5, 0.0]]));
    let names = ClassNameTable::new(["a", "b", "c"]).unwrap();
    let data = labeled_set(&[2, 1]);

    let result = ModelEvaluator::default().evaluate_seeded(&classifier, &data, &names).unwrap();
    assert_eq!(result.predictions, vec![2, 0]);
    assert_eq!(result.accuracy, 0.5);
}

#[test]
fn test_result_display() {
    let classifier = FixedClassifier::one_hot(&[0, 1, 1], 2);
    let names = ClassNameTable::new(["Bag", "Coat"]).unwrap();
    let data = labeled_set(&[0, 1, 0]);

    let result = ModelEvaluator::default().evaluate_seeded(&classifier, &data, &names).unwrap();
    assert_eq!(result.n_examples(), 3);
    assert_eq!(result.misclassified(), 1);

    let display = format!("{result}");
    assert!(display.contains("Examples: 3"));
    assert!(display.contains("Accuracy: 66.667%"));
    assert!(display.contains("Confusion Matrix"));

    let rendered = result.render(&names);
    assert!(rendered.starts_with("Accuracy: 66.667%"));
    assert!(rendered.contains("Coat"));
    assert!(rendered.contains("weighted avg"));
}

#[test]
fn test_boxed_classifier() {
    let boxed: Box<dyn Classifier> = Box::new(FixedClassifier::one_hot(&[1, 0], 2));
    assert_eq!(boxed.n_classes(), 2);

    let names = ClassNameTable::new(["x", "y"]).unwrap();
    let result = ModelEvaluator::default()
        .evaluate_seeded(&boxed, &labeled_set(&[1, 0]), &names)
        .unwrap();
    assert_eq!(result.accuracy, 1.0);
}
