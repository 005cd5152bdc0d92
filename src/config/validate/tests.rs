//! Tests for configuration validation

use super::*;
use crate::config::schema::{DataSpec, EvalSpec, EvaluationParams, OutputSpec, PredictionsSpec};
use std::path::PathBuf;

fn make_test_spec() -> EvalSpec {
    EvalSpec {
        data: DataSpec {
            test_images: PathBuf::from("/data/t10k-images-idx3-ubyte.gz"),
            test_labels: PathBuf::from("/data/t10k-labels-idx1-ubyte.gz"),
            train_images: None,
            train_labels: None,
            validation_size: 5000,
        },
        predictions: PredictionsSpec {
            test: PathBuf::from("/predictions/test.json"),
            validation: None,
        },
        classes: vec!["cat".into(), "dog".into()],
        evaluation: EvaluationParams::default(),
        output: OutputSpec::default(),
    }
}

fn with_validation_split(mut spec: EvalSpec) -> EvalSpec {
    spec.data.train_images = Some(PathBuf::from("/data/train-images-idx3-ubyte.gz"));
    spec.data.train_labels = Some(PathBuf::from("/data/train-labels-idx1-ubyte.gz"));
    spec.predictions.validation = Some(PathBuf::from("/predictions/validation.json"));
    spec
}

#[test]
fn test_valid_spec() {
    assert!(validate_config(&make_test_spec()).is_ok());
    assert!(validate_config(&with_validation_split(make_test_spec())).is_ok());
}

#[test]
fn test_zero_sample_size() {
    let mut spec = make_test_spec();
    spec.evaluation.sample_size = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidSampleSize(0)));
}

#[test]
fn test_zero_grid_columns() {
    let mut spec = make_test_spec();
    spec.evaluation.grid_columns = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidGridColumns(0)));
}

#[test]
fn test_empty_classes() {
    let mut spec = make_test_spec();
    spec.classes.clear();
    assert_eq!(validate_config(&spec), Err(ValidationError::EmptyClasses));
}

#[test]
fn test_duplicate_classes() {
    let mut spec = make_test_spec();
    spec.classes.push("cat".into());
    assert_eq!(validate_config(&spec), Err(ValidationError::DuplicateClass("cat".into())));
}

#[test]
fn test_incomplete_validation_split() {
    let mut spec = with_validation_split(make_test_spec());
    spec.predictions.validation = None;

    let err = validate_config(&spec).unwrap_err();
    assert!(matches!(err, ValidationError::IncompleteValidationSplit(_)));
    assert!(err.to_string().contains("predictions.validation"));
}

#[test]
fn test_zero_validation_size_with_split() {
    let mut spec = with_validation_split(make_test_spec());
    spec.data.validation_size = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidValidationSize(0)));

    // Ignored when no split is configured
    let mut spec = make_test_spec();
    spec.data.validation_size = 0;
    assert!(validate_config(&spec).is_ok());
}
