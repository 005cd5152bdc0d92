//! CLI command tests

use super::evaluate::{
    evaluate_config, format_accuracy, format_outcome, format_preview, format_samples, run_evaluate,
};
use super::*;
use crate::config::parse_args;
use crate::data::idx::{IMAGE_MAGIC, LABEL_MAGIC};
use crate::pipeline::Split;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn idx_images(count: u32, rows: u32, cols: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    for word in [IMAGE_MAGIC, count, rows, cols] {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    bytes.extend((0..count * rows * cols).map(|i| (i % 256) as u8));
    bytes
}

fn idx_labels(labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for word in [LABEL_MAGIC, labels.len() as u32] {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    bytes.extend_from_slice(labels);
    bytes
}

/// Three classes, four test examples, one of them misclassified
fn create_test_config(dir: &Path, classes: &str, render: bool) -> PathBuf {
    std::fs::write(dir.join("images.idx"), idx_images(4, 2, 2)).unwrap();
    std::fs::write(dir.join("labels.idx"), idx_labels(&[0, 1, 2, 2])).unwrap();
    std::fs::write(
        dir.join("probs.json"),
        r#"{"probabilities": [[0.8, 0.1, 0.1], [0.1, 0.8, 0.1], [0.1, 0.1, 0.8], [0.6, 0.2, 0.2]]}"#,
    )
    .unwrap();

    let config = format!(
        r"
data:
  test_images: images.idx
  test_labels: labels.idx
predictions:
  test: probs.json
classes: {classes}
evaluation:
  sample_size: 3
output:
  dir: out
  render: {render}
"
    );
    let path = dir.join("eval.yaml");
    std::fs::write(&path, config).unwrap();
    path
}

#[test]
fn test_run_evaluate_success() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, b, c]", false);

    assert!(run_evaluate(&config, LogLevel::Quiet).is_ok());
}

#[test]
fn test_run_command_from_args() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, b, c]", true);
    let cli = parse_args(["evaluar", config.to_str().unwrap(), "-q"]).unwrap();

    assert!(run_command(cli).is_ok());
    assert!(dir.path().join("out/test_confusion.png").exists());
    assert!(dir.path().join("out/test_samples.png").exists());
}

#[test]
fn test_run_evaluate_missing_config() {
    let result = run_evaluate(Path::new("/nonexistent/eval.yaml"), LogLevel::Quiet);
    let err = result.unwrap_err();
    assert!(err.starts_with("[E001]"), "{err}");
}

#[test]
fn test_run_evaluate_class_count_mismatch() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, b]", false);

    let err = run_evaluate(&config, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("[E002]"), "{err}");
}

#[test]
fn test_format_accuracy_and_samples() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, b, c]", false);
    let (_, outcomes) = evaluate_config(&config, LogLevel::Quiet).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].split, Split::Test);
    assert_eq!(format_accuracy(&outcomes[0]), "Test Dataset Accuracy: 75.000%");

    let samples = format_samples(&outcomes[0]);
    assert_eq!(samples.matches("Ground truth:").count(), 3);
    assert_eq!(samples.matches("Predicted:").count(), 3);
}

#[test]
fn test_captions_in_normal_output() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, b, c]", false);
    let (names, outcomes) = evaluate_config(&config, LogLevel::Quiet).unwrap();
    let outcome = &outcomes[0];

    let text = format_outcome(outcome, &names, false);
    assert_eq!(text.matches("Ground truth:").count(), 3);
    assert!(text.contains("Test Dataset Accuracy: 75.000%"));
    assert!(!text.contains("Predicted (first"));

    // Captions follow the sample order, which is the grid's row-major order
    let positions: Vec<usize> = outcome
        .result
        .samples
        .iter()
        .map(|s| text.find(&format!("#{:<6}", s.index)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_verbose_output_previews_predictions() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, b, c]", false);
    let (names, outcomes) = evaluate_config(&config, LogLevel::Quiet).unwrap();

    let preview = format_preview(&outcomes[0], &names);
    assert_eq!(
        preview,
        "Predicted (first 4): [0, 1, 2, 0]\nActual    (first 4): [0, 1, 2, 2]\nPredicted classes: a, b, c, a"
    );
    assert!(format_outcome(&outcomes[0], &names, true).contains(&preview));
}

#[test]
fn test_invalid_class_table_reports_code() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path(), "[a, a, c]", false);

    let err = run_evaluate(&config, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("[E001]"), "{err}");
}
