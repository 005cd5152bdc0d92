//! Validation error types
//!
//! Defines all validation error variants for evaluation specifications.

/// Validation error type
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Test images file does not exist: {0}")]
    TestImagesNotFound(String),

    #[error("Test labels file does not exist: {0}")]
    TestLabelsNotFound(String),

    #[error("Predictions file does not exist: {0}")]
    PredictionsNotFound(String),

    #[error("Invalid sample size: {0} (must be > 0)")]
    InvalidSampleSize(usize),

    #[error("Invalid grid columns: {0} (must be > 0)")]
    InvalidGridColumns(u32),

    #[error("Class list cannot be empty")]
    EmptyClasses,

    #[error("Duplicate class name: {0}")]
    DuplicateClass(String),

    #[error("Validation split needs train_images, train_labels and predictions.validation together (missing: {0})")]
    IncompleteValidationSplit(String),

    #[error("Invalid validation size: {0} (must be > 0 when a validation split is configured)")]
    InvalidValidationSize(usize),
}
