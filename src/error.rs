//! Error types with actionable diagnostics.
//!
//! Each message names the problem first and, where the user can act on it,
//! a suggestion after `→`.

use thiserror::Error;

/// Result type alias for evaluar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, evaluating, and reporting.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Class name table does not match the classifier's output cardinality.
    #[error("Class name table has {names} entries but the classifier emits {outputs} classes\n  → Provide exactly one class name per classifier output")]
    ClassCountMismatch { names: usize, outputs: usize },

    /// A true label lies outside the label space.
    #[error("Label {label} at example {index} is outside the label space [0, {n_classes})\n  → Check that the labels file matches the class name table")]
    LabelOutOfRange { index: usize, label: usize, n_classes: usize },

    /// Nothing to evaluate.
    #[error("No examples to evaluate\n  → Check the dataset paths and the validation split size")]
    EmptyInput,

    /// Tensor shape does not match what the caller expected.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },

    /// Dataset file is malformed or truncated.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Rendering or writing an image failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Failure raised by an external classifier, passed through untouched.
    #[error(transparent)]
    Classifier(Box<dyn std::error::Error + Send + Sync>),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an external classifier failure without altering its message.
    pub fn classifier(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Classifier(err.into())
    }

    /// Whether this error is a precondition violation on the evaluation inputs
    /// or the configuration, as opposed to a runtime failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::ClassCountMismatch { .. } | Self::LabelOutOfRange { .. }
        )
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "E001",
            Self::ClassCountMismatch { .. } => "E002",
            Self::LabelOutOfRange { .. } => "E003",
            Self::EmptyInput => "E010",
            Self::ShapeMismatch { .. } => "E020",
            Self::Dataset(_) => "E030",
            Self::Serialization(_) => "E031",
            Self::Render(_) => "E040",
            Self::Classifier(_) => "E050",
            Self::Io(_) => "E060",
        }
    }
}
