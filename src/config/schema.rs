//! YAML schema for declarative evaluation runs

use crate::data::{ClassNameTable, FASHION_MNIST_CLASSES};
use crate::eval::EvalConfig;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

/// Complete evaluation specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalSpec {
    /// Dataset files
    pub data: DataSpec,

    /// Exported classifier outputs
    pub predictions: PredictionsSpec,

    /// Class names in label order
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,

    /// Evaluation parameters
    #[serde(default)]
    pub evaluation: EvaluationParams,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSpec,
}

impl EvalSpec {
    /// Class name table built from `classes`
    pub fn class_names(&self) -> crate::Result<ClassNameTable> {
        ClassNameTable::new(self.classes.iter())
    }
}

/// Dataset file locations (IDX, optionally gzip-compressed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    /// Test images
    pub test_images: PathBuf,

    /// Test labels
    pub test_labels: PathBuf,

    /// Training images; the validation split is taken from their head
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_images: Option<PathBuf>,

    /// Training labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_labels: Option<PathBuf>,

    /// Number of leading training examples held out for validation
    #[serde(default = "default_validation_size")]
    pub validation_size: usize,
}

/// Paths of JSON probability exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionsSpec {
    /// Probabilities for the test split
    pub test: PathBuf,

    /// Probabilities for the validation split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<PathBuf>,
}

/// Sampling and layout parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// Examples drawn for the visualization sample
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Seed for the sampling RNG
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Tiles per row in the sample grid
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u32,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            seed: default_seed(),
            grid_columns: default_grid_columns(),
        }
    }
}

impl EvaluationParams {
    /// Evaluator configuration derived from these parameters
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig::default().with_sample_size(self.sample_size).with_seed(self.seed)
    }
}

/// Where rendered artifacts go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output directory for PNG files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Render heatmaps and sample grids
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub render: bool,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            render: true,
        }
    }
}

fn default_classes() -> Vec<String> {
    FASHION_MNIST_CLASSES.iter().map(|s| (*s).to_string()).collect()
}

fn default_validation_size() -> usize {
    5000
}

fn default_sample_size() -> usize {
    20
}

fn default_seed() -> u64 {
    42
}

fn default_grid_columns() -> u32 {
    5
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("eval_output")
}

fn default_true() -> bool {
    true
}
