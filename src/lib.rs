//! Evaluar: evaluation and reporting for image classifiers
//!
//! Runs a classifier over a labeled image set and produces everything needed to
//! judge it: accuracy, confusion matrix (raw and row-normalized), a per-class
//! precision/recall/F1 report, and a seeded sample of annotated examples.
//!
//! # Architecture
//!
//! - `data`: IDX decoding, preprocessing, labeled sets, class name tables
//! - `eval`: classification metrics and the `ModelEvaluator`
//! - `io`: exported probability tables replayed as a `Classifier`
//! - `viz`: PNG heatmaps and sample grids
//! - `config`: YAML evaluation manifests
//! - `pipeline`: end-to-end run over the configured splits
//! - `cli`: command handler for the `evaluar` binary
//!
//! # Example
//!
//! ```
//! use evaluar::data::{ClassNameTable, LabeledImageSet};
//! use evaluar::eval::{EvalConfig, ModelEvaluator};
//! use evaluar::io::ProbabilityTable;
//! use ndarray::{arr2, Array4};
//!
//! let data = LabeledImageSet::new(Array4::zeros((3, 28, 28, 1)), vec![0, 1, 1]).unwrap();
//! let classifier = ProbabilityTable::new(arr2(&[[0.7, 0.3], [0.4, 0.6], [0.9, 0.1]]));
//! let names = ClassNameTable::new(["T-shirt/top", "Trouser"]).unwrap();
//!
//! let evaluator = ModelEvaluator::new(EvalConfig::default().with_sample_size(2));
//! let result = evaluator.evaluate_seeded(&classifier, &data, &names).unwrap();
//!
//! assert_eq!(result.predictions, vec![0, 1, 0]);
//! assert_eq!(result.confusion.get(1, 0), 1);
//! assert_eq!(result.samples.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod io;
pub mod pipeline;
pub mod viz;

pub use error::{Error, Result};
