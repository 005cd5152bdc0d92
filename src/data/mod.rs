//! Dataset loading and preprocessing
//!
//! - `idx`: IDX container decoding (plain or gzip)
//! - `preprocess`: channel expansion, `[0, 1]` scaling
//! - `dataset`: `LabeledImageSet` with validation splitting
//! - `classes`: `ClassNameTable`

mod classes;
mod dataset;
pub mod idx;
mod preprocess;

pub use classes::{ClassNameTable, FASHION_MNIST_CLASSES};
pub use dataset::LabeledImageSet;
pub use idx::RawImages;
pub use preprocess::{load_labeled_set, preprocess, PIXEL_MAX};
