//! Class name table

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::ops::Index;

/// Fashion-MNIST class names in label order
pub const FASHION_MNIST_CLASSES: [&str; 10] = [
    "T-shirt/top",
    "Trouser",
    "Pullover",
    "Dress",
    "Coat",
    "Sandal",
    "Shirt",
    "Sneaker",
    "Bag",
    "Ankle boot",
];

/// Ordered human-readable class names, one per class index
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNameTable {
    names: Vec<String>,
}

impl ClassNameTable {
    /// Build a table, rejecting empty tables, blank names, and duplicates
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::Config("class name table is empty".into()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::Config(format!("class {index} has a blank name")));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::Config(format!("duplicate class name '{name}'")));
            }
        }

        Ok(Self { names })
    }

    /// The ten Fashion-MNIST classes
    pub fn fashion_mnist() -> Self {
        Self {
            names: FASHION_MNIST_CLASSES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no classes (never true for a constructed table)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of a class, if the index is in range
    pub fn name(&self, class: usize) -> Option<&str> {
        self.names.get(class).map(String::as_str)
    }

    /// All names in class order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Width of the longest name, for table layout
    pub fn max_name_width(&self) -> usize {
        self.names.iter().map(|n| n.chars().count()).max().unwrap_or(0)
    }
}

impl Default for ClassNameTable {
    fn default() -> Self {
        Self::fashion_mnist()
    }
}

impl Index<usize> for ClassNameTable {
    type Output = str;

    fn index(&self, class: usize) -> &str {
        &self.names[class]
    }
}
