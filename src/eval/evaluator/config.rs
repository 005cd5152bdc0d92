//! Evaluation configuration

/// Configuration for model evaluation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Number of examples drawn for the visualization sample
    pub sample_size: usize,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            sample_size: 20,
            seed: 42,
        }
    }
}

impl EvalConfig {
    /// Set the visualization sample size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set random seed for sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
