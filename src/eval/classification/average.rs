//! Averaging strategies for multi-class metrics

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Average {
    /// Calculate metrics for each label, return unweighted mean
    Macro,
    /// Calculate metrics globally by counting total TP, FP, FN
    Micro,
    /// Weighted mean by support (number of true instances per label)
    Weighted,
}

impl Average {
    /// Row label used in classification reports
    pub fn label(&self) -> &'static str {
        match self {
            Average::Macro => "macro avg",
            Average::Micro => "micro avg",
            Average::Weighted => "weighted avg",
        }
    }
}
