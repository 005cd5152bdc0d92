//! End-to-end evaluation run driven by an `EvalSpec`
//!
//! Loads the test split (and optionally a validation split carved from the
//! head of the training files), replays exported probabilities through the
//! evaluator and renders PNG artifacts.

use crate::cli::{log, LogLevel};
use crate::config::EvalSpec;
use crate::data::{load_labeled_set, ClassNameTable, LabeledImageSet};
use crate::error::Result;
use crate::eval::{EvaluationResult, ModelEvaluator};
use crate::io::ProbabilityTable;
use crate::viz::{
    render_labeled_heatmap, render_sample_grid, save_png, CaptionFont, Colormap, GridLayout,
    CAPTION_PX,
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Heatmap cell size in pixels
const HEATMAP_CELL_PX: u32 = 24;

/// Which dataset split an outcome belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Test,
    Validation,
}

impl Split {
    /// Lowercase name used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Test => "test",
            Split::Validation => "validation",
        }
    }

    /// Title used in console output
    pub fn title(&self) -> &'static str {
        match self {
            Split::Test => "Test",
            Split::Validation => "Validation",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluation of one split plus the files rendered for it
#[derive(Clone, Debug)]
pub struct SplitOutcome {
    pub split: Split,
    pub result: EvaluationResult,
    /// True labels of the evaluated examples, parallel to `result.predictions`
    pub labels: Vec<usize>,
    /// PNG files written for this split (empty when rendering is off)
    pub artifacts: Vec<PathBuf>,
}

/// Run every configured split
///
/// The test split always runs; the validation split runs when both training
/// files and validation predictions are configured. `names` must have one
/// entry per classifier output.
pub fn run_pipeline(
    spec: &EvalSpec,
    names: &ClassNameTable,
    level: LogLevel,
) -> Result<Vec<SplitOutcome>> {
    let evaluator = ModelEvaluator::new(spec.evaluation.eval_config());
    let mut outcomes = Vec::new();

    log(
        level,
        LogLevel::Verbose,
        &format!("Loading test set from {}", spec.data.test_images.display()),
    );
    let test_set = load_labeled_set(&spec.data.test_images, &spec.data.test_labels)?;
    let test = SplitInput {
        split: Split::Test,
        data: &test_set,
        predictions: &spec.predictions.test,
    };
    outcomes.push(evaluate_split(&test, &evaluator, names, spec, level)?);

    let validation_set = match spec.predictions.validation.as_deref() {
        Some(predictions) => load_validation_set(spec, level)?.map(|set| (set, predictions)),
        None => None,
    };
    if let Some((validation_set, predictions)) = validation_set {
        let validation = SplitInput {
            split: Split::Validation,
            data: &validation_set,
            predictions,
        };
        outcomes.push(evaluate_split(&validation, &evaluator, names, spec, level)?);
    }

    Ok(outcomes)
}

struct SplitInput<'a> {
    split: Split,
    data: &'a LabeledImageSet,
    predictions: &'a Path,
}

fn load_validation_set(spec: &EvalSpec, level: LogLevel) -> Result<Option<LabeledImageSet>> {
    let (Some(images), Some(labels)) = (&spec.data.train_images, &spec.data.train_labels) else {
        return Ok(None);
    };

    log(
        level,
        LogLevel::Verbose,
        &format!("Loading training set from {}", images.display()),
    );
    let train_set = load_labeled_set(images, labels)?;
    let (validation, rest) = train_set.split_at(spec.data.validation_size);
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Validation split: {} examples ({} left for training)",
            validation.len(),
            rest.len()
        ),
    );
    Ok(Some(validation))
}

fn evaluate_split(
    input: &SplitInput<'_>,
    evaluator: &ModelEvaluator,
    names: &ClassNameTable,
    spec: &EvalSpec,
    level: LogLevel,
) -> Result<SplitOutcome> {
    let split = input.split;
    let classifier = ProbabilityTable::load(input.predictions)?;
    let result = evaluator.evaluate_seeded(&classifier, input.data, names)?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "{} split: {} examples, {} misclassified, inference {:.2}ms",
            split.title(),
            result.n_examples(),
            result.misclassified(),
            result.inference_time_ms
        ),
    );

    let artifacts = if spec.output.render {
        render_artifacts(split, &result, names, spec)?
    } else {
        Vec::new()
    };

    Ok(SplitOutcome {
        split,
        result,
        labels: input.data.labels().to_vec(),
        artifacts,
    })
}

fn render_artifacts(
    split: Split,
    result: &EvaluationResult,
    names: &ClassNameTable,
    spec: &EvalSpec,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&spec.output.dir)?;
    let font = CaptionFont::dejavu_sans(CAPTION_PX)?;

    let heatmap_path = spec.output.dir.join(format!("{split}_confusion.png"));
    let heatmap = render_labeled_heatmap(
        &result.normalized,
        &Colormap::viridis(),
        HEATMAP_CELL_PX,
        names,
        &font,
    );
    save_png(&heatmap, &heatmap_path)?;

    let layout = GridLayout {
        columns: spec.evaluation.grid_columns,
        ..GridLayout::default()
    };
    let grid_path = spec.output.dir.join(format!("{split}_samples.png"));
    let grid = render_sample_grid(&result.samples, &layout, Some(&font));
    save_png(&grid, &grid_path)?;

    Ok(vec![heatmap_path, grid_path])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names() {
        assert_eq!(Split::Test.to_string(), "test");
        assert_eq!(Split::Validation.as_str(), "validation");
        assert_eq!(Split::Validation.title(), "Validation");
    }
}
