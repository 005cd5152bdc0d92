//! Evaluate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::load_and_validate;
use crate::data::ClassNameTable;
use crate::pipeline::{run_pipeline, SplitOutcome};
use std::path::Path;

/// Number of leading examples shown in the verbose preview
const PREVIEW_LEN: usize = 20;

/// Format the accuracy line for one split
pub fn format_accuracy(outcome: &SplitOutcome) -> String {
    format!(
        "{} Dataset Accuracy: {:.3}%",
        outcome.split.title(),
        outcome.result.accuracy * 100.0
    )
}

/// Format the sampled examples in grid order, one caption block per example
pub fn format_samples(outcome: &SplitOutcome) -> String {
    outcome
        .result
        .samples
        .iter()
        .map(|s| {
            let status = if s.is_match { "ok" } else { "MISS" };
            let caption = s.caption().replace('\n', "\n    ");
            format!("  #{:<6} [{status}]\n    {caption}", s.index)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the first predictions next to the true labels
pub fn format_preview(outcome: &SplitOutcome, names: &ClassNameTable) -> String {
    let k = PREVIEW_LEN.min(outcome.labels.len());
    let predicted = &outcome.result.predictions[..k];
    let predicted_names: Vec<&str> =
        predicted.iter().map(|&p| names.name(p).unwrap_or("?")).collect();

    format!(
        "Predicted (first {k}): {predicted:?}\nActual    (first {k}): {:?}\nPredicted classes: {}",
        &outcome.labels[..k],
        predicted_names.join(", ")
    )
}

/// Everything printed for one split
///
/// Verbose output adds the prediction preview and inference timing.
pub fn format_outcome(outcome: &SplitOutcome, names: &ClassNameTable, verbose: bool) -> String {
    let mut sections = vec![
        format_accuracy(outcome),
        outcome.result.confusion.render(names),
        outcome.result.report.render(names),
    ];
    if verbose {
        sections.push(format_preview(outcome, names));
        sections.push(format!(
            "Inference time: {:.2}ms",
            outcome.result.inference_time_ms
        ));
    }
    sections.push(format!(
        "Sampled examples ({} split):\n{}",
        outcome.split,
        format_samples(outcome)
    ));
    sections.join("\n\n")
}

/// Load the manifest and run every configured split
pub fn evaluate_config(
    config: &Path,
    level: LogLevel,
) -> crate::Result<(ClassNameTable, Vec<SplitOutcome>)> {
    let spec = load_and_validate(config)?;
    let names = spec.class_names()?;
    let outcomes = run_pipeline(&spec, &names, level)?;
    Ok((names, outcomes))
}

pub fn run_evaluate(config: &Path, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Evaluating with config: {}", config.display()),
    );

    let (names, outcomes) =
        evaluate_config(config, level).map_err(|e| format!("[{}] {e}", e.code()))?;

    for outcome in &outcomes {
        log(level, LogLevel::Normal, "");
        log(
            level,
            LogLevel::Normal,
            &format_outcome(outcome, &names, level == LogLevel::Verbose),
        );
        for artifact in &outcome.artifacts {
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote {}", artifact.display()),
            );
        }
    }

    Ok(())
}
