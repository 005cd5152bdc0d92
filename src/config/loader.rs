//! Loading YAML evaluation manifests

use super::schema::EvalSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read and parse an evaluation manifest
///
/// Relative paths inside the manifest are resolved against the manifest's
/// own directory, so a config can sit next to its data.
pub fn load_config(config_path: impl AsRef<Path>) -> Result<EvalSpec> {
    let config_path = config_path.as_ref();
    let yaml_content = fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {e}",
            config_path.display()
        ))
    })?;

    let mut spec: EvalSpec = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;

    if let Some(base) = config_path.parent() {
        resolve_paths(&mut spec, base);
    }

    Ok(spec)
}

/// Load, then validate
pub fn load_and_validate(config_path: impl AsRef<Path>) -> Result<EvalSpec> {
    let spec = load_config(config_path)?;
    validate_config(&spec).map_err(|e| Error::Config(format!("Invalid config: {e}")))?;
    Ok(spec)
}

fn resolve_paths(spec: &mut EvalSpec, base: &Path) {
    let resolve = |path: &mut std::path::PathBuf| {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    };

    resolve(&mut spec.data.test_images);
    resolve(&mut spec.data.test_labels);
    resolve(&mut spec.predictions.test);
    resolve(&mut spec.output.dir);
    for path in [
        spec.data.train_images.as_mut(),
        spec.data.train_labels.as_mut(),
        spec.predictions.validation.as_mut(),
    ]
    .into_iter()
    .flatten()
    {
        resolve(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.yaml");
        std::fs::write(
            &path,
            "data:\n  test_images: imgs.gz\n  test_labels: /abs/labels.gz\npredictions:\n  test: p.json\n",
        )
        .unwrap();

        let spec = load_config(&path).unwrap();
        assert_eq!(spec.data.test_images, dir.path().join("imgs.gz"));
        assert_eq!(spec.data.test_labels, PathBuf::from("/abs/labels.gz"));
        assert_eq!(spec.output.dir, dir.path().join("eval_output"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/eval.yaml").unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("/nonexistent/eval.yaml"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.yaml");
        std::fs::write(&path, "data: [unclosed").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML config"));
    }

    #[test]
    fn test_load_and_validate_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.yaml");
        std::fs::write(
            &path,
            "data:\n  test_images: a\n  test_labels: b\npredictions:\n  test: c\nevaluation:\n  sample_size: 0\n",
        )
        .unwrap();

        let err = load_and_validate(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid sample size"));
    }
}
