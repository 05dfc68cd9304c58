//! Model-directory loader.
//!
//! Reads learned-model artifacts from a directory and returns whatever
//! loaded. Every failure mode (missing directory, missing file, unreadable
//! file, malformed or inconsistent artifact) degrades to capability-absent
//! with a warning; nothing here ever errors past the boundary.

use std::path::Path;

use skillpath_core::traits::Capabilities;

use crate::linear::LinearTextModel;

pub const CLASSIFIER_FILE: &str = "question_classifier.json";
pub const DIFFICULTY_FILE: &str = "difficulty_predictor.json";

/// The outcome of a load attempt: the capabilities that did load, plus a
/// warning per artifact that did not.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub capabilities: Capabilities,
    pub warnings: Vec<String>,
}

impl LoadOutcome {
    fn empty_with_warning(warning: String) -> Self {
        Self {
            capabilities: Capabilities::none(),
            warnings: vec![warning],
        }
    }
}

/// Load all capabilities from a models directory.
pub fn load_capabilities(dir: &Path) -> LoadOutcome {
    if !dir.is_dir() {
        let warning = format!("models directory not found: {}", dir.display());
        tracing::warn!("{warning}");
        return LoadOutcome::empty_with_warning(warning);
    }

    let mut outcome = LoadOutcome::default();

    match load_model(dir, CLASSIFIER_FILE) {
        Ok(model) => outcome.capabilities.classifier = Some(Box::new(model)),
        Err(warning) => outcome.warnings.push(warning),
    }
    match load_model(dir, DIFFICULTY_FILE) {
        Ok(model) => outcome.capabilities.difficulty_predictor = Some(Box::new(model)),
        Err(warning) => outcome.warnings.push(warning),
    }

    tracing::info!(
        loaded = outcome.capabilities.count(),
        warnings = outcome.warnings.len(),
        "model loading complete"
    );
    for warning in &outcome.warnings {
        tracing::warn!("{warning}");
    }

    outcome
}

fn load_model(dir: &Path, filename: &str) -> Result<LinearTextModel, String> {
    let path = dir.join(filename);
    if !path.exists() {
        return Err(format!("model file not found: {filename}"));
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {filename}: {e}"))?;
    let model: LinearTextModel =
        serde_json::from_str(&content).map_err(|e| format!("failed to parse {filename}: {e}"))?;
    model
        .validate()
        .map_err(|e| format!("invalid model in {filename}: {e}"))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn classifier_json() -> &'static str {
        r#"{
            "name": "question_classifier",
            "classes": ["frontend", "data"],
            "vocabulary": {"css": 0, "sql": 1},
            "weights": [[2.0, -1.0], [-1.0, 2.0]],
            "bias": [0.0, 0.0]
        }"#
    }

    #[test]
    fn missing_directory_yields_empty_capabilities() {
        let outcome = load_capabilities(Path::new("/nonexistent/models"));
        assert_eq!(outcome.capabilities.count(), 0);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("not found"));
    }

    #[test]
    fn empty_directory_warns_per_artifact() {
        let dir = TempDir::new().unwrap();
        let outcome = load_capabilities(dir.path());
        assert_eq!(outcome.capabilities.count(), 0);
        assert_eq!(outcome.warnings.len(), 2);
    }

    #[test]
    fn loads_present_classifier() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CLASSIFIER_FILE), classifier_json()).unwrap();

        let outcome = load_capabilities(dir.path());
        assert!(outcome.capabilities.classifier.is_some());
        assert!(outcome.capabilities.difficulty_predictor.is_none());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(
            outcome.capabilities.available(),
            vec!["question_classifier".to_string()]
        );
    }

    #[test]
    fn corrupt_artifact_degrades_to_absent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CLASSIFIER_FILE), "{not json").unwrap();

        let outcome = load_capabilities(dir.path());
        assert!(outcome.capabilities.classifier.is_none());
        assert!(outcome.warnings.iter().any(|w| w.contains("parse")));
    }

    #[test]
    fn inconsistent_artifact_degrades_to_absent() {
        let dir = TempDir::new().unwrap();
        // Two classes but only one weight row.
        let bad = r#"{
            "name": "question_classifier",
            "classes": ["frontend", "data"],
            "vocabulary": {"css": 0},
            "weights": [[2.0]],
            "bias": [0.0, 0.0]
        }"#;
        std::fs::write(dir.path().join(CLASSIFIER_FILE), bad).unwrap();

        let outcome = load_capabilities(dir.path());
        assert!(outcome.capabilities.classifier.is_none());
        assert!(outcome.warnings.iter().any(|w| w.contains("invalid model")));
    }

    #[test]
    fn loads_both_artifacts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CLASSIFIER_FILE), classifier_json()).unwrap();
        let difficulty = r#"{
            "name": "difficulty_predictor",
            "classes": ["easy", "medium", "hard"],
            "vocabulary": {"complexity": 0},
            "weights": [[-1.0], [0.5], [1.0]],
            "bias": [0.0, 0.0, 0.0]
        }"#;
        std::fs::write(dir.path().join(DIFFICULTY_FILE), difficulty).unwrap();

        let outcome = load_capabilities(dir.path());
        assert_eq!(outcome.capabilities.count(), 2);
        assert!(outcome.warnings.is_empty());
    }
}
