//! The `skillpath request` command: raw JSON request dispatch.
//!
//! Accepts the `{"command": ..., "data": ...}` document shape callers embed
//! us with, runs the named engine operation, and prints a
//! `{"success": ..., ...}` envelope. Bad requests produce the failure
//! envelope and exit code 1; they never crash the process.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Value};

use skillpath_core::engine::PredictionEngine;
use skillpath_core::error::EngineError;
use skillpath_core::model::{CareerProfile, QuizRequest, StudyProfile};
use skillpath_models::{load_config_from, SkillpathConfig};

use super::build_engine;

pub fn execute(
    config: Option<&Path>,
    models_dir: Option<PathBuf>,
    json_arg: Option<String>,
) -> Result<()> {
    let raw = match json_arg {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let config = load_config_from(config)?;
    let engine = build_engine(&config, models_dir);

    match dispatch(&engine, &config, &raw) {
        Ok(result) => {
            println!("{}", json!({ "success": true, "result": result }));
            Ok(())
        }
        Err(e) => {
            tracing::warn!("request failed: {e}");
            println!("{}", json!({ "success": false, "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}

/// Run one named engine operation against a JSON payload.
pub fn dispatch(
    engine: &PredictionEngine,
    config: &SkillpathConfig,
    raw: &str,
) -> Result<Value, EngineError> {
    let request: Value = serde_json::from_str(raw)
        .map_err(|e| EngineError::InvalidRequest(format!("invalid JSON: {e}")))?;
    let command = request
        .get("command")
        .and_then(Value::as_str)
        .ok_or_else(|| EngineError::InvalidRequest("no command provided".to_string()))?;
    let mut data = request.get("data").cloned().unwrap_or_else(|| json!({}));

    match command {
        "generate_quiz" => {
            // Config supplies defaults for fields the payload omits.
            if let Value::Object(map) = &mut data {
                map.entry("count").or_insert_with(|| json!(config.default_count));
                map.entry("career_path")
                    .or_insert_with(|| json!(config.default_career_path));
            }
            let quiz_request: QuizRequest = parse_data(data)?;
            to_value(engine.generate_quiz(&quiz_request))
        }
        "recommend_career" => {
            let profile: CareerProfile = parse_data(data)?;
            to_value(engine.recommend_career(&profile))
        }
        "suggest_study" => {
            let profile: StudyProfile = parse_data(data)?;
            to_value(engine.suggest_study(&profile))
        }
        "classify_question" => {
            let text = data.get("text").and_then(Value::as_str).unwrap_or("");
            to_value(engine.classify_question(text))
        }
        "health_check" => to_value(engine.health_check()),
        other => Err(EngineError::UnknownCommand(other.to_string())),
    }
}

fn parse_data<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, EngineError> {
    serde_json::from_value(data).map_err(|e| EngineError::InvalidRequest(e.to_string()))
}

fn to_value<T: serde::Serialize>(result: T) -> Result<Value, EngineError> {
    serde_json::to_value(result).map_err(|e| EngineError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SkillpathConfig {
        SkillpathConfig::default()
    }

    #[test]
    fn dispatch_health_check() {
        let engine = PredictionEngine::builtin();
        let result = dispatch(&engine, &config(), r#"{"command": "health_check"}"#).unwrap();
        assert_eq!(result["status"], "healthy");
        assert_eq!(result["models_loaded"], 0);
    }

    #[test]
    fn dispatch_quiz_with_defaults() {
        let engine = PredictionEngine::builtin();
        let result = dispatch(
            &engine,
            &config(),
            r#"{"command": "generate_quiz", "data": {}}"#,
        )
        .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 5);
    }

    #[test]
    fn dispatch_quiz_count_comes_from_config_when_omitted() {
        let engine = PredictionEngine::builtin();
        let config = SkillpathConfig {
            default_count: 3,
            ..SkillpathConfig::default()
        };
        let result = dispatch(&engine, &config, r#"{"command": "generate_quiz", "data": {}}"#)
            .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 3);

        // An explicit count in the payload still wins.
        let result = dispatch(
            &engine,
            &config,
            r#"{"command": "generate_quiz", "data": {"count": 6}}"#,
        )
        .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 6);
    }

    #[test]
    fn dispatch_classify() {
        let engine = PredictionEngine::builtin();
        let result = dispatch(
            &engine,
            &config(),
            r#"{"command": "classify_question", "data": {"text": "What does CSS stand for?"}}"#,
        )
        .unwrap();
        assert_eq!(result["category"], "frontend");
    }

    #[test]
    fn unknown_command_is_rejected() {
        let engine = PredictionEngine::builtin();
        let err = dispatch(&engine, &config(), r#"{"command": "train_models"}"#).unwrap_err();
        assert!(matches!(err, EngineError::UnknownCommand(_)));
        assert!(err.is_caller_fault());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let engine = PredictionEngine::builtin();
        let err = dispatch(&engine, &config(), "{not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidRequest(_)));
    }

    #[test]
    fn missing_command_is_rejected() {
        let engine = PredictionEngine::builtin();
        let err = dispatch(&engine, &config(), r#"{"data": {}}"#).unwrap_err();
        assert!(err.to_string().contains("no command"));
    }
}
