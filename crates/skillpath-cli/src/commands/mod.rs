//! Subcommand implementations.

pub mod career;
pub mod classify;
pub mod health;
pub mod quiz;
pub mod request;
pub mod study;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use skillpath_core::corpus::QuestionCorpus;
use skillpath_core::engine::PredictionEngine;
use skillpath_models::{load_capabilities, SkillpathConfig};

/// Build the engine from loaded config plus whatever model artifacts load.
pub fn build_engine(config: &SkillpathConfig, models_dir: Option<PathBuf>) -> PredictionEngine {
    let dir = models_dir.unwrap_or_else(|| config.models_dir.clone());
    let outcome = load_capabilities(&dir);
    PredictionEngine::new(QuestionCorpus::builtin(), outcome.capabilities)
}

/// Print the success envelope every subcommand emits on stdout.
pub fn print_success<T: Serialize>(result: &T) -> Result<()> {
    let envelope = serde_json::json!({ "success": true, "result": result });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Read a JSON document from a file, or stdin when no path is given.
pub fn read_json_input<T: serde::de::DeserializeOwned + Default>(
    path: Option<PathBuf>,
) -> Result<T> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            if buf.trim().is_empty() {
                Ok(T::default())
            } else {
                serde_json::from_str(&buf).context("failed to parse stdin")
            }
        }
    }
}
