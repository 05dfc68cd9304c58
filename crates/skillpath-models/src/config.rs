//! Configuration loading.
//!
//! Search order: `skillpath.toml` in the current directory, then
//! `~/.config/skillpath/config.toml`, else defaults. The
//! `SKILLPATH_MODELS_DIR` environment variable overrides the models
//! directory from any source.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level skillpath configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillpathConfig {
    /// Directory holding learned-model artifacts.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    /// Default question count for quiz requests that omit one.
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// Default career path for requests that omit one.
    #[serde(default = "default_career_path")]
    pub default_career_path: String,
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("./saved-models")
}

fn default_count() -> usize {
    5
}

fn default_career_path() -> String {
    "fullstack".to_string()
}

impl Default for SkillpathConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            default_count: default_count(),
            default_career_path: default_career_path(),
        }
    }
}

/// Load configuration from the well-known paths.
pub fn load_config() -> Result<SkillpathConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SkillpathConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("skillpath.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global_dir) = dirs_path() {
            let global = global_dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SkillpathConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SkillpathConfig::default(),
    };

    if let Ok(dir) = std::env::var("SKILLPATH_MODELS_DIR") {
        config.models_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("skillpath"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SkillpathConfig::default();
        assert_eq!(config.default_count, 5);
        assert_eq!(config.default_career_path, "fullstack");
        assert_eq!(config.models_dir, PathBuf::from("./saved-models"));
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: SkillpathConfig = toml::from_str(r#"models_dir = "/opt/models""#).unwrap();
        assert_eq!(config.models_dir, PathBuf::from("/opt/models"));
        assert_eq!(config.default_count, 5);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_loads() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("skillpath.toml");
        std::fs::write(&path, "default_count = 8\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_count, 8);
    }
}
