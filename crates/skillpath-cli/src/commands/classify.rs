//! The `skillpath classify` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use skillpath_models::load_config_from;

use super::{build_engine, print_success};

pub fn execute(config: Option<&Path>, models_dir: Option<PathBuf>, text: String) -> Result<()> {
    let engine = build_engine(&load_config_from(config)?, models_dir);
    let classification = engine.classify_question(&text);
    print_success(&classification)
}
