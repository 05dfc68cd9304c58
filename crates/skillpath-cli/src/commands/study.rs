//! The `skillpath suggest-study` command.

use std::path::PathBuf;

use anyhow::Result;

use skillpath_core::engine::PredictionEngine;
use skillpath_core::model::StudyProfile;

use super::{print_success, read_json_input};

pub fn execute(profile_path: Option<PathBuf>) -> Result<()> {
    let profile: StudyProfile = read_json_input(profile_path)?;
    // Suggestions need no learned capabilities.
    let engine = PredictionEngine::builtin();
    let suggestions = engine.suggest_study(&profile);
    print_success(&suggestions)
}
