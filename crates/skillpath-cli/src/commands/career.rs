//! The `skillpath recommend-career` command.

use std::path::PathBuf;

use anyhow::Result;

use skillpath_core::engine::PredictionEngine;
use skillpath_core::model::CareerProfile;

use super::{print_success, read_json_input};

pub fn execute(profile_path: Option<PathBuf>) -> Result<()> {
    let profile: CareerProfile = read_json_input(profile_path)?;
    // Recommendation needs no learned capabilities.
    let engine = PredictionEngine::builtin();
    let recommendation = engine.recommend_career(&profile);
    print_success(&recommendation)
}
