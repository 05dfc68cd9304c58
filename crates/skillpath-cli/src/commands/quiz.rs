//! The `skillpath quiz` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use skillpath_core::engine::seeded_rng;
use skillpath_core::model::{CareerPath, CategoryFilter, Difficulty, QuizRequest};
use skillpath_models::load_config_from;

use super::{build_engine, print_success};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config_path: Option<&Path>,
    models_dir: Option<PathBuf>,
    category: CategoryFilter,
    difficulty: Difficulty,
    career_path: Option<CareerPath>,
    count: Option<usize>,
    level: u32,
    seed: Option<u64>,
) -> Result<()> {
    let config = load_config_from(config_path)?;
    let engine = build_engine(&config, models_dir);

    // Flags win; otherwise the config file supplies the defaults.
    let request = QuizRequest {
        category,
        difficulty,
        career_path: career_path
            .unwrap_or_else(|| CareerPath::parse_lenient(&config.default_career_path)),
        count: count.unwrap_or(config.default_count),
        level,
    };

    let questions = match seed {
        Some(seed) => engine.generate_quiz_with_rng(&request, &mut seeded_rng(seed)),
        None => engine.generate_quiz(&request),
    };

    print_success(&questions)
}
