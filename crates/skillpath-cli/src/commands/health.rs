//! The `skillpath health` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;

use skillpath_models::load_config_from;

use super::{build_engine, print_success};

pub fn execute(config: Option<&Path>, models_dir: Option<PathBuf>, format: String) -> Result<()> {
    let engine = build_engine(&load_config_from(config)?, models_dir);
    let report = engine.health_check();

    match format.as_str() {
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["Field", "Value"]);
            table.add_row(vec!["Status".to_string(), report.status.clone()]);
            table.add_row(vec![
                "Models loaded".to_string(),
                report.models_loaded.to_string(),
            ]);
            table.add_row(vec![
                "Capabilities".to_string(),
                if report.available_capabilities.is_empty() {
                    "(none)".to_string()
                } else {
                    report.available_capabilities.join(", ")
                },
            ]);
            table.add_row(vec![
                "Corpus size".to_string(),
                report.corpus_size.to_string(),
            ]);
            table.add_row(vec![
                "Using learned models".to_string(),
                report.using_learned_models.to_string(),
            ]);
            table.add_row(vec![
                "Checked at".to_string(),
                report.checked_at.to_rfc3339(),
            ]);
            println!("{table}");
            Ok(())
        }
        _ => print_success(&report),
    }
}
