//! skillpath CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use skillpath_core::model::{CareerPath, CategoryFilter, Difficulty};

mod commands;

#[derive(Parser)]
#[command(
    name = "skillpath",
    version,
    about = "Adaptive quiz generation and career recommendations"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding learned-model artifacts (overrides config)
    #[arg(long, global = true)]
    models_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a quiz
    Quiz {
        /// Question category, or "mixed" for all
        #[arg(long, default_value = "mixed")]
        category: CategoryFilter,

        /// Target difficulty: easy, medium, hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Career path to weight question selection toward [config default: fullstack]
        #[arg(long)]
        career_path: Option<CareerPath>,

        /// Number of questions [config default: 5]
        #[arg(long)]
        count: Option<usize>,

        /// Learner level (1-30)
        #[arg(long, default_value = "10")]
        level: u32,

        /// RNG seed for reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Recommend a career path from an interest profile
    RecommendCareer {
        /// JSON profile file; omitted fields take defaults, reads stdin if absent
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Suggest study topics for the weakest categories
    SuggestStudy {
        /// JSON profile file; omitted fields take defaults, reads stdin if absent
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Classify question text into a category
    Classify {
        /// The question text
        text: String,
    },

    /// Report engine health
    Health {
        /// Output format: json, table
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Dispatch a raw {"command": ..., "data": ...} JSON request
    Request {
        /// The JSON document; reads stdin if absent
        json: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skillpath=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            category,
            difficulty,
            career_path,
            count,
            level,
            seed,
        } => commands::quiz::execute(
            cli.config.as_deref(),
            cli.models_dir,
            category,
            difficulty,
            career_path,
            count,
            level,
            seed,
        ),
        Commands::RecommendCareer { profile } => commands::career::execute(profile),
        Commands::SuggestStudy { profile } => commands::study::execute(profile),
        Commands::Classify { text } => {
            commands::classify::execute(cli.config.as_deref(), cli.models_dir, text)
        }
        Commands::Health { format } => {
            commands::health::execute(cli.config.as_deref(), cli.models_dir, format)
        }
        Commands::Request { json } => {
            commands::request::execute(cli.config.as_deref(), cli.models_dir, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
