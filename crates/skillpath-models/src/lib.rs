//! skillpath-models — learned model artifacts for skillpath.
//!
//! Implements the `TextClassifier` trait over linear models loaded from
//! JSON artifacts, plus configuration loading and a mock classifier for
//! tests.

pub mod config;
pub mod linear;
pub mod loader;
pub mod mock;

pub use config::{load_config, load_config_from, SkillpathConfig};
pub use linear::LinearTextModel;
pub use loader::{load_capabilities, LoadOutcome, CLASSIFIER_FILE, DIFFICULTY_FILE};
pub use mock::{FailingClassifier, MockClassifier};
