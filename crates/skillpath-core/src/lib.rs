//! skillpath-core — question scoring, quiz selection, and learner
//! recommendations.
//!
//! This crate defines the fundamental data model, the capability traits for
//! optional learned models, and the scoring logic the skillpath system
//! builds on.

pub mod career;
pub mod classify;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod model;
pub mod scorer;
pub mod selector;
pub mod study;
pub mod traits;
