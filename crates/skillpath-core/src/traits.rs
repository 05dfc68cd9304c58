//! Capability trait definitions for optional learned models.
//!
//! Learned models are pluggable and may be absent. The `skillpath-models`
//! crate provides the concrete implementations and the loader; this module
//! defines the seam the engine programs against.

use thiserror::Error;

/// Errors from evaluating a learned capability.
///
/// Failure of a capability is never surfaced to the caller of an engine
/// operation; it selects the heuristic fallback branch instead. The error
/// exists so that fallback is an explicit branch rather than a swallowed
/// exception.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The model could not produce a prediction for this input.
    #[error("evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The input is outside what the model can represent (e.g. no known
    /// tokens at all).
    #[error("input not representable: {0}")]
    UnrepresentableInput(String),
}

/// A label with the model's confidence in it.
///
/// Labels are strings rather than a fixed enum because different capability
/// slots predict different label sets (categories vs. difficulty tiers);
/// the caller parses the label for its slot and treats an unparseable label
/// as capability failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

/// A learned model that maps free-form text to a label with confidence.
pub trait TextClassifier: Send + Sync {
    /// Short identifier for health reporting (e.g. "question_classifier").
    fn name(&self) -> &str;

    /// Classify the given text.
    fn classify(&self, text: &str) -> Result<Prediction, CapabilityError>;
}

/// The set of optional learned-model capabilities, each independently
/// present or absent.
///
/// Constructed once at process start and handed to the engine; never mutated
/// afterwards, so it is freely shareable across threads.
#[derive(Default)]
pub struct Capabilities {
    /// Classifies question text into a category.
    pub classifier: Option<Box<dyn TextClassifier>>,
    /// Predicts a difficulty label from question text.
    pub difficulty_predictor: Option<Box<dyn TextClassifier>>,
}

impl Capabilities {
    /// A capability set with nothing loaded. Every engine operation still
    /// works via heuristics.
    pub fn none() -> Self {
        Self::default()
    }

    /// Names of the capabilities that are present, in a fixed order.
    pub fn available(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(c) = &self.classifier {
            names.push(c.name().to_string());
        }
        if let Some(d) = &self.difficulty_predictor {
            names.push(d.name().to_string());
        }
        names
    }

    /// Number of loaded capabilities.
    pub fn count(&self) -> usize {
        self.classifier.is_some() as usize + self.difficulty_predictor.is_some() as usize
    }

    pub fn any_loaded(&self) -> bool {
        self.count() > 0
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("classifier", &self.classifier.is_some())
            .field("difficulty_predictor", &self.difficulty_predictor.is_some())
            .finish()
    }
}
