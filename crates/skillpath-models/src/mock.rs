//! Mock classifier for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use skillpath_core::traits::{CapabilityError, Prediction, TextClassifier};

/// A mock classifier for exercising the engine without trained artifacts.
///
/// Returns configurable labels based on input substring matching.
pub struct MockClassifier {
    /// Map of input substring → predicted label.
    responses: HashMap<String, String>,
    /// Label returned when no substring matches.
    default_label: String,
    /// Confidence attached to every prediction.
    confidence: f64,
    /// Number of classify calls made.
    call_count: AtomicU32,
    /// Last input received.
    last_input: Mutex<Option<String>>,
}

impl MockClassifier {
    /// Create a mock with the given substring→label mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_label: "algorithms".to_string(),
            confidence: 0.9,
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same label.
    pub fn with_fixed_label(label: &str, confidence: f64) -> Self {
        Self {
            responses: HashMap::new(),
            default_label: label.to_string(),
            confidence,
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Number of classify calls made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Last input passed to classify, if any.
    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().unwrap().clone()
    }
}

impl TextClassifier for MockClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    fn classify(&self, text: &str) -> Result<Prediction, CapabilityError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_input.lock().unwrap() = Some(text.to_string());

        let label = self
            .responses
            .iter()
            .find(|(key, _)| text.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_label.clone());

        Ok(Prediction {
            label,
            confidence: self.confidence,
        })
    }
}

/// A classifier that always fails, for exercising fallback paths.
pub struct FailingClassifier;

impl TextClassifier for FailingClassifier {
    fn name(&self) -> &str {
        "failing"
    }

    fn classify(&self, _text: &str) -> Result<Prediction, CapabilityError> {
        Err(CapabilityError::EvaluationFailed(
            "simulated evaluation failure".to_string(),
        ))
    }
}
