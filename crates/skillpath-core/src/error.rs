//! Engine-boundary error types.
//!
//! Only request-shape problems and unexpected handler failures reach callers.
//! Capability failures never do; they are absorbed by heuristic fallbacks
//! (see `traits::CapabilityError`).

use thiserror::Error;

/// Errors surfaced across the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request named a command the engine does not implement.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The request payload did not match the expected shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An unexpected failure inside a handler; the process keeps serving.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// True for errors caused by the caller rather than the engine.
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownCommand(_) | EngineError::InvalidRequest(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_fault_classification() {
        assert!(EngineError::UnknownCommand("x".into()).is_caller_fault());
        assert!(EngineError::InvalidRequest("bad".into()).is_caller_fault());
        assert!(!EngineError::Internal("boom".into()).is_caller_fault());
    }

    #[test]
    fn error_messages_are_descriptive() {
        let e = EngineError::UnknownCommand("train_models".into());
        assert_eq!(e.to_string(), "unknown command: train_models");
    }
}
