//! The prediction engine facade.
//!
//! Owns the corpus and the optional learned capabilities, and exposes the
//! operations a transport layer calls: quiz generation, career
//! recommendation, study suggestions, question classification, and a health
//! check. All operations are synchronous and CPU-bound.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::career::{self, CareerRecommendation};
use crate::classify::classify_by_keywords;
use crate::corpus::QuestionCorpus;
use crate::model::{
    CareerProfile, Classification, QuizQuestion, QuizRequest, StudyProfile, StudySuggestion,
};
use crate::selector::QuizSelector;
use crate::study;
use crate::traits::Capabilities;

/// Engine health summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub models_loaded: usize,
    pub available_capabilities: Vec<String>,
    pub corpus_size: usize,
    pub using_learned_models: bool,
    pub checked_at: DateTime<Utc>,
}

/// The central prediction engine.
///
/// Construct once at process start with whatever capabilities loaded; the
/// engine is immutable afterwards and safe to share across threads.
pub struct PredictionEngine {
    corpus: QuestionCorpus,
    capabilities: Capabilities,
}

impl PredictionEngine {
    pub fn new(corpus: QuestionCorpus, capabilities: Capabilities) -> Self {
        tracing::info!(
            corpus_size = corpus.len(),
            capabilities = ?capabilities,
            "prediction engine ready"
        );
        Self {
            corpus,
            capabilities,
        }
    }

    /// An engine over the built-in question bank with no learned models.
    pub fn builtin() -> Self {
        Self::new(QuestionCorpus::builtin(), Capabilities::none())
    }

    /// Generate a quiz. Uses the process-wide RNG; see
    /// [`generate_quiz_with_rng`](Self::generate_quiz_with_rng) for seeded
    /// selection.
    pub fn generate_quiz(&self, request: &QuizRequest) -> Vec<QuizQuestion> {
        self.generate_quiz_with_rng(request, &mut rand::thread_rng())
    }

    pub fn generate_quiz_with_rng<R: Rng>(
        &self,
        request: &QuizRequest,
        rng: &mut R,
    ) -> Vec<QuizQuestion> {
        tracing::info!(
            category = %request.category,
            difficulty = %request.difficulty,
            career_path = %request.career_path,
            count = request.count,
            level = request.level,
            "quiz generation request"
        );
        let selector = QuizSelector::new(&self.corpus, &self.capabilities);
        let result = selector.select(request, rng);
        tracing::info!(generated = result.len(), "quiz generated");
        result
    }

    /// Recommend a career path for the profile.
    pub fn recommend_career(&self, profile: &CareerProfile) -> CareerRecommendation {
        let recommendation = career::recommend(profile);
        tracing::info!(
            recommended = %recommendation.recommended_path,
            confidence = recommendation.confidence,
            "career recommendation"
        );
        recommendation
    }

    /// Suggest study topics for the three weakest categories.
    pub fn suggest_study(&self, profile: &StudyProfile) -> Vec<StudySuggestion> {
        let suggestions = study::suggest(profile);
        tracing::info!(
            career_path = %profile.career_path,
            suggestions = suggestions.len(),
            "study suggestions"
        );
        suggestions
    }

    /// Classify question text into a category.
    ///
    /// Prefers the learned classifier when present; any failure there falls
    /// back to the keyword heuristic rather than surfacing an error.
    pub fn classify_question(&self, text: &str) -> Classification {
        if let Some(classifier) = &self.capabilities.classifier {
            match classifier.classify(text) {
                Ok(prediction) => match prediction.label.parse() {
                    Ok(category) => {
                        let classification = Classification {
                            category,
                            confidence: prediction.confidence.min(0.95),
                        };
                        tracing::info!(
                            category = %classification.category,
                            confidence = classification.confidence,
                            "classified via learned model"
                        );
                        return classification;
                    }
                    Err(e) => {
                        tracing::warn!("classifier produced unknown label, using keywords: {e}");
                    }
                },
                Err(e) => {
                    tracing::warn!("learned classification failed, using keywords: {e}");
                }
            }
        }
        let classification = classify_by_keywords(text);
        tracing::info!(
            category = %classification.category,
            confidence = classification.confidence,
            "classified via keyword heuristic"
        );
        classification
    }

    /// Report engine health. Idempotent for a fixed corpus and capability
    /// set, apart from the timestamp.
    pub fn health_check(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            models_loaded: self.capabilities.count(),
            available_capabilities: self.capabilities.available(),
            corpus_size: self.corpus.len(),
            using_learned_models: self.capabilities.any_loaded(),
            checked_at: Utc::now(),
        }
    }

    pub fn corpus(&self) -> &QuestionCorpus {
        &self.corpus
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

/// A seeded RNG for reproducible selection in tests and tooling.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryFilter, Difficulty};

    #[test]
    fn generate_quiz_honors_count_and_category() {
        let engine = PredictionEngine::builtin();
        let request = QuizRequest {
            category: CategoryFilter::Only(Category::Frontend),
            difficulty: Difficulty::Medium,
            count: 5,
            level: 10,
            ..QuizRequest::default()
        };
        let quiz = engine.generate_quiz_with_rng(&request, &mut seeded_rng(3));
        assert_eq!(quiz.len(), 5);
        assert!(quiz.iter().all(|q| q.category == Category::Frontend));
    }

    #[test]
    fn classify_question_without_models_uses_keywords() {
        let engine = PredictionEngine::builtin();
        let c = engine.classify_question("What is the time complexity of binary search?");
        assert_eq!(c.category, Category::Algorithms);
        assert!(c.confidence > 0.0);
    }

    #[test]
    fn health_check_is_idempotent() {
        let engine = PredictionEngine::builtin();
        let first = engine.health_check();
        let second = engine.health_check();
        assert_eq!(first.status, "healthy");
        assert_eq!(first.corpus_size, second.corpus_size);
        assert_eq!(first.available_capabilities, second.available_capabilities);
        assert_eq!(first.models_loaded, 0);
        assert!(!first.using_learned_models);
    }

    #[test]
    fn recommend_career_defaults_are_stable() {
        let engine = PredictionEngine::builtin();
        let first = engine.recommend_career(&CareerProfile::default());
        let second = engine.recommend_career(&CareerProfile::default());
        assert_eq!(first.recommended_path, second.recommended_path);
        let sum: f64 = first.probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn suggest_study_returns_three() {
        let engine = PredictionEngine::builtin();
        assert_eq!(engine.suggest_study(&StudyProfile::default()).len(), 3);
    }
}
