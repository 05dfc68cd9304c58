//! Composite relevance scoring for quiz questions.
//!
//! The score is a sum of bounded, additive terms so that no single factor
//! dominates the ranking and the result stays explainable: level fit,
//! career/category affinity, difficulty match, an optional learned boost,
//! and a small jitter term that keeps repeated identical requests from
//! returning the same top-N order.

use rand::Rng;

use crate::model::{CareerPath, Category, Difficulty, QuestionRecord};
use crate::traits::Capabilities;

/// Weight a career path assigns to a question category.
///
/// Categories outside a career's focus weigh 0.3, keeping off-path questions
/// eligible but demoted. Values sit on the same 0-2 scale as the level-fit
/// term.
pub fn category_affinity(career: CareerPath, category: Category) -> f64 {
    use CareerPath as P;
    use Category as C;
    match career {
        P::Frontend => match category {
            C::Frontend => 2.0,
            C::Algorithms => 1.0,
            C::Security => 0.5,
            C::Backend | C::Data => 0.3,
        },
        P::Backend => match category {
            C::Backend => 2.0,
            C::Data => 1.5,
            C::Algorithms => 1.0,
            C::Security => 1.0,
            C::Frontend => 0.3,
        },
        P::Data => match category {
            C::Data => 2.0,
            C::Algorithms => 1.5,
            C::Backend => 1.0,
            C::Frontend | C::Security => 0.3,
        },
        P::Cloud => match category {
            C::Backend => 1.5,
            C::Security => 1.5,
            C::Data => 1.0,
            C::Frontend | C::Algorithms => 0.3,
        },
        P::Mobile => match category {
            C::Frontend => 1.5,
            C::Backend => 1.0,
            C::Algorithms => 1.0,
            C::Data | C::Security => 0.3,
        },
        P::Security => match category {
            C::Security => 2.0,
            C::Backend => 1.0,
            C::Algorithms => 0.5,
            C::Frontend | C::Data => 0.3,
        },
        P::Fullstack => match category {
            C::Frontend => 1.5,
            C::Backend => 1.5,
            C::Algorithms => 1.0,
            C::Data => 1.0,
            C::Security => 0.5,
        },
    }
}

/// Scores corpus entries against a learner profile.
pub struct QuestionScorer<'a> {
    capabilities: &'a Capabilities,
}

impl<'a> QuestionScorer<'a> {
    pub fn new(capabilities: &'a Capabilities) -> Self {
        Self { capabilities }
    }

    /// Composite relevance score. May be negative for questions far outside
    /// the learner's level range; negative scores demote without excluding.
    pub fn score<R: Rng>(
        &self,
        question: &QuestionRecord,
        level: u32,
        career_path: CareerPath,
        target_difficulty: Option<Difficulty>,
        rng: &mut R,
    ) -> f64 {
        let mut score = 0.0;

        // Level fit: +2.0 inside the range, plus up to +1.0 for closeness to
        // the midpoint. Outside the range, -0.1 per level of distance to the
        // nearest bound.
        let (lo, hi) = question.effective_level_range();
        let level_f = level as f64;
        if level >= lo && level <= hi {
            score += 2.0;
            let midpoint = (lo + hi) as f64 / 2.0;
            let half_width = (hi - lo) as f64 / 2.0;
            let distance = (level_f - midpoint).abs();
            score += 1.0 * (1.0 - distance / half_width.max(1.0));
        } else {
            let distance = (level_f - lo as f64).abs().min((level_f - hi as f64).abs());
            score -= distance * 0.1;
        }

        score += category_affinity(career_path, question.category);

        if let Some(target) = target_difficulty {
            let gap = (target.ordinal() - question.difficulty.ordinal()).abs() as f64;
            score += 1.0 - gap * 0.3;
        }

        // Learned boost: up to +0.5 scaled by classifier confidence. Absence
        // or failure contributes nothing.
        if let Some(classifier) = &self.capabilities.classifier {
            match classifier.classify(&question.text) {
                Ok(prediction) => score += prediction.confidence * 0.5,
                Err(e) => {
                    tracing::debug!("classifier boost unavailable for question: {e}");
                }
            }
        }

        // Jitter breaks ties and decorrelates repeated identical requests.
        score += rng.gen_range(0.0..0.3);

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{CapabilityError, Prediction, TextClassifier};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(category: Category, difficulty: Difficulty, range: (u32, u32)) -> QuestionRecord {
        QuestionRecord {
            text: "What is a test fixture?".into(),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 0,
            category,
            difficulty,
            explanation: String::new(),
            level_range: Some(range),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn in_range_midpoint_gets_full_level_fit() {
        let caps = Capabilities::none();
        let scorer = QuestionScorer::new(&caps);
        let q = question(Category::Frontend, Difficulty::Medium, (5, 15));

        // level 10 is the midpoint of [5, 15]: 2.0 + 1.0 level fit,
        // 2.0 affinity, 1.0 difficulty match, jitter in [0, 0.3).
        let score = scorer.score(&q, 10, CareerPath::Frontend, Some(Difficulty::Medium), &mut rng());
        assert!(score >= 6.0 && score < 6.3, "got {score}");
    }

    #[test]
    fn out_of_range_is_penalized_linearly() {
        let caps = Capabilities::none();
        let scorer = QuestionScorer::new(&caps);
        let q = question(Category::Algorithms, Difficulty::Hard, (20, 30));

        // Same seed for both, so only the distance penalty differs.
        let near = scorer.score(&q, 19, CareerPath::Fullstack, None, &mut rng());
        let far = scorer.score(&q, 5, CareerPath::Fullstack, None, &mut rng());
        assert!(near > far);
    }

    #[test]
    fn negative_scores_are_legal() {
        let caps = Capabilities::none();
        let scorer = QuestionScorer::new(&caps);
        let q = question(Category::Data, Difficulty::Hard, (28, 30));

        // Far out of range with a weak affinity (0.3 for data under
        // frontend) drives the total below zero.
        let score = scorer.score(&q, 1, CareerPath::Frontend, None, &mut rng());
        assert!(score < 0.0, "got {score}");
    }

    #[test]
    fn zero_width_range_does_not_divide_by_zero() {
        let caps = Capabilities::none();
        let scorer = QuestionScorer::new(&caps);
        let q = question(Category::Backend, Difficulty::Easy, (7, 7));

        let score = scorer.score(&q, 7, CareerPath::Backend, None, &mut rng());
        assert!(score.is_finite());
        // 2.0 + 1.0 level fit plus 2.0 affinity, no difficulty term.
        assert!(score >= 5.0 && score < 5.3, "got {score}");
    }

    #[test]
    fn difficulty_mismatch_reduces_score() {
        let caps = Capabilities::none();
        let scorer = QuestionScorer::new(&caps);
        let easy = question(Category::Backend, Difficulty::Easy, (5, 15));
        let hard = question(Category::Backend, Difficulty::Hard, (5, 15));

        let mut a = rng();
        let mut b = rng();
        let easy_score = scorer.score(&easy, 10, CareerPath::Backend, Some(Difficulty::Easy), &mut a);
        let hard_score = scorer.score(&hard, 10, CareerPath::Backend, Some(Difficulty::Easy), &mut b);
        // Identical except the difficulty gap: 1.0 vs 0.4 with equal jitter.
        assert!((easy_score - hard_score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn affinity_table_matches_career_focus() {
        assert_eq!(category_affinity(CareerPath::Frontend, Category::Frontend), 2.0);
        assert_eq!(category_affinity(CareerPath::Frontend, Category::Algorithms), 1.0);
        assert_eq!(category_affinity(CareerPath::Frontend, Category::Data), 0.3);
        assert_eq!(category_affinity(CareerPath::Backend, Category::Data), 1.5);
        assert_eq!(category_affinity(CareerPath::Cloud, Category::Security), 1.5);
        assert_eq!(category_affinity(CareerPath::Fullstack, Category::Security), 0.5);
    }

    struct ConfidentClassifier;

    impl TextClassifier for ConfidentClassifier {
        fn name(&self) -> &str {
            "confident"
        }

        fn classify(&self, _text: &str) -> Result<Prediction, CapabilityError> {
            Ok(Prediction {
                label: "backend".to_string(),
                confidence: 0.9,
            })
        }
    }

    struct FailingClassifier;

    impl TextClassifier for FailingClassifier {
        fn name(&self) -> &str {
            "failing"
        }

        fn classify(&self, _text: &str) -> Result<Prediction, CapabilityError> {
            Err(CapabilityError::EvaluationFailed("broken".into()))
        }
    }

    #[test]
    fn learned_boost_adds_scaled_confidence() {
        let with = Capabilities {
            classifier: Some(Box::new(ConfidentClassifier)),
            difficulty_predictor: None,
        };
        let without = Capabilities::none();
        let q = question(Category::Backend, Difficulty::Medium, (5, 15));

        let boosted = QuestionScorer::new(&with).score(
            &q,
            10,
            CareerPath::Backend,
            Some(Difficulty::Medium),
            &mut rng(),
        );
        let plain = QuestionScorer::new(&without).score(
            &q,
            10,
            CareerPath::Backend,
            Some(Difficulty::Medium),
            &mut rng(),
        );
        // Same seed, so jitter is identical; the difference is 0.9 * 0.5.
        assert!((boosted - plain - 0.45).abs() < 1e-9);
    }

    #[test]
    fn failing_classifier_contributes_nothing() {
        let failing = Capabilities {
            classifier: Some(Box::new(FailingClassifier)),
            difficulty_predictor: None,
        };
        let none = Capabilities::none();
        let q = question(Category::Backend, Difficulty::Medium, (5, 15));

        let a = QuestionScorer::new(&failing).score(&q, 10, CareerPath::Backend, None, &mut rng());
        let b = QuestionScorer::new(&none).score(&q, 10, CareerPath::Backend, None, &mut rng());
        assert!((a - b).abs() < 1e-9);
    }
}
