//! Quiz selection: rank scored candidates, sample from a shortlist, and
//! enforce diversity and no-duplicate constraints.
//!
//! Selection deliberately does not return the top-N by score. The top
//! shortlist is shuffled before picking so that repeated requests with the
//! same parameters see different (but still high-scoring) questions.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::corpus::QuestionCorpus;
use crate::model::{Difficulty, QuestionRecord, QuizQuestion, QuizRequest};
use crate::scorer::QuestionScorer;
use crate::traits::Capabilities;

/// Ordered, disjoint level bands for remapping a default-difficulty request.
/// Checked first-to-last; levels past the final band fall through to hard.
const LEVEL_BANDS: [(u32, u32, Difficulty); 3] = [
    (1, 5, Difficulty::Easy),
    (6, 19, Difficulty::Medium),
    (20, 30, Difficulty::Hard),
];

/// Resolve the effective target difficulty for a request.
///
/// Only the default (`medium`) is remapped by learner level; an explicit
/// easy/hard request is honored as-is.
pub fn effective_difficulty(requested: Difficulty, level: u32) -> Difficulty {
    if requested != Difficulty::Medium {
        return requested;
    }
    for (lo, hi, difficulty) in LEVEL_BANDS {
        if level >= lo && level <= hi {
            return difficulty;
        }
    }
    Difficulty::Hard
}

/// Selects a bounded, diverse quiz from scored candidates.
pub struct QuizSelector<'a> {
    corpus: &'a QuestionCorpus,
    capabilities: &'a Capabilities,
}

impl<'a> QuizSelector<'a> {
    pub fn new(corpus: &'a QuestionCorpus, capabilities: &'a Capabilities) -> Self {
        Self {
            corpus,
            capabilities,
        }
    }

    /// Select up to `request.count` questions. Returns fewer only when the
    /// corpus itself has fewer distinct questions than requested.
    pub fn select<R: Rng>(&self, request: &QuizRequest, rng: &mut R) -> Vec<QuizQuestion> {
        let target = effective_difficulty(request.difficulty, request.level);
        let pool = self.corpus.eligible(request.category);

        let scorer = QuestionScorer::new(self.capabilities);
        let mut scored: Vec<(f64, &QuestionRecord)> = pool
            .iter()
            .map(|q| {
                (
                    scorer.score(q, request.level, request.career_path, Some(target), rng),
                    *q,
                )
            })
            .collect();
        // Jitter is already embedded in the score, so no secondary tie-break.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        // Shortlist: top candidates, shuffled. Biases toward high scorers
        // without locking in strict score order.
        let shortlist_len = request
            .count
            .saturating_mul(3)
            .max(scored.len() / 2)
            .min(scored.len());
        let mut shortlist: Vec<&QuestionRecord> =
            scored[..shortlist_len].iter().map(|(_, q)| *q).collect();
        shortlist.shuffle(rng);

        let mut selected: Vec<&QuestionRecord> = Vec::new();
        let mut used_texts: HashSet<&str> = HashSet::new();

        if request.category.is_mixed() {
            let mut used_categories = HashSet::new();
            for q in &shortlist {
                if selected.len() >= request.count {
                    break;
                }
                if used_texts.contains(q.text.as_str()) {
                    continue;
                }
                // New category, or diversity floor already met.
                if !used_categories.contains(&q.category) || used_categories.len() >= 4 {
                    selected.push(q);
                    used_texts.insert(q.text.as_str());
                    used_categories.insert(q.category);
                }
            }
            // Second pass: fill remaining slots ignoring category balance.
            for q in &shortlist {
                if selected.len() >= request.count {
                    break;
                }
                if !used_texts.contains(q.text.as_str()) {
                    selected.push(q);
                    used_texts.insert(q.text.as_str());
                }
            }
        } else {
            // Single category: draw from a 2x window of the shuffled
            // shortlist so variety survives across calls.
            for q in shortlist.iter().take(request.count.saturating_mul(2)) {
                if selected.len() >= request.count {
                    break;
                }
                if !used_texts.contains(q.text.as_str()) {
                    selected.push(q);
                    used_texts.insert(q.text.as_str());
                }
            }
        }

        // Presentation order is independent of selection order.
        selected.shuffle(rng);
        selected.truncate(request.count);

        tracing::debug!(
            selected = selected.len(),
            pool = pool.len(),
            target_difficulty = %target,
            "quiz selection complete"
        );

        selected.into_iter().map(QuizQuestion::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CareerPath, Category, CategoryFilter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn request(category: CategoryFilter, count: usize, level: u32) -> QuizRequest {
        QuizRequest {
            category,
            difficulty: Difficulty::Medium,
            career_path: CareerPath::Fullstack,
            count,
            level,
        }
    }

    fn select(req: &QuizRequest, seed: u64) -> Vec<QuizQuestion> {
        let corpus = QuestionCorpus::builtin();
        let caps = Capabilities::none();
        let selector = QuizSelector::new(&corpus, &caps);
        let mut rng = StdRng::seed_from_u64(seed);
        selector.select(req, &mut rng)
    }

    #[test]
    fn effective_difficulty_remaps_only_medium() {
        assert_eq!(effective_difficulty(Difficulty::Medium, 3), Difficulty::Easy);
        assert_eq!(effective_difficulty(Difficulty::Medium, 10), Difficulty::Medium);
        assert_eq!(effective_difficulty(Difficulty::Medium, 19), Difficulty::Medium);
        assert_eq!(effective_difficulty(Difficulty::Medium, 25), Difficulty::Hard);
        assert_eq!(effective_difficulty(Difficulty::Medium, 99), Difficulty::Hard);
        assert_eq!(effective_difficulty(Difficulty::Easy, 25), Difficulty::Easy);
        assert_eq!(effective_difficulty(Difficulty::Hard, 3), Difficulty::Hard);
    }

    #[test]
    fn returns_exactly_count_when_pool_is_large() {
        for seed in 0..10 {
            let result = select(&request(CategoryFilter::MIXED, 5, 10), seed);
            assert_eq!(result.len(), 5);
        }
    }

    #[test]
    fn absurd_count_does_not_overflow() {
        // Untyped callers can send any usize; selection must stay bounded
        // by the corpus rather than panicking on multiplication.
        let result = select(&request(CategoryFilter::MIXED, usize::MAX, 10), 3);
        assert_eq!(result.len(), QuestionCorpus::builtin().len());

        let result = select(
            &request(CategoryFilter::Only(Category::Data), usize::MAX, 10),
            3,
        );
        assert!(result.len() <= QuestionCorpus::builtin().len());
    }

    #[test]
    fn never_exceeds_count() {
        let result = select(&request(CategoryFilter::MIXED, 3, 10), 7);
        assert!(result.len() <= 3);
    }

    #[test]
    fn no_duplicate_texts() {
        for seed in 0..20 {
            let result = select(&request(CategoryFilter::MIXED, 10, 10), seed);
            let texts: HashSet<&str> = result.iter().map(|q| q.text.as_str()).collect();
            assert_eq!(texts.len(), result.len(), "seed {seed}");
        }
    }

    #[test]
    fn single_category_request_stays_in_category() {
        let result = select(
            &request(CategoryFilter::Only(Category::Frontend), 5, 10),
            11,
        );
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|q| q.category == Category::Frontend));
    }

    #[test]
    fn mixed_request_meets_diversity_floor() {
        for seed in 0..20 {
            let result = select(&request(CategoryFilter::MIXED, 5, 10), seed);
            let categories: HashSet<Category> = result.iter().map(|q| q.category).collect();
            assert!(categories.len() >= 3, "seed {seed}: {categories:?}");
        }
    }

    #[test]
    fn small_corpus_returns_fewer_than_requested() {
        let records: Vec<_> = QuestionCorpus::builtin()
            .records()
            .iter()
            .filter(|r| r.category == Category::Data)
            .cloned()
            .take(3)
            .collect();
        let corpus = QuestionCorpus::from_records(records);
        let caps = Capabilities::none();
        let selector = QuizSelector::new(&corpus, &caps);
        let mut rng = StdRng::seed_from_u64(1);
        let result = selector.select(&request(CategoryFilter::MIXED, 10, 10), &mut rng);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn duplicate_corpus_texts_collapse_to_one() {
        let base = QuestionCorpus::builtin().records()[0].clone();
        let mut near_duplicate = base.clone();
        // Same text, different explanation: still the same "used" question.
        near_duplicate.explanation = "another explanation".into();
        let corpus = QuestionCorpus::from_records(vec![base, near_duplicate]);
        let caps = Capabilities::none();
        let selector = QuizSelector::new(&corpus, &caps);
        let mut rng = StdRng::seed_from_u64(5);
        let result = selector.select(&request(CategoryFilter::MIXED, 5, 5), &mut rng);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn empty_category_filter_falls_back_to_full_corpus() {
        let records: Vec<_> = QuestionCorpus::builtin()
            .records()
            .iter()
            .filter(|r| r.category == Category::Backend)
            .cloned()
            .collect();
        let corpus = QuestionCorpus::from_records(records);
        let caps = Capabilities::none();
        let selector = QuizSelector::new(&corpus, &caps);
        let mut rng = StdRng::seed_from_u64(2);
        // No frontend questions exist, so the full pool is used instead.
        let result = selector.select(
            &request(CategoryFilter::Only(Category::Frontend), 4, 10),
            &mut rng,
        );
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|q| q.category == Category::Backend));
    }

    #[test]
    fn seeded_selection_is_deterministic() {
        let a = select(&request(CategoryFilter::MIXED, 5, 10), 99);
        let b = select(&request(CategoryFilter::MIXED, 5, 10), 99);
        let texts_a: Vec<&str> = a.iter().map(|q| q.text.as_str()).collect();
        let texts_b: Vec<&str> = b.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts_a, texts_b);
    }
}
