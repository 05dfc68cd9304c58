//! Career path recommendation from learner interest and performance inputs.
//!
//! Each path has a fixed linear formula blending 2-3 relevant inputs with
//! coefficients summing to 1.0; performance inputs (0-1) are scaled by 5 onto
//! the interest scale first. Fullstack is not an independent formula: it is
//! the average of the frontend and backend scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{CareerPath, CareerProfile};

/// A recommendation with the full probability distribution over paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub recommended_path: CareerPath,
    /// Normalized path scores; sums to 1.0 within floating tolerance.
    pub probabilities: BTreeMap<CareerPath, f64>,
    /// Heuristic confidence, capped at 0.95. Not a calibrated probability.
    pub confidence: f64,
}

/// Raw (pre-normalization) score for a single path.
fn raw_score(path: CareerPath, p: &CareerProfile) -> f64 {
    match path {
        CareerPath::Frontend => {
            p.visual_design * 0.4 + p.web_apps * 0.3 + p.frontend_perf * 5.0 * 0.3
        }
        CareerPath::Backend => {
            p.backend_pref * 0.4 + p.web_apps * 0.2 + p.backend_perf * 5.0 * 0.4
        }
        CareerPath::Data => p.math_stats * 0.4 + p.data_interest * 0.3 + p.data_perf * 5.0 * 0.3,
        CareerPath::Cloud => {
            p.backend_pref * 0.3 + p.cloud_interest * 0.4 + p.backend_perf * 5.0 * 0.3
        }
        CareerPath::Mobile => {
            p.visual_design * 0.3 + p.mobile_interest * 0.4 + p.frontend_perf * 5.0 * 0.3
        }
        CareerPath::Security => {
            p.security_interest * 0.5 + p.backend_perf * 5.0 * 0.3 + p.algo_perf * 5.0 * 0.2
        }
        // Composite, computed from the two constituents.
        CareerPath::Fullstack => {
            (raw_score(CareerPath::Frontend, p) + raw_score(CareerPath::Backend, p)) / 2.0
        }
    }
}

/// Recommend a career path for the given profile.
///
/// The recommended path is the argmax of raw scores; exact ties go to the
/// first-defined path in `CareerPath::ALL` order.
pub fn recommend(profile: &CareerProfile) -> CareerRecommendation {
    let scores: Vec<(CareerPath, f64)> = CareerPath::ALL
        .iter()
        .map(|&path| (path, raw_score(path, profile)))
        .collect();

    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    let probabilities: BTreeMap<CareerPath, f64> =
        scores.iter().map(|&(path, s)| (path, s / total)).collect();

    // Strict greater-than keeps the first-defined path on exact ties.
    let mut recommended = scores[0];
    for &(path, score) in &scores[1..] {
        if score > recommended.1 {
            recommended = (path, score);
        }
    }

    let max_prob = probabilities
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let confidence = (max_prob * 1.5).min(0.95);

    CareerRecommendation {
        recommended_path: recommended.0,
        probabilities,
        confidence,
    }
}
