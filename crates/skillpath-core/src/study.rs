//! Study topic suggestions from per-category mastery scores.
//!
//! The three weakest categories get a suggestion each. Priority follows the
//! absolute score, then escalates to high when the category matters to the
//! learner's career focus or their declared weak set.

use crate::model::{CareerPath, Category, Priority, StudyProfile, StudySuggestion};

/// Categories a career path concentrates on; membership escalates suggestion
/// priority.
pub fn career_focus(career: CareerPath) -> &'static [Category] {
    use Category::*;
    match career {
        CareerPath::Frontend => &[Frontend, Algorithms],
        CareerPath::Backend => &[Backend, Data, Algorithms],
        CareerPath::Data => &[Data, Algorithms, Backend],
        CareerPath::Cloud => &[Backend, Security],
        CareerPath::Mobile => &[Frontend, Backend],
        CareerPath::Security => &[Security, Backend],
        CareerPath::Fullstack => &[Frontend, Backend, Algorithms],
    }
}

fn topic(category: Category) -> &'static str {
    match category {
        Category::Frontend => "Career Path Development",
        Category::Backend => "Backend Architecture",
        Category::Data => "Data Structures & Analysis",
        Category::Algorithms => "Algorithm Optimization",
        Category::Security => "Security Best Practices",
    }
}

fn reason(category: Category, score: f64, career: CareerPath) -> String {
    let pct = (score * 100.0) as i64;
    match category {
        Category::Frontend => format!(
            "Your frontend skills ({pct}%) could use improvement for your {career} career path."
        ),
        Category::Backend => {
            format!("Backend knowledge ({pct}%) is essential for building robust applications.")
        }
        Category::Data => {
            format!("Data skills ({pct}%) will help you make better data-driven decisions.")
        }
        Category::Algorithms => {
            format!("Algorithm understanding ({pct}%) is fundamental for technical interviews.")
        }
        Category::Security => {
            format!("Security knowledge ({pct}%) is critical for building safe applications.")
        }
    }
}

fn recommended_action(category: Category) -> &'static str {
    match category {
        Category::Frontend => "Practice React components and CSS layouts",
        Category::Backend => "Build a REST API with Node.js and Express",
        Category::Data => "Work through SQL exercises and data modeling",
        Category::Algorithms => "Solve algorithm challenges on practice platforms",
        Category::Security => "Learn about OWASP top 10 vulnerabilities",
    }
}

fn base_priority(score: f64) -> Priority {
    if score < 0.4 {
        Priority::High
    } else if score < 0.6 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Suggest study topics for the three weakest categories, strongest priority
/// first. Ordering is fully deterministic: the weakness rank is preserved
/// among equal priorities via a stable sort.
pub fn suggest(profile: &StudyProfile) -> Vec<StudySuggestion> {
    let mut scores = profile.category_scores().to_vec();
    scores.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let focus = career_focus(profile.career_path);

    let mut suggestions: Vec<StudySuggestion> = scores
        .iter()
        .take(3)
        .map(|&(category, score)| {
            let mut priority = base_priority(score);
            if focus.contains(&category) || profile.weak_categories.contains(&category) {
                priority = Priority::High;
            }
            StudySuggestion {
                topic: topic(category).to_string(),
                reason: reason(category, score, profile.career_path),
                recommended_action: recommended_action(category).to_string(),
                priority,
            }
        })
        .collect();

    // Stable: equal priorities keep their weakness order.
    suggestions.sort_by_key(|s| s.priority);
    suggestions
}
