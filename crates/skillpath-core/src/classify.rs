//! Keyword-overlap fallback for question classification.
//!
//! Used whenever no learned classifier capability is loaded. Matching is a
//! plain substring test against the lowercased text, so multi-word entries
//! like "sql injection" work.

use crate::model::{Category, Classification};

const FRONTEND_KEYWORDS: &[&str] = &[
    "css", "html", "react", "vue", "angular", "dom", "ui", "ux", "style", "component",
    "javascript", "browser",
];

const BACKEND_KEYWORDS: &[&str] = &[
    "api", "server", "database", "rest", "http", "node", "express", "endpoint", "request",
    "response", "middleware",
];

const DATA_KEYWORDS: &[&str] = &[
    "sql", "query", "table", "schema", "index", "normalization", "data", "analytics", "pandas",
    "numpy",
];

const ALGORITHMS_KEYWORDS: &[&str] = &[
    "complexity", "sort", "search", "tree", "graph", "recursion", "dynamic", "hash", "array",
    "linked",
];

const SECURITY_KEYWORDS: &[&str] = &[
    "xss", "sql injection", "csrf", "authentication", "authorization", "encryption", "https",
    "cors", "vulnerability",
];

fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Frontend => FRONTEND_KEYWORDS,
        Category::Backend => BACKEND_KEYWORDS,
        Category::Data => DATA_KEYWORDS,
        Category::Algorithms => ALGORITHMS_KEYWORDS,
        Category::Security => SECURITY_KEYWORDS,
    }
}

/// Classify text by keyword overlap: highest raw match count wins, with
/// confidence = matches / total matches across categories. Zero matches
/// default to algorithms at 0.3.
pub fn classify_by_keywords(text: &str) -> Classification {
    let text_lower = text.to_lowercase();

    let counts: [(Category, usize); 5] = Category::ALL.map(|category| {
        let count = keywords(category)
            .iter()
            .filter(|word| text_lower.contains(*word))
            .count();
        (category, count)
    });

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Classification {
            category: Category::Algorithms,
            confidence: 0.3,
        };
    }

    // Strict greater-than: ties go to the first category in ALL order.
    let mut best = counts[0];
    for &(category, count) in &counts[1..] {
        if count > best.1 {
            best = (category, count);
        }
    }

    Classification {
        category: best.0,
        confidence: (best.1 as f64 / total as f64).min(0.95),
    }
}
