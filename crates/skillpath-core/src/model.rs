//! Core data model types for skillpath.
//!
//! These are the fundamental types that the entire skillpath system uses
//! to represent questions, learner profiles, and engine outputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question categories tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Algorithms,
    Frontend,
    Backend,
    Data,
    Security,
}

impl Category {
    /// All categories, in the fixed order observable tie-breaks use
    /// (keyword classification ties go to the earliest entry).
    pub const ALL: [Category; 5] = [
        Category::Frontend,
        Category::Backend,
        Category::Data,
        Category::Algorithms,
        Category::Security,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Algorithms => write!(f, "algorithms"),
            Category::Frontend => write!(f, "frontend"),
            Category::Backend => write!(f, "backend"),
            Category::Data => write!(f, "data"),
            Category::Security => write!(f, "security"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "algorithms" => Ok(Category::Algorithms),
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            "data" => Ok(Category::Data),
            "security" => Ok(Category::Security),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A quiz request either targets one category or mixes all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryFilter {
    Only(Category),
    Mixed(MixedTag),
}

/// Serde helper so `"mixed"` round-trips as a distinct variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MixedTag {
    Mixed,
}

impl CategoryFilter {
    pub const MIXED: CategoryFilter = CategoryFilter::Mixed(MixedTag::Mixed);

    /// The concrete category, if the filter names one.
    pub fn category(self) -> Option<Category> {
        match self {
            CategoryFilter::Only(c) => Some(c),
            CategoryFilter::Mixed(_) => None,
        }
    }

    pub fn is_mixed(self) -> bool {
        matches!(self, CategoryFilter::Mixed(_))
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::MIXED
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Only(c) => write!(f, "{c}"),
            CategoryFilter::Mixed(_) => write!(f, "mixed"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mixed") {
            Ok(CategoryFilter::MIXED)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// Question difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Ordinal used for difficulty-distance scoring (easy=1, medium=2, hard=3).
    pub fn ordinal(self) -> i32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Default learner-level range when a question carries none.
    pub fn default_level_range(self) -> (u32, u32) {
        match self {
            Difficulty::Easy => (1, 10),
            Difficulty::Medium => (5, 20),
            Difficulty::Hard => (15, 30),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Target occupation categories used to weight scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerPath {
    Frontend,
    Backend,
    Data,
    Cloud,
    Mobile,
    Security,
    Fullstack,
}

impl CareerPath {
    /// Enumeration order used everywhere an iteration order or tie-break is
    /// observable. Fullstack comes last because it is a derived composite.
    pub const ALL: [CareerPath; 7] = [
        CareerPath::Frontend,
        CareerPath::Backend,
        CareerPath::Data,
        CareerPath::Cloud,
        CareerPath::Mobile,
        CareerPath::Security,
        CareerPath::Fullstack,
    ];

    /// Parse a career path, falling back to fullstack for unknown values.
    /// Untyped callers send free-form strings, and an unknown path softens to
    /// the generalist weighting rather than failing the request.
    pub fn parse_lenient(s: &str) -> CareerPath {
        s.parse().unwrap_or(CareerPath::Fullstack)
    }
}

impl fmt::Display for CareerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareerPath::Frontend => write!(f, "frontend"),
            CareerPath::Backend => write!(f, "backend"),
            CareerPath::Data => write!(f, "data"),
            CareerPath::Cloud => write!(f, "cloud"),
            CareerPath::Mobile => write!(f, "mobile"),
            CareerPath::Security => write!(f, "security"),
            CareerPath::Fullstack => write!(f, "fullstack"),
        }
    }
}

impl FromStr for CareerPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(CareerPath::Frontend),
            "backend" => Ok(CareerPath::Backend),
            "data" => Ok(CareerPath::Data),
            "cloud" => Ok(CareerPath::Cloud),
            "mobile" => Ok(CareerPath::Mobile),
            "security" => Ok(CareerPath::Security),
            "fullstack" => Ok(CareerPath::Fullstack),
            other => Err(format!("unknown career path: {other}")),
        }
    }
}

/// An immutable catalog entry in the question corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The question text. Also the dedup key during selection.
    pub text: String,
    /// Four answer options, in presentation order.
    pub options: [String; 4],
    /// Index (0-3) of the correct option.
    pub correct_index: u8,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Shown after answering.
    pub explanation: String,
    /// Inclusive learner-level range this question suits. Defaults are
    /// derived from difficulty when absent.
    #[serde(default)]
    pub level_range: Option<(u32, u32)>,
}

impl QuestionRecord {
    /// The effective level range, falling back to the difficulty default.
    pub fn effective_level_range(&self) -> (u32, u32) {
        self.level_range
            .unwrap_or_else(|| self.difficulty.default_level_range())
    }
}

/// Parameters for one quiz generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    #[serde(
        default = "default_career_path",
        deserialize_with = "lenient_career_path"
    )]
    pub career_path: CareerPath,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_level")]
    pub level: u32,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

fn default_career_path() -> CareerPath {
    CareerPath::Fullstack
}

fn default_count() -> usize {
    5
}

fn default_level() -> u32 {
    10
}

fn lenient_career_path<'de, D>(deserializer: D) -> Result<CareerPath, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(CareerPath::parse_lenient(&s))
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            category: CategoryFilter::MIXED,
            difficulty: default_difficulty(),
            career_path: default_career_path(),
            count: default_count(),
            level: default_level(),
        }
    }
}

/// A question as presented to the learner. No score is exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub text: String,
    pub options: [String; 4],
    pub correct_index: u8,
    pub category: Category,
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl From<&QuestionRecord> for QuizQuestion {
    fn from(record: &QuestionRecord) -> Self {
        Self {
            text: record.text.clone(),
            options: record.options.clone(),
            correct_index: record.correct_index,
            category: record.category,
            difficulty: record.difficulty,
            explanation: record.explanation.clone(),
        }
    }
}

/// Interest and performance inputs for career recommendation.
///
/// Interest fields are on a 1-5 scale; performance fields on 0-1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProfile {
    #[serde(default = "default_interest")]
    pub visual_design: f64,
    #[serde(default = "default_interest")]
    pub backend_pref: f64,
    #[serde(default = "default_interest")]
    pub math_stats: f64,
    #[serde(default = "default_interest")]
    pub web_apps: f64,
    #[serde(default = "default_interest")]
    pub data_interest: f64,
    #[serde(default = "default_interest")]
    pub cloud_interest: f64,
    #[serde(default = "default_interest")]
    pub mobile_interest: f64,
    #[serde(default = "default_interest")]
    pub security_interest: f64,
    #[serde(default = "default_performance")]
    pub frontend_perf: f64,
    #[serde(default = "default_performance")]
    pub backend_perf: f64,
    #[serde(default = "default_performance")]
    pub data_perf: f64,
    #[serde(default = "default_performance")]
    pub algo_perf: f64,
}

fn default_interest() -> f64 {
    3.0
}

fn default_performance() -> f64 {
    0.5
}

impl Default for CareerProfile {
    fn default() -> Self {
        Self {
            visual_design: default_interest(),
            backend_pref: default_interest(),
            math_stats: default_interest(),
            web_apps: default_interest(),
            data_interest: default_interest(),
            cloud_interest: default_interest(),
            mobile_interest: default_interest(),
            security_interest: default_interest(),
            frontend_perf: default_performance(),
            backend_perf: default_performance(),
            data_perf: default_performance(),
            algo_perf: default_performance(),
        }
    }
}

/// Inputs for study suggestions: learner level, target career, and per-category
/// mastery scores on a 0-1 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyProfile {
    #[serde(default = "default_study_level")]
    pub level: u32,
    #[serde(
        default = "default_career_path",
        deserialize_with = "lenient_career_path"
    )]
    pub career_path: CareerPath,
    #[serde(default = "default_performance")]
    pub frontend_score: f64,
    #[serde(default = "default_performance")]
    pub backend_score: f64,
    #[serde(default = "default_performance")]
    pub data_score: f64,
    #[serde(default = "default_performance")]
    pub algo_score: f64,
    #[serde(default = "default_performance")]
    pub security_score: f64,
    /// Categories the caller already knows are weak; they escalate priority.
    #[serde(default)]
    pub weak_categories: Vec<Category>,
}

fn default_study_level() -> u32 {
    1
}

impl Default for StudyProfile {
    fn default() -> Self {
        Self {
            level: default_study_level(),
            career_path: default_career_path(),
            frontend_score: default_performance(),
            backend_score: default_performance(),
            data_score: default_performance(),
            algo_score: default_performance(),
            security_score: default_performance(),
            weak_categories: Vec::new(),
        }
    }
}

impl StudyProfile {
    /// Per-category mastery scores, in the order the suggester ranks them.
    pub fn category_scores(&self) -> [(Category, f64); 5] {
        [
            (Category::Frontend, self.frontend_score),
            (Category::Backend, self.backend_score),
            (Category::Data, self.data_score),
            (Category::Algorithms, self.algo_score),
            (Category::Security, self.security_score),
        ]
    }
}

/// Suggestion priority, ordered high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// One study recommendation for the learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySuggestion {
    pub topic: String,
    pub reason: String,
    pub recommended_action: String,
    pub priority: Priority,
}

/// Result of classifying free-form question text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    /// Heuristic confidence, capped at 0.95.
    pub confidence: f64,
}
