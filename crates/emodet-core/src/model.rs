//! Core data model types for emodet.
//!
//! These are the fundamental types the entire emodet system uses to
//! represent sentiment labels, classification results, and quiz exercises.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The categorical output of the classifier, and the answer space of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in presentation order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" | "pos" => Ok(SentimentLabel::Positive),
            "negative" | "neg" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

/// The result of classifying one piece of text.
///
/// Created fresh per call, immutable, never persisted by the classifier
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The derived label.
    pub label: SentimentLabel,
    /// Heuristic certainty as an integer percentage in [0, 100].
    pub confidence: u8,
    /// Tokens that matched the positive lexicon (at most once per token).
    pub positive_count: u32,
    /// Tokens that matched the negative lexicon (at most once per token).
    pub negative_count: u32,
    /// Human-readable summary of how the counts led to the label.
    pub explanation: String,
}

/// A single quiz exercise with a known correct label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier for this exercise.
    pub id: String,
    /// The text the learner is asked to classify.
    pub prompt: String,
    /// The correct label.
    pub answer: SentimentLabel,
    /// Shown after the learner submits, right or wrong.
    #[serde(default)]
    pub explanation: String,
}

/// A collection of exercises run as one quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Unique identifier for this set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this set.
    #[serde(default)]
    pub description: String,
    /// The exercises, in quiz order.
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl ExerciseSet {
    /// Number of exercises in the set.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the set has no exercises.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
