//! Quiz session state machine.
//!
//! All quiz progress lives in an explicit [`QuizSession`] mutated only
//! through phase-guarded transition methods. Invalid transitions are no-ops
//! rather than errors: the interface is expected to prevent them, and the
//! domain has no failure modes beyond unmet preconditions.

use serde::{Deserialize, Serialize};

use crate::model::{Exercise, ExerciseSet, SentimentLabel};

/// Percentage at or above which the top feedback tier applies.
pub const TIER_EXCELLENT: u32 = 80;
/// Percentage at or above which the middle feedback tier applies.
pub const TIER_GOOD: u32 = 60;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum QuizPhase {
    /// Waiting for an answer to the current exercise.
    Answering,
    /// The current exercise's result is revealed; waiting for `next()`.
    ShowingResult { was_correct: bool },
    /// All exercises answered.
    Completed,
}

/// One quiz run over an exercise set.
#[derive(Debug, Clone)]
pub struct QuizSession {
    exercises: Vec<Exercise>,
    index: usize,
    selected: Option<SentimentLabel>,
    score: u32,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a session at the first exercise with score 0.
    pub fn new(set: &ExerciseSet) -> Self {
        Self {
            exercises: set.exercises.clone(),
            index: 0,
            selected: None,
            score: 0,
            phase: QuizPhase::Answering,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Zero-based index of the current exercise.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Running score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of exercises.
    pub fn total(&self) -> usize {
        self.exercises.len()
    }

    /// The tentatively selected answer, if any.
    pub fn selected(&self) -> Option<SentimentLabel> {
        self.selected
    }

    /// The exercise currently being answered or shown, if not completed.
    pub fn current_exercise(&self) -> Option<&Exercise> {
        match self.phase {
            QuizPhase::Completed => None,
            _ => self.exercises.get(self.index),
        }
    }

    /// Record a tentative choice. Only valid while answering; a no-op once
    /// the result is revealed. Does not score.
    pub fn select_answer(&mut self, label: SentimentLabel) {
        if self.phase == QuizPhase::Answering {
            self.selected = Some(label);
        }
    }

    /// Reveal the result for the current exercise.
    ///
    /// Requires a recorded choice while answering; otherwise a no-op that
    /// returns `false`. Scores at most once per exercise: the transition to
    /// `ShowingResult` is itself the idempotency guard, so calling submit
    /// again before `next()` cannot double-count.
    pub fn submit(&mut self) -> bool {
        if self.phase != QuizPhase::Answering {
            return false;
        }
        let Some(selected) = self.selected else {
            return false;
        };
        let Some(exercise) = self.exercises.get(self.index) else {
            return false;
        };

        let was_correct = selected == exercise.answer;
        if was_correct {
            self.score += 1;
        }
        self.phase = QuizPhase::ShowingResult { was_correct };
        true
    }

    /// Advance past a revealed result.
    ///
    /// Moves to the next exercise, or to `Completed` after the last one.
    /// A no-op unless a result is currently shown.
    pub fn next(&mut self) -> bool {
        if !matches!(self.phase, QuizPhase::ShowingResult { .. }) {
            return false;
        }
        if self.index + 1 < self.exercises.len() {
            self.index += 1;
            self.selected = None;
            self.phase = QuizPhase::Answering;
        } else {
            self.phase = QuizPhase::Completed;
        }
        true
    }

    /// Reset to the first exercise with score 0, from any phase.
    pub fn restart(&mut self) {
        self.index = 0;
        self.selected = None;
        self.score = 0;
        self.phase = QuizPhase::Answering;
    }

    /// Summary of a completed (or in-progress) session.
    pub fn summary(&self) -> QuizSummary {
        QuizSummary::new(self.score, self.exercises.len() as u32)
    }
}

/// Final score with tiered feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    /// Correct answers.
    pub score: u32,
    /// Total exercises.
    pub total: u32,
    /// `round(score / total * 100)`.
    pub percentage: u32,
    /// Which feedback tier the percentage falls in.
    pub tier: FeedbackTier,
}

impl QuizSummary {
    pub fn new(score: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (score as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            total,
            percentage,
            tier: FeedbackTier::for_percentage(percentage),
        }
    }
}

/// Feedback tiers at >= 80%, >= 60%, and below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    KeepPracticing,
}

impl FeedbackTier {
    /// Map a percentage onto its tier.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= TIER_EXCELLENT {
            FeedbackTier::Excellent
        } else if percentage >= TIER_GOOD {
            FeedbackTier::Good
        } else {
            FeedbackTier::KeepPracticing
        }
    }

    /// Maya's closing line for this tier.
    pub fn feedback(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => {
                "Excellent work! You're a natural emotion detective. You really understand \
                 how to spot emotional clues in text!"
            }
            FeedbackTier::Good => {
                "Good job! You're getting the hang of emotion detection. Keep practicing \
                 and you'll be an expert soon!"
            }
            FeedbackTier::KeepPracticing => {
                "Don't worry, emotion detection takes practice! Try again and pay attention \
                 to the emotion words like 'love', 'hate', 'excited', and 'boring'."
            }
        }
    }
}
