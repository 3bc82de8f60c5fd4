//! Quiz session reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{ExerciseSet, SentimentLabel};
use crate::quiz::QuizSummary;

/// A record of one completed quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the exercise set.
    pub exercise_set: ExerciseSetSummary,
    /// Per-question outcomes, in quiz order.
    pub outcomes: Vec<QuestionOutcome>,
    /// Final score with tier.
    pub summary: QuizSummary,
}

/// Summary of an exercise set (without the full exercise definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSetSummary {
    pub id: String,
    pub name: String,
    pub exercise_count: usize,
}

/// What happened on a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOutcome {
    /// The exercise ID.
    pub exercise_id: String,
    /// The prompt shown.
    pub prompt: String,
    /// The label the learner chose.
    pub chosen: SentimentLabel,
    /// The correct label.
    pub correct: SentimentLabel,
    /// Whether the answer matched.
    pub was_correct: bool,
}

impl SessionReport {
    /// Build a report from a completed session's pieces.
    pub fn new(set: &ExerciseSet, outcomes: Vec<QuestionOutcome>, summary: QuizSummary) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            exercise_set: ExerciseSetSummary {
                id: set.id.clone(),
                name: set.name.clone(),
                exercise_count: set.len(),
            },
            outcomes,
            summary,
        }
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}** — {}/{} correct ({}%)\n\n",
            self.exercise_set.name, self.summary.score, self.summary.total, self.summary.percentage
        ));
        md.push_str(&format!("{}\n\n", self.summary.tier.feedback()));

        md.push_str("| # | Prompt | Chosen | Correct | Result |\n");
        md.push_str("|---|--------|--------|---------|--------|\n");
        for (i, o) in self.outcomes.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                i + 1,
                o.prompt,
                o.chosen,
                o.correct,
                if o.was_correct { "correct" } else { "wrong" }
            ));
        }

        md
    }
}
