//! The rule-based sentiment classifier.
//!
//! Counts lexicon matches over whitespace tokens and derives a label plus a
//! bounded heuristic confidence. Fully synchronous and deterministic; the
//! "thinking" delay lives in [`crate::analyzer`], not here.

use crate::lexicon::Lexicon;
use crate::model::{Classification, SentimentLabel};

/// Base confidence for any non-tied outcome.
const BASE_CONFIDENCE: u32 = 60;
/// Confidence gained per excess matching word.
const CONFIDENCE_STEP: u32 = 10;
/// Confidence is capped here, never reported as certain.
const MAX_CONFIDENCE: u32 = 95;
/// Flat confidence for ties, including the no-matches case.
const NEUTRAL_CONFIDENCE: u8 = 75;

/// Classify a piece of text against a lexicon.
///
/// Lowercases the input, splits on whitespace runs, and counts each token at
/// most once per polarity using the lexicon's containment rule. The larger
/// count wins; ties (including empty input) are neutral at a flat 75%.
///
/// Never fails: empty or whitespace-only text yields neutral with 0/0 counts.
pub fn classify(text: &str, lexicon: &Lexicon) -> Classification {
    let lowered = text.to_lowercase();

    let mut positive_count: u32 = 0;
    let mut negative_count: u32 = 0;
    for token in lowered.split_whitespace() {
        if lexicon.matches_positive(token) {
            positive_count += 1;
        }
        if lexicon.matches_negative(token) {
            negative_count += 1;
        }
    }

    let (label, confidence, explanation) = if positive_count > negative_count {
        (
            SentimentLabel::Positive,
            scaled_confidence(positive_count - negative_count),
            format!(
                "Found {positive_count} positive word(s) and {negative_count} negative word(s). \
                 The positive words outweigh the negative ones!"
            ),
        )
    } else if negative_count > positive_count {
        (
            SentimentLabel::Negative,
            scaled_confidence(negative_count - positive_count),
            format!(
                "Found {negative_count} negative word(s) and {positive_count} positive word(s). \
                 The negative words outweigh the positive ones."
            ),
        )
    } else {
        let explanation = if positive_count == 0 && negative_count == 0 {
            "No strong emotional words detected, so this seems neutral.".to_string()
        } else {
            "Equal positive and negative words found, making this neutral overall.".to_string()
        };
        (SentimentLabel::Neutral, NEUTRAL_CONFIDENCE, explanation)
    };

    Classification {
        label,
        confidence,
        positive_count,
        negative_count,
        explanation,
    }
}

/// `min(95, 60 + excess * 10)` as an integer percentage.
fn scaled_confidence(excess: u32) -> u8 {
    MAX_CONFIDENCE.min(BASE_CONFIDENCE + excess * CONFIDENCE_STEP) as u8
}
