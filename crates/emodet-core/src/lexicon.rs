//! Sentiment lexicons and the token matching rule.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Two word lists, one per polarity, fixed once constructed.
///
/// Matching is case-insensitive and deliberately loose: a token matches a
/// list if it *contains* any list word as a substring, so "loved" matches
/// "love" and a token can match both lists at once. Counting happens at most
/// once per token per list, in [`crate::classifier::classify`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from two word lists.
    ///
    /// Words are lowercased. Fails on empty lists, blank entries, or a word
    /// present in both polarities.
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self, ContentError>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalize = |words: &mut Vec<String>, side: &'static str| {
            for w in words.iter_mut() {
                *w = w.trim().to_lowercase();
                if w.is_empty() {
                    return Err(ContentError::BlankWord { side });
                }
            }
            if words.is_empty() {
                return Err(ContentError::EmptyLexicon { side });
            }
            Ok(())
        };

        let mut positive: Vec<String> =
            positive.into_iter().map(|s| s.as_ref().to_string()).collect();
        let mut negative: Vec<String> =
            negative.into_iter().map(|s| s.as_ref().to_string()).collect();
        normalize(&mut positive, "positive")?;
        normalize(&mut negative, "negative")?;

        if let Some(word) = positive.iter().find(|w| negative.contains(*w)) {
            return Err(ContentError::ConflictingWord { word: word.clone() });
        }

        Ok(Self { positive, negative })
    }

    /// The positive word list.
    pub fn positive_words(&self) -> &[String] {
        &self.positive
    }

    /// The negative word list.
    pub fn negative_words(&self) -> &[String] {
        &self.negative
    }

    /// Whether a lowercased token contains any positive word.
    pub fn matches_positive(&self, token: &str) -> bool {
        self.positive.iter().any(|w| token.contains(w.as_str()))
    }

    /// Whether a lowercased token contains any negative word.
    pub fn matches_negative(&self, token: &str) -> bool {
        self.negative.iter().any(|w| token.contains(w.as_str()))
    }
}
