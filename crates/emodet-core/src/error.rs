//! Content error types.
//!
//! These errors represent violations in user-supplied lexicons and labels.
//! Defined in `emodet-core` so callers can match on the variant instead of
//! string-matching anyhow messages.

use thiserror::Error;

/// Errors raised while building or loading classifier content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A lexicon side has no words.
    #[error("the {side} lexicon is empty")]
    EmptyLexicon { side: &'static str },

    /// A lexicon entry is blank after trimming.
    #[error("blank word in the {side} lexicon")]
    BlankWord { side: &'static str },

    /// The same word appears in both polarities.
    #[error("word '{word}' appears in both the positive and negative lexicon")]
    ConflictingWord { word: String },

    /// A label string in a content file did not parse.
    #[error("invalid sentiment label: {0}")]
    InvalidLabel(String),
}
