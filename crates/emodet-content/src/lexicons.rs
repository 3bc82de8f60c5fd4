//! The default emotion word lists.

use emodet_core::lexicon::Lexicon;

/// Words that count toward a positive reading.
pub const POSITIVE_WORDS: [&str; 14] = [
    "happy",
    "love",
    "great",
    "amazing",
    "wonderful",
    "fantastic",
    "excellent",
    "awesome",
    "good",
    "beautiful",
    "perfect",
    "joy",
    "excited",
    "brilliant",
];

/// Words that count toward a negative reading.
pub const NEGATIVE_WORDS: [&str; 12] = [
    "sad",
    "hate",
    "terrible",
    "awful",
    "horrible",
    "bad",
    "worst",
    "angry",
    "disappointed",
    "upset",
    "frustrated",
    "annoyed",
];

/// Build the default lexicon.
pub fn default_lexicon() -> Lexicon {
    // The built-in lists are valid by construction.
    Lexicon::new(POSITIVE_WORDS, NEGATIVE_WORDS)
        .unwrap_or_else(|e| unreachable!("built-in lexicon is invalid: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_expected_sizes() {
        let lexicon = default_lexicon();
        assert_eq!(lexicon.positive_words().len(), 14);
        assert_eq!(lexicon.negative_words().len(), 12);
    }

    #[test]
    fn lists_are_disjoint() {
        for word in POSITIVE_WORDS {
            assert!(!NEGATIVE_WORDS.contains(&word), "{word} is in both lists");
        }
    }

    #[test]
    fn all_words_are_lowercase() {
        for word in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS.iter()) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
