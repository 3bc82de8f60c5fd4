//! Async analysis surface over the synchronous classifier.
//!
//! The learning tool presents analysis as "thinking" for a moment before
//! answering. The delay is a presentation affordance layered on top of
//! [`classify`]; scoring itself stays synchronous and deterministic, and
//! tests can call `classify` directly without waiting.

use std::time::Duration;

use async_trait::async_trait;

use crate::classifier::classify;
use crate::lexicon::Lexicon;
use crate::model::Classification;

/// The original tool pauses this long before revealing a result.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(1500);

/// Trait for anything that can analyze text, possibly with latency.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Human-readable analyzer name.
    fn name(&self) -> &str;

    /// Analyze a piece of text. Always resolves; never errors.
    async fn analyze(&self, text: &str) -> Classification;
}

/// Analyzer that sleeps for a fixed duration before classifying.
///
/// The returned future is cancellable by dropping it; there is no timeout
/// and no retry because the underlying computation cannot fail.
pub struct DelayedAnalyzer {
    lexicon: Lexicon,
    delay: Duration,
}

impl DelayedAnalyzer {
    /// Create an analyzer with the default thinking delay.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_delay(lexicon, DEFAULT_THINKING_DELAY)
    }

    /// Create an analyzer with an explicit delay.
    pub fn with_delay(lexicon: Lexicon, delay: Duration) -> Self {
        Self { lexicon, delay }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Analyzer for DelayedAnalyzer {
    fn name(&self) -> &str {
        "delayed"
    }

    async fn analyze(&self, text: &str) -> Classification {
        tokio::time::sleep(self.delay).await;
        classify(text, &self.lexicon)
    }
}

/// Zero-delay analyzer for tests and scripted runs.
pub struct InstantAnalyzer {
    lexicon: Lexicon,
}

impl InstantAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

#[async_trait]
impl Analyzer for InstantAnalyzer {
    fn name(&self) -> &str {
        "instant"
    }

    async fn analyze(&self, text: &str) -> Classification {
        classify(text, &self.lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SentimentLabel;

    fn lexicon() -> Lexicon {
        Lexicon::new(["love"], ["hate"]).unwrap()
    }

    #[tokio::test]
    async fn instant_matches_sync_classify() {
        let analyzer = InstantAnalyzer::new(lexicon());
        let via_trait = analyzer.analyze("I love this").await;
        let direct = classify("I love this", &lexicon());
        assert_eq!(via_trait, direct);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_waits_the_configured_duration() {
        let analyzer = DelayedAnalyzer::with_delay(lexicon(), Duration::from_millis(1500));

        let before = tokio::time::Instant::now();
        let result = analyzer.analyze("I love this").await;
        let elapsed = before.elapsed();

        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(elapsed >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_result_matches_sync_classify() {
        let analyzer = DelayedAnalyzer::new(lexicon());
        assert_eq!(analyzer.delay(), DEFAULT_THINKING_DELAY);
        let via_trait = analyzer.analyze("hate hate love").await;
        assert_eq!(via_trait, classify("hate hate love", &lexicon()));
    }
}
