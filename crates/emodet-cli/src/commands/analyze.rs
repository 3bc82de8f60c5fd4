//! The `emodet analyze` command.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use emodet_core::analyzer::{Analyzer, DelayedAnalyzer};
use emodet_core::model::Classification;
use emodet_core::parser;
use emodet_content::load_config_from;

pub async fn execute(
    text: Option<String>,
    lexicon_path: Option<PathBuf>,
    delay_ms: Option<u64>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    // Blank input never reaches the analyzer, same as the tool's disabled
    // submit button.
    anyhow::ensure!(
        !text.trim().is_empty(),
        "nothing to analyze: enter some text first"
    );

    let lexicon = match lexicon_path {
        Some(path) => parser::parse_lexicon(&path)?,
        None => config.resolve_lexicon()?,
    };

    let delay = Duration::from_millis(delay_ms.unwrap_or(config.delay_ms));
    let analyzer = DelayedAnalyzer::with_delay(lexicon, delay);

    if format == "text" && !delay.is_zero() {
        eprintln!("Analyzing emotions...");
    }
    let result = analyzer.analyze(&text).await;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => print_result(&result),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

fn print_result(result: &Classification) {
    println!("Sentiment:  {}", result.label);
    println!(
        "Confidence: {}% {}",
        result.confidence,
        confidence_bar(result.confidence)
    );
    println!("Matches:    {} positive / {} negative", result.positive_count, result.negative_count);
    println!();
    println!("{}", result.explanation);
}

/// A 20-slot bar like `[##########----------]`.
fn confidence_bar(confidence: u8) -> String {
    let filled = (confidence as usize * 20) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_tracks_confidence() {
        assert_eq!(confidence_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(confidence_bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(confidence_bar(75), format!("[{}{}]", "#".repeat(15), "-".repeat(5)));
    }
}
