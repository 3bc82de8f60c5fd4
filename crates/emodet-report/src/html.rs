//! HTML session report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use emodet_core::report::SessionReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>emodet session — {}</title>\n",
        html_escape(&report.exercise_set.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Emotion Detective session</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Exercise set: <strong>{}</strong> | {} questions | {}</p>\n",
        html_escape(&report.exercise_set.name),
        report.exercise_set.exercise_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score summary
    html.push_str("<section class=\"summary\">\n");
    html.push_str("<h2>Score</h2>\n");
    html.push_str(&format!(
        "<p class=\"score\">{} / {} correct ({}%)</p>\n",
        report.summary.score, report.summary.total, report.summary.percentage
    ));
    html.push_str(&format!(
        "<div class=\"bar\"><div class=\"fill\" style=\"width:{}%\"></div></div>\n",
        report.summary.percentage.min(100)
    ));
    html.push_str(&format!(
        "<blockquote class=\"feedback\">{}</blockquote>\n",
        html_escape(report.summary.tier.feedback())
    ));
    html.push_str("</section>\n");

    // Per-question outcomes
    html.push_str("<section class=\"outcomes\">\n");
    html.push_str("<h2>Questions</h2>\n");
    html.push_str("<table>\n");
    html.push_str(
        "<thead><tr><th>#</th><th>Prompt</th><th>Chosen</th><th>Correct</th><th>Result</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");

    for (i, o) in report.outcomes.iter().enumerate() {
        let class = if o.was_correct { "pass" } else { "fail" };
        let result = if o.was_correct { "correct" } else { "wrong" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>\n",
            class,
            i + 1,
            html_escape(&o.prompt),
            o.chosen,
            o.correct,
            class,
            result
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML session report to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; --accent: #7c3aed; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; --accent: #a78bfa; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.score { font-size: 1.5rem; font-weight: 600; }
.bar { width: 100%; max-width: 400px; height: 10px; background: var(--border); border-radius: 5px; }
.fill { height: 10px; background: var(--accent); border-radius: 5px; }
.feedback { border-left: 4px solid var(--accent); margin: 1rem 0; padding: 0.5rem 1rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 0.75rem; text-align: left; }
tr.pass td.pass { background: var(--pass); }
tr.fail td.fail { background: var(--fail); }
details { margin: 1rem 0; }
pre { overflow-x: auto; background: var(--border); padding: 1rem; border-radius: 6px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use emodet_core::model::{Exercise, ExerciseSet, SentimentLabel};
    use emodet_core::quiz::QuizSummary;
    use emodet_core::report::QuestionOutcome;

    fn make_report() -> SessionReport {
        let set = ExerciseSet {
            id: "starter".into(),
            name: "Starter <Set>".into(),
            description: String::new(),
            exercises: vec![Exercise {
                id: "ex1".into(),
                prompt: "I got an A+ on my math test!".into(),
                answer: SentimentLabel::Positive,
                explanation: String::new(),
            }],
        };
        let mut report = SessionReport::new(
            &set,
            vec![QuestionOutcome {
                exercise_id: "ex1".into(),
                prompt: "I got an A+ on my math test!".into(),
                chosen: SentimentLabel::Negative,
                correct: SentimentLabel::Positive,
                was_correct: false,
            }],
            QuizSummary::new(0, 1),
        );
        report.created_at = chrono::Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        report
    }

    #[test]
    fn html_contains_score_and_outcomes() {
        let html = generate_html(&make_report());
        assert!(html.contains("0 / 1 correct (0%)"));
        assert!(html.contains("I got an A+ on my math test!"));
        assert!(html.contains("wrong"));
        assert!(html.contains("takes practice"));
    }

    #[test]
    fn html_shows_creation_timestamp() {
        let html = generate_html(&make_report());
        assert!(html.contains("2026-01-15 09:30:00 UTC"));
    }

    #[test]
    fn html_escapes_set_name() {
        let html = generate_html(&make_report());
        assert!(html.contains("Starter &lt;Set&gt;"));
        assert!(!html.contains("Starter <Set>"));
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.html");
        write_html_report(&make_report(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
    }
}
