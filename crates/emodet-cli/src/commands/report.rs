//! The `emodet report` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use emodet_core::report::SessionReport;

pub fn execute(input: PathBuf, html: bool) -> Result<()> {
    let report = SessionReport::load_json(&input)?;

    println!(
        "Session {} — {} ({})",
        report.id,
        report.exercise_set.name,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Score: {}/{} ({}%)",
        report.summary.score, report.summary.total, report.summary.percentage
    );
    println!("{}", report.summary.tier.feedback());

    let mut table = Table::new();
    table.set_header(vec!["#", "Prompt", "Chosen", "Correct", "Result"]);
    for (i, o) in report.outcomes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&o.prompt),
            Cell::new(o.chosen),
            Cell::new(o.correct),
            Cell::new(if o.was_correct { "correct" } else { "wrong" }),
        ]);
    }
    println!("\n{table}");

    if html {
        let path = input.with_extension("html");
        emodet_report::write_html_report(&report, &path)?;
        eprintln!("HTML report: {}", path.display());
    }

    Ok(())
}
