//! The `emodet quiz` command.
//!
//! Runs a quiz session either interactively (prompting on stdin) or scripted
//! via `--answers`, then prints the tiered summary and optionally saves the
//! session report.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use emodet_core::model::{ExerciseSet, SentimentLabel};
use emodet_core::parser;
use emodet_core::quiz::{QuizPhase, QuizSession};
use emodet_core::report::{QuestionOutcome, SessionReport};
use emodet_content::load_config_from;
use emodet_content::story::COMPLETION_LINE;

pub fn execute(
    exercises_path: Option<PathBuf>,
    answers: Option<String>,
    save: bool,
    html: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let set = match exercises_path {
        Some(path) => parser::parse_exercise_set(&path)?,
        None => config.resolve_exercises()?,
    };
    anyhow::ensure!(!set.is_empty(), "exercise set '{}' has no exercises", set.id);

    let scripted: Option<Vec<SentimentLabel>> = answers
        .map(|s| {
            s.split(',')
                .map(|a| {
                    a.trim()
                        .parse::<SentimentLabel>()
                        .map_err(|e| anyhow::anyhow!(e))
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;
    if let Some(scripted) = &scripted {
        anyhow::ensure!(
            scripted.len() == set.len(),
            "expected {} answers, got {}",
            set.len(),
            scripted.len()
        );
    }

    let mut session = QuizSession::new(&set);
    let mut outcomes = Vec::with_capacity(set.len());
    let stdin = std::io::stdin();

    println!("{}", set.name);
    println!();

    while session.phase() != QuizPhase::Completed {
        let exercise = session
            .current_exercise()
            .context("quiz has no current exercise")?
            .clone();
        let number = session.index() + 1;

        println!("Question {number} of {}:", session.total());
        println!("  \"{}\"", exercise.prompt);

        let choice = match &scripted {
            Some(answers) => answers[session.index()],
            None => prompt_for_label(&stdin)?,
        };

        session.select_answer(choice);
        session.submit();

        let QuizPhase::ShowingResult { was_correct } = session.phase() else {
            anyhow::bail!("submit did not reveal a result");
        };

        if was_correct {
            println!("  Correct!");
        } else {
            println!("  Not quite right. The correct answer was {}.", exercise.answer);
        }
        if !exercise.explanation.is_empty() {
            println!("  {}", exercise.explanation);
        }
        println!();

        outcomes.push(QuestionOutcome {
            exercise_id: exercise.id.clone(),
            prompt: exercise.prompt.clone(),
            chosen: choice,
            correct: exercise.answer,
            was_correct,
        });

        session.next();
    }

    let summary = session.summary();
    println!("Congratulations, Emotion Detective!");
    println!(
        "You scored {} out of {}! That's {}% correct!",
        summary.score, summary.total, summary.percentage
    );
    println!();
    println!("Maya: {}", summary.tier.feedback());
    println!("Alex: {COMPLETION_LINE}");

    if save || html {
        let report = SessionReport::new(&set, outcomes, summary);
        let output_dir = output.unwrap_or(config.output_dir);
        save_report(&report, &output_dir, save, html)?;
    }

    Ok(())
}

fn save_report(report: &SessionReport, output_dir: &Path, save: bool, html: bool) -> Result<()> {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    if save {
        let path = output_dir.join(format!("session-{timestamp}.json"));
        report.save_json(&path)?;
        eprintln!("Session saved to: {}", path.display());
    }
    if html {
        let path = output_dir.join(format!("session-{timestamp}.html"));
        emodet_report::write_html_report(report, &path)?;
        eprintln!("HTML report: {}", path.display());
    }
    Ok(())
}

/// Prompt until the learner types a valid label.
fn prompt_for_label(stdin: &std::io::Stdin) -> Result<SentimentLabel> {
    loop {
        print!("  Your answer (positive/negative/neutral): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let bytes = stdin.lock().read_line(&mut line)?;
        anyhow::ensure!(bytes > 0, "stdin closed before the quiz finished");

        match line.trim().parse::<SentimentLabel>() {
            Ok(label) => return Ok(label),
            Err(_) => println!("  Please answer positive, negative, or neutral."),
        }
    }
}
