//! The `emodet validate` command.

use std::path::PathBuf;

use anyhow::Result;

use emodet_core::parser;

pub fn execute(exercises: Option<PathBuf>, lexicon: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        exercises.is_some() || lexicon.is_some(),
        "nothing to validate: pass --exercises and/or --lexicon"
    );

    let mut total_warnings = 0;

    if let Some(path) = exercises {
        let sets = if path.is_dir() {
            parser::load_exercise_directory(&path)?
        } else {
            vec![parser::parse_exercise_set(&path)?]
        };

        for set in &sets {
            println!("Exercise set: {} ({} exercises)", set.name, set.len());

            let warnings = parser::validate_exercise_set(set);
            for w in &warnings {
                let prefix = w
                    .exercise_id
                    .as_ref()
                    .map(|id| format!("  [{id}]"))
                    .unwrap_or_else(|| "  ".to_string());
                println!("{prefix} WARNING: {}", w.message);
            }
            total_warnings += warnings.len();
        }
    }

    if let Some(path) = lexicon {
        let lexicon = parser::parse_lexicon(&path)?;
        println!(
            "Lexicon: {} positive / {} negative words",
            lexicon.positive_words().len(),
            lexicon.negative_words().len()
        );
    }

    if total_warnings == 0 {
        println!("All content valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
