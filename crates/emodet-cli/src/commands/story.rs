//! The `emodet story` command.

use anyhow::Result;

use emodet_content::story::{intro_steps, practice_steps, StoryStep};

pub fn execute(section: String) -> Result<()> {
    let sections: Vec<(&str, Vec<StoryStep>)> = match section.as_str() {
        "intro" => vec![("What is Sentiment Analysis?", intro_steps())],
        "practice" => vec![("Try Our Emotion Detective Tool", practice_steps())],
        "all" => vec![
            ("What is Sentiment Analysis?", intro_steps()),
            ("Try Our Emotion Detective Tool", practice_steps()),
        ],
        other => anyhow::bail!("unknown section: {other} (expected intro, practice, or all)"),
    };

    for (title, steps) in sections {
        println!("=== {title} ===");
        println!();
        for step in steps {
            println!("{}: {}", step.character, step.message);
            println!();
        }
    }

    Ok(())
}
