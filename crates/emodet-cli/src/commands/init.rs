//! The `emodet init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create emodet.toml
    if std::path::Path::new("emodet.toml").exists() {
        println!("emodet.toml already exists, skipping.");
    } else {
        std::fs::write("emodet.toml", SAMPLE_CONFIG)?;
        println!("Created emodet.toml");
    }

    // Create example exercise set
    std::fs::create_dir_all("exercise-sets")?;
    let example_path = std::path::Path::new("exercise-sets/starter.toml");
    if example_path.exists() {
        println!("exercise-sets/starter.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, STARTER_EXERCISES)?;
        println!("Created exercise-sets/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: emodet story");
    println!("  2. Run: emodet analyze --text \"I love sunny days!\"");
    println!("  3. Run: emodet quiz --exercises exercise-sets/starter.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# emodet configuration

# Thinking delay before an analysis result, in milliseconds.
delay_ms = 1500

# Where saved quiz session reports go.
output_dir = "./emodet-results"

# Uncomment to use your own content files:
# lexicon = "./lexicon.toml"
# exercises = "./exercise-sets/starter.toml"
"#;

const STARTER_EXERCISES: &str = r#"[exercise_set]
id = "starter"
name = "Starter Exercises"
description = "A small warm-up set for new emotion detectives"

[[exercises]]
id = "ice-cream"
prompt = "I love ice cream so much, it's the best!"
answer = "positive"
explanation = "'Love' and 'best' are strong positive emotion clues."

[[exercises]]
id = "rainy-day"
prompt = "The picnic was cancelled and everyone was upset."
answer = "negative"
explanation = "'Cancelled' describes a disappointment and 'upset' is a negative emotion word."

[[exercises]]
id = "bus-schedule"
prompt = "The bus arrives at eight in the morning."
answer = "neutral"
explanation = "This just states a fact with no emotion words at all."
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use emodet_core::parser::parse_exercise_set_str;
    use std::path::PathBuf;

    #[test]
    fn starter_exercises_parse_cleanly() {
        let set = parse_exercise_set_str(STARTER_EXERCISES, &PathBuf::from("starter.toml")).unwrap();
        assert_eq!(set.id, "starter");
        assert_eq!(set.len(), 3);
        let warnings = emodet_core::parser::validate_exercise_set(&set);
        assert!(warnings.is_empty(), "starter set has warnings: {warnings:?}");
    }

    #[test]
    fn sample_config_parses_cleanly() {
        let config: emodet_content::EmodetConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.delay_ms, 1500);
    }
}
