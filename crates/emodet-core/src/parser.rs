//! TOML content parsing.
//!
//! Loads exercise sets and lexicons from TOML files and directories, and
//! validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ContentError;
use crate::lexicon::Lexicon;
use crate::model::{Exercise, ExerciseSet, SentimentLabel};

/// Intermediate TOML structure for exercise set files.
#[derive(Debug, Deserialize)]
struct TomlExerciseFile {
    exercise_set: TomlExerciseSetHeader,
    #[serde(default)]
    exercises: Vec<TomlExercise>,
}

#[derive(Debug, Deserialize)]
struct TomlExerciseSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlExercise {
    id: String,
    prompt: String,
    answer: String,
    #[serde(default)]
    explanation: String,
}

/// Intermediate TOML structure for lexicon files.
#[derive(Debug, Deserialize)]
struct TomlLexiconFile {
    lexicon: TomlLexicon,
}

#[derive(Debug, Deserialize)]
struct TomlLexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Parse a single TOML file into an `ExerciseSet`.
pub fn parse_exercise_set(path: &Path) -> Result<ExerciseSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exercise set file: {}", path.display()))?;

    parse_exercise_set_str(&content, path)
}

/// Parse a TOML string into an `ExerciseSet` (useful for testing).
pub fn parse_exercise_set_str(content: &str, source_path: &Path) -> Result<ExerciseSet> {
    let parsed: TomlExerciseFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let exercises = parsed
        .exercises
        .into_iter()
        .map(|e| {
            let answer: SentimentLabel = e
                .answer
                .parse()
                .map_err(|_: String| ContentError::InvalidLabel(e.answer.clone()))
                .with_context(|| format!("exercise '{}'", e.id))?;
            Ok(Exercise {
                id: e.id,
                prompt: e.prompt,
                answer,
                explanation: e.explanation,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ExerciseSet {
        id: parsed.exercise_set.id,
        name: parsed.exercise_set.name,
        description: parsed.exercise_set.description,
        exercises,
    })
}

/// Parse a TOML file into a `Lexicon`.
pub fn parse_lexicon(path: &Path) -> Result<Lexicon> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read lexicon file: {}", path.display()))?;

    parse_lexicon_str(&content, path)
}

/// Parse a TOML string into a `Lexicon`.
pub fn parse_lexicon_str(content: &str, source_path: &Path) -> Result<Lexicon> {
    let parsed: TomlLexiconFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Lexicon::new(parsed.lexicon.positive, parsed.lexicon.negative)
        .with_context(|| format!("invalid lexicon: {}", source_path.display()))
}

/// Recursively load all `.toml` exercise set files from a directory.
pub fn load_exercise_directory(dir: &Path) -> Result<Vec<ExerciseSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_exercise_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_exercise_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from exercise set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The exercise ID (if applicable).
    pub exercise_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate an exercise set for common issues.
pub fn validate_exercise_set(set: &ExerciseSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.exercises.is_empty() {
        warnings.push(ValidationWarning {
            exercise_id: None,
            message: "exercise set has no exercises".into(),
        });
    }

    // Check for duplicate exercise IDs
    let mut seen_ids = std::collections::HashSet::new();
    for exercise in &set.exercises {
        if !seen_ids.insert(&exercise.id) {
            warnings.push(ValidationWarning {
                exercise_id: Some(exercise.id.clone()),
                message: format!("duplicate exercise ID: {}", exercise.id),
            });
        }
    }

    // Check for empty prompts
    for exercise in &set.exercises {
        if exercise.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                exercise_id: Some(exercise.id.clone()),
                message: "prompt is empty".into(),
            });
        }
    }

    // Warn about missing explanations; the quiz shows them after every answer
    for exercise in &set.exercises {
        if exercise.explanation.trim().is_empty() {
            warnings.push(ValidationWarning {
                exercise_id: Some(exercise.id.clone()),
                message: "no explanation provided".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[exercise_set]
id = "starter"
name = "Starter Exercises"
description = "Warm-up emotion detection"

[[exercises]]
id = "ex1"
prompt = "I got an A+ on my math test!"
answer = "positive"
explanation = "A great grade shows happiness and achievement."

[[exercises]]
id = "ex2"
prompt = "This movie is so boring."
answer = "negative"
explanation = "'Boring' shows the person doesn't like the movie."
"#;

    const VALID_LEXICON: &str = r#"
[lexicon]
positive = ["happy", "love", "great"]
negative = ["sad", "hate"]
"#;

    #[test]
    fn parse_valid_exercise_toml() {
        let set = parse_exercise_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.id, "starter");
        assert_eq!(set.name, "Starter Exercises");
        assert_eq!(set.exercises.len(), 2);
        assert_eq!(set.exercises[0].id, "ex1");
        assert_eq!(set.exercises[0].answer, SentimentLabel::Positive);
        assert_eq!(set.exercises[1].answer, SentimentLabel::Negative);
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[exercise_set]
id = "minimal"
name = "Minimal"

[[exercises]]
id = "e1"
prompt = "The weather today is cloudy."
answer = "neutral"
"#;
        let set = parse_exercise_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert!(set.description.is_empty());
        assert!(set.exercises[0].explanation.is_empty());
        assert_eq!(set.exercises[0].answer, SentimentLabel::Neutral);
    }

    #[test]
    fn parse_bad_label_fails_with_exercise_id() {
        let toml = r#"
[exercise_set]
id = "bad"
name = "Bad"

[[exercises]]
id = "e1"
prompt = "Whatever"
answer = "happy"
"#;
        let err = parse_exercise_set_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("e1"));
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::InvalidLabel(label)) if label == "happy"
        ));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_exercise_set_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn parse_valid_lexicon_toml() {
        let lexicon = parse_lexicon_str(VALID_LEXICON, &PathBuf::from("lex.toml")).unwrap();
        assert_eq!(lexicon.positive_words().len(), 3);
        assert!(lexicon.matches_negative("hateful"));
    }

    #[test]
    fn parse_conflicting_lexicon_fails() {
        let toml = r#"
[lexicon]
positive = ["fine"]
negative = ["fine"]
"#;
        let err = parse_lexicon_str(toml, &PathBuf::from("lex.toml")).unwrap_err();
        assert!(err.to_string().contains("invalid lexicon"));
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[exercise_set]
id = "dupes"
name = "Dupes"

[[exercises]]
id = "same"
prompt = "First"
answer = "positive"
explanation = "x"

[[exercises]]
id = "same"
prompt = "Second"
answer = "negative"
explanation = "y"
"#;
        let set = parse_exercise_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_exercise_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_empty_prompt_and_explanation() {
        let toml = r#"
[exercise_set]
id = "sparse"
name = "Sparse"

[[exercises]]
id = "e1"
prompt = "  "
answer = "neutral"
"#;
        let set = parse_exercise_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_exercise_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("prompt is empty")));
        assert!(warnings.iter().any(|w| w.message.contains("no explanation")));
    }

    #[test]
    fn validate_empty_set() {
        let set = ExerciseSet {
            id: "empty".into(),
            name: "Empty".into(),
            description: String::new(),
            exercises: vec![],
        };
        let warnings = validate_exercise_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("no exercises")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("starter.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();
        // A broken file is skipped with a warning, not a hard failure.
        std::fs::write(dir.path().join("broken.toml"), "not toml [").unwrap();

        let sets = load_exercise_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, "starter");
    }
}
