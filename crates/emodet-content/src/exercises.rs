//! The built-in exercise set.

use emodet_core::model::{Exercise, ExerciseSet, SentimentLabel};

/// The five stock exercises the academy ships with.
pub fn builtin_exercises() -> ExerciseSet {
    ExerciseSet {
        id: "builtin".into(),
        name: "Emotion Detective Challenge".into(),
        description: "Spot the emotion in each sentence.".into(),
        exercises: vec![
            Exercise {
                id: "ex1".into(),
                prompt: "I got an A+ on my math test!".into(),
                answer: SentimentLabel::Positive,
                explanation: "Words like 'A+' (a great grade) show happiness and achievement, \
                              making this positive!"
                    .into(),
            },
            Exercise {
                id: "ex2".into(),
                prompt: "This movie is so boring.".into(),
                answer: SentimentLabel::Negative,
                explanation: "'Boring' is a negative word that shows the person doesn't like \
                              the movie."
                    .into(),
            },
            Exercise {
                id: "ex3".into(),
                prompt: "The weather today is cloudy.".into(),
                answer: SentimentLabel::Neutral,
                explanation: "This is just stating a fact about weather without showing any \
                              emotions - it's neutral."
                    .into(),
            },
            Exercise {
                id: "ex4".into(),
                prompt: "I can't wait for summer vacation!".into(),
                answer: SentimentLabel::Positive,
                explanation: "'Can't wait' shows excitement and anticipation, which are \
                              positive emotions!"
                    .into(),
            },
            Exercise {
                id: "ex5".into(),
                prompt: "My phone battery died during the game.".into(),
                answer: SentimentLabel::Negative,
                explanation: "While not using strong negative words, this describes an \
                              unfortunate situation that would be frustrating."
                    .into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emodet_core::parser::validate_exercise_set;

    #[test]
    fn five_exercises_with_unique_ids() {
        let set = builtin_exercises();
        assert_eq!(set.len(), 5);
        let warnings = validate_exercise_set(&set);
        assert!(warnings.is_empty(), "built-in set has warnings: {warnings:?}");
    }

    #[test]
    fn answer_distribution() {
        let set = builtin_exercises();
        let count = |label| {
            set.exercises
                .iter()
                .filter(|e| e.answer == label)
                .count()
        };
        assert_eq!(count(SentimentLabel::Positive), 2);
        assert_eq!(count(SentimentLabel::Negative), 2);
        assert_eq!(count(SentimentLabel::Neutral), 1);
    }
}
