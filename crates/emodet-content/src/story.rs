//! The guided story script.
//!
//! Maya is the AI guide, Alex the student. The intro explains what sentiment
//! analysis is; the practice dialogue hands over to the analyzer tool; the
//! completion dialogue closes the quiz.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who is speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    Maya,
    Alex,
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Character::Maya => write!(f, "Maya"),
            Character::Alex => write!(f, "Alex"),
        }
    }
}

/// One chat bubble in the story.
#[derive(Debug, Clone, Serialize)]
pub struct StoryStep {
    pub character: Character,
    pub message: &'static str,
}

const fn step(character: Character, message: &'static str) -> StoryStep {
    StoryStep { character, message }
}

/// The intro dialogue: what is sentiment analysis?
pub fn intro_steps() -> Vec<StoryStep> {
    vec![
        step(
            Character::Alex,
            "Hi! I'm Alex, and I just joined the Emotion Detective Academy! But I'm \
             confused... how can computers understand emotions in text?",
        ),
        step(
            Character::Maya,
            "Hey Alex! I'm Maya, your AI assistant. Great question! Just like how detectives \
             solve mysteries by looking for clues, computers can detect emotions by looking \
             for special clues in text!",
        ),
        step(Character::Alex, "Clues in text? What kind of clues?"),
        step(
            Character::Maya,
            "Think about it - when you read 'I love ice cream!' vs 'I hate broccoli!', how \
             do you know one is happy and one is not? The words 'love' and 'hate' are \
             emotion clues!",
        ),
        step(
            Character::Alex,
            "Oh! So computers look for happy words and sad words? That's actually pretty \
             smart!",
        ),
        step(
            Character::Maya,
            "Exactly! This is called Sentiment Analysis. It's like being a detective, but \
             instead of solving crimes, we're solving emotions! Ready to become an Emotion \
             Detective?",
        ),
    ]
}

/// The practice dialogue: introducing the analyzer tool.
pub fn practice_steps() -> Vec<StoryStep> {
    vec![
        step(
            Character::Maya,
            "Great job learning about emotion clues! Now let's practice. I'll show you our \
             Emotion Detective Tool - it can analyze any text and tell us if it's positive, \
             negative, or neutral.",
        ),
        step(
            Character::Alex,
            "This is so cool! So I can type anything and it will detect the emotions?",
        ),
        step(
            Character::Maya,
            "Exactly! Try typing different sentences and see what emotions our detective \
             tool finds. Remember - positive means happy/good, negative means sad/bad, and \
             neutral means in-between!",
        ),
    ]
}

/// Alex's closing line after the quiz, regardless of score.
pub const COMPLETION_LINE: &str = "This was so much fun! I never knew computers could be such \
     good emotion detectives. Now I understand how sentiment analysis works!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_has_six_steps_starting_with_alex() {
        let steps = intro_steps();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].character, Character::Alex);
        assert_eq!(steps[5].character, Character::Maya);
    }

    #[test]
    fn practice_has_three_steps() {
        let steps = practice_steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].character, Character::Maya);
    }

    #[test]
    fn no_blank_messages() {
        for s in intro_steps().iter().chain(practice_steps().iter()) {
            assert!(!s.message.trim().is_empty());
        }
        assert!(!COMPLETION_LINE.trim().is_empty());
    }
}
