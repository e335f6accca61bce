use anyhow::*;

use crate::game::quiz::Outcome;

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// One answer button: the decorative image next to the number to pick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Choice {
    pub image: &'static str,
    pub answer: u32,
}

/// Modal prompt the player dismisses to move on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub button: String,
}

impl Alert {
    pub fn for_outcome(outcome: &Outcome, score: u32) -> Alert {
        let (title, button) = match outcome {
            Outcome::Correct { .. } => ("Correct!!!", "New question"),
            Outcome::Wrong => ("Wrong!!!", "Try again!"),
            Outcome::Won { .. } => ("You Win!", "Start new game"),
            Outcome::GameOver { .. } => ("Game Over", "Start new game"),
        };
        Alert {
            title: title.to_owned(),
            message: format!("Your score is: {}", score),
            button: button.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Alert(Alert),
    GameEnded,
    QuestionBegins(String, Vec<Choice>),
    ScoresRecap(u32, usize),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Effect {
    Confetti,
    Shake(usize),
}

pub trait GameOutput {
    fn say(&self, message: &Message);

    fn play_effect(&self, effect: Effect) -> Result<()>;

    fn stop_effects(&self);
}
