use anyhow::*;
use itertools::Itertools;

use crate::output::{Effect, GameOutput, Message};

/// Prints the game to standard output, one message per block of lines.
#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn format(message: &Message) -> String {
        match message {
            Message::QuestionBegins(prompt, choices) => {
                let choices = choices
                    .iter()
                    .enumerate()
                    .map(|(index, choice)| {
                        format!("  [{}] {:>3}   ({})", index + 1, choice.answer, choice.image)
                    })
                    .join("\n");
                format!("\n{}\n{}", prompt, choices)
            }
            Message::ScoresRecap(score, remaining) => format!(
                "Total score: {}   Questions remaining: {}",
                score, remaining
            ),
            Message::Alert(alert) => format!(
                "\n== {} ==\n{}\n(press enter: {})",
                alert.title, alert.message, alert.button
            ),
            Message::GameEnded => "Game ended.".to_owned(),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", TerminalOutput::format(message));
    }

    fn play_effect(&self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Confetti => println!("* * * confetti * * *"),
            Effect::Shake(index) => println!("~ [{}] shakes ~", index + 1),
        }
        Ok(())
    }

    fn stop_effects(&self) {}
}
