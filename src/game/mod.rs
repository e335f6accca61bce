use anyhow::*;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

pub mod assets;
pub mod quiz;
pub mod schedule;
pub mod settings;


use crate::game::quiz::settings::QuizSettings;
use crate::game::quiz::{Outcome, Phase, Quiz};
use crate::game::schedule::Scheduler;
use crate::game::settings::Settings;
use crate::output::{Alert, Choice, Effect, GameOutput, Message};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cue {
    Reveal(Outcome),
}

/// Drives a quiz on behalf of the screen: turns taps into quiz commands, paces
/// the feedback effects and decides when alerts appear.
pub struct Game<O: GameOutput> {
    settings: Settings,
    selection: QuizSettings,
    quiz: Quiz,
    scheduler: Scheduler<Cue>,
    alert: Option<Alert>,
    rng: StdRng,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(settings: Settings, output: O) -> Result<Game<O>> {
        Game::build(settings, output, Quiz::new(), StdRng::from_entropy())
    }

    pub fn with_seed(settings: Settings, output: O, seed: u64) -> Result<Game<O>> {
        Game::build(
            settings,
            output,
            Quiz::with_seed(seed),
            StdRng::seed_from_u64(seed),
        )
    }

    fn build(settings: Settings, output: O, quiz: Quiz, rng: StdRng) -> Result<Game<O>> {
        let selection = settings.quiz_settings()?;
        Ok(Game {
            settings,
            selection,
            quiz,
            scheduler: Scheduler::new(),
            alert: None,
            rng,
            output,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn selection(&self) -> QuizSettings {
        self.selection
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        self.quiz.state().phase != Phase::NotStarted
    }

    /// True while feedback effects play before an alert.
    pub fn is_revealing(&self) -> bool {
        !self.scheduler.is_idle()
    }

    pub fn begin(&mut self, selection: QuizSettings) {
        self.scheduler.cancel_all();
        self.alert = None;
        self.output.stop_effects();
        self.selection = selection;
        self.quiz.start(&selection);
        self.announce_question();
    }

    pub fn answer(&mut self, choice_index: usize) -> Result<Outcome> {
        if self.is_revealing() || self.alert.is_some() {
            return Err(anyhow!("Wait for the current answer to be revealed"));
        }

        let outcome = self.quiz.submit_answer(choice_index)?;
        debug!("Answer #{} is {:?}", choice_index, outcome);

        let (effect, delay) = if outcome.is_correct() {
            (Effect::Confetti, self.settings.confetti_duration)
        } else {
            (Effect::Shake(choice_index), self.settings.wrong_answer_delay)
        };
        self.output.play_effect(effect).ok();
        self.scheduler.schedule(delay, Cue::Reveal(outcome));

        Ok(outcome)
    }

    pub fn tick(&mut self, dt: Duration) {
        for cue in self.scheduler.tick(dt) {
            match cue {
                Cue::Reveal(outcome) => {
                    self.output.stop_effects();
                    self.show_alert(&outcome);
                }
            }
        }
    }

    pub fn acknowledge(&mut self) -> Result<()> {
        if self.alert.is_none() {
            return Err(anyhow!("There is no alert to dismiss"));
        }

        let phase = self.quiz.state().phase;
        match phase {
            Phase::Finished(outcome) => {
                debug!("Quiz finished with {:?}, starting over", outcome);
                self.begin(self.selection);
            }
            Phase::AwaitingAcknowledgement(_) => {
                self.alert = None;
                let phase = self.quiz.acknowledge()?.phase;
                match phase {
                    Phase::Finished(outcome) => self.show_alert(&outcome),
                    _ => self.announce_question(),
                }
            }
            Phase::NotStarted | Phase::Running => {
                return Err(anyhow!("There is no outcome behind this alert"));
            }
        }

        Ok(())
    }

    /// Abandons the current quiz and returns to the setup screen.
    pub fn end(&mut self) {
        self.scheduler.cancel_all();
        self.alert = None;
        self.output.stop_effects();
        if self.is_running() {
            self.quiz.end();
            self.output.say(&Message::GameEnded);
        }
    }

    fn show_alert(&mut self, outcome: &Outcome) {
        let alert = Alert::for_outcome(outcome, self.quiz.state().score);
        self.output.say(&Message::Alert(alert.clone()));
        self.alert = Some(alert);
    }

    fn announce_question(&mut self) {
        let prompt = match self.quiz.current_question() {
            Some(question) => question.prompt(),
            None => return,
        };
        let options = self.quiz.choices().options();
        let images = assets::pick_images(options.len(), &mut self.rng);
        let choices = options
            .iter()
            .zip(images)
            .map(|(option, image)| Choice {
                image,
                answer: option.answer(),
            })
            .collect();
        self.output.say(&Message::QuestionBegins(prompt, choices));

        let state = self.quiz.state();
        self.output
            .say(&Message::ScoresRecap(state.score, state.remaining));
    }
}
