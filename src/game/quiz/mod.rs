use anyhow::*;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use self::choices::*;
use self::definition::*;
use self::settings::*;

pub mod choices;
pub mod definition;
pub mod settings;


/// Classified result of a submitted answer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Outcome {
    Correct { score: u32 },
    Wrong,
    Won { score: u32 },
    GameOver { score: u32 },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        match self {
            Outcome::Correct { .. } | Outcome::Won { .. } => true,
            Outcome::Wrong | Outcome::GameOver { .. } => false,
        }
    }

    pub fn is_final(&self) -> bool {
        match self {
            Outcome::Won { .. } | Outcome::GameOver { .. } => true,
            Outcome::Correct { .. } | Outcome::Wrong => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Phase {
    NotStarted,
    Running,
    AwaitingAcknowledgement(Outcome),
    Finished(Outcome),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::NotStarted
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SessionState {
    pub table: u32,
    pub total_questions: usize,
    pub position: usize,
    pub score: u32,
    pub remaining: usize,
    pub phase: Phase,
}

impl SessionState {
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::AwaitingAcknowledgement(outcome) | Phase::Finished(outcome) => Some(outcome),
            Phase::NotStarted | Phase::Running => None,
        }
    }
}

pub struct Quiz {
    pool: QuestionPool,
    choices: ChoiceSet,
    state: SessionState,
    rng: StdRng,
}

impl Quiz {
    pub fn new() -> Quiz {
        Quiz::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Quiz {
        Quiz::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Quiz {
        Quiz {
            pool: QuestionPool::default(),
            choices: ChoiceSet::default(),
            state: SessionState::default(),
            rng,
        }
    }

    pub fn start(&mut self, settings: &QuizSettings) -> &SessionState {
        let pool = QuestionPool::generate(settings.table(), &mut self.rng);
        let total_questions = settings.question_count().resolve(pool.len());
        self.begin(settings.table(), pool, total_questions)
    }

    fn begin(&mut self, table: u32, pool: QuestionPool, total_questions: usize) -> &SessionState {
        self.pool = pool;
        self.state = SessionState {
            table,
            total_questions,
            position: 0,
            score: 0,
            remaining: total_questions,
            phase: Phase::Running,
        };
        self.choices = self.current_choice_set();
        debug!(
            "Starting quiz on table {} with {} questions out of {}",
            table,
            total_questions,
            self.pool.len()
        );
        &self.state
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pool(&self) -> &QuestionPool {
        &self.pool
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state.phase {
            Phase::NotStarted => None,
            _ => self.pool.get(self.state.position),
        }
    }

    /// The choices on display for the current question.
    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    /// Draws a fresh, independently ordered choice set for the current position.
    pub fn current_choice_set(&mut self) -> ChoiceSet {
        ChoiceSet::sample(&self.pool, self.state.position, &mut self.rng)
    }

    pub fn submit_answer(&mut self, choice_index: usize) -> Result<Outcome> {
        if self.state.phase != Phase::Running {
            return Err(anyhow!("There is no question awaiting an answer"));
        }
        let question = *self
            .pool
            .get(self.state.position)
            .context("Current question is out of the pool")?;
        let guess = self
            .choices
            .get(choice_index)
            .with_context(|| format!("There is no choice #{}", choice_index))?;

        let outcome = if question.is_guess_correct(guess) {
            self.state.score += 1;
            self.state.remaining -= 1;
            if self.state.remaining == 0 {
                let outcome = Outcome::Won {
                    score: self.state.score,
                };
                self.set_phase(Phase::Finished(outcome));
                outcome
            } else {
                let outcome = Outcome::Correct {
                    score: self.state.score,
                };
                self.set_phase(Phase::AwaitingAcknowledgement(outcome));
                outcome
            }
        } else {
            // Wrong answers only count against the remaining questions once acknowledged.
            self.set_phase(Phase::AwaitingAcknowledgement(Outcome::Wrong));
            Outcome::Wrong
        };

        Ok(outcome)
    }

    pub fn acknowledge(&mut self) -> Result<&SessionState> {
        let outcome = match self.state.phase {
            Phase::AwaitingAcknowledgement(outcome) => outcome,
            _ => return Err(anyhow!("There is no outcome to acknowledge")),
        };

        match outcome {
            Outcome::Correct { .. } => self.advance(),
            Outcome::Wrong => {
                self.state.remaining = self.state.remaining.saturating_sub(1);
                if self.state.remaining == 0 {
                    let game_over = Outcome::GameOver {
                        score: self.state.score,
                    };
                    self.set_phase(Phase::Finished(game_over));
                } else {
                    self.advance();
                }
            }
            Outcome::Won { .. } | Outcome::GameOver { .. } => {
                unreachable!("final outcomes are never awaiting acknowledgement")
            }
        }

        Ok(&self.state)
    }

    /// Abandons the session, whatever it was doing.
    pub fn end(&mut self) {
        self.pool = QuestionPool::default();
        self.choices = ChoiceSet::default();
        self.state = SessionState::default();
        debug!("Quiz ended");
    }

    fn advance(&mut self) {
        self.state.position += 1;
        self.choices = self.current_choice_set();
        self.set_phase(Phase::Running);
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("Entering quiz phase: {:?}", phase);
        self.state.phase = phase;
    }

    #[cfg(test)]
    fn start_with_pool(&mut self, table: u32, pool: QuestionPool, total_questions: usize) {
        self.begin(table, pool, total_questions);
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Quiz::new()
    }
}
