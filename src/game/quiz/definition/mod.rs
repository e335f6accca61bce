use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Index;

pub mod question;

pub use question::{Question, MAX_MULTIPLIER};


/// Every question of a table, in the order they will be asked.
#[derive(Clone, Debug, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    pub fn generate<R: Rng + ?Sized>(table: u32, rng: &mut R) -> QuestionPool {
        let mut questions: Vec<Question> = iproduct!(1..=table, 1..=MAX_MULTIPLIER)
            .map(|(i, j)| Question::new(i, j))
            .collect();
        questions.shuffle(rng);
        QuestionPool { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    /// Up to `size` questions starting at `position`, clipped at the end of the pool.
    pub fn window(&self, position: usize, size: usize) -> &[Question] {
        let start = position.min(self.questions.len());
        let end = position.saturating_add(size).min(self.questions.len());
        &self.questions[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Index<usize> for QuestionPool {
    type Output = Question;

    fn index(&self, position: usize) -> &Question {
        &self.questions[position]
    }
}

impl From<Vec<Question>> for QuestionPool {
    fn from(questions: Vec<Question>) -> Self {
        QuestionPool { questions }
    }
}
