use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::ops::Index;

use crate::game::quiz::definition::{Question, QuestionPool};

#[cfg(test)]
mod tests;

/// Maximum number of options shown for a question.
pub const MAX_CHOICES: usize = 4;

/// The options offered for the question at `position`: that question plus the
/// ones following it in the pool, in random order. Near the end of the pool the
/// set holds fewer than `MAX_CHOICES` options.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ChoiceSet {
    question: Option<Question>,
    options: Vec<Question>,
}

impl ChoiceSet {
    pub fn sample<R: Rng + ?Sized>(pool: &QuestionPool, position: usize, rng: &mut R) -> ChoiceSet {
        let mut options = pool.window(position, MAX_CHOICES).to_vec();
        options.shuffle(rng);
        ChoiceSet {
            question: pool.get(position).copied(),
            options,
        }
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn options(&self) -> &[Question] {
        &self.options
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.options.get(index)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the option that is the current question itself.
    pub fn correct_index(&self) -> Option<usize> {
        let question = self.question?;
        self.options.iter().position(|option| *option == question)
    }

    /// Same options regardless of order.
    pub fn has_same_options(&self, other: &ChoiceSet) -> bool {
        let mut mine = self.options.clone();
        let mut theirs = other.options.clone();
        mine.sort_by_key(|q| (q.table, q.multiplier));
        theirs.sort_by_key(|q| (q.table, q.multiplier));
        mine == theirs
    }
}

impl Index<usize> for ChoiceSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.options[index]
    }
}
