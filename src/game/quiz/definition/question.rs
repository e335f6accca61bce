use serde::Serialize;
use std::fmt;

/// Highest multiplier paired with every table.
pub const MAX_MULTIPLIER: u32 = 12;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Question {
    pub table: u32,
    pub multiplier: u32,
}

impl Question {
    pub fn new(table: u32, multiplier: u32) -> Self {
        Question { table, multiplier }
    }

    pub fn answer(&self) -> u32 {
        self.table * self.multiplier
    }

    pub fn prompt(&self) -> String {
        format!("How much is {} x {}?", self.table, self.multiplier)
    }

    pub fn is_guess_correct(&self, guess: &Question) -> bool {
        guess.answer() == self.answer()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.prompt())
    }
}
