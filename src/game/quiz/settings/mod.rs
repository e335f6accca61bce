use anyhow::*;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;


pub const MIN_TABLE: u32 = 1;
pub const MAX_TABLE: u32 = 12;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionCount {
    Fixed(usize),
    All,
}

/// The counts offered on the setup screen.
pub const QUESTION_COUNT_OPTIONS: [QuestionCount; 4] = [
    QuestionCount::Fixed(5),
    QuestionCount::Fixed(10),
    QuestionCount::Fixed(20),
    QuestionCount::All,
];

impl QuestionCount {
    /// Number of questions to ask out of a pool of `pool_size`.
    pub fn resolve(&self, pool_size: usize) -> usize {
        match *self {
            QuestionCount::Fixed(count) if count <= pool_size => count,
            _ => pool_size,
        }
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        QuestionCount::Fixed(5)
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuestionCount::Fixed(count) => write!(f, "{}", count),
            QuestionCount::All => write!(f, "All"),
        }
    }
}

impl FromStr for QuestionCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(QuestionCount::All);
        }
        let count: usize = s
            .parse()
            .with_context(|| format!("Invalid question count: {:?}", s))?;
        if count == 0 {
            return Err(anyhow!("Question count must be at least 1"));
        }
        Ok(QuestionCount::Fixed(count))
    }
}

impl<'de> Deserialize<'de> for QuestionCount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&raw), &"a positive number or All")
        })
    }
}

impl Serialize for QuestionCount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// What the player picked before starting a quiz.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct QuizSettings {
    table: u32,
    question_count: QuestionCount,
}

impl QuizSettings {
    pub fn new(table: u32, question_count: QuestionCount) -> Result<QuizSettings> {
        if table < MIN_TABLE || table > MAX_TABLE {
            return Err(anyhow!(
                "Multiplication table must be between {} and {}",
                MIN_TABLE,
                MAX_TABLE
            ));
        }
        if question_count == QuestionCount::Fixed(0) {
            return Err(anyhow!("Question count must be at least 1"));
        }
        Ok(QuizSettings {
            table,
            question_count,
        })
    }

    pub fn table(&self) -> u32 {
        self.table
    }

    pub fn question_count(&self) -> QuestionCount {
        self.question_count
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            table: MIN_TABLE,
            question_count: QuestionCount::default(),
        }
    }
}
