use anyhow::*;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::game::quiz::settings::{QuestionCount, QuizSettings};


fn duration_from_millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How long the wrong answer shakes before the alert shows up.
    #[serde(deserialize_with = "duration_from_millis")]
    pub wrong_answer_delay: Duration,
    /// How long confetti falls before the alert shows up.
    #[serde(deserialize_with = "duration_from_millis")]
    pub confetti_duration: Duration,
    pub table: u32,
    pub question_count: QuestionCount,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            wrong_answer_delay: Duration::from_millis(600),
            confetti_duration: Duration::from_secs(2),
            table: 1,
            question_count: QuestionCount::default(),
        }
    }
}

impl Settings {
    pub fn open(source: &Path) -> Result<Settings> {
        let content = fs::read_to_string(source)
            .with_context(|| format!("Could not read settings file {:?}", source))?;
        Settings::parse(&content).with_context(|| format!("Invalid settings file {:?}", source))
    }

    pub fn parse(content: &str) -> Result<Settings> {
        let settings: Settings = ron::from_str(content)?;
        settings.quiz_settings()?;
        Ok(settings)
    }

    /// The table and question count preselected on the setup screen.
    pub fn quiz_settings(&self) -> Result<QuizSettings> {
        QuizSettings::new(self.table, self.question_count)
    }
}
