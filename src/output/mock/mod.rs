use anyhow::*;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use crate::output::{Effect, GameOutput, Message};

#[derive(Clone, Default)]
pub struct MockGameOutput {
    text_output: Arc<RwLock<Vec<Message>>>,
    effects: Arc<RwLock<HashSet<Effect>>>,
    effect_history: Arc<RwLock<Vec<Effect>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.text_output.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.text_output.read().iter().any(|m| m == message)
    }

    pub fn last_message(&self) -> Option<Message> {
        self.text_output.read().last().cloned()
    }

    pub fn is_playing_effect(&self, effect: Effect) -> bool {
        self.effects.read().contains(&effect)
    }

    pub fn is_playing_anything(&self) -> bool {
        !self.effects.read().is_empty()
    }

    pub fn played_effects(&self) -> Vec<Effect> {
        self.effect_history.read().clone()
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) {
        self.text_output.write().push(message.clone());
    }

    fn play_effect(&self, effect: Effect) -> Result<()> {
        self.effects.write().insert(effect);
        self.effect_history.write().push(effect);
        Ok(())
    }

    fn stop_effects(&self) {
        self.effects.write().clear();
    }
}
