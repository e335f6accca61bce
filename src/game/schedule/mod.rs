use std::time::Duration;

#[cfg(test)]
mod tests;

/// Handle to a scheduled cue, used to cancel it before it fires.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Token(u64);

#[derive(Debug)]
struct Pending<E> {
    token: Token,
    time_elapsed: Duration,
    time_to_wait: Duration,
    cue: E,
}

/// Holds cues that become due after a delay. Time only moves forward through
/// `tick`, so the host's frame loop drives it.
#[derive(Debug)]
pub struct Scheduler<E> {
    pending: Vec<Pending<E>>,
    next_token: u64,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Scheduler {
            pending: Vec::new(),
            next_token: 0,
        }
    }

    pub fn schedule(&mut self, delay: Duration, cue: E) -> Token {
        let token = Token(self.next_token);
        self.next_token += 1;
        self.pending.push(Pending {
            token,
            time_elapsed: Duration::default(),
            time_to_wait: delay,
            cue,
        });
        token
    }

    /// Returns false if the cue already fired or was cancelled.
    pub fn cancel(&mut self, token: Token) -> bool {
        let count = self.pending.len();
        self.pending.retain(|p| p.token != token);
        self.pending.len() != count
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advances time and returns the cues that became due, earliest deadline first.
    pub fn tick(&mut self, dt: Duration) -> Vec<E> {
        for pending in self.pending.iter_mut() {
            pending.time_elapsed += dt;
        }

        let (mut due, waiting): (Vec<Pending<E>>, Vec<Pending<E>>) = self
            .pending
            .drain(..)
            .partition(|p| p.time_elapsed >= p.time_to_wait);
        self.pending = waiting;

        due.sort_by(|a, b| {
            let overdue_a = a.time_elapsed - a.time_to_wait;
            let overdue_b = b.time_elapsed - b.time_to_wait;
            overdue_b.cmp(&overdue_a).then(a.token.0.cmp(&b.token.0))
        });
        due.into_iter().map(|p| p.cue).collect()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Scheduler::new()
    }
}
