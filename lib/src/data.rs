use std::collections::HashSet;

/// The ordered record of every guess submitted during one game session.
///
/// The synthesizer only needs membership checks, but insertion order is kept so the
/// orchestrator can display the guesses as they were played.
#[derive(Debug, Default, Clone)]
pub struct GuessHistory {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl GuessHistory {
    pub fn new() -> GuessHistory {
        GuessHistory::default()
    }

    /// Records a submitted guess. Returns `false` if the guess was already recorded.
    pub fn record(&mut self, guess: &str) -> bool {
        if !self.seen.insert(guess.to_string()) {
            return false;
        }
        self.ordered.push(guess.to_string());
        true
    }

    pub fn contains(&self, guess: &str) -> bool {
        self.seen.contains(guess)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates over the guesses in the order they were submitted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
