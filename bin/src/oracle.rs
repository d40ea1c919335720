use anyhow::{ensure, Context, Result};
use log::debug;
use rs_oracle_guesser::FeedbackItem;

/// Blocking client for the remote guessing oracle.
///
/// One GET per round with `guess`, `size`, and `seed` query parameters. The seed is
/// fixed for the whole session so the oracle scores every round against the same hidden
/// word. Failures are terminal for the round; retry policy belongs to the caller.
pub struct OracleClient {
    http: reqwest::blocking::Client,
    url: String,
    seed: u64,
}

impl OracleClient {
    pub fn new(url: &str, seed: u64) -> OracleClient {
        OracleClient {
            http: reqwest::blocking::Client::new(),
            url: url.to_string(),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Submits a guess and returns the oracle's per-letter feedback.
    pub fn check(&self, guess: &str) -> Result<Vec<FeedbackItem>> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("guess", guess)])
            .query(&[("size", guess.len() as u64), ("seed", self.seed)])
            .send()
            .with_context(|| format!("oracle unavailable at {}", self.url))?
            .error_for_status()
            .context("oracle rejected the guess request")?;
        let feedback: Vec<FeedbackItem> = response
            .json()
            .context("oracle returned a malformed feedback payload")?;
        ensure!(
            feedback.len() == guess.len(),
            "oracle returned {} feedback items for a {}-letter guess",
            feedback.len(),
            guess.len()
        );
        debug!("oracle feedback for {}: {:?}", guess, feedback);
        Ok(feedback)
    }
}
