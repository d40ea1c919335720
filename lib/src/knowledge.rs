use crate::results::FeedbackItem;
use crate::results::LetterResult;
use crate::results::SolverError;
use std::collections::HashMap;
use std::collections::HashSet;

/// Accumulated knowledge about the hidden word, built up one feedback round at a time.
///
/// A `Knowledge` value is created empty for a fixed word length, mutated once per round by
/// [`Knowledge::update`], and discarded when the session ends. A position confirmed via
/// [`LetterResult::Correct`] never changes for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Knowledge {
    word_length: usize,
    /// Letters confirmed not to occur in the hidden word.
    absent_letters: HashSet<char>,
    /// For each letter known to be in the word, the slots it is known not to occupy.
    present_letters: HashMap<char, HashSet<usize>>,
    /// Confirmed final letter assignments, keyed by slot.
    correct_letters: HashMap<usize, char>,
    /// Lower bound on how many times each letter occurs in the hidden word.
    min_counts: HashMap<char, u8>,
}

impl Knowledge {
    /// Creates empty knowledge for a hidden word of the given length.
    pub fn new(word_length: usize) -> Knowledge {
        Knowledge {
            word_length,
            absent_letters: HashSet::new(),
            present_letters: HashMap::new(),
            correct_letters: HashMap::new(),
            min_counts: HashMap::new(),
        }
    }

    /// Folds one round of oracle feedback into the accumulated knowledge and returns the
    /// percentage of slots whose letter is now confirmed.
    ///
    /// Absent verdicts are classified only after the whole batch has been scanned for
    /// `Present`/`Correct` occurrences of the same letter, so the oracle's intra-round
    /// ordering cannot poison the absent set. A rejected round leaves the knowledge
    /// untouched.
    pub fn update(&mut self, feedback: &[FeedbackItem]) -> Result<f64, SolverError> {
        self.validate(feedback)?;

        let positive: HashSet<char> = feedback
            .iter()
            .filter(|item| item.result != LetterResult::Absent)
            .map(|item| item.letter)
            .collect();

        for item in feedback {
            match item.result {
                LetterResult::Absent => {
                    if !positive.contains(&item.letter)
                        && !self.has_positive_evidence(item.letter)
                    {
                        self.absent_letters.insert(item.letter);
                    }
                }
                LetterResult::Present => {
                    // The letter may have been marked absent by an earlier round that only
                    // saw surplus copies of it. Positive evidence wins.
                    self.absent_letters.remove(&item.letter);
                    self.present_letters
                        .entry(item.letter)
                        .or_default()
                        .insert(item.slot);
                    self.raise_min_count(item.letter, feedback);
                }
                LetterResult::Correct => {
                    self.absent_letters.remove(&item.letter);
                    self.correct_letters.insert(item.slot, item.letter);
                    self.raise_min_count(item.letter, feedback);
                }
            }
        }

        Ok(self.correct_letters.len() as f64 / self.word_length as f64 * 100.0)
    }

    /// The length of the hidden word.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letters confirmed not to occur in the hidden word.
    pub fn absent_letters(&self) -> &HashSet<char> {
        &self.absent_letters
    }

    /// For each letter known to be in the word, the slots it is known not to occupy.
    pub fn present_letters(&self) -> &HashMap<char, HashSet<usize>> {
        &self.present_letters
    }

    /// Confirmed final letter assignments, keyed by slot.
    pub fn correct_letters(&self) -> &HashMap<usize, char> {
        &self.correct_letters
    }

    /// Lower bound on how many times each letter occurs in the hidden word.
    pub fn min_counts(&self) -> &HashMap<char, u8> {
        &self.min_counts
    }

    /// Returns `true` once every slot has a confirmed letter.
    pub fn is_solved(&self) -> bool {
        self.correct_letters.len() == self.word_length
    }

    fn validate(&self, feedback: &[FeedbackItem]) -> Result<(), SolverError> {
        let mut batch_correct: HashMap<usize, char> = HashMap::new();
        for item in feedback {
            if item.slot >= self.word_length || !item.letter.is_ascii_lowercase() {
                return Err(SolverError::MalformedFeedback {
                    slot: item.slot,
                    letter: item.letter,
                });
            }
            if item.result == LetterResult::Correct {
                let confirmed = self
                    .correct_letters
                    .get(&item.slot)
                    .or_else(|| batch_correct.get(&item.slot));
                if let Some(&expected) = confirmed {
                    if expected != item.letter {
                        return Err(SolverError::IntegrityViolation {
                            slot: item.slot,
                            expected,
                            found: item.letter,
                        });
                    }
                }
                batch_correct.insert(item.slot, item.letter);
            }
        }
        Ok(())
    }

    fn has_positive_evidence(&self, letter: char) -> bool {
        self.present_letters.contains_key(&letter)
            || self.correct_letters.values().any(|&known| known == letter)
    }

    /// Raises the letter's minimum count to this round's number of `Present`/`Correct`
    /// occurrences, if that is higher than what previous rounds established.
    fn raise_min_count(&mut self, letter: char, feedback: &[FeedbackItem]) {
        let round_count = feedback
            .iter()
            .filter(|item| item.letter == letter && item.result != LetterResult::Absent)
            .count() as u8;
        let known = self.min_counts.entry(letter).or_insert(0);
        if round_count > *known {
            *known = round_count;
        }
    }
}
