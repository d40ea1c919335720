use std::collections::HashMap;
use std::fmt;

/// The oracle's verdict for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LetterResult {
    /// The letter does not occur in the word, net of occurrences already explained by
    /// `Present` or `Correct` verdicts elsewhere in the guess.
    Absent,
    /// The letter occurs in the word, but not at the guessed slot.
    Present,
    /// The letter occurs in the word at exactly the guessed slot.
    Correct,
}

/// One letter's worth of oracle feedback, in the oracle's wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackItem {
    /// The zero-based position of the letter within the guess.
    pub slot: usize,
    /// The letter that was submitted at this slot. The oracle calls this field `guess`.
    #[cfg_attr(feature = "serde", serde(rename = "guess"))]
    pub letter: char,
    pub result: LetterResult,
}

impl FeedbackItem {
    pub fn new(slot: usize, letter: char, result: LetterResult) -> FeedbackItem {
        FeedbackItem {
            slot,
            letter,
            result,
        }
    }
}

/// Indicates that an error occurred while folding feedback into the tracker or while
/// synthesizing the next guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SolverError {
    /// A feedback item referenced a slot outside the word, or a letter outside `a..=z`.
    MalformedFeedback { slot: usize, letter: char },
    /// Feedback tried to flip a position that was already confirmed to a different letter.
    /// This points at an oracle-protocol misunderstanding rather than a normal game event.
    IntegrityViolation {
        slot: usize,
        expected: char,
        found: char,
    },
    /// The synthesizer could not find a novel candidate within the retry cap.
    GenerationExhausted,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::MalformedFeedback { slot, letter } => write!(
                f,
                "malformed feedback item: letter '{}' at slot {}",
                letter, slot
            ),
            SolverError::IntegrityViolation {
                slot,
                expected,
                found,
            } => write!(
                f,
                "slot {} was confirmed as '{}' but feedback reassigned it to '{}'",
                slot, expected, found
            ),
            SolverError::GenerationExhausted => {
                write!(f, "could not synthesize a novel guess within the retry cap")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Determines the feedback the oracle would give for `guess` against the given `objective`.
///
/// Duplicate letters are scored net of multiplicities: `Correct` slots claim their letter
/// first, and the remaining occurrences are handed out as `Present` from left to right.
pub fn get_feedback_for_guess(
    objective: &str,
    guess: &str,
) -> Result<Vec<FeedbackItem>, SolverError> {
    if objective.len() != guess.len() {
        panic!(
            "Objective ({}) must have the same length as the guess ({})",
            objective, guess
        );
    }
    for (slot, letter) in guess.char_indices().chain(objective.char_indices()) {
        if !letter.is_ascii_lowercase() {
            return Err(SolverError::MalformedFeedback { slot, letter });
        }
    }
    let objective: Vec<char> = objective.chars().collect();
    let letters: Vec<char> = guess.chars().collect();
    // Occurrences of each objective letter that are not matched in place.
    let mut unclaimed: HashMap<char, usize> = HashMap::new();
    for (index, letter) in objective.iter().enumerate() {
        if letters[index] != *letter {
            *unclaimed.entry(*letter).or_insert(0) += 1;
        }
    }
    Ok(letters
        .iter()
        .enumerate()
        .map(|(slot, &letter)| {
            let result = if objective[slot] == letter {
                LetterResult::Correct
            } else {
                match unclaimed.get_mut(&letter) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        LetterResult::Present
                    }
                    _ => LetterResult::Absent,
                }
            };
            FeedbackItem::new(slot, letter, result)
        })
        .collect())
}
