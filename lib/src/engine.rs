use crate::data::GuessHistory;
use crate::knowledge::Knowledge;
use crate::results::SolverError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Retry cap for the rejection sampling in [`synthesize_guess`]. The usable search space
/// dwarfs any real session's guess count, so hitting this cap means the constraints (or
/// the history) have pinned the space down to nothing new.
pub const MAX_SYNTHESIS_ATTEMPTS: usize = 10_000;

/// Generates a uniformly random lowercase word of the given length, used to open a
/// session before any feedback exists.
pub fn random_word<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Constructs the next candidate guess from the accumulated knowledge.
///
/// Confirmed letters are seeded first, then each letter known to be present is placed
/// into slots not ruled out for it until its minimum count is met (best effort when the
/// open slots run out), and the remaining slots are filled at random from the letters not
/// known to be absent, skipping letters ruled out at that slot. Candidates already in
/// `history` are rejected and the construction restarts with fresh randomness, up to
/// [`MAX_SYNTHESIS_ATTEMPTS`].
pub fn synthesize_guess<R: Rng>(
    rng: &mut R,
    knowledge: &Knowledge,
    history: &GuessHistory,
) -> Result<String, SolverError> {
    for _ in 0..MAX_SYNTHESIS_ATTEMPTS {
        let candidate = match build_candidate(rng, knowledge) {
            Some(word) => word,
            None => continue,
        };
        if !history.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(SolverError::GenerationExhausted)
}

/// One randomized construction attempt. Returns `None` when some slot has no letter left
/// to fill it with.
fn build_candidate<R: Rng>(rng: &mut R, knowledge: &Knowledge) -> Option<String> {
    let length = knowledge.word_length();
    let mut slots: Vec<Option<char>> = vec![None; length];
    for (&position, &letter) in knowledge.correct_letters() {
        slots[position] = Some(letter);
    }

    let available: Vec<char> = (b'a'..=b'z')
        .map(char::from)
        .filter(|letter| !knowledge.absent_letters().contains(letter))
        .collect();

    for (&letter, ruled_out) in knowledge.present_letters() {
        let mut open: Vec<usize> = (0..length)
            .filter(|position| !ruled_out.contains(position) && slots[*position].is_none())
            .collect();
        let placed = slots.iter().filter(|slot| **slot == Some(letter)).count();
        let needed = knowledge.min_counts().get(&letter).copied().unwrap_or(1) as usize;
        for _ in placed..needed {
            if open.is_empty() {
                // Not enough open slots to satisfy the minimum; carry on with what fits.
                break;
            }
            let index = rng.gen_range(0..open.len());
            slots[open.swap_remove(index)] = Some(letter);
        }
    }

    for position in 0..length {
        if slots[position].is_some() {
            continue;
        }
        let choices: Vec<char> = available
            .iter()
            .copied()
            .filter(|letter| {
                knowledge
                    .present_letters()
                    .get(letter)
                    .map_or(true, |ruled_out| !ruled_out.contains(&position))
            })
            .collect();
        slots[position] = Some(*choices.choose(rng)?);
    }

    Some(slots.into_iter().flatten().collect())
}
