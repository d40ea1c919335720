use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_oracle_guesser::*;
use std::io;

mod oracle;

use oracle::OracleClient;

/// Plays a word-guessing game in reverse, where the computer guesses the word from
/// per-letter feedback.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Base URL of the remote guessing oracle.
    #[clap(long, default_value = "https://wordle.votee.dev:8000/random")]
    url: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a full game against the remote oracle.
    Oracle {
        /// Word to open with. Defaults to a random word of `--length` letters.
        #[clap(short, long)]
        word: Option<String>,
        /// Length of the hidden word, used when no starting word is given.
        #[clap(short, long, default_value_t = 5)]
        length: usize,
        /// Session seed forwarded to the oracle so the hidden word stays fixed across
        /// rounds. Defaults to a random seed.
        #[clap(short, long)]
        seed: Option<u64>,
        /// Safety cap on the number of rounds before giving up.
        #[clap(long, default_value_t = 512)]
        max_rounds: u32,
    },
    /// Play a game offline against a word of your choosing.
    Single { word: String },
    /// Run an interactive game where you score each guess by hand.
    Interactive {
        /// Length of the word you will think of.
        #[clap(short, long, default_value_t = 5)]
        length: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::from_entropy();

    match args.command {
        Command::Oracle {
            word,
            length,
            seed,
            max_rounds,
        } => {
            let seed = seed.unwrap_or_else(|| rng.gen_range(1..10_000));
            let client = OracleClient::new(&args.url, seed);
            println!("Session seed: {}", client.seed());
            let start = match word {
                Some(word) => word.to_lowercase(),
                None => {
                    let word = random_word(&mut rng, length);
                    println!("Generated initial word: {}", word);
                    word
                }
            };
            play_rounds(&mut rng, &start, max_rounds, |guess| client.check(guess))
        }
        Command::Single { word } => {
            let objective = word.to_lowercase();
            let start = random_word(&mut rng, objective.len());
            println!("Generated initial word: {}", start);
            play_rounds(&mut rng, &start, 4096, |guess| {
                Ok(get_feedback_for_guess(&objective, guess)?)
            })
        }
        Command::Interactive { length } => {
            println!(
                "Think of a {}-letter word. Press enter once you've chosen.",
                length
            );
            {
                let mut buffer = String::new();
                io::stdin().read_line(&mut buffer)?;
            }
            println!(
                "For each guess, enter the result of each letter as:\n\n\
                   * '.' = this letter is not in the word\n\
                   * 'y' = this letter is in the word, but not in this location\n\
                   * 'g' = this letter is in the word and in the right location.\n"
            );
            let start = random_word(&mut rng, length);
            play_rounds(&mut rng, &start, 512, read_feedback)
        }
    }
}

/// Runs the guess/feedback/update loop until the word is confirmed or the round cap is
/// hit. The feedback source is a closure so the same loop drives the remote oracle, the
/// offline scorer, and the interactive prompt.
fn play_rounds<R: Rng>(
    rng: &mut R,
    start_word: &str,
    max_rounds: u32,
    mut check: impl FnMut(&str) -> Result<Vec<FeedbackItem>>,
) -> Result<()> {
    let mut knowledge = Knowledge::new(start_word.len());
    let mut history = GuessHistory::new();
    let mut guess = start_word.to_string();
    history.record(&guess);

    for round in 1..=max_rounds {
        let feedback = check(&guess)?;
        let percentage = knowledge.update(&feedback)?;

        println!("\nGuess #{}: {}", round, guess);
        print_knowledge(&knowledge);
        println!("Correct Percentage: {:.1}%", percentage);

        if knowledge.is_solved() {
            println!(
                "\nWord \"{}\" is correct and guessed in {} guesses.",
                guess, round
            );
            return Ok(());
        }

        guess = synthesize_guess(rng, &knowledge, &history)?;
        debug!("round {}: synthesized next guess {}", round, guess);
        history.record(&guess);
    }
    bail!("could not confirm the word within {} rounds", max_rounds)
}

fn print_knowledge(knowledge: &Knowledge) {
    let mut absent: Vec<char> = knowledge.absent_letters().iter().copied().collect();
    absent.sort_unstable();
    let mut present: Vec<char> = knowledge.present_letters().keys().copied().collect();
    present.sort_unstable();
    let mut correct: Vec<(usize, char)> = knowledge
        .correct_letters()
        .iter()
        .map(|(&position, &letter)| (position, letter))
        .collect();
    correct.sort_unstable();

    println!("Absent: {}", join_letters(absent.into_iter()));
    println!("Present: {}", join_letters(present.into_iter()));
    println!(
        "Correct: {}",
        join_letters(correct.into_iter().map(|(_, letter)| letter))
    );
}

fn join_letters(letters: impl Iterator<Item = char>) -> String {
    letters
        .map(|letter| letter.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Prompts the user to score the given guess with one of '.', 'y', or 'g' per letter.
fn read_feedback(guess: &str) -> Result<Vec<FeedbackItem>> {
    loop {
        println!("I'm guessing: {}. How did I do?", guess);
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        let input = buffer.trim();

        if input.len() != guess.len() {
            println!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            );
            continue;
        }

        let mut feedback = Vec::with_capacity(guess.len());
        let mut valid = true;
        for (slot, (letter, mark)) in guess.chars().zip(input.chars()).enumerate() {
            let result = match mark {
                '.' => LetterResult::Absent,
                'y' => LetterResult::Present,
                'g' => LetterResult::Correct,
                _ => {
                    valid = false;
                    break;
                }
            };
            feedback.push(FeedbackItem::new(slot, letter, result));
        }
        if !valid {
            println!("Must enter only the letters '.', 'y', or 'g'. Try again.");
            continue;
        }
        return Ok(feedback);
    }
}
