//! Text-mode matching game
//!
//! Deals rounds from the store's active words and reads moves like `2c`
//! (word 2 onto translation c) from stdin.

use crate::config::DataPaths;
use crate::game::{GameStats, Round, WordHistory, select_words_for_round};
use crate::output::{print_board, print_move_outcome, print_round_complete};
use crate::persistence::{UserDataStore, read_json, write_json_atomic};
use crate::store::WordStore;
use anyhow::{Context, Result};
use chrono::Local;
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Parse a move such as `1a`, `1 a` or `1-A` into zero-based indices
#[must_use]
pub fn parse_move(input: &str) -> Option<(usize, usize)> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let split = compact.find(|c: char| !c.is_ascii_digit())?;
    let (number, letter) = compact.split_at(split);

    let word: usize = number.parse().ok()?;
    let mut letters = letter.chars();
    let slot_char = letters.next()?.to_ascii_lowercase();
    if letters.next().is_some() || !slot_char.is_ascii_lowercase() || word == 0 {
        return None;
    }

    Some((word - 1, usize::from(slot_char as u8 - b'a')))
}

/// Load stats, starting fresh if they are missing or unreadable
#[must_use]
pub fn load_stats(path: &Path) -> GameStats {
    match read_json(path) {
        Ok(stats) => stats.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "could not load game stats, starting fresh");
            GameStats::default()
        }
    }
}

/// Load the last round's words, if any were saved
#[must_use]
pub fn load_history(path: &Path) -> Option<WordHistory> {
    read_json(path).unwrap_or_else(|e| {
        warn!(error = %e, "could not load word history, starting fresh");
        None
    })
}

/// Run the interactive game until the player quits
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play<P: UserDataStore>(store: &WordStore<P>, paths: &DataPaths) -> Result<()> {
    let words = store.merged_active_words();
    if words.is_empty() {
        println!("\nNo active words to play with. Add or restore some first.\n");
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Vocabulary Matching Game                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Match each German word to its English translation.");
    println!("Enter moves like '2c' (word 2 → translation c).");
    println!("  +10 for a correct match, -5 for a wrong one.");
    println!("Commands: 'new' for a new round, 'quit' to exit\n");

    let stats_path = paths.stats();
    let history_path = paths.history();
    let mut stats = load_stats(&stats_path);
    let mut history =
        load_history(&history_path).unwrap_or_else(|| WordHistory::new(Local::now().date_naive()));
    let mut rng = rand::rng();

    loop {
        let today = Local::now().date_naive();
        let selected = select_words_for_round(&words, history.previous_round(today), &mut rng);
        history.record_round(today, &selected);
        if let Err(e) = write_json_atomic(&history_path, &history) {
            warn!(error = %e, "could not save word history");
        }
        let mut round = Round::deal(selected, &mut rng);

        loop {
            print_board(&round);

            let input = get_user_input("Your move")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Bis bald!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 New round!\n");
                    break;
                }
                _ => {}
            }

            let Some((word, slot)) = parse_move(&input) else {
                println!("❌ Invalid move! Use a word number and a letter, like '2c'\n");
                continue;
            };

            match round.try_match(word, slot) {
                Ok(outcome) => print_move_outcome(&round, word, outcome),
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            }

            if round.is_complete() {
                let result = round.result();
                stats.record(&result);
                if let Err(e) = write_json_atomic(&stats_path, &stats) {
                    warn!(error = %e, "could not save game stats");
                }
                print_round_complete(&result, &stats);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" | "" => {
                        println!("\n🔄 New round!\n");
                        break;
                    }
                    _ => {
                        println!("\n👋 Bis bald!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;

    Ok(input.trim().to_string())
}
