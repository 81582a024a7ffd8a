//! Display functions for command results

use super::formatters::{create_progress_bar, slot_label, status_label};
use crate::commands::ConvertResult;
use crate::game::{GameStats, MATCH_POINTS, MISS_PENALTY, MatchOutcome, Round, RoundResult, format_time};
use crate::persistence::PersistenceError;
use crate::store::{ImportSummary, WordView};
use colored::Colorize;

/// Print a management listing
pub fn print_word_table(title: &str, words: &[WordView]) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} {}",
        title.bright_cyan().bold(),
        format!("({} words)", words.len()).bright_black()
    );
    println!("{}", "═".repeat(70).cyan());

    if words.is_empty() {
        println!("\n   No words match.\n");
        return;
    }

    let source_width = words
        .iter()
        .map(|w| w.source_text.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    println!();
    for word in words {
        let status = status_label(word);
        let line = format!(
            "   {:<source_width$}  {}",
            word.source_text, word.target_text
        );
        let line = if word.is_deleted {
            line.bright_black().strikethrough()
        } else {
            line.normal()
        };

        print!("{line}  {}", format!("[{}]", word.origin).bright_black());
        if !status.is_empty() {
            print!(" {}", status.yellow());
        }
        if word.is_edited {
            print!(
                " {}",
                format!("(was {} → {})", word.original_source_text, word.original_target_text)
                    .bright_black()
            );
        }
        println!();
    }
    println!();
}

/// Print the result of an import
pub fn print_import_summary(summary: &ImportSummary) {
    println!("\n{}", "✅ Import complete!".green().bold());
    println!("   Added:   {}", summary.added.to_string().bright_yellow());
    println!("   Skipped: {} (already exist)", summary.skipped);
    if summary.malformed > 0 {
        println!(
            "   {}",
            format!("{} entries were missing german or english", summary.malformed).yellow()
        );
    }
    println!();
}

/// Print the result of a word list conversion
pub fn print_convert_result(result: &ConvertResult) {
    println!("📝 Found {} word pairs", result.found);

    if !result.warnings.is_empty() {
        println!("{}", "⚠️  Validation warnings:".yellow());
        for warning in &result.warnings {
            println!("  {warning}");
        }
    }

    println!(
        "{}",
        format!(
            "✅ Generated {} with {} word pairs",
            result.output.display(),
            result.written
        )
        .green()
    );
}

/// Warn that the last change only lives in memory
pub fn print_save_warning(error: &PersistenceError) {
    eprintln!(
        "{} {error}",
        "⚠️  Change applied for this session only; saving failed:".yellow()
    );
}

/// Print both columns of the board
pub fn print_board(round: &Round) {
    let total = round.words().len();
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Score: {}   Matched: [{}] {}/{}   Time: {}",
        round.score().to_string().bright_yellow().bold(),
        create_progress_bar(round.matched(), total, 10).green(),
        round.matched(),
        total,
        format_time(Some(round.elapsed().as_secs()))
    );
    println!("{}", "─".repeat(60).cyan());

    let source_width = round
        .words()
        .iter()
        .map(|w| w.source_text.chars().count())
        .max()
        .unwrap_or(0);

    for row in 0..total.max(round.slots().len()) {
        let left = round.words().get(row).map_or_else(String::new, |w| {
            if round.is_word_matched(row) {
                format!("{:>2}. {:<source_width$}", row + 1, "✓")
            } else {
                format!("{:>2}. {:<source_width$}", row + 1, w.source_text)
            }
        });

        let right = round.slots().get(row).map_or_else(String::new, |slot| {
            if round.is_slot_filled(row) {
                format!("{}) {}", slot_label(row), slot).green().to_string()
            } else {
                format!("{}) {}", slot_label(row), slot)
            }
        });

        println!("  {left}    {right}");
    }
    println!();
}

/// Report a single move
pub fn print_move_outcome(round: &Round, word: usize, outcome: MatchOutcome) {
    let entry = &round.words()[word];
    match outcome {
        MatchOutcome::Correct => println!(
            "{}\n",
            format!(
                "✓ {} → {}  (+{MATCH_POINTS})",
                entry.source_text, entry.target_text
            )
            .green()
        ),
        MatchOutcome::Incorrect => {
            println!("{}\n", format!("✗ Not quite  (-{MISS_PENALTY})").red());
        }
    }
}

/// Celebrate a finished round and show lifetime stats
pub fn print_round_complete(result: &RoundResult, stats: &GameStats) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!(
            "🎉 Complete! Time: {} | Speed: {} WPM",
            format_time(Some(result.seconds)),
            result.words_per_minute
        )
        .bright_green()
        .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Score:        {}",
        result.score.to_string().bright_yellow().bold()
    );
    print_stats(stats);
}

/// Print lifetime statistics
pub fn print_stats(stats: &GameStats) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played: {}", stats.games_played);
    println!("   High score:   {}", stats.high_score);
    println!("   Best time:    {}\n", format_time(stats.best_time));
}
