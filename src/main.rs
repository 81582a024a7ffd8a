//! Vocabulary Match - CLI
//!
//! Play the German/English matching game and manage the word list from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vocab_match::{
    commands::{
        ConvertSource, DEFAULT_OUTPUT, delete_word, export_words, import_file, load_stats,
        restore_word, run_convert, run_play, submit_word,
    },
    config::{DATA_DIR_ENV, DEFAULT_DATA_DIR, DataPaths, log_filter},
    output::{
        print_convert_result, print_import_summary, print_save_warning, print_stats,
        print_word_table,
    },
    persistence::JsonFileStore,
    store::{WordFilter, WordStore},
    wordlists::{
        STARTER_WORDS,
        loader::{load_base_words, words_from_rows},
    },
};

#[derive(Parser)]
#[command(
    name = "vocab_match",
    about = "German/English vocabulary matching game with a personal word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base word list (JSON); defaults to the built-in starter words
    #[arg(short = 'w', long, global = true, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Directory holding your saved words and game stats
    #[arg(short = 'd', long, global = true, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the matching game (default)
    Play,

    /// List words with their status
    List {
        /// Filter: all (default), base, user, edited, deleted, active
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Search words in either language
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Add a new word
    Add { german: String, english: String },

    /// Change an existing word, identified by its original German text
    Edit {
        original: String,
        german: String,
        english: String,
    },

    /// Hide a word from the game (reversible with restore)
    Delete { german: String },

    /// Bring back a deleted word
    Restore { german: String },

    /// Add words from a JSON file; existing words are skipped
    Import { file: PathBuf },

    /// Write the active word list as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a words.json base list from CSV or JSON
    Convert {
        /// CSV input: german,english[,german_example]
        #[arg(long, value_name = "FILE", required_unless_present = "json", conflicts_with = "json")]
        csv: Option<PathBuf>,

        /// JSON input: records, pairs, or a words/vocabulary export
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Show lifetime game statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = DataPaths::new(&cli.data_dir);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Convert { csv, json, output } => run_convert_command(csv, json, &output),
        Commands::Stats => {
            print_stats(&load_stats(&paths.stats()));
            Ok(())
        }
        command => {
            let mut store = open_store(&paths, cli.words.as_deref())?;
            run_store_command(command, &mut store, &paths)
        }
    }
}

fn open_store(paths: &DataPaths, words: Option<&Path>) -> Result<WordStore<JsonFileStore>> {
    let base_words = match words {
        Some(path) => load_base_words(path)?,
        None => words_from_rows(STARTER_WORDS),
    };

    let mut store = WordStore::open(JsonFileStore::new(paths.user_data()));
    store.set_base_words(base_words);
    Ok(store)
}

fn run_store_command(
    command: Commands,
    store: &mut WordStore<JsonFileStore>,
    paths: &DataPaths,
) -> Result<()> {
    match command {
        Commands::Play => run_play(store, paths)?,
        Commands::List { filter } => {
            let filter = WordFilter::from_name(&filter);
            print_word_table(&format!("Words: {filter}"), &store.filter_words(filter));
        }
        Commands::Search { query } => {
            print_word_table(&format!("Search: \"{query}\""), &store.search_words(&query));
        }
        Commands::Add { german, english } => {
            submit_word(store, None, &german, &english)?;
            println!("{}", "✅ Word added successfully!".green());
        }
        Commands::Edit {
            original,
            german,
            english,
        } => {
            submit_word(store, Some(&original), &german, &english)?;
            println!("{}", "✅ Word updated successfully!".green());
        }
        Commands::Delete { german } => {
            delete_word(store, &german)?;
            println!("🗑  Deleted '{german}' (use 'restore' to bring it back)");
        }
        Commands::Restore { german } => {
            restore_word(store, &german)?;
            println!("♻️  Restored '{german}'");
        }
        Commands::Import { file } => {
            let summary = import_file(store, &file)?;
            print_import_summary(&summary);
        }
        Commands::Export { output } => {
            let (text, count) = export_words(store, output.as_deref())?;
            match output {
                Some(path) => println!("✅ Exported {count} words to {}", path.display()),
                None => print!("{text}"),
            }
        }
        Commands::Convert { .. } | Commands::Stats => unreachable!("handled without a store"),
    }

    if let Some(error) = store.last_save_error() {
        print_save_warning(error);
    }
    Ok(())
}

fn run_convert_command(csv: Option<PathBuf>, json: Option<PathBuf>, output: &Path) -> Result<()> {
    let source = match (csv, json) {
        (Some(path), _) => ConvertSource::Csv(path),
        (None, Some(path)) => ConvertSource::Json(path),
        (None, None) => anyhow::bail!("either --csv or --json is required"),
    };

    println!("📖 Reading {}", source.path().display());
    let result = run_convert(&source, output)?;
    print_convert_result(&result);
    println!("✨ Done!");
    Ok(())
}
