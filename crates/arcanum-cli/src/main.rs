//! CLI frontend for the Arcanum tarot engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcanum",
    about = "Arcanum — tarot readings at the command line",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw cards from a freshly shuffled deck
    Draw {
        /// Number of cards to draw
        #[arg(default_value = "1")]
        count: usize,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the drawn cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a single card of the day
    Daily {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the drawn card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Perform a full reading on a spread
    Reading {
        /// Spread id (see `arcanum spreads`)
        spread: String,

        /// Question to ask the cards (remaining arguments)
        question: Vec<String>,

        /// RNG seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the raw reading as JSON instead of interpreting it
        #[arg(long)]
        json: bool,
    },

    /// Interpret a reading saved with `reading --json`
    Interpret {
        /// File holding the reading JSON (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show one card in detail
    Card {
        /// Card name or id (e.g. "The Fool" or the_fool)
        #[arg(required = true)]
        name: Vec<String>,

        /// Emit the card as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the cards of the deck
    Cards {
        /// Filter by arcana: major or minor
        #[arg(short, long)]
        arcana: Option<String>,

        /// Filter by suit: wands, cups, swords, pentacles
        #[arg(long)]
        suit: Option<String>,

        /// Emit the card list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search cards by name, keyword, or description
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,

        /// Emit the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available spreads
    Spreads {
        /// Emit the spread list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a spread's positions
    Spread {
        /// Spread id (e.g. celtic-cross)
        id: String,

        /// Emit the spread as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive reading session
    Console {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw { count, seed, json } => commands::draw::run(count, seed, json),
        Commands::Daily { seed, json } => commands::daily::run(seed, json),
        Commands::Reading {
            spread,
            question,
            seed,
            json,
        } => commands::reading::run(&spread, &question.join(" "), seed, json),
        Commands::Interpret { file } => commands::interpret::run(file.as_deref()),
        Commands::Card { name, json } => commands::card::run(&name.join(" "), json),
        Commands::Cards { arcana, suit, json } => {
            commands::cards::run(arcana.as_deref(), suit.as_deref(), json)
        }
        Commands::Search { query, json } => commands::search::run(&query.join(" "), json),
        Commands::Spreads { json } => commands::spreads::run(json),
        Commands::Spread { id, json } => commands::spread::run(&id, json),
        Commands::Console { seed } => commands::console::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
