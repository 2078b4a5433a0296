mod daily;
mod guess;
mod list;
mod serve;
mod show;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::{Overrides, Settings};
use crate::dataset::Dataset;
use crate::models::Puzzle;

#[derive(Parser)]
#[command(name = "emojimovie")]
#[command(about = "Guess the movie from emoji sequences", long_about = None)]
pub struct Cli {
    /// Puzzle file to load before any of the default locations
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show the puzzle of the day
    Daily {
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List a random selection of puzzles
    List {
        /// Matched case-insensitively against each puzzle's difficulty
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long, default_value_t = crate::selection::DEFAULT_COUNT)]
        count: usize,
    },
    /// Show one puzzle without its answer
    Show { id: String },
    /// Check a guess for a puzzle
    Guess {
        id: String,
        #[arg(required = true, num_args = 1..)]
        guess: Vec<String>,
    },
    /// Reveal the answer and explanation
    Reveal { id: String },
}

impl Commands {
    pub fn is_server(&self) -> bool {
        matches!(self, Commands::Serve { .. })
    }
}

pub fn run(cli: Cli) {
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    let (host, port) = match &command {
        Commands::Serve { host, port } => (host.clone(), *port),
        _ => (None, None),
    };
    let settings = Settings::load(&Overrides {
        host,
        port,
        dataset: cli.dataset,
    });
    let dataset = Dataset::load(settings.dataset.as_deref());

    match command {
        Commands::Serve { .. } => serve::serve(settings, dataset),
        Commands::Daily { date } => daily::show_daily(&dataset, date),
        Commands::List { difficulty, count } => {
            list::list_puzzles(&dataset, difficulty.as_deref(), count)
        }
        Commands::Show { id } => show::show_puzzle(&dataset, &id),
        Commands::Guess { id, guess } => guess::check_guess(&dataset, &id, &guess.join(" ")),
        Commands::Reveal { id } => show::reveal_puzzle(&dataset, &id),
    }
}

fn find_or_exit<'a>(dataset: &'a Dataset, id: &str) -> &'a Puzzle {
    match dataset.get(id) {
        Some(p) => p,
        None => {
            eprintln!("{}", crate::error::PUZZLE_NOT_FOUND);
            std::process::exit(1);
        }
    }
}
