use chrono::{Local, NaiveDate};

use crate::dataset::Dataset;
use crate::display::display_daily;
use crate::selection::daily_puzzle;

pub fn show_daily(dataset: &Dataset, date: Option<NaiveDate>) {
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    match daily_puzzle(dataset.puzzles(), date) {
        Some(puzzle) => display_daily(&puzzle.public_view(), &date.to_string()),
        None => {
            eprintln!("No puzzles loaded");
            std::process::exit(1);
        }
    }
}
