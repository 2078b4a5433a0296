use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::models::Puzzle;

pub const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No movies found for difficulty: {0}")]
    NoMatches(String),
}

/// Picks up to `count` distinct puzzles, optionally restricted to one difficulty.
///
/// An empty `difficulty` string counts as no filter. Asking for more puzzles
/// than are available returns all of them in random order.
pub fn random_puzzles<'a, R: Rng + ?Sized>(
    puzzles: &'a [Puzzle],
    difficulty: Option<&str>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'a Puzzle>, SelectionError> {
    let candidates: Vec<&Puzzle> = match difficulty.filter(|d| !d.is_empty()) {
        Some(filter) => {
            let matching: Vec<&Puzzle> = puzzles
                .iter()
                .filter(|p| p.difficulty.matches(filter))
                .collect();
            if matching.is_empty() {
                return Err(SelectionError::NoMatches(filter.to_string()));
            }
            matching
        }
        None => puzzles.iter().collect(),
    };

    let count = count.min(candidates.len());
    Ok(candidates.choose_multiple(rng, count).copied().collect())
}

/// Seed for a calendar date, e.g. 2024-03-09 becomes 20240309.
pub fn date_seed(date: NaiveDate) -> u64 {
    date.year() as u64 * 10_000 + date.month() as u64 * 100 + date.day() as u64
}

/// Deterministic puzzle of the day.
///
/// The generator lives only for this call, so nothing else that draws random
/// numbers is affected.
pub fn daily_puzzle(puzzles: &[Puzzle], date: NaiveDate) -> Option<&Puzzle> {
    let mut rng = ChaCha8Rng::seed_from_u64(date_seed(date));
    puzzles.choose(&mut rng)
}
