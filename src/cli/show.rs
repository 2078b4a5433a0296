use crate::dataset::Dataset;
use crate::display::{display_puzzle, display_reveal};

use super::find_or_exit;

pub fn show_puzzle(dataset: &Dataset, id: &str) {
    let puzzle = find_or_exit(dataset, id);
    display_puzzle(&puzzle.public_view());
}

pub fn reveal_puzzle(dataset: &Dataset, id: &str) {
    let puzzle = find_or_exit(dataset, id);
    display_reveal(&puzzle.reveal());
}
