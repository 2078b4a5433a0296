use crate::dataset::Dataset;
use crate::matching::check_answer;
use crate::models::GuessResponse;

use super::find_or_exit;

pub fn check_guess(dataset: &Dataset, id: &str, guess: &str) {
    let puzzle = find_or_exit(dataset, id);

    let response = if check_answer(puzzle, guess) {
        GuessResponse::correct(puzzle)
    } else {
        GuessResponse::wrong()
    };

    println!("{}", response.message);

    if !response.correct {
        std::process::exit(1);
    }
}
