use crate::dataset::Dataset;
use crate::display::display_puzzle;
use crate::selection::random_puzzles;

pub fn list_puzzles(dataset: &Dataset, difficulty: Option<&str>, count: usize) {
    let mut rng = rand::thread_rng();

    let selected = match random_puzzles(dataset.puzzles(), difficulty, count, &mut rng) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    for puzzle in selected {
        display_puzzle(&puzzle.public_view());
    }
}
