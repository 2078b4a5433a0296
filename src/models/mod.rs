pub mod difficulty;
pub mod guess;
pub mod puzzle;

pub use difficulty::Difficulty;
pub use guess::{GuessRequest, GuessResponse};
pub use puzzle::{sample_puzzle, DailyPuzzle, PublicPuzzle, Puzzle, RevealedPuzzle};
