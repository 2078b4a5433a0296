use serde::{Deserialize, Serialize};

use super::puzzle::Puzzle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub puzzle_id: String,
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessResponse {
    pub correct: bool,
    pub message: String,
    pub movie_title: Option<String>,
}

impl GuessResponse {
    pub fn correct(puzzle: &Puzzle) -> Self {
        let title = puzzle.title();
        Self {
            correct: true,
            message: format!("Correct! It's {} ({})", title, puzzle.year),
            movie_title: Some(title),
        }
    }

    pub fn wrong() -> Self {
        Self {
            correct: false,
            message: "Not quite! Try again or use a hint.".to_string(),
            movie_title: None,
        }
    }
}
