//! Free-text answer matching.
//!
//! Guesses and accepted answers are both reduced to a canonical form and then
//! compared for exact equality. There is no partial credit and no typo
//! tolerance.

use crate::models::Puzzle;

const LEADING_ARTICLES: [&str; 3] = ["the ", "a ", "an "];

pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    // Drop everything that is neither a word character nor whitespace
    let kept: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");

    for article in LEADING_ARTICLES {
        if let Some(rest) = collapsed.strip_prefix(article) {
            return rest.to_string();
        }
    }

    collapsed
}

pub fn check_answer(puzzle: &Puzzle, guess: &str) -> bool {
    let guess = normalize(guess);

    puzzle
        .answers
        .iter()
        .any(|answer| normalize(answer) == guess)
}
