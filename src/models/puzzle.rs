use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub emojis: String,
    /// Accepted answers; the first one is the canonical title.
    pub answers: Vec<String>,
    pub year: i32,
    #[serde(default)]
    pub genre: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: String,
}

/// What a player may see before solving: no answers, no explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicPuzzle {
    pub id: String,
    pub emojis: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    #[serde(flatten)]
    pub puzzle: PublicPuzzle,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealedPuzzle {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub difficulty: Difficulty,
    pub explanation: String,
    pub emojis: String,
}

impl Puzzle {
    pub fn canonical_answer(&self) -> &str {
        self.answers.first().map(String::as_str).unwrap_or_default()
    }

    pub fn title(&self) -> String {
        title_case(self.canonical_answer())
    }

    pub fn public_view(&self) -> PublicPuzzle {
        PublicPuzzle {
            id: self.id.clone(),
            emojis: self.emojis.clone(),
            year: self.year,
            genre: self.genre.clone(),
            difficulty: self.difficulty.clone(),
        }
    }

    pub fn daily_view(&self, date: NaiveDate) -> DailyPuzzle {
        DailyPuzzle {
            puzzle: self.public_view(),
            date,
        }
    }

    pub fn reveal(&self) -> RevealedPuzzle {
        RevealedPuzzle {
            id: self.id.clone(),
            title: self.title(),
            year: self.year,
            genre: self.genre.clone(),
            difficulty: self.difficulty.clone(),
            explanation: self.explanation.clone(),
            emojis: self.emojis.clone(),
        }
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Words are split on anything that is not a letter, except apostrophes.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = in_word && (c == '\'' || c == '\u{2019}');
        }
    }

    out
}

pub fn sample_puzzle() -> Puzzle {
    Puzzle {
        id: "lnk-1994-ez".to_string(),
        emojis: "🦁👑🌅".to_string(),
        answers: vec!["the lion king".to_string(), "lion king".to_string()],
        year: 1994,
        genre: vec!["Animation".to_string(), "Adventure".to_string()],
        difficulty: Difficulty::Easy,
        explanation: "Lion + crown = king; sunrise opening scene from Disney's classic."
            .to_string(),
    }
}
