use crate::models::{PublicPuzzle, RevealedPuzzle};

pub fn display_puzzle(puzzle: &PublicPuzzle) {
    println!("{}  {}", puzzle.id, puzzle.emojis);
    println!(
        "    {} | {} | {}",
        puzzle.year,
        puzzle.difficulty.display_name(),
        puzzle.genre.join(", ")
    );
}

pub fn display_daily(puzzle: &PublicPuzzle, date: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  EMOJI == MOVIE - Puzzle of the day ({})", date);
    println!("{}\n", "=".repeat(60));

    println!("    {}\n", puzzle.emojis);
    println!("Id: {}", puzzle.id);
    println!("Year: {}", puzzle.year);
    println!("Difficulty: {}", puzzle.difficulty.display_name());
    println!("Genre: {}", puzzle.genre.join(", "));

    println!("\n{}", "=".repeat(60));
    println!("Run `emojimovie guess {} <title>` to answer", puzzle.id);
    println!("{}\n", "=".repeat(60));
}

pub fn display_reveal(puzzle: &RevealedPuzzle) {
    println!("{} ({})", puzzle.title, puzzle.year);
    println!("{}", "-".repeat(60));
    println!("Emojis: {}", puzzle.emojis);
    println!("Difficulty: {}", puzzle.difficulty.display_name());
    println!("Genre: {}", puzzle.genre.join(", "));
    println!("{}", "-".repeat(60));
    println!("{}", puzzle.explanation);
}
