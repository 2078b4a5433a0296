use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const DATASET: &str = r#"[
    {"id": "ttn-1997-md", "emojis": "🚢🧊💔", "answers": ["titanic"], "year": 1997,
     "genre": ["Romance"], "difficulty": "Medium", "explanation": "Ship meets iceberg."},
    {"id": "inc-2010-hd", "emojis": "💤🌀🏙️", "answers": ["inception"], "year": 2010,
     "genre": ["Sci-Fi"], "difficulty": "Hard", "explanation": "Dreams within dreams."}
]"#;

struct Fixture {
    tmp: TempDir,
    dataset: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dataset = tmp.path().join("movies.json");
        fs::write(&dataset, DATASET).expect("write dataset");
        Self { tmp, dataset }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("emojimovie").unwrap();
        cmd.env("HOME", self.tmp.path())
            .env("XDG_CONFIG_HOME", self.tmp.path().join("config"))
            .env("XDG_DATA_HOME", self.tmp.path().join("data"))
            .env_remove("EMOJIMOVIE_DATASET")
            .env_remove("RUST_LOG")
            .current_dir(self.tmp.path())
            .arg("--dataset")
            .arg(&self.dataset);
        cmd
    }
}

#[test]
fn correct_guess_succeeds() {
    Fixture::new()
        .cmd()
        .args(["guess", "ttn-1997-md", "Titanic!"])
        .assert()
        .success()
        .stdout(contains("Correct! It's Titanic (1997)"));
}

#[test]
fn multi_word_guess_is_joined() {
    let fixture = Fixture::new();
    fs::write(
        &fixture.dataset,
        r#"[{"id": "bck", "emojis": "🚗⚡⏰", "answers": ["back to the future"],
             "year": 1985, "difficulty": "Medium"}]"#,
    )
    .unwrap();

    fixture
        .cmd()
        .args(["guess", "bck", "Back", "to", "the", "Future"])
        .assert()
        .success()
        .stdout(contains("Back To The Future (1985)"));
}

#[test]
fn wrong_guess_fails() {
    Fixture::new()
        .cmd()
        .args(["guess", "ttn-1997-md", "Avatar"])
        .assert()
        .failure()
        .stdout(contains("Not quite!"));
}

#[test]
fn unknown_id_fails() {
    let fixture = Fixture::new();
    for sub in ["show", "reveal"] {
        fixture
            .cmd()
            .args([sub, "nope"])
            .assert()
            .failure()
            .stderr(contains("Puzzle not found"));
    }
}

#[test]
fn show_hides_answer() {
    Fixture::new()
        .cmd()
        .args(["show", "inc-2010-hd"])
        .assert()
        .success()
        .stdout(contains("💤🌀🏙️").and(contains("Inception").not()));
}

#[test]
fn reveal_prints_title_and_explanation() {
    Fixture::new()
        .cmd()
        .args(["reveal", "inc-2010-hd"])
        .assert()
        .success()
        .stdout(contains("Inception (2010)").and(contains("Dreams within dreams.")));
}

#[test]
fn daily_is_stable_for_a_date() {
    let fixture = Fixture::new();
    let run = || {
        let output = fixture
            .cmd()
            .args(["daily", "--date", "2024-02-29"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run();
    assert!(first.contains("2024-02-29"));
    assert_eq!(first, run());
}

#[test]
fn list_filters_by_difficulty() {
    Fixture::new()
        .cmd()
        .args(["list", "--difficulty", "HARD"])
        .assert()
        .success()
        .stdout(contains("inc-2010-hd").and(contains("ttn-1997-md").not()));
}

#[test]
fn list_count_above_total_returns_all() {
    Fixture::new()
        .cmd()
        .args(["list", "--count", "50"])
        .assert()
        .success()
        .stdout(contains("inc-2010-hd").and(contains("ttn-1997-md")));
}

#[test]
fn list_without_matches_fails() {
    Fixture::new()
        .cmd()
        .args(["list", "--difficulty", "easy"])
        .assert()
        .failure()
        .stderr(contains("No movies found for difficulty: easy"));
}

#[test]
fn list_unknown_difficulty_reports_not_found() {
    Fixture::new()
        .cmd()
        .args(["list", "--difficulty", "extreme"])
        .assert()
        .code(1)
        .stderr(contains("No movies found for difficulty: extreme"));
}

#[test]
fn missing_dataset_falls_back_to_sample() {
    let fixture = Fixture::new();
    fs::remove_file(&fixture.dataset).unwrap();

    fixture
        .cmd()
        .args(["guess", "lnk-1994-ez", "the lion king"])
        .assert()
        .success()
        .stdout(contains("The Lion King (1994)"));
}
