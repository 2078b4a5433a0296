//! # Dataset
//!
//! Puzzles are read once at startup from the first usable JSON file in a
//! fixed search list and never written back. When no file is usable the
//! service still starts, serving a single built-in puzzle.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::{sample_puzzle, Puzzle};

const DATASET_FILE: &str = "movies.json";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse {0}: {1}")]
    Parse(PathBuf, serde_json::Error),

    #[error("{0} contains no usable puzzles")]
    Empty(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Fallback,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Fallback => f.write_str("built-in sample"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    puzzles: Vec<Puzzle>,
    source: DatasetSource,
}

impl Dataset {
    pub fn new(puzzles: Vec<Puzzle>, source: DatasetSource) -> Self {
        Self { puzzles, source }
    }

    pub fn fallback() -> Self {
        Self::new(vec![sample_puzzle()], DatasetSource::Fallback)
    }

    /// Loads from the first candidate that exists and parses, falling back to
    /// the built-in sample when none does.
    pub fn load(explicit: Option<&Path>) -> Self {
        let candidates = search_paths(explicit);

        for path in &candidates {
            if !path.exists() {
                continue;
            }

            match read_puzzles(path) {
                Ok(puzzles) => {
                    info!("Loading movies from: {}", path.display());
                    return Self::new(puzzles, DatasetSource::File(path.clone()));
                }
                Err(e) => warn!("Skipping dataset candidate: {e}"),
            }
        }

        error!("No usable dataset found, serving the built-in sample. Tried: {:?}", candidates);
        Self::fallback()
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn get(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }
}

pub fn search_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join(DATASET_FILE));
    }

    paths.push(PathBuf::from("data").join(DATASET_FILE));
    paths.push(PathBuf::from(DATASET_FILE));
    paths.push(PathBuf::from("src").join(DATASET_FILE));
    paths.push(PathBuf::from("/app/data").join(DATASET_FILE));

    if let Some(dir) = dirs::data_dir() {
        paths.push(dir.join("emojimovie").join(DATASET_FILE));
    }

    paths
}

pub fn read_puzzles(path: &Path) -> Result<Vec<Puzzle>, DatasetError> {
    let content =
        fs::read_to_string(path).map_err(|e| DatasetError::Read(path.to_path_buf(), e))?;

    let raw: Vec<Puzzle> =
        serde_json::from_str(&content).map_err(|e| DatasetError::Parse(path.to_path_buf(), e))?;

    let puzzles = sanitize(raw);
    if puzzles.is_empty() {
        return Err(DatasetError::Empty(path.to_path_buf()));
    }

    Ok(puzzles)
}

// Every kept puzzle has at least one answer and a unique id.
fn sanitize(raw: Vec<Puzzle>) -> Vec<Puzzle> {
    let mut seen = HashSet::new();

    raw.into_iter()
        .filter(|p| {
            if p.answers.iter().all(|a| a.trim().is_empty()) {
                warn!("Dropping puzzle {} with no accepted answers", p.id);
                return false;
            }
            if !seen.insert(p.id.clone()) {
                warn!("Dropping duplicate puzzle id {}", p.id);
                return false;
            }
            true
        })
        .collect()
}
