use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::AppError;
use crate::matching::check_answer;
use crate::models::{DailyPuzzle, GuessRequest, GuessResponse, PublicPuzzle, RevealedPuzzle};
use crate::selection::{daily_puzzle, random_puzzles, DEFAULT_COUNT};

use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PuzzleQuery {
    pub difficulty: Option<String>,
    pub count: Option<usize>,
}

pub async fn puzzles_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PuzzleQuery>,
) -> Result<Json<Vec<PublicPuzzle>>, AppError> {
    let count = query.count.unwrap_or(DEFAULT_COUNT);

    let selected = random_puzzles(
        state.dataset.puzzles(),
        query.difficulty.as_deref(),
        count,
        &mut rand::thread_rng(),
    )?;

    Ok(Json(selected.into_iter().map(|p| p.public_view()).collect()))
}

pub async fn puzzle_handler(
    State(state): State<Arc<AppState>>,
    Path(puzzle_id): Path<String>,
) -> Result<Json<PublicPuzzle>, AppError> {
    let puzzle = state
        .dataset
        .get(&puzzle_id)
        .ok_or_else(AppError::puzzle_not_found)?;

    Ok(Json(puzzle.public_view()))
}

pub async fn guess_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, AppError> {
    let puzzle = state
        .dataset
        .get(&request.puzzle_id)
        .ok_or_else(AppError::puzzle_not_found)?;

    let correct = check_answer(puzzle, &request.guess);
    debug!(puzzle = %puzzle.id, correct, "Checked guess");

    if correct {
        Ok(Json(GuessResponse::correct(puzzle)))
    } else {
        Ok(Json(GuessResponse::wrong()))
    }
}

pub async fn reveal_handler(
    State(state): State<Arc<AppState>>,
    Path(puzzle_id): Path<String>,
) -> Result<Json<RevealedPuzzle>, AppError> {
    let puzzle = state
        .dataset
        .get(&puzzle_id)
        .ok_or_else(AppError::puzzle_not_found)?;

    info!(puzzle = %puzzle.id, "Revealing answer");
    Ok(Json(puzzle.reveal()))
}

pub async fn daily_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DailyPuzzle>, AppError> {
    let today = state.today();

    let puzzle =
        daily_puzzle(state.dataset.puzzles(), today).ok_or_else(AppError::puzzle_not_found)?;

    Ok(Json(puzzle.daily_view(today)))
}
