//! HTTP API over the game session.
//!
//! Every successful call returns the full session snapshot as JSON; the
//! screens render whatever state they are handed. Invalid transitions come
//! back as 400 with a plain-text reason. A failed remote analysis is NOT an
//! HTTP error: it lands in the operator log and the snapshot simply comes
//! back without a result.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::AppState;
use crate::types::{Guess, Session};

/// All JSON routes of the session API
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/session", get(get_session))
        .route("/api/session/players", post(add_player))
        .route("/api/session/players/{index}", put(rename_player))
        .route("/api/session/winning-score", put(set_winning_score))
        .route("/api/session/multiplayer", post(begin_multiplayer))
        .route("/api/session/single-query", post(begin_single_query))
        .route("/api/session/scenario", post(submit_scenario))
        .route("/api/session/guess", post(resolve_guess))
        .route("/api/session/next-turn", post(next_turn))
        .route("/api/session/reset", post(reset_round))
        .route("/api/session/setup", post(return_to_setup))
        .route("/api/analyze", post(analyze_single))
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenamePlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct WinningScoreRequest {
    pub value: u32,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub guess: Guess,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeApiRequest {
    pub situation: String,
}

/// Apply a synchronous session transition and answer with the new snapshot
async fn mutate<F>(state: &AppState, op: F) -> Response
where
    F: FnOnce(&mut Session) -> Result<(), String>,
{
    let mut session = state.session.write().await;
    match op(&mut session) {
        Ok(()) => Json(session.clone()).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}

/// GET /api/session
async fn get_session(State(state): State<Arc<AppState>>) -> Json<Session> {
    Json(state.snapshot().await)
}

/// POST /api/session/players
async fn add_player(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddPlayerRequest>,
) -> Response {
    mutate(&state, |s| s.add_player(req.name).map(|_| ())).await
}

/// PUT /api/session/players/{index}
async fn rename_player(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(req): Json<RenamePlayerRequest>,
) -> Response {
    if req.name.is_empty() {
        return (StatusCode::BAD_REQUEST, "Player name must not be empty").into_response();
    }
    mutate(&state, |s| s.rename_player(index, req.name)).await
}

/// PUT /api/session/winning-score
async fn set_winning_score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WinningScoreRequest>,
) -> Response {
    mutate(&state, |s| s.set_winning_score(req.value)).await
}

/// POST /api/session/multiplayer
async fn begin_multiplayer(State(state): State<Arc<AppState>>) -> Response {
    mutate(&state, |s| s.begin_multiplayer()).await
}

/// POST /api/session/single-query
async fn begin_single_query(State(state): State<Arc<AppState>>) -> Response {
    mutate(&state, |s| s.begin_single_query()).await
}

/// POST /api/session/scenario
async fn submit_scenario(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScenarioRequest>,
) -> Response {
    mutate(&state, |s| s.submit_scenario(req.text)).await
}

/// POST /api/session/guess
///
/// Calls out to the analysis service; the response is the post-resolution
/// snapshot either way (resolved round, or reopened submission on failure).
async fn resolve_guess(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GuessRequest>,
) -> Response {
    match state.resolve_guess(req.guess).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}

/// POST /api/session/next-turn
async fn next_turn(State(state): State<Arc<AppState>>) -> Response {
    mutate(&state, |s| s.next_turn()).await
}

/// POST /api/session/reset
async fn reset_round(State(state): State<Arc<AppState>>) -> Response {
    mutate(&state, |s| {
        s.reset_round_state();
        Ok(())
    })
    .await
}

/// POST /api/session/setup
async fn return_to_setup(State(state): State<Arc<AppState>>) -> Response {
    mutate(&state, |s| {
        s.return_to_setup();
        Ok(())
    })
    .await
}

/// POST /api/analyze
async fn analyze_single(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeApiRequest>,
) -> Response {
    match state.analyze_single(&req.situation).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}
