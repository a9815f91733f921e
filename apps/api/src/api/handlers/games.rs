use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::game::{
    AddGameError, Game, GameId, RemoveGameError, ResultCode, Team, UpdateScoreError,
};
use crate::infrastructure::SharedScoreboard;

/// Request body for creating a game
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub team_a: String,
    pub team_b: String,
}

/// Request body for updating a game's score
#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    pub score_a: u32,
    pub score_b: u32,
}

/// Response from game creation
#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub id: GameId,
    pub code: i32,
}

/// Response carrying only a result code
#[derive(Debug, Serialize)]
pub struct CodeResponse {
    pub code: i32,
}

/// Response from clearing the scoreboard
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: bool,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub title: String,
    pub score: u32,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            title: team.title().to_string(),
            score: team.score(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: GameId,
    pub created_at: DateTime<Utc>,
    pub team_a: TeamResponse,
    pub team_b: TeamResponse,
    pub total_score: u32,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            created_at: game.created_at(),
            team_a: TeamResponse::from(game.team_a()),
            team_b: TeamResponse::from(game.team_b()),
            total_score: game.total_score(),
        }
    }
}

/// List all games, highest total score first
///
/// GET /api/games
pub async fn list_games(State(board): State<SharedScoreboard>) -> Json<Vec<GameResponse>> {
    let games = board.list();
    Json(games.iter().map(GameResponse::from).collect())
}

/// Start a new game
///
/// POST /api/games
pub async fn create_game(
    State(board): State<SharedScoreboard>,
    Json(req): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<CreateGameResponse>), ApiError> {
    let id = board.create(&req.team_a, &req.team_b)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse {
            id,
            code: AddGameError::SUCCESS,
        }),
    ))
}

/// Drop every game
///
/// DELETE /api/games
pub async fn clear_games(State(board): State<SharedScoreboard>) -> Json<ClearResponse> {
    Json(ClearResponse {
        cleared: board.clear(),
    })
}

/// Get a game by ID
///
/// GET /api/games/:id
pub async fn get_game(
    State(board): State<SharedScoreboard>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = board
        .get(&id)
        .ok_or_else(|| ApiError::not_found(format!("Game not found: {}", id)))?;

    Ok(Json(GameResponse::from(&game)))
}

/// Record new scores for a game
///
/// PUT /api/games/:id/score
pub async fn update_score(
    State(board): State<SharedScoreboard>,
    Path(id): Path<String>,
    Json(req): Json<UpdateScoreRequest>,
) -> Result<Json<CodeResponse>, ApiError> {
    board.update_score(&id, req.score_a, req.score_b)?;

    Ok(Json(CodeResponse {
        code: UpdateScoreError::SUCCESS,
    }))
}

/// Remove a game
///
/// DELETE /api/games/:id
pub async fn remove_game(
    State(board): State<SharedScoreboard>,
    Path(id): Path<String>,
) -> Result<Json<CodeResponse>, ApiError> {
    board.remove(&id)?;

    Ok(Json(CodeResponse {
        code: RemoveGameError::SUCCESS,
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
