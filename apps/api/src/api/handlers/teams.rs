use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub players: Vec<Player>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            city: team.city().to_string(),
            players: team.players().to_vec(),
            summary: team.to_string(),
            created_at: team.created_at(),
        }
    }
}

async fn load_team(state: &AppState, id: Uuid) -> Result<Team, ApiError> {
    state
        .teams
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))
}

/// Create a new team
///
/// POST /api/teams
///
/// The body is taken untyped so that wrongly typed fields surface as
/// `InvalidArgument` (400) rather than a deserialization rejection.
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(body) = payload?;
    let team = Team::try_from(&body)?;

    state.teams.save(&team).await?;
    tracing::info!(team_id = %team.id(), name = team.name(), "team created");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List all teams
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.find_all().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = load_team(&state, id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Add a player to a team's roster
///
/// POST /api/teams/:id/players
pub async fn add_player(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let Json(body) = payload?;
    let player = Player::try_from(&body)?;

    let team = state.teams.add_player(id, player).await?;
    tracing::info!(team_id = %id, roster = team.players().len(), "player added");

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await?;
    tracing::info!(team_id = %id, "team deleted");

    Ok(StatusCode::NO_CONTENT)
}
