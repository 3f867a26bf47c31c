use axum::Json;
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::domain::player::Player;
use crate::domain::DomainResult;

/// Column headers of the roster table
pub const ROSTER_COLUMNS: [&str; 3] = ["Name", "Age", "Position"];

pub const WELCOME_TITLE: &str = "Welcome";
pub const WELCOME_MESSAGE: &str = "Welcome to the Team!";

/// Three-column roster table
#[derive(Debug, Serialize)]
pub struct RosterTable {
    pub columns: [&'static str; 3],
    pub rows: Vec<(String, u32, String)>,
}

impl RosterTable {
    pub fn from_players(players: &[Player]) -> Self {
        Self {
            columns: ROSTER_COLUMNS,
            rows: players
                .iter()
                .map(|p| (p.name().to_string(), p.age(), p.position().to_string()))
                .collect(),
        }
    }
}

/// Fixed acknowledgment returned by the welcome action
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub title: &'static str,
    pub message: &'static str,
}

/// The demo roster shown on the landing table
pub fn sample_players() -> DomainResult<Vec<Player>> {
    Ok(vec![
        Player::new("John Doe", 25, "Forward")?,
        Player::new("Jane Smith", 28, "Midfielder")?,
        Player::new("Jim Brown", 22, "Defender")?,
    ])
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Sample roster table
///
/// GET /api/roster
pub async fn get_roster() -> Result<Json<RosterTable>, ApiError> {
    let players = sample_players().map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok(Json(RosterTable::from_players(&players)))
}

/// Welcome acknowledgment
///
/// POST /api/welcome
pub async fn welcome() -> Json<WelcomeResponse> {
    tracing::info!("welcome acknowledged");
    Json(WelcomeResponse {
        title: WELCOME_TITLE,
        message: WELCOME_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sample_players_are_valid() {
        let players = sample_players().unwrap();

        assert_eq!(players.len(), 3);
        assert_eq!(players[0].name(), "John Doe");
        assert_eq!(players[2].position(), "Defender");
    }

    #[test]
    fn roster_table_serializes_rows_as_arrays() {
        let players = sample_players().unwrap();
        let table = RosterTable::from_players(&players[..1]);

        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({
                "columns": ["Name", "Age", "Position"],
                "rows": [["John Doe", 25, "Forward"]]
            })
        );
    }
}
