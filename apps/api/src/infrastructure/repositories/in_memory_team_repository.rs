use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::player::Player;
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Teams are held by value; callers get clones and write changes back with
/// `save`. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<Uuid, Team>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let mut teams = self.teams.write().await;
        teams.insert(team.id(), team.clone());
        tracing::debug!(team_id = %team.id(), players = team.players().len(), "team saved");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        Ok(teams.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        let mut all: Vec<Team> = teams.values().cloned().collect();
        all.sort_by_key(|t| (t.created_at(), t.id()));
        Ok(all)
    }

    async fn add_player(&self, id: Uuid, player: Player) -> Result<Team, RepositoryError> {
        let mut teams = self.teams.write().await;
        let team = teams.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        team.add_player(player);
        tracing::debug!(team_id = %id, players = team.players().len(), "player added");
        Ok(team.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut teams = self.teams.write().await;
        match teams.remove(&id) {
            Some(_) => {
                tracing::debug!(team_id = %id, "team deleted");
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id)),
        }
    }
}
