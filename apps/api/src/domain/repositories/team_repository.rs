use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::player::Player;
use crate::domain::team::Team;

/// Errors returned by team repositories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Team not found: {0}")]
    NotFound(Uuid),
}

/// Repository trait for Team aggregate
///
/// Defines the contract for storing and retrieving teams.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or replace by id)
    async fn save(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// All teams, oldest first
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Append a player to a stored team's roster and return the updated team
    ///
    /// The lookup and the append happen atomically, so concurrent additions
    /// to the same team are all kept and a deleted team stays deleted.
    async fn add_player(&self, id: Uuid, player: Player) -> Result<Team, RepositoryError>;

    /// Delete a team by ID
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
