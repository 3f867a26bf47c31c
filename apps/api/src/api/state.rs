use std::sync::Arc;

use crate::domain::repositories::TeamRepository;
use crate::infrastructure::repositories::InMemoryTeamRepository;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    /// State backed by a fresh in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTeamRepository::new()))
    }
}
