use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::Team;

/// A league owning an ordered set of teams
///
/// # Invariants
/// - Team names are unique within the league (case-sensitive)
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    name: String,
    teams: Vec<Team>,
}

impl League {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: Vec::new(),
        }
    }

    /// Adds a team to the league
    ///
    /// # Returns
    /// * `Err(DomainError::InvalidArgument)` - If a team with the same name
    ///   is already in the league
    pub fn add_team(&mut self, team: Team) -> DomainResult<()> {
        if self.team(team.name()).is_some() {
            return Err(DomainError::invalid(format!(
                "Team already in league: {}",
                team.name()
            )));
        }
        self.teams.push(team);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name() == name)
    }

    /// Mutable access for roster edits; the team's name cannot change
    /// through it, so the uniqueness invariant holds.
    pub fn team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name() == name)
    }

    /// Total number of players across every roster
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.players().len()).sum()
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team_details = self
            .teams
            .iter()
            .map(Team::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "League: {}, Teams: [{}]", self.name, team_details)
    }
}
