use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fields;
use crate::domain::player::Player;

/// Team aggregate root
///
/// A named team based in a city, owning an ordered roster of players.
///
/// # Invariants
/// - Name and city are text, fixed at construction
/// - Roster preserves insertion order and permits duplicates
/// - Roster only grows through `add_player` / `add_player_value`
///
/// # Example
/// ```
/// use sports_league_api::domain::player::Player;
/// use sports_league_api::domain::team::Team;
///
/// let mut team = Team::new("Falcons", "Winnipeg");
/// team.add_player(Player::new("John Doe", 25, "Forward").expect("valid player"));
///
/// assert_eq!(team.players().len(), 1);
/// assert_eq!(
///     team.to_string(),
///     "Team: Falcons, City: Winnipeg, Players: [Player: John Doe, Age: 25, Position: Forward]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: Uuid,
    name: String,
    city: String,
    players: Vec<Player>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team with an empty roster
    ///
    /// Any text is accepted for `name` and `city`, including the empty
    /// string. Non-text input is only representable through
    /// `Team::try_from(&Value)`, which rejects it.
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            city: city.into(),
            players: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a player to the end of the roster
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Appends a player given as untyped input
    ///
    /// # Returns
    /// * `Err(DomainError::InvalidArgument)` - If `value` is not a valid
    ///   player object. The roster is left unchanged.
    pub fn add_player_value(&mut self, value: &Value) -> DomainResult<()> {
        let player = Player::try_from(value).map_err(|DomainError::InvalidArgument(reason)| {
            DomainError::invalid(format!("player must be a Player: {}", reason))
        })?;
        self.add_player(player);
        Ok(())
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the city the team is based in
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builds a Team from untyped input such as a request body
///
/// Expects `{"name": string, "city": string}`; an optional `players` array
/// is added to the roster in order.
impl TryFrom<&Value> for Team {
    type Error = DomainError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let fields = fields::object(value, "team")?;
        let name = fields::text(fields, "name", "Name")?;
        let city = fields::text(fields, "city", "City")?;

        let mut team = Team::new(name, city);
        match fields.get("players") {
            None | Some(Value::Null) => {}
            Some(Value::Array(entries)) => {
                for entry in entries {
                    team.add_player_value(entry)?;
                }
            }
            Some(_) => return Err(DomainError::invalid("Players must be an array.")),
        }

        Ok(team)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_details = self
            .players
            .iter()
            .map(Player::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Team: {}, City: {}, Players: [{}]",
            self.name, self.city, player_details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn john() -> Player {
        Player::new("John Doe", 25, "Forward").unwrap()
    }

    fn jane() -> Player {
        Player::new("Jane Smith", 28, "Midfielder").unwrap()
    }

    #[test]
    fn create_team_starts_with_empty_roster() {
        let team = Team::new("Falcons", "Winnipeg");

        assert_eq!(team.name(), "Falcons");
        assert_eq!(team.city(), "Winnipeg");
        assert!(team.players().is_empty());
    }

    #[test]
    fn create_team_accepts_any_text() {
        for (name, city) in [("", ""), ("Ümlaut FC", "Zürich"), ("  ", "x")] {
            let team = Team::new(name, city);
            assert_eq!(team.name(), name);
            assert_eq!(team.city(), city);
            assert!(team.players().is_empty());
        }
    }

    #[test]
    fn teams_get_distinct_ids() {
        let a = Team::new("Falcons", "Winnipeg");
        let b = Team::new("Falcons", "Winnipeg");

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn add_player_preserves_insertion_order() {
        let mut team = Team::new("Falcons", "Winnipeg");
        let expected = vec![john(), jane(), john()];

        for player in expected.iter().cloned() {
            team.add_player(player);
        }

        assert_eq!(team.players(), expected.as_slice());
    }

    #[test]
    fn add_invalid_value_leaves_roster_unchanged() {
        let mut team = Team::new("Falcons", "Winnipeg");
        team.add_player(john());

        for bad in [
            json!("John Doe"),
            json!(42),
            json!({ "name": "John Doe", "age": -1, "position": "Forward" }),
            json!({ "name": "John Doe", "position": "Forward" }),
        ] {
            let result = team.add_player_value(&bad);
            assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        }

        assert_eq!(team.players().len(), 1);
    }

    #[test]
    fn add_player_value_appends() {
        let mut team = Team::new("Falcons", "Winnipeg");
        team.add_player_value(&json!({ "name": "Jane Smith", "age": 28, "position": "Midfielder" }))
            .unwrap();

        assert_eq!(team.players(), &[jane()]);
    }

    #[test]
    fn empty_team_display() {
        let team = Team::new("Falcons", "Winnipeg");

        assert_eq!(team.to_string(), "Team: Falcons, City: Winnipeg, Players: []");
    }

    #[test]
    fn team_display_joins_players_in_order() {
        let mut team = Team::new("Falcons", "Winnipeg");
        team.add_player(john());
        team.add_player(jane());

        assert_eq!(team.players().len(), 2);
        assert_eq!(
            team.to_string(),
            format!("Team: Falcons, City: Winnipeg, Players: [{}, {}]", john(), jane())
        );
    }

    #[test]
    fn team_from_json_with_numeric_name_fails() {
        let result = Team::try_from(&json!({ "name": 123, "city": "Winnipeg" }));

        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidArgument("Name must be a string.".to_string())
        );
    }

    #[test]
    fn team_from_json_with_numeric_city_fails() {
        let result = Team::try_from(&json!({ "name": "Falcons", "city": 204 }));

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn team_from_json_with_players() {
        let value = json!({
            "name": "Falcons",
            "city": "Winnipeg",
            "players": [
                { "name": "John Doe", "age": 25, "position": "Forward" },
                { "name": "Jane Smith", "age": 28, "position": "Midfielder" }
            ]
        });

        let team = Team::try_from(&value).unwrap();

        assert_eq!(team.players(), &[john(), jane()]);
    }

    #[test]
    fn team_from_json_with_bad_player_fails() {
        let value = json!({ "name": "Falcons", "city": "Winnipeg", "players": [7] });

        assert!(Team::try_from(&value).is_err());
    }

    #[test]
    fn team_from_json_with_non_array_players_fails() {
        let value = json!({ "name": "Falcons", "city": "Winnipeg", "players": "none" });

        assert!(Team::try_from(&value).is_err());
    }
}
