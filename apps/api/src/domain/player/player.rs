use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::value_objects::{Age, PlayerName};
use crate::domain::errors::DomainError;
use crate::domain::fields;

/// A player on a team roster
///
/// Value object: two players with the same fields are equal. All fields are
/// fixed at construction and only exposed through read accessors.
///
/// # Example
/// ```
/// use sports_league_api::domain::player::Player;
///
/// let player = Player::new("John Doe", 25, "Forward").expect("valid player");
/// assert_eq!(player.to_string(), "Player: John Doe, Age: 25, Position: Forward");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    name: PlayerName,
    age: Age,
    position: String,
}

impl Player {
    /// Creates a new Player
    ///
    /// # Arguments
    /// * `name` - Player name (cannot be blank)
    /// * `age` - Age in years (cannot be negative)
    /// * `position` - Playing position, free text
    ///
    /// # Returns
    /// * `Err(DomainError::InvalidArgument)` - If name or age is invalid
    pub fn new(
        name: impl Into<String>,
        age: i64,
        position: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: PlayerName::new(name)?,
            age: Age::new(age)?,
            position: position.into(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn age(&self) -> u32 {
        self.age.years()
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

/// Builds a Player from untyped input such as a request body
///
/// Expects `{"name": string, "age": integer, "position": string}`.
impl TryFrom<&Value> for Player {
    type Error = DomainError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let fields = fields::object(value, "player")?;
        let name = fields::text(fields, "name", "Name")?;
        let age = fields::integer(fields, "age", "Age")?;
        let position = fields::text(fields, "position", "Position")?;

        Player::new(name, age, position)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {}, Age: {}, Position: {}",
            self.name, self.age, self.position
        )
    }
}
