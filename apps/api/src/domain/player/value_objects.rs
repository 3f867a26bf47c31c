use serde::Serialize;
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};

/// Player name value object
///
/// # Invariants
/// - Must contain at least one non-whitespace character
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a new PlayerName
    ///
    /// # Example
    /// ```
    /// use sports_league_api::domain::player::PlayerName;
    ///
    /// let name = PlayerName::new("John Doe").expect("valid name");
    /// assert_eq!(name.as_str(), "John Doe");
    /// ```
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Name cannot be empty."));
        }
        Ok(PlayerName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player age in whole years
///
/// Built from a signed integer so that negative input is a checked
/// failure rather than a wrapping conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    /// Creates a new Age
    ///
    /// # Returns
    /// * `Ok(Age)` - If `years` is between 0 and `u32::MAX`
    /// * `Err(DomainError::InvalidArgument)` - Otherwise
    pub fn new(years: i64) -> DomainResult<Self> {
        if years < 0 {
            return Err(DomainError::invalid("Age cannot be negative."));
        }
        u32::try_from(years)
            .map(Age)
            .map_err(|_| DomainError::invalid(format!("Age out of range: {}", years)))
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        assert!(PlayerName::new("Jane Smith").is_ok());
    }

    #[test]
    fn invalid_name_empty() {
        assert!(PlayerName::new("").is_err());
    }

    #[test]
    fn invalid_name_whitespace_only() {
        assert!(PlayerName::new("   ").is_err());
    }

    #[test]
    fn name_display() {
        let name = PlayerName::new("Jim Brown").unwrap();
        assert_eq!(format!("{}", name), "Jim Brown");
    }

    #[test]
    fn zero_age_is_valid() {
        assert_eq!(Age::new(0).unwrap().years(), 0);
    }

    #[test]
    fn negative_age_fails() {
        let err = Age::new(-1).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidArgument("Age cannot be negative.".to_string())
        );
    }

    #[test]
    fn age_above_u32_fails() {
        assert!(Age::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn age_display() {
        assert_eq!(Age::new(25).unwrap().to_string(), "25");
    }
}
