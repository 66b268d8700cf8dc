//! Player data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`PlayerFields::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerValidationError {
    /// The name is empty or only whitespace.
    #[error("player name must not be empty")]
    EmptyName,
}

/// Store-assigned player identifier.
///
/// Identifiers are issued sequentially by the store starting at 1. Any other
/// value is accepted as a lookup key and simply finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PlayerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writable attributes of a player, used for creation and full updates.
///
/// ## Invariants
/// - `name` must be non-empty once trimmed. Checked by the service through
///   [`PlayerFields::validate`], not on construction, so transports can pass
///   caller input through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFields {
    /// Display name; required.
    pub name: String,
    /// Team the player belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Playing position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl PlayerFields {
    /// Build a field set holding only a name.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::PlayerFields;
    ///
    /// let fields = PlayerFields::named("Alice").with_team("Lions");
    /// assert_eq!(fields.team.as_deref(), Some("Lions"));
    /// assert!(fields.validate().is_ok());
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: None,
            position: None,
        }
    }

    /// Set the team.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Set the position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Check the required fields are present.
    pub fn validate(&self) -> Result<(), PlayerValidationError> {
        if self.name.trim().is_empty() {
            return Err(PlayerValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A stored player: identifier plus its attributes.
///
/// Serialises flat, e.g. `{"id":1,"name":"Alice","team":"Lions"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(flatten)]
    pub fields: PlayerFields,
}

impl Player {
    /// Assemble a player from its identifier and attributes.
    pub fn new(id: PlayerId, fields: PlayerFields) -> Self {
        Self { id, fields }
    }

    /// Player name.
    pub fn name(&self) -> &str {
        self.fields.name.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("  \t")]
    fn blank_names_are_rejected(#[case] name: &str) {
        let fields = PlayerFields::named(name);
        assert_eq!(fields.validate(), Err(PlayerValidationError::EmptyName));
    }

    #[rstest]
    fn optional_fields_do_not_affect_validation() {
        assert!(PlayerFields::named("Bo").validate().is_ok());
        assert!(
            PlayerFields::named("Bo")
                .with_team("Lions")
                .with_position("keeper")
                .validate()
                .is_ok()
        );
    }

    #[rstest]
    fn player_serialises_flat_and_omits_absent_fields() {
        let player = Player::new(PlayerId::new(1), PlayerFields::named("Alice"));
        let value = serde_json::to_value(&player).expect("serialise player");
        assert_eq!(value, json!({ "id": 1, "name": "Alice" }));
    }

    #[rstest]
    fn fields_deserialise_without_optional_members() {
        let fields: PlayerFields =
            serde_json::from_value(json!({ "name": "Alice" })).expect("deserialise fields");
        assert_eq!(fields, PlayerFields::named("Alice"));
    }
}
