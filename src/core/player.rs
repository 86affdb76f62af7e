//! Player identification and token state.
//!
//! ## PlayerId
//!
//! Opaque string identifier. The setup screen hands out `"1"`, `"2"`, ...
//! but the engine never interprets the contents.
//!
//! ## PlayerColor
//!
//! Fixed six-color palette. Colors are unique within a roster.

use serde::{Deserialize, Serialize};

/// Player identifier, unique within a roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Token color from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl PlayerColor {
    /// The palette in setup order.
    pub const ALL: [PlayerColor; 6] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::Orange,
    ];

    /// Default color for the player at `index` in the setup list.
    ///
    /// Wraps around the palette.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Lowercase name, as used by the presentation layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Purple => "purple",
            PlayerColor::Orange => "orange",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A player token on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,

    /// Display name. Must be non-empty before the game starts.
    pub name: String,

    /// Token color, unique per roster.
    pub color: PlayerColor,

    /// Square index on the track.
    pub position: u32,
}

impl Player {
    /// Create a player at the start square.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            position: 0,
        }
    }

    /// Place the player on a given square.
    #[must_use]
    pub fn at(mut self, position: u32) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new("1");

        assert_eq!(id.as_str(), "1");
        assert_eq!(format!("{}", id), "Player 1");
        assert_eq!(PlayerId::from("1"), id);
    }

    #[test]
    fn test_color_for_index_wraps() {
        assert_eq!(PlayerColor::for_index(0), PlayerColor::Red);
        assert_eq!(PlayerColor::for_index(5), PlayerColor::Orange);
        assert_eq!(PlayerColor::for_index(6), PlayerColor::Red);
    }

    #[test]
    fn test_color_names() {
        assert_eq!(PlayerColor::Purple.to_string(), "purple");
        assert_eq!(PlayerColor::ALL.len(), 6);
    }

    #[test]
    fn test_player_new_starts_at_zero() {
        let player = Player::new("2", "Mina", PlayerColor::Blue);

        assert_eq!(player.position, 0);
        assert_eq!(player.at(7).position, 7);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("1", "Jun", PlayerColor::Green).at(3);
        let json = serde_json::to_string(&player).unwrap();

        assert!(json.contains("\"id\":\"1\""));
        assert!(json.contains("\"color\":\"green\""));

        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
