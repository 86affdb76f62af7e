//! Roster setup and validation.
//!
//! `RosterBuilder` mirrors the setup screen: pick a player count, type
//! names, pick colors. Picking a color another seat holds swaps the two, so
//! the builder never holds duplicates. `validate_roster` is the check every
//! roster passes before `SetPlayers` is dispatched.

use rustc_hash::FxHashSet;

use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::player::{Player, PlayerColor};
use crate::error::{GameError, GameResult};

#[derive(Clone, Debug)]
struct Seat {
    name: String,
    color: PlayerColor,
}

/// Interactive roster under construction.
#[derive(Clone, Debug)]
pub struct RosterBuilder {
    seats: Vec<Seat>,
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterBuilder {
    /// Two empty seats, red and blue.
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Self { seats: Vec::new() };
        builder.resize(MIN_PLAYERS);
        builder
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Change the number of seats.
    ///
    /// Names typed so far are kept; colors reset to the palette order.
    pub fn set_player_count(&mut self, count: usize) -> GameResult<()> {
        check_count(count, MIN_PLAYERS, MAX_PLAYERS)?;
        self.resize(count);
        Ok(())
    }

    fn resize(&mut self, count: usize) {
        self.seats = (0..count)
            .map(|index| Seat {
                name: self.seats.get(index).map(|s| s.name.clone()).unwrap_or_default(),
                color: PlayerColor::for_index(index),
            })
            .collect();
    }

    /// Set a seat's name. Returns false if the seat does not exist.
    pub fn set_name(&mut self, seat: usize, name: impl Into<String>) -> bool {
        match self.seats.get_mut(seat) {
            Some(s) => {
                s.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Set a seat's color, swapping with whoever held it.
    ///
    /// Returns false if the seat does not exist.
    pub fn set_color(&mut self, seat: usize, color: PlayerColor) -> bool {
        let Some(previous) = self.seats.get(seat).map(|s| s.color) else {
            return false;
        };
        if let Some(holder) = self
            .seats
            .iter()
            .enumerate()
            .position(|(i, s)| i != seat && s.color == color)
        {
            self.seats[holder].color = previous;
        }
        self.seats[seat].color = color;
        true
    }

    /// Color currently assigned to a seat.
    #[must_use]
    pub fn color(&self, seat: usize) -> Option<PlayerColor> {
        self.seats.get(seat).map(|s| s.color)
    }

    /// True once every seat has a non-blank name.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.seats.iter().all(|s| !s.name.trim().is_empty())
    }

    /// Build the roster: ids `"1".."n"`, trimmed names, everyone on square 0.
    pub fn build(&self) -> GameResult<Vec<Player>> {
        let players: Vec<Player> = self
            .seats
            .iter()
            .enumerate()
            .map(|(index, seat)| Player::new((index + 1).to_string(), seat.name.trim(), seat.color))
            .collect();
        validate_roster(&players, MIN_PLAYERS, MAX_PLAYERS)?;
        Ok(players)
    }
}

fn check_count(count: usize, min: usize, max: usize) -> GameResult<()> {
    if (min..=max).contains(&count) {
        Ok(())
    } else {
        Err(GameError::PlayerCount { count, min, max })
    }
}

/// Check a roster before it is handed to the reducer.
///
/// Rejects a size outside `min..=max`, blank names, repeated ids and
/// repeated colors.
pub fn validate_roster(players: &[Player], min: usize, max: usize) -> GameResult<()> {
    check_count(players.len(), min, max)?;

    let mut ids = FxHashSet::default();
    let mut colors = FxHashSet::default();
    for (index, player) in players.iter().enumerate() {
        if player.name.trim().is_empty() {
            return Err(GameError::EmptyName(index + 1));
        }
        if !ids.insert(&player.id) {
            return Err(GameError::DuplicateId(player.id.as_str().to_string()));
        }
        if !colors.insert(player.color) {
            return Err(GameError::DuplicateColor(player.color));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn named(count: usize) -> RosterBuilder {
        let mut builder = RosterBuilder::new();
        builder.set_player_count(count).unwrap();
        for seat in 0..count {
            builder.set_name(seat, format!("P{}", seat + 1));
        }
        builder
    }

    #[test]
    fn test_default_two_seats() {
        let builder = RosterBuilder::new();

        assert_eq!(builder.player_count(), 2);
        assert_eq!(builder.color(0), Some(PlayerColor::Red));
        assert_eq!(builder.color(1), Some(PlayerColor::Blue));
        assert!(!builder.can_start());
    }

    #[test]
    fn test_build_assigns_ids_and_trims() {
        let mut builder = RosterBuilder::new();
        builder.set_name(0, "  Ari ");
        builder.set_name(1, "Bo");

        let players = builder.build().unwrap();
        assert_eq!(players[0].id, PlayerId::new("1"));
        assert_eq!(players[0].name, "Ari");
        assert_eq!(players[1].id, PlayerId::new("2"));
        assert!(players.iter().all(|p| p.position == 0));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut builder = RosterBuilder::new();
        builder.set_name(0, "Ari");
        builder.set_name(1, "   ");

        assert!(!builder.can_start());
        assert!(matches!(builder.build(), Err(GameError::EmptyName(2))));
    }

    #[test]
    fn test_set_color_swaps() {
        let mut builder = named(3);

        assert!(builder.set_color(2, PlayerColor::Red));
        assert_eq!(builder.color(2), Some(PlayerColor::Red));
        assert_eq!(builder.color(0), Some(PlayerColor::Green));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_set_color_unused() {
        let mut builder = named(2);

        builder.set_color(0, PlayerColor::Orange);
        assert_eq!(builder.color(0), Some(PlayerColor::Orange));
        assert_eq!(builder.color(1), Some(PlayerColor::Blue));
    }

    #[test]
    fn test_resize_keeps_names() {
        let mut builder = named(4);
        builder.set_player_count(2).unwrap();
        builder.set_player_count(3).unwrap();

        assert!(!builder.can_start());
        builder.set_name(2, "New");
        let players = builder.build().unwrap();
        assert_eq!(players[0].name, "P1");
        assert_eq!(players[1].name, "P2");
        assert_eq!(players[2].color, PlayerColor::Green);
    }

    #[test]
    fn test_player_count_limits() {
        let mut builder = RosterBuilder::new();

        assert!(builder.set_player_count(6).is_ok());
        assert!(matches!(
            builder.set_player_count(7),
            Err(GameError::PlayerCount { count: 7, min: 2, max: 6 })
        ));
        assert!(builder.set_player_count(1).is_err());
        assert!(!builder.set_name(9, "nobody"));
        assert!(!builder.set_color(9, PlayerColor::Red));
    }

    #[test]
    fn test_validate_duplicate_color() {
        let players = vec![
            Player::new("1", "Ari", PlayerColor::Red),
            Player::new("2", "Bo", PlayerColor::Red),
        ];

        assert!(matches!(
            validate_roster(&players, 2, 6),
            Err(GameError::DuplicateColor(PlayerColor::Red))
        ));
    }

    #[test]
    fn test_validate_duplicate_id() {
        let players = vec![
            Player::new("1", "Ari", PlayerColor::Red),
            Player::new("1", "Bo", PlayerColor::Blue),
        ];

        assert!(matches!(validate_roster(&players, 2, 6), Err(GameError::DuplicateId(id)) if id == "1"));
    }
}
