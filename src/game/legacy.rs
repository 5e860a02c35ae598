// src/game/legacy.rs
//! The board model that predates the card deck: two to six players and a plain
//! count of cards per kind and player. Not used by the HTTP layer.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::board::BoardGenerator;
use super::roster::validate_roster_bounds;
use super::types::*;
use crate::errors::GameResult;

pub const LEGACY_MIN_PLAYERS: usize = 2;
pub const LEGACY_MAX_PLAYERS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Wild,
    Infantry,
    Cavalry,
    Artillery,
}

pub const CARD_KINDS: [CardKind; 4] = [
    CardKind::Wild,
    CardKind::Infantry,
    CardKind::Cavalry,
    CardKind::Artillery,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyBoard {
    pub name: String,
    pub territories: Territories,
    /// Card kind -> player id -> number of cards held.
    pub cards: BTreeMap<CardKind, BTreeMap<PlayerId, u32>>,
    pub players: Vec<Player>,
}

impl LegacyBoard {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> GameResult<LegacyBoard> {
        validate_roster_bounds(&players, LEGACY_MIN_PLAYERS, LEGACY_MAX_PLAYERS)?;

        let cards = CARD_KINDS
            .iter()
            .map(|&kind| (kind, players.iter().map(|p| (p.id, 0)).collect::<BTreeMap<_, _>>()))
            .collect();

        Ok(LegacyBoard {
            name: name.into(),
            territories: BoardGenerator::generate_territories(),
            cards,
            players,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GameError;

    #[test]
    fn test_two_players_allowed() {
        let players = vec![Player::new(0, "Zero"), Player::new(1, "One")];
        let board = LegacyBoard::new("Duel", players).unwrap();
        assert_eq!(board.territories.len(), 42);
    }

    #[test]
    fn test_card_counts_start_at_zero() {
        let players = vec![
            Player::new(0, "Zero"),
            Player::new(1, "One"),
            Player::new(2, "Two"),
        ];
        let board = LegacyBoard::new("Test Game", players).unwrap();

        assert_eq!(board.cards.len(), 4);
        for kind in CARD_KINDS {
            let per_player = &board.cards[&kind];
            assert_eq!(per_player.len(), 3, "{kind:?}");
            assert_eq!(per_player.values().sum::<u32>(), 0);
        }
    }

    #[test]
    fn test_bounds() {
        let one = vec![Player::new(0, "Zero")];
        assert_eq!(
            LegacyBoard::new("Solo", one),
            Err(GameError::IncorrectPlayerCount {
                count: 1,
                min: 2,
                max: 6
            })
        );

        let swapped = vec![Player::new(1, "One"), Player::new(0, "Zero")];
        assert_eq!(
            LegacyBoard::new("Swapped", swapped),
            Err(GameError::PlayerIdIndexMismatch { id: 1, index: 0 })
        );
    }
}
