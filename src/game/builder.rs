// src/game/builder.rs
use log::debug;

use super::board::BoardGenerator;
use super::cards::DeckBuilder;
use super::roster::validate_roster;
use super::types::*;
use crate::errors::GameResult;

/// First reward on the golden cavalry track. Advanced by the turn engine as card sets are traded in.
pub const GOLDEN_CAVALRY: u32 = 4;

impl Game {
    /// Builds a fresh World Domination game.
    ///
    /// The roster is validated before anything else is allocated, so a rejected
    /// request leaves nothing behind. Each call owns its own territories and deck.
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> GameResult<Game> {
        validate_roster(&players)?;

        let territories = BoardGenerator::generate_territories();
        let cards = DeckBuilder::build(&territories, &players);
        let name = name.into();

        debug!(
            "Built game '{}' with {} players, {} territories and {} cards",
            name,
            players.len(),
            territories.len(),
            cards.draw_pile.len()
        );

        Ok(Game {
            name,
            golden_cavalry: GOLDEN_CAVALRY,
            players,
            territories,
            cards,
        })
    }
}
