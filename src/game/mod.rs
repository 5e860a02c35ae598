// src/game/mod.rs
mod types;
pub mod board;
mod builder;
pub mod cards;
pub mod legacy;
mod roster;

pub use types::*;
pub use board::{BoardGenerator, TerritorySpec, TERRITORY_COUNT, TERRITORY_TABLE};
pub use builder::GOLDEN_CAVALRY;
pub use cards::{DeckBuilder, WILD_CARD_COUNT};
pub use roster::{validate_roster, MAX_PLAYERS, MIN_PLAYERS};
