// Risk Server Library - Core Module Organization
//
// Game construction lives in `game`; `store` and `api` are the thin shell the
// server binary wires together.

// Core game data structures and enums
pub mod enums;
pub mod errors;
pub mod game;
pub mod ordered_hashmap;

// Server implementation
pub mod api;
pub mod config;
pub mod store;

// Re-export common types for convenient access
pub use crate::api::router;
pub use crate::config::Config;
pub use crate::enums::{Army, Continent};
pub use crate::errors::{GameError, GraphError, RiskError};
pub use crate::game::{Card, CardDeck, Game, Player, PlayerId, Territory};
pub use crate::store::GameStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
