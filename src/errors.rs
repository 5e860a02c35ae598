use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Continent;
use crate::game::{PlayerId, MAX_PLAYERS, MIN_PLAYERS};

/// Top-level error type for the Risk backend
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RiskError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Map error: {0}")]
    Graph(#[from] GraphError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Rejections of a requested game. Both are client-input problems.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Incorrect number of players. Want between {min} and {max}, got: {count}")]
    IncorrectPlayerCount { count: usize, min: usize, max: usize },

    #[error("Player with ID {id} has index {index} which doesn't equal its ID")]
    PlayerIdIndexMismatch { id: PlayerId, index: usize },
}

/// Integrity problems in the world map table
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphError {
    #[error("Expected {expected} territories, found {actual}")]
    TerritoryCount { expected: usize, actual: usize },

    #[error("{continent} should have {expected} territories, found {actual}")]
    ContinentSize {
        continent: Continent,
        expected: usize,
        actual: usize,
    },

    #[error("{territory} links to unknown territory {neighbor}")]
    UnknownNeighbor { territory: String, neighbor: String },

    #[error("{from} links to {to} but {to} does not link back")]
    AsymmetricLink { from: String, to: String },

    #[error("Map is not connected: reached {reached} of {total} territories")]
    Disconnected { reached: usize, total: usize },
}

pub type GameResult<T> = Result<T, GameError>;
pub type GraphResult<T> = Result<T, GraphError>;

impl GameError {
    /// Player count outside the World Domination bounds.
    pub fn player_count(count: usize) -> Self {
        Self::IncorrectPlayerCount {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        }
    }
}

impl GraphError {
    pub fn unknown_neighbor(territory: impl Into<String>, neighbor: impl Into<String>) -> Self {
        Self::UnknownNeighbor {
            territory: territory.into(),
            neighbor: neighbor.into(),
        }
    }

    pub fn asymmetric(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::AsymmetricLink {
            from: from.into(),
            to: to.into(),
        }
    }
}
