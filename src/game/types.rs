// src/game/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{Army, Continent, ARMIES};
use crate::ordered_hashmap::OrderedHashMap;

/// Player ids are signed on the wire; only `0..n` is accepted into a game.
pub type PlayerId = i64;

/// Territories keyed by name, iterated in map-table order.
pub type Territories = OrderedHashMap<String, Territory>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub name: String,
    pub continent: Continent,
    pub links: Vec<String>,
    pub owned_by: Option<PlayerId>,
    pub armies: BTreeMap<Army, u32>,
}

impl Territory {
    /// Unowned territory with zero armies of every type.
    pub fn new(name: &str, continent: Continent, links: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            continent,
            links: links.iter().map(|link| link.to_string()).collect(),
            owned_by: None,
            armies: ARMIES.iter().map(|&army| (army, 0)).collect(),
        }
    }

    pub fn is_adjacent(&self, territory: &str) -> bool {
        self.links.iter().any(|link| link == territory)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Card {
    Wild,
    Territory { territory: String, army: Army },
}

impl Card {
    pub fn territory(territory: impl Into<String>, army: Army) -> Self {
        Card::Territory {
            territory: territory.into(),
            army,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild)
    }

    pub fn army(&self) -> Option<Army> {
        match self {
            Card::Wild => None,
            Card::Territory { army, .. } => Some(*army),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDeck {
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub owned_by: BTreeMap<PlayerId, Vec<Card>>,
}

impl CardDeck {
    pub fn count_army(&self, army: Army) -> usize {
        self.draw_pile
            .iter()
            .filter(|card| card.army() == Some(army))
            .count()
    }

    pub fn wild_count(&self) -> usize {
        self.draw_pile.iter().filter(|card| card.is_wild()).count()
    }

    /// Every held card paired with its holder, in player-id order.
    pub fn owned_pairs(&self) -> impl Iterator<Item = (PlayerId, &Card)> {
        self.owned_by
            .iter()
            .flat_map(|(&player_id, cards)| cards.iter().map(move |card| (player_id, card)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub name: String,
    pub golden_cavalry: u32,
    pub players: Vec<Player>,
    pub territories: Territories,
    pub cards: CardDeck,
}

impl Game {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        usize::try_from(id).ok().and_then(|index| self.players.get(index))
    }

    pub fn territory(&self, name: &str) -> Option<&Territory> {
        self.territories.get(name)
    }
}
