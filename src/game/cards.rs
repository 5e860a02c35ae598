// src/game/cards.rs
use super::types::*;
use crate::enums::ARMIES;

/// Wild cards shuffled into every fresh deck.
pub const WILD_CARD_COUNT: usize = 2;

pub struct DeckBuilder;

impl DeckBuilder {
    /// One card per territory, army types handed out in rotation so each type
    /// gets a third of the territories, followed by the wild cards.
    /// Every player starts with an empty hand.
    pub fn build(territories: &Territories, players: &[Player]) -> CardDeck {
        let mut draw_pile: Vec<Card> = territories
            .keys()
            .zip(ARMIES.iter().cycle())
            .map(|(name, &army)| Card::territory(name.clone(), army))
            .collect();
        draw_pile.extend(std::iter::repeat(Card::Wild).take(WILD_CARD_COUNT));

        CardDeck {
            draw_pile,
            discard_pile: Vec::new(),
            owned_by: players.iter().map(|p| (p.id, Vec::new())).collect(),
        }
    }
}
