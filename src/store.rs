use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::GameResult;
use crate::game::{Game, Player};

/// Holds the single current game. Cloning yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct GameStore {
    current: Arc<RwLock<Option<Game>>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new game and makes it the current one.
    /// The game is built before the lock is taken; a rejected roster leaves the
    /// current game untouched.
    pub async fn create_game(&self, name: &str, players: Vec<Player>) -> GameResult<Game> {
        let game = Game::new(name, players)?;

        let mut current = self.current.write().await;
        if let Some(previous) = current.as_ref() {
            info!("Replacing game '{}' with '{}'", previous.name, game.name);
        } else {
            info!("Created game '{}'", game.name);
        }
        *current = Some(game.clone());

        Ok(game)
    }

    pub async fn current_game(&self) -> Option<Game> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GameError;

    fn three_players() -> Vec<Player> {
        vec![
            Player::new(0, "Zero"),
            Player::new(1, "One"),
            Player::new(2, "Two"),
        ]
    }

    #[tokio::test]
    async fn test_create_game_replaces_current() {
        let store = GameStore::new();
        assert_eq!(store.current_game().await, None);

        store.create_game("First", three_players()).await.unwrap();
        let second = store.create_game("Second", three_players()).await.unwrap();

        assert_eq!(store.current_game().await, Some(second));
    }

    #[tokio::test]
    async fn test_rejected_game_keeps_current() {
        let store = GameStore::new();
        let first = store.create_game("First", three_players()).await.unwrap();

        let result = store
            .create_game("Solo", vec![Player::new(0, "Zero")])
            .await;
        assert!(matches!(
            result,
            Err(GameError::IncorrectPlayerCount { count: 1, .. })
        ));
        assert_eq!(store.current_game().await, Some(first));
    }

    #[tokio::test]
    async fn test_concurrent_creates_leave_one_game() {
        let store = GameStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create_game(&format!("Game {i}"), three_players())
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let current = store.current_game().await.unwrap();
        assert!(current.name.starts_with("Game "));
        assert_eq!(current.territories.len(), 42);
    }
}
