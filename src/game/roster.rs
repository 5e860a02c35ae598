// src/game/roster.rs
use super::types::{Player, PlayerId};
use crate::errors::{GameError, GameResult};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Rejects rosters outside [`MIN_PLAYERS`, `MAX_PLAYERS`] and rosters whose
/// player ids are not exactly their positions.
pub fn validate_roster(players: &[Player]) -> GameResult<()> {
    validate_roster_bounds(players, MIN_PLAYERS, MAX_PLAYERS)
}

pub(crate) fn validate_roster_bounds(players: &[Player], min: usize, max: usize) -> GameResult<()> {
    let count = players.len();
    if !(min..=max).contains(&count) {
        return Err(GameError::IncorrectPlayerCount { count, min, max });
    }

    if let Some((index, player)) = players
        .iter()
        .enumerate()
        .find(|(index, player)| PlayerId::try_from(*index) != Ok(player.id))
    {
        return Err(GameError::PlayerIdIndexMismatch {
            id: player.id,
            index,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roster(n: usize) -> Vec<Player> {
        (0..n as PlayerId)
            .map(|i| Player::new(i, format!("Player {i}")))
            .collect()
    }

    #[test]
    fn test_accepts_three_to_six() {
        for n in MIN_PLAYERS..=MAX_PLAYERS {
            assert_eq!(validate_roster(&roster(n)), Ok(()));
        }
    }

    #[test]
    fn test_rejects_bad_counts() {
        assert_eq!(validate_roster(&roster(1)), Err(GameError::player_count(1)));
        assert_eq!(validate_roster(&roster(2)), Err(GameError::player_count(2)));
        assert_eq!(validate_roster(&roster(7)), Err(GameError::player_count(7)));
        assert_eq!(validate_roster(&[]), Err(GameError::player_count(0)));
    }

    #[test]
    fn test_count_checked_before_ids() {
        let players = vec![Player::new(5, "Five")];
        assert_eq!(validate_roster(&players), Err(GameError::player_count(1)));
    }

    #[test]
    fn test_reports_first_mismatch() {
        let players = vec![
            Player::new(3, "Zero"),
            Player::new(1, "One"),
            Player::new(2, "Two"),
        ];
        assert_eq!(
            validate_roster(&players),
            Err(GameError::PlayerIdIndexMismatch { id: 3, index: 0 })
        );

        let players = vec![
            Player::new(0, "Zero"),
            Player::new(2, "Two"),
            Player::new(1, "One"),
        ];
        assert_eq!(
            validate_roster(&players),
            Err(GameError::PlayerIdIndexMismatch { id: 2, index: 1 })
        );
    }

    #[test]
    fn test_rejects_negative_id() {
        let players = vec![
            Player::new(-1, "Zero"),
            Player::new(1, "One"),
            Player::new(2, "Two"),
        ];
        assert_eq!(
            validate_roster(&players),
            Err(GameError::PlayerIdIndexMismatch { id: -1, index: 0 })
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let players = vec![
            Player::new(0, "Zero"),
            Player::new(1, "One"),
            Player::new(1, "Also One"),
        ];
        assert_eq!(
            validate_roster(&players),
            Err(GameError::PlayerIdIndexMismatch { id: 1, index: 2 })
        );
    }

    proptest! {
        #[test]
        fn prop_count_outside_bounds_is_rejected(n in 0usize..20) {
            prop_assume!(!(MIN_PLAYERS..=MAX_PLAYERS).contains(&n));
            prop_assert_eq!(validate_roster(&roster(n)), Err(GameError::player_count(n)));
        }

        #[test]
        fn prop_first_bad_id_is_reported(
            n in MIN_PLAYERS..=MAX_PLAYERS,
            index in 0usize..MAX_PLAYERS,
            bump in 1i64..10,
        ) {
            let index = index % n;
            let mut players = roster(n);
            players[index].id += bump;
            let expected = GameError::PlayerIdIndexMismatch { id: index as PlayerId + bump, index };
            prop_assert_eq!(validate_roster(&players), Err(expected));
        }
    }
}
