//! Win condition: a side with no units left has lost.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Phase, PlayerId};
use crate::events::GameEvent;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    /// Both sides were wiped out at once.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Has the match been decided? Only meaningful during combat; returns
/// `None` in every other phase.
#[must_use]
pub fn evaluate(state: &GameState) -> Option<GameResult> {
    if state.phase() != Phase::Game {
        return None;
    }

    let remaining = |seat| state.player(seat).unit_count();
    match (remaining(PlayerId::ONE), remaining(PlayerId::TWO)) {
        (0, 0) => Some(GameResult::Draw),
        (0, _) => Some(GameResult::Winner(PlayerId::TWO)),
        (_, 0) => Some(GameResult::Winner(PlayerId::ONE)),
        _ => None,
    }
}

/// Evaluate and, if decided, end the match.
pub(crate) fn resolve(state: &mut GameState) -> Option<GameResult> {
    let result = evaluate(state)?;
    let winner = result.winner();
    state.phase = Phase::End;
    state.winner = winner;
    state.emit(GameEvent::GameOver { winner });
    log::debug!("match over: {result:?}");
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, Position};
    use crate::engine::{add_unit_to_game, start_battle};
    use crate::units::UnitId;

    fn battle() -> GameState {
        let state = MatchConfig::new(6).build().unwrap();
        let state = add_unit_to_game(&state, "scout", PlayerId::ONE, Position::new(0, 0)).unwrap();
        let state = add_unit_to_game(&state, "scout", PlayerId::TWO, Position::new(5, 5)).unwrap();
        start_battle(&state).unwrap()
    }

    #[test]
    fn test_undecided() {
        assert_eq!(evaluate(&battle()), None);
    }

    #[test]
    fn test_elimination() {
        let mut state = battle();
        state.remove_unit(UnitId::new(1));

        assert_eq!(resolve(&mut state), Some(GameResult::Winner(PlayerId::TWO)));
        assert_eq!(state.phase(), Phase::End);
        assert_eq!(state.winner(), Some(PlayerId::TWO));
        assert_eq!(state.log().last().map(String::as_str), Some("Player 2 wins"));
    }

    #[test]
    fn test_draw() {
        let mut state = battle();
        state.remove_unit(UnitId::new(1));
        state.remove_unit(UnitId::new(2));

        assert_eq!(resolve(&mut state), Some(GameResult::Draw));
        assert_eq!(state.phase(), Phase::End);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_not_evaluated_outside_combat() {
        let state = MatchConfig::new(6).build().unwrap();
        assert_eq!(evaluate(&state), None);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::TWO);
        assert!(result.is_winner(PlayerId::TWO));
        assert!(!result.is_winner(PlayerId::ONE));
        assert!(!GameResult::Draw.is_winner(PlayerId::ONE));
    }
}
