//! Heuristic position evaluation.
//!
//! Scores a position from player 0's point of view as the banked score
//! difference plus a weighted positional difference. The positional value
//! of a hook is twice the value of the fish it carries, or else the best
//! `score / (distance + 1)` over the fish still on the board, with the
//! distance measured around the cylinder.

use crate::board::{Board, FishId, Player};
use crate::config::{ConfigError, SearchConfig};
use crate::tree::GameView;

/// Score assumed for a fish on the board whose value is not listed.
const DEFAULT_FISH_SCORE: i32 = 1;

/// Errors raised when a position breaks the fish placement invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("inconsistent state: fish {fish} is on player {player}'s hook and on the board")]
    InconsistentState { player: usize, fish: FishId },

    #[error("inconsistent state: fish {fish} is on both hooks")]
    DoubleCatch { fish: FishId },
}

/// The position evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heuristic {
    importance: f64,
    board: Board,
}

impl Heuristic {
    /// Builds an evaluator from a validated config.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Heuristic {
            importance: config.importance,
            board: config.board(),
        })
    }

    /// Evaluates `state` from player 0's perspective. Higher favors player 0.
    pub fn evaluate<S: GameView>(&self, state: &S) -> Result<f64, EvalError> {
        check_consistency(state)?;

        let score_diff =
            state.player_score(Player::Max) as f64 - state.player_score(Player::Min) as f64;
        let positional_diff =
            self.positional_value(state, Player::Max) - self.positional_value(state, Player::Min);

        Ok(score_diff + self.importance * positional_diff)
    }

    /// How promising `player`'s hook position is.
    ///
    /// A hooked fish counts double its score. A free hook is worth the best
    /// `score / (distance + 1)` over the fish on the board, or 0 with none.
    pub fn positional_value<S: GameView>(&self, state: &S, player: Player) -> f64 {
        if let Some(fish) = state.caught(player) {
            return 2.0 * state.fish_score(fish).unwrap_or(0) as f64;
        }

        let hook = state.hook_position(player);
        let mut best = 0.0;
        for (fish, pos) in state.fish_positions() {
            let score = state.fish_score(fish).unwrap_or(DEFAULT_FISH_SCORE) as f64;
            let distance = self.board.distance(hook, pos);
            let value = score / (distance + 1) as f64;
            if value > best {
                best = value;
            }
        }
        best
    }
}

/// Verifies that no fish is both hooked and on the board, and that no fish
/// is on both hooks.
pub fn check_consistency<S: GameView>(state: &S) -> Result<(), EvalError> {
    for player in [Player::Max, Player::Min] {
        if let Some(fish) = state.caught(player) {
            if state.fish_position(fish).is_some() {
                return Err(EvalError::InconsistentState {
                    player: player.index(),
                    fish,
                });
            }
        }
    }
    match (state.caught(Player::Max), state.caught(Player::Min)) {
        (Some(a), Some(b)) if a == b => Err(EvalError::DoubleCatch { fish: a }),
        _ => Ok(()),
    }
}
