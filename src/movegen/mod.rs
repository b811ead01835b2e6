//! Successor generation.
//!
//! Applies hook actions to a [`FishingState`] for the player to move.
//! Every action is always legal: moving into a wall leaves the hook where
//! it is, and the X axis wraps around.

use crate::board::{Action, Board, FishingState, Position, ALL_ACTIONS};

/// Returns the state reached when the player to move plays `action`.
///
/// A free hook that lands on a fish hooks it and the fish leaves the board.
/// A hook carrying a fish that is on the surface row after the move banks
/// the fish's score and becomes free again.
pub fn apply_action(state: &FishingState, action: Action, board: &Board) -> FishingState {
    let mut next = state.clone();
    let p = state.to_move.index();

    let (dx, dy) = action.delta();
    let hook = Position::new(
        board.wrap_x(state.hooks[p].x + dx),
        board.clamp_y(state.hooks[p].y + dy),
    );
    next.hooks[p] = hook;

    if next.caught[p].is_none() {
        if let Some(fish) = next.fish_at(hook) {
            next.fish_positions.remove(&fish);
            next.caught[p] = Some(fish);
        }
    }

    if let Some(fish) = next.caught[p] {
        if hook.y == board.surface() {
            let value = next.fish_scores.get(&fish).copied().unwrap_or(0);
            next.scores[p] = next.scores[p].saturating_add(value);
            next.caught[p] = None;
        }
    }

    next.to_move = state.to_move.opponent();
    next.remaining_plies = state.remaining_plies.saturating_sub(1);
    next
}

/// Returns one successor per action, in action index order.
/// A state with no plies left has no successors.
pub fn successors(state: &FishingState, board: &Board) -> Vec<(Action, FishingState)> {
    if state.remaining_plies == 0 {
        return Vec::new();
    }
    ALL_ACTIONS
        .iter()
        .map(|&a| (a, apply_action(state, a, board)))
        .collect()
}
