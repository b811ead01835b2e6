//! Game-tree abstractions consumed by the search.
//!
//! The evaluator only needs read access to a position through [`GameView`],
//! and the searcher only needs a node that can list its children through
//! [`TreeNode`]. Any engine implementing these two traits can be searched;
//! [`GameNode`] is the implementation over [`FishingState`](crate::board::FishingState).

pub mod node;

pub use node::GameNode;

use crate::board::{Action, FishId, Player, Position};

/// Read-only queries the heuristic needs from a position.
pub trait GameView {
    /// Current hook position of `player`.
    fn hook_position(&self, player: Player) -> Position;

    /// Fish currently on `player`'s hook, if any.
    fn caught(&self, player: Player) -> Option<FishId>;

    /// Score banked so far by `player`.
    fn player_score(&self, player: Player) -> i32;

    /// Every fish still on the board with its position.
    fn fish_positions(&self) -> impl Iterator<Item = (FishId, Position)> + '_;

    /// Position of a single fish, or `None` if it is not on the board.
    fn fish_position(&self, fish: FishId) -> Option<Position> {
        self.fish_positions()
            .find(|&(id, _)| id == fish)
            .map(|(_, pos)| pos)
    }

    /// Point value of a fish, or `None` if the state does not list one.
    fn fish_score(&self, fish: FishId) -> Option<i32>;
}

/// A node in the game tree.
///
/// `children` must be idempotent: the first call may build the child list,
/// later calls return the same slice.
pub trait TreeNode: Sized {
    type State: GameView;

    fn state(&self) -> &Self::State;

    /// The action that produced this node; `None` at the root.
    fn action(&self) -> Option<Action>;

    /// Child nodes in generation order. Empty for a terminal position.
    fn children(&self) -> &[Self];
}
