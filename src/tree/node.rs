//! Lazily expanded game-tree node over [`FishingState`].

use std::cell::OnceCell;

use super::TreeNode;
use crate::board::{Action, Board, FishingState, Player};
use crate::movegen::successors;

/// A position in the search tree.
///
/// Children are generated on the first call to [`TreeNode::children`] and
/// kept for the node's lifetime. A tree is built for one decision and
/// dropped afterwards.
#[derive(Debug, Clone)]
pub struct GameNode {
    state: FishingState,
    action: Option<Action>,
    /// The player whose move produced this node.
    mover: Option<Player>,
    board: Board,
    children: OnceCell<Vec<GameNode>>,
}

impl GameNode {
    /// Creates a root node for `state`.
    pub fn root(state: FishingState, board: Board) -> Self {
        GameNode {
            state,
            action: None,
            mover: None,
            board,
            children: OnceCell::new(),
        }
    }

    /// The player whose move produced this node; `None` at the root.
    pub fn mover(&self) -> Option<Player> {
        self.mover
    }

    /// True once the child list has been generated.
    pub fn is_expanded(&self) -> bool {
        self.children.get().is_some()
    }
}

impl TreeNode for GameNode {
    type State = FishingState;

    fn state(&self) -> &FishingState {
        &self.state
    }

    fn action(&self) -> Option<Action> {
        self.action
    }

    fn children(&self) -> &[GameNode] {
        self.children.get_or_init(|| {
            let mover = self.state.to_move;
            successors(&self.state, &self.board)
                .into_iter()
                .map(|(action, state)| GameNode {
                    state,
                    action: Some(action),
                    mover: Some(mover),
                    board: self.board,
                    children: OnceCell::new(),
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, ALL_ACTIONS};

    fn root() -> GameNode {
        let state = FishingState::new(Position::new(0, 10), Position::new(10, 10), 4);
        GameNode::root(state, Board::default())
    }

    #[test]
    fn children_are_generated_on_demand() {
        let node = root();
        assert!(!node.is_expanded());
        assert_eq!(node.children().len(), ALL_ACTIONS.len());
        assert!(node.is_expanded());
    }

    #[test]
    fn children_are_stable_across_calls() {
        let node = root();
        let first = node.children().as_ptr();
        let second = node.children().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn children_record_action_and_mover() {
        let node = root();
        assert_eq!(node.action(), None);
        assert_eq!(node.mover(), None);
        for (child, action) in node.children().iter().zip(ALL_ACTIONS) {
            assert_eq!(child.action(), Some(action));
            assert_eq!(child.mover(), Some(Player::Max));
            assert_eq!(child.state().to_move, Player::Min);
        }
        let grandchild = &node.children()[0].children()[0];
        assert_eq!(grandchild.mover(), Some(Player::Min));
    }

    #[test]
    fn terminal_node_has_no_children() {
        let state = FishingState::new(Position::new(0, 10), Position::new(10, 10), 0);
        let node = GameNode::root(state, Board::default());
        assert!(node.children().is_empty());
    }
}
