use crate::board::{Action, FishingState, Position};
use crate::tree::TreeNode;

/// A hand-built tree node for exercising the search without move generation.
///
/// Leaf states carry no fish, so their heuristic value is exactly the banked
/// score difference.
#[derive(Debug, Clone)]
pub struct MockNode {
    pub state: FishingState,
    pub action: Option<Action>,
    pub children: Vec<MockNode>,
}

impl MockNode {
    /// A leaf whose heuristic value is `value`.
    pub fn leaf(action: Option<Action>, value: i32) -> Self {
        MockNode {
            state: scored_state(value),
            action,
            children: Vec::new(),
        }
    }

    /// An inner node whose own heuristic value is `value`.
    pub fn inner(action: Option<Action>, value: i32, children: Vec<MockNode>) -> Self {
        MockNode {
            state: scored_state(value),
            action,
            children,
        }
    }

    /// A root whose children are leaves with the given values, one per action.
    pub fn root_with_leaves(values: &[i32]) -> Self {
        let children = values
            .iter()
            .enumerate()
            .map(|(i, &v)| MockNode::leaf(Action::from_index(i), v))
            .collect();
        MockNode::inner(None, 0, children)
    }
}

impl TreeNode for MockNode {
    type State = FishingState;

    fn state(&self) -> &FishingState {
        &self.state
    }

    fn action(&self) -> Option<Action> {
        self.action
    }

    fn children(&self) -> &[MockNode] {
        &self.children
    }
}

/// An empty board where player 0 leads by `value` points.
pub fn scored_state(value: i32) -> FishingState {
    let mut state = FishingState::new(Position::new(0, 10), Position::new(10, 10), 10);
    if value >= 0 {
        state.scores = [value, 0];
    } else {
        state.scores = [0, -value];
    }
    state
}

/// One fish (id 7, score 5) at (10,0); hooks at (0,0) and (5,0).
pub fn single_fish_state(remaining_plies: u32) -> FishingState {
    let mut state = FishingState::new(Position::new(0, 0), Position::new(5, 0), remaining_plies);
    state.add_fish(7, Position::new(10, 0), 5);
    state
}
