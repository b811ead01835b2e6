//! Fixed-depth minimax.
//!
//! Plain minimax without pruning: every node within the depth bound is
//! visited once, player 0 maximizes and player 1 minimizes. Positions at
//! the depth bound and terminal positions are scored by the heuristic.

use crate::board::Player;
use crate::config::{ConfigError, SearchConfig};
use crate::eval::{EvalError, Heuristic};
use crate::tree::TreeNode;

/// Depth-limited minimax searcher.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    heuristic: Heuristic,
}

impl Minimax {
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(Minimax {
            heuristic: Heuristic::new(config)?,
        })
    }

    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    /// Minimax value of `node` with `player` to move and `depth` plies left.
    pub fn evaluate<N: TreeNode>(
        &self,
        player: Player,
        node: &N,
        depth: u32,
    ) -> Result<f64, EvalError> {
        let mut nodes = 0;
        self.search(player, node, depth, &mut nodes)
    }

    /// Like [`Minimax::evaluate`], adding the number of visited nodes to `nodes`.
    pub fn search<N: TreeNode>(
        &self,
        player: Player,
        node: &N,
        depth: u32,
        nodes: &mut u64,
    ) -> Result<f64, EvalError> {
        *nodes += 1;

        if depth == 0 {
            return self.heuristic.evaluate(node.state());
        }
        let children = node.children();
        if children.is_empty() {
            return self.heuristic.evaluate(node.state());
        }

        let next = player.opponent();
        match player {
            Player::Max => {
                let mut best = f64::NEG_INFINITY;
                for child in children {
                    let value = self.search(next, child, depth - 1, nodes)?;
                    if value > best {
                        best = value;
                    }
                }
                Ok(best)
            }
            Player::Min => {
                let mut best = f64::INFINITY;
                for child in children {
                    let value = self.search(next, child, depth - 1, nodes)?;
                    if value < best {
                        best = value;
                    }
                }
                Ok(best)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Action, Board, FishingState, Position};
    use crate::test_util::{single_fish_state, MockNode};
    use crate::tree::GameNode;

    fn minimax() -> Minimax {
        Minimax::new(&SearchConfig::default()).unwrap()
    }

    #[test]
    fn depth_zero_matches_heuristic_for_both_players() {
        let mm = minimax();
        let node = GameNode::root(single_fish_state(10), Board::default());
        let direct = mm.heuristic().evaluate(node.state()).unwrap();
        assert_eq!(mm.evaluate(Player::Max, &node, 0).unwrap(), direct);
        assert_eq!(mm.evaluate(Player::Min, &node, 0).unwrap(), direct);
        assert!(!node.is_expanded(), "depth 0 must not expand children");
    }

    #[test]
    fn terminal_node_returns_heuristic() {
        let mm = minimax();
        let leaf = MockNode::leaf(None, 4);
        assert_eq!(mm.evaluate(Player::Max, &leaf, 3).unwrap(), 4.0);
        assert_eq!(mm.evaluate(Player::Min, &leaf, 3).unwrap(), 4.0);
    }

    #[test]
    fn maximizer_and_minimizer_pick_extremes() {
        let mm = minimax();
        let node = MockNode::root_with_leaves(&[3, -2, 7, 1]);
        assert_eq!(mm.evaluate(Player::Max, &node, 1).unwrap(), 7.0);
        assert_eq!(mm.evaluate(Player::Min, &node, 1).unwrap(), -2.0);
    }

    #[test]
    fn players_alternate_between_plies() {
        let mm = minimax();
        // Max chooses between two Min nodes: min(5, 1) = 1 and min(4, 3) = 3.
        let root = MockNode::inner(
            None,
            0,
            vec![
                MockNode::inner(
                    Some(Action::Left),
                    0,
                    vec![MockNode::leaf(None, 5), MockNode::leaf(None, 1)],
                ),
                MockNode::inner(
                    Some(Action::Right),
                    0,
                    vec![MockNode::leaf(None, 4), MockNode::leaf(None, 3)],
                ),
            ],
        );
        assert_eq!(mm.evaluate(Player::Max, &root, 2).unwrap(), 3.0);
        // Min at the root picks max(5, 1) = 5 vs max(4, 3) = 4.
        assert_eq!(mm.evaluate(Player::Min, &root, 2).unwrap(), 4.0);
    }

    #[test]
    fn cutoff_uses_inner_node_value() {
        let mm = minimax();
        let root = MockNode::inner(
            None,
            0,
            vec![MockNode::inner(
                Some(Action::Up),
                2,
                vec![MockNode::leaf(None, 100)],
            )],
        );
        assert_eq!(mm.evaluate(Player::Max, &root, 1).unwrap(), 2.0);
        assert_eq!(mm.evaluate(Player::Max, &root, 2).unwrap(), 100.0);
    }

    #[test]
    fn visits_every_node_without_pruning() {
        let mm = minimax();
        let node = GameNode::root(single_fish_state(10), Board::default());
        let mut nodes = 0;
        mm.search(Player::Max, &node, 3, &mut nodes).unwrap();
        assert_eq!(nodes, 1 + 5 + 25 + 125);
    }

    #[test]
    fn maximizer_moves_toward_fish() {
        let mm = minimax();
        let mut state = FishingState::new(Position::new(0, 5), Position::new(10, 15), 10);
        state.add_fish(1, Position::new(2, 5), 4);
        let node = GameNode::root(state, Board::default());
        let right = &node.children()[Action::Right.index()];
        let left = &node.children()[Action::Left.index()];
        let v_right = mm.evaluate(Player::Min, right, 1).unwrap();
        let v_left = mm.evaluate(Player::Min, left, 1).unwrap();
        assert!(v_right > v_left);
    }

    #[test]
    fn inconsistent_state_propagates() {
        let mm = minimax();
        let mut leaf = MockNode::leaf(None, 0);
        leaf.state.add_fish(3, Position::new(1, 1), 2);
        leaf.state.caught[0] = Some(3);
        let root = MockNode::inner(None, 0, vec![MockNode::leaf(None, 1), leaf]);
        assert_eq!(
            mm.evaluate(Player::Max, &root, 1),
            Err(EvalError::InconsistentState { player: 0, fish: 3 })
        );
    }
}
