//! Root move selection.
//!
//! Expands the root once, scores every child with minimax from the
//! opponent's side one ply down, and keeps the first child reaching the
//! highest value. When every child scores the same, the heuristic carries
//! no information and a uniformly random action is played instead.

use std::io::Write;
use std::time::Duration;

use rand::Rng;

use crate::board::{Action, Player, ACTION_COUNT, ALL_ACTIONS};
use crate::config::{ConfigError, SearchConfig};
use crate::eval::EvalError;
use crate::search::minimax::Minimax;
use crate::tree::TreeNode;

/// Outcome of one root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub action: Action,
    /// Best child value; `None` when the root had no children.
    pub value: Option<f64>,
    /// Nodes visited, root included.
    pub nodes: u64,
    /// True when the action was drawn at random because all children tied.
    pub randomized: bool,
    /// Not measured; always `None`.
    pub search_time: Option<Duration>,
}

/// Picks player 0's move at a decision point.
#[derive(Debug, Clone, Copy)]
pub struct MoveSelector {
    minimax: Minimax,
    depth: u32,
}

impl MoveSelector {
    /// Builds a selector, rejecting an invalid config.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(MoveSelector {
            minimax: Minimax::new(config)?,
            depth: config.depth,
        })
    }

    /// Selects player 0's action at `root`.
    ///
    /// Emits one `info move` line per child and a closing `info depth` line
    /// to `out`. A root without children yields `stay`.
    pub fn select<N, R, W>(
        &self,
        root: &N,
        rng: &mut R,
        out: &mut W,
    ) -> Result<SearchResult, EvalError>
    where
        N: TreeNode,
        R: Rng,
        W: Write,
    {
        let children = root.children();
        let mut nodes: u64 = 1;

        if children.is_empty() {
            let _ = writeln!(out, "info string no moves at root, playing stay");
            return Ok(SearchResult {
                action: Action::Stay,
                value: None,
                nodes,
                randomized: false,
                search_time: None,
            });
        }

        let mut best_action = Action::Stay;
        let mut best_value = f64::NEG_INFINITY;
        let mut min_value = f64::INFINITY;

        for child in children {
            let action = child.action().unwrap_or(Action::Stay);
            let value = self
                .minimax
                .search(Player::Min, child, self.depth - 1, &mut nodes)?;
            let _ = writeln!(out, "info move {} eval {}", action, value);

            if value > best_value {
                best_value = value;
                best_action = action;
            }
            if value < min_value {
                min_value = value;
            }
        }

        // The random draw ranges over every action, not only generated children.
        let randomized = min_value == best_value;
        if randomized {
            best_action = ALL_ACTIONS[rng.gen_range(0..ACTION_COUNT)];
            let _ = writeln!(out, "info string all moves tied, playing random {}", best_action);
        }

        let _ = writeln!(
            out,
            "info depth {} nodes {} score {}",
            self.depth, nodes, best_value
        );

        Ok(SearchResult {
            action: best_action,
            value: Some(best_value),
            nodes,
            randomized,
            search_time: None,
        })
    }
}
