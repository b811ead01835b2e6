//! Position evaluation.
//!
//! Scores a fishing position from player 0's perspective, combining the
//! banked score difference with how close each hook is to a valuable fish.

pub mod heuristic;

pub use heuristic::{check_consistency, EvalError, Heuristic};
