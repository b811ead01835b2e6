//! Hookline player library.
//!
//! Exposes the board model, evaluation, minimax search, and protocol
//! modules for use by integration tests and the binary entry points.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_util;
