//! Search and move selection.
//!
//! Fixed-depth minimax over any [`TreeNode`](crate::tree::TreeNode) tree,
//! and the root selector that turns child values into one action.

pub mod minimax;
pub mod selector;

pub use minimax::Minimax;
pub use selector::{MoveSelector, SearchResult};
