//! Board representation and game-state types.
//!
//! Contains the cylindrical board geometry, players and hook actions, and
//! the fishing game state snapshot.

pub mod action;
pub mod geometry;
pub mod state;

pub use action::{Action, Player, UnknownAction, ACTION_COUNT, ALL_ACTIONS, ALL_PLAYERS};
pub use geometry::{Board, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use state::{FishId, FishingState};
