//! Game state representation.
//!
//! Holds a complete snapshot of the fishing game at one decision point:
//! both hooks, what each hook carries, the banked scores, and every fish
//! still swimming.

use std::collections::BTreeMap;

use rand::Rng;

use super::action::Player;
use super::geometry::{Board, Position};
use crate::tree::GameView;

/// Identifier of a fish.
pub type FishId = u32;

/// Complete game state at a point in time.
///
/// Indexed by `Player::index()` for the per-player arrays. A fish id
/// appears either in `fish_positions` or in one `caught` slot, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FishingState {
    pub hooks: [Position; 2],
    pub caught: [Option<FishId>; 2],
    pub scores: [i32; 2],
    pub fish_positions: BTreeMap<FishId, Position>,
    pub fish_scores: BTreeMap<FishId, i32>,
    /// Player whose move is next.
    pub to_move: Player,
    /// Plies left before the game ends.
    pub remaining_plies: u32,
}

impl FishingState {
    /// Creates a state with the given hooks, no fish, and player 0 to move.
    pub fn new(max_hook: Position, min_hook: Position, remaining_plies: u32) -> Self {
        FishingState {
            hooks: [max_hook, min_hook],
            caught: [None, None],
            scores: [0, 0],
            fish_positions: BTreeMap::new(),
            fish_scores: BTreeMap::new(),
            to_move: Player::Max,
            remaining_plies,
        }
    }

    /// Places a fish on the board. Returns false if the id is already in play.
    pub fn add_fish(&mut self, id: FishId, pos: Position, score: i32) -> bool {
        if self.fish_positions.contains_key(&id) || self.caught.contains(&Some(id)) {
            return false;
        }
        self.fish_positions.insert(id, pos);
        self.fish_scores.insert(id, score);
        true
    }

    /// Returns the fish at `pos`, if any.
    pub fn fish_at(&self, pos: Position) -> Option<FishId> {
        self.fish_positions
            .iter()
            .find(|&(_, p)| *p == pos)
            .map(|(&id, _)| id)
    }

    /// True when no fish remains on the board or on a hook.
    pub fn is_exhausted(&self) -> bool {
        self.fish_positions.is_empty() && self.caught.iter().all(|c| c.is_none())
    }

    /// Returns the same position seen from the other boat: hooks, catches
    /// and scores trade places, and the side to move flips.
    pub fn swapped(&self) -> Self {
        FishingState {
            hooks: [self.hooks[1], self.hooks[0]],
            caught: [self.caught[1], self.caught[0]],
            scores: [self.scores[1], self.scores[0]],
            fish_positions: self.fish_positions.clone(),
            fish_scores: self.fish_scores.clone(),
            to_move: self.to_move.opponent(),
            remaining_plies: self.remaining_plies,
        }
    }

    /// Generates a random opening: both hooks on the surface half a board
    /// apart, `fish_count` fish with scores in `1..=10` below the surface.
    pub fn random(board: Board, fish_count: usize, remaining_plies: u32, rng: &mut impl Rng) -> Self {
        let surface = board.surface();
        let x0 = rng.gen_range(0..board.width);
        let mut state = FishingState::new(
            Position::new(x0, surface),
            Position::new(board.wrap_x(x0 + board.width / 2), surface),
            remaining_plies,
        );

        let capacity = (board.width * surface.max(0)) as usize;
        let mut id: FishId = 0;
        while state.fish_positions.len() < fish_count.min(capacity) {
            let pos = Position::new(rng.gen_range(0..board.width), rng.gen_range(0..surface));
            if state.fish_at(pos).is_some() {
                continue;
            }
            state.add_fish(id, pos, rng.gen_range(1..=10));
            id += 1;
        }
        state
    }
}

impl GameView for FishingState {
    fn hook_position(&self, player: Player) -> Position {
        self.hooks[player.index()]
    }

    fn caught(&self, player: Player) -> Option<FishId> {
        self.caught[player.index()]
    }

    fn player_score(&self, player: Player) -> i32 {
        self.scores[player.index()]
    }

    fn fish_positions(&self) -> impl Iterator<Item = (FishId, Position)> + '_ {
        self.fish_positions.iter().map(|(&id, &pos)| (id, pos))
    }

    fn fish_position(&self, fish: FishId) -> Option<Position> {
        self.fish_positions.get(&fish).copied()
    }

    fn fish_score(&self, fish: FishId) -> Option<i32> {
        self.fish_scores.get(&fish).copied()
    }
}
