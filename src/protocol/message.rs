//! Game-state messages and move responses.
//!
//! Each message is one JSON object per line. Per-player maps are keyed by
//! player index (`"0"`, `"1"`), fish maps by fish id, and positions are
//! `[x, y]` arrays. A caught entry of `null` or any negative id means the
//! hook is empty.
//!
//! ```json
//! {"game_over": false,
//!  "hooks_positions": {"0": [0, 19], "1": [10, 19]},
//!  "fish_positions": {"7": [10, 0]},
//!  "fish_scores": {"7": 5},
//!  "caught": {"0": null, "1": -1},
//!  "player_scores": {"0": 0, "1": 0}}
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, FishId, FishingState, Player, Position, ALL_PLAYERS};

/// Plies assumed when a message does not say how long the game lasts.
pub const UNBOUNDED_PLIES: u32 = u32::MAX;

/// Errors raised while decoding a message.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing hook position for player {0}")]
    MissingHook(usize),

    #[error("unknown player index {0}")]
    UnknownPlayer(usize),

    #[error("fish id {0} is out of range")]
    InvalidFishId(i64),

    #[error("hook of player {player} at ({x}, {y}) is off the board")]
    HookOffBoard { player: usize, x: i32, y: i32 },

    #[error("fish {fish} at ({x}, {y}) is off the board")]
    FishOffBoard { fish: FishId, x: i32, y: i32 },
}

/// A game-state update from the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub hooks_positions: BTreeMap<usize, [i32; 2]>,
    #[serde(default)]
    pub fish_positions: BTreeMap<FishId, [i32; 2]>,
    #[serde(default)]
    pub fish_scores: BTreeMap<FishId, i32>,
    #[serde(default)]
    pub caught: BTreeMap<usize, Option<i64>>,
    #[serde(default)]
    pub player_scores: BTreeMap<usize, i32>,
    #[serde(default)]
    pub remaining_plies: Option<u32>,
}

impl Message {
    /// Builds the state snapshot with player 0 to move. Every hook and fish
    /// must lie on `board`.
    pub fn to_state(&self, board: &Board) -> Result<FishingState, ProtocolError> {
        for &i in self
            .hooks_positions
            .keys()
            .chain(self.caught.keys())
            .chain(self.player_scores.keys())
        {
            if Player::from_index(i).is_none() {
                return Err(ProtocolError::UnknownPlayer(i));
            }
        }

        let hook = |p: Player| -> Result<Position, ProtocolError> {
            let pos = self
                .hooks_positions
                .get(&p.index())
                .map(|&xy| Position::from(xy))
                .ok_or(ProtocolError::MissingHook(p.index()))?;
            if !board.contains(pos) {
                return Err(ProtocolError::HookOffBoard {
                    player: p.index(),
                    x: pos.x,
                    y: pos.y,
                });
            }
            Ok(pos)
        };

        let mut state = FishingState::new(
            hook(Player::Max)?,
            hook(Player::Min)?,
            self.remaining_plies.unwrap_or(UNBOUNDED_PLIES),
        );

        for p in ALL_PLAYERS {
            let i = p.index();
            state.scores[i] = self.player_scores.get(&i).copied().unwrap_or(0);
            state.caught[i] = match self.caught.get(&i).copied().flatten() {
                Some(id) if id < 0 => None,
                Some(id) => Some(
                    FishId::try_from(id).map_err(|_| ProtocolError::InvalidFishId(id))?,
                ),
                None => None,
            };
        }

        for (&fish, &xy) in &self.fish_positions {
            let pos = Position::from(xy);
            if !board.contains(pos) {
                return Err(ProtocolError::FishOffBoard {
                    fish,
                    x: pos.x,
                    y: pos.y,
                });
            }
            state.fish_positions.insert(fish, pos);
        }
        state.fish_scores = self.fish_scores.clone();
        Ok(state)
    }
}

/// The move sent back for one decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub action: Action,
    /// Search time is not measured and is always `null`.
    pub search_time: Option<f64>,
}

impl Response {
    pub fn new(action: Action) -> Self {
        Response {
            action,
            search_time: None,
        }
    }
}

/// Parses one message line.
pub fn parse_message(line: &str) -> Result<Message, ProtocolError> {
    Ok(serde_json::from_str(line.trim())?)
}

/// Formats a response as a single JSON line (without the newline).
pub fn format_response(response: &Response) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(response)?)
}
