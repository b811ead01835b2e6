//! Search configuration.
//!
//! All tunables are injected at construction time. Every constructor that
//! takes a [`SearchConfig`] validates it first and refuses to run with an
//! out-of-range value instead of clamping it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Deepest search accepted. Cost grows as 5^depth.
pub const MAX_DEPTH: u32 = 8;

/// Default weight of the positional term in the heuristic.
pub const DEFAULT_IMPORTANCE: f64 = 1.0;

/// Errors raised by configuration validation and loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("importance weight must be a positive finite number, got {0}")]
    InvalidImportance(f64),

    #[error("board width must be positive, got {0}")]
    InvalidWidth(i32),

    #[error("board height must be positive, got {0}")]
    InvalidHeight(i32),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters for one player's search.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root, counting the root move.
    pub depth: u32,
    /// Weight of the positional difference against the banked score difference.
    pub importance: f64,
    /// X wrap period of the board.
    pub board_width: i32,
    /// Number of rows; the top row is the surface.
    pub board_height: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            importance: DEFAULT_IMPORTANCE,
            board_width: DEFAULT_WIDTH,
            board_height: DEFAULT_HEIGHT,
        }
    }
}

impl SearchConfig {
    /// Checks every field and returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        if !self.importance.is_finite() || self.importance <= 0.0 {
            return Err(ConfigError::InvalidImportance(self.importance));
        }
        if self.board_width <= 0 {
            return Err(ConfigError::InvalidWidth(self.board_width));
        }
        if self.board_height <= 0 {
            return Err(ConfigError::InvalidHeight(self.board_height));
        }
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}
