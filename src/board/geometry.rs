//! Board geometry.
//!
//! The board is a cylinder: the X axis wraps around at the board width,
//! the Y axis is bounded by the sea floor (`y = 0`) and the surface
//! (`y = height - 1`).

use serde::{Deserialize, Serialize};

/// Default board width (X wrap period).
pub const DEFAULT_WIDTH: i32 = 20;

/// Default board height.
pub const DEFAULT_HEIGHT: i32 = 20;

/// An integer board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl From<[i32; 2]> for Position {
    fn from([x, y]: [i32; 2]) -> Self {
        Position { x, y }
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Board { width, height }
    }

    /// Wraps an X coordinate into `[0, width)`.
    #[inline]
    pub fn wrap_x(&self, x: i32) -> i32 {
        x.rem_euclid(self.width)
    }

    /// Clamps a Y coordinate into `[0, height - 1]`.
    #[inline]
    pub fn clamp_y(&self, y: i32) -> i32 {
        y.clamp(0, self.height - 1)
    }

    /// True when `pos` lies on the board.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Y coordinate of the surface row, where hooked fish are landed.
    #[inline]
    pub fn surface(&self) -> i32 {
        self.height - 1
    }

    /// Horizontal distance, taking the shorter way around the cylinder.
    #[inline]
    pub fn x_distance(&self, a: i32, b: i32) -> i32 {
        let raw = (a - b).rem_euclid(self.width);
        raw.min(self.width - raw)
    }

    /// Manhattan distance with X wraparound. Y does not wrap.
    #[inline]
    pub fn distance(&self, a: Position, b: Position) -> i32 {
        self.x_distance(a.x, b.x) + (a.y - b.y).abs()
    }
}
