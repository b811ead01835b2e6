//! Players and hook actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two boats. `Max` is player 0 (the searching side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Max,
    Min,
}

/// Both players in index order.
pub const ALL_PLAYERS: [Player; 2] = [Player::Max, Player::Min];

impl Player {
    /// Wire index of the player (0 or 1).
    pub const fn index(self) -> usize {
        match self {
            Player::Max => 0,
            Player::Min => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Player> {
        match i {
            0 => Some(Player::Max),
            1 => Some(Player::Min),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

/// A single hook move.
///
/// The discriminants are the wire indices; index 0 must stay `Stay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Stay = 0,
    Left = 1,
    Right = 2,
    Up = 3,
    Down = 4,
}

/// Number of distinct actions.
pub const ACTION_COUNT: usize = 5;

/// All actions in index order.
pub const ALL_ACTIONS: [Action; ACTION_COUNT] = [
    Action::Stay,
    Action::Left,
    Action::Right,
    Action::Up,
    Action::Down,
];

impl Action {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Action> {
        ALL_ACTIONS.get(i).copied()
    }

    /// External string label.
    pub const fn label(self) -> &'static str {
        match self {
            Action::Stay => "stay",
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
        }
    }

    /// Hook displacement `(dx, dy)` before wrapping and clamping.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Action::Stay => (0, 0),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
            Action::Up => (0, 1),
            Action::Down => (0, -1),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown action label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action label '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ACTIONS
            .iter()
            .copied()
            .find(|a| a.label() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_table_starts_with_stay() {
        assert_eq!(Action::from_index(0), Some(Action::Stay));
        assert_eq!(Action::from_index(4), Some(Action::Down));
        assert_eq!(Action::from_index(5), None);
        for (i, a) in ALL_ACTIONS.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }

    #[test]
    fn labels_parse_back() {
        for a in ALL_ACTIONS {
            assert_eq!(a.label().parse::<Action>(), Ok(a));
        }
        assert_eq!(
            "sideways".parse::<Action>(),
            Err(UnknownAction("sideways".to_string()))
        );
    }

    #[test]
    fn serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Action::Left).unwrap(), "\"left\"");
        let a: Action = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(a, Action::Down);
    }

    #[test]
    fn opponent_toggles() {
        assert_eq!(Player::Max.opponent(), Player::Min);
        assert_eq!(Player::Min.opponent(), Player::Max);
        assert_eq!(Player::from_index(1), Some(Player::Min));
        assert_eq!(Player::from_index(2), None);
    }
}
