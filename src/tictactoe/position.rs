//! Board positions numbered 1-9 in row-major order

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell address on the board, numbered as the player sees it:
///
/// ```text
///  1 | 2 | 3
/// ---|---|---
///  4 | 5 | 6
/// ---|---|---
///  7 | 8 | 9
/// ```
///
/// A `Position` is always in range; out-of-range numbers are rejected at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// All nine positions in scan order (1 through 9).
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Create a position from its player-facing number (1-9).
    pub fn new(number: i64) -> Result<Self, crate::Error> {
        match u8::try_from(number) {
            Ok(n @ 1..=9) => Ok(Position(n)),
            _ => Err(crate::Error::InvalidPosition { position: number }),
        }
    }

    /// Create a position from a cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Player-facing number (1-9)
    pub fn number(self) -> u8 {
        self.0
    }

    /// Cell index into a row-major array (0-8)
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn row(self) -> usize {
        self.index() / 3
    }

    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    /// Parse a move typed by a player. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed.parse().map_err(|_| crate::Error::InvalidInput {
            input: trimmed.to_string(),
        })?;
        Position::new(number)
    }
}

impl TryFrom<u8> for Position {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::new(i64::from(value))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
