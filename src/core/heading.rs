//! Absolute headings and agent-relative directions.
//!
//! Both are quarter-turn indices on the compass. Converting between them is
//! a pure function of the agent's current heading:
//!
//! ```text
//!              NORTH (y-1)
//!                 │
//!   WEST (x-1) ───┼─── EAST (x+1)
//!                 │
//!              SOUTH (y+1)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute compass heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Heading {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// All headings in clockwise order starting at NORTH.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Heading for a clockwise quarter-turn index (wraps modulo 4).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }

    /// Clockwise quarter-turn index from NORTH.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Reverse heading: two quarter-turns.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Absolute heading reached by turning towards `direction` from `self`.
    #[inline]
    pub fn turn(self, direction: RelativeDirection) -> Self {
        Self::from_index(self.index() + direction.quarter_turns())
    }

    /// Relative direction that points at `self` for an agent facing `current`.
    #[inline]
    pub fn relative_to(self, current: Heading) -> RelativeDirection {
        RelativeDirection::from_quarter_turns(self.index() + 4 - current.index())
    }

    /// Grid offset of one step along this heading. Rows grow southwards.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction relative to the agent's current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelativeDirection {
    Ahead,
    Right,
    Behind,
    Left,
}

/// Order in which the four sensor readings are scanned. Candidate lists and
/// first-match searches follow this order.
pub const SCAN_ORDER: [RelativeDirection; 4] = [
    RelativeDirection::Ahead,
    RelativeDirection::Behind,
    RelativeDirection::Left,
    RelativeDirection::Right,
];

impl RelativeDirection {
    /// Clockwise quarter-turns from AHEAD.
    #[inline]
    pub fn quarter_turns(self) -> u8 {
        match self {
            RelativeDirection::Ahead => 0,
            RelativeDirection::Right => 1,
            RelativeDirection::Behind => 2,
            RelativeDirection::Left => 3,
        }
    }

    #[inline]
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => RelativeDirection::Ahead,
            1 => RelativeDirection::Right,
            2 => RelativeDirection::Behind,
            _ => RelativeDirection::Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RelativeDirection::Ahead => "AHEAD",
            RelativeDirection::Right => "RIGHT",
            RelativeDirection::Behind => "BEHIND",
            RelativeDirection::Left => "LEFT",
        }
    }
}

impl fmt::Display for RelativeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
