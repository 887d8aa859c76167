//! Maze cell coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Heading;

/// Integer cell coordinate. Used as the junction-memory key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index, grows southwards)
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step along `heading`
    #[inline]
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.offset();
        Coordinate::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
