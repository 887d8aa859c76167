//! Local-geometry classification.
//!
//! Every step the four neighbour readings are captured once into a
//! [`LocalView`] and the current cell is classified from the number of
//! non-wall exits. Nothing here is cached across steps.

use std::fmt;

use crate::core::{CellKind, RelativeDirection, SCAN_ORDER};
use crate::sensor::SensorPort;

/// Shape of the current cell, from the number of non-wall neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Zero or one open neighbour
    DeadEnd,
    /// Exactly two open neighbours
    Corridor,
    /// Three or more open neighbours (junction or crossroads)
    Junction,
}

impl CellClass {
    /// Classify from a count of non-wall exits.
    pub fn from_exit_count(exits: usize) -> Self {
        match exits {
            0 | 1 => CellClass::DeadEnd,
            2 => CellClass::Corridor,
            _ => CellClass::Junction,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellClass::DeadEnd => "dead end",
            CellClass::Corridor => "corridor",
            CellClass::Junction => "junction",
        }
    }
}

impl fmt::Display for CellClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the four neighbour readings for one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalView {
    /// Readings in scan order: AHEAD, BEHIND, LEFT, RIGHT
    readings: [CellKind; 4],
}

impl LocalView {
    /// Build a view from explicit readings.
    pub fn new(ahead: CellKind, behind: CellKind, left: CellKind, right: CellKind) -> Self {
        Self {
            readings: [ahead, behind, left, right],
        }
    }

    /// Read all four directions from a port.
    pub fn capture<P: SensorPort + ?Sized>(port: &P) -> Self {
        Self {
            readings: SCAN_ORDER.map(|d| port.look(d)),
        }
    }

    #[inline]
    pub fn look(&self, direction: RelativeDirection) -> CellKind {
        let slot = match direction {
            RelativeDirection::Ahead => 0,
            RelativeDirection::Behind => 1,
            RelativeDirection::Left => 2,
            RelativeDirection::Right => 3,
        };
        self.readings[slot]
    }

    /// Iterate `(direction, reading)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (RelativeDirection, CellKind)> + '_ {
        SCAN_ORDER.iter().zip(self.readings.iter()).map(|(&d, &k)| (d, k))
    }

    pub fn non_wall_exit_count(&self) -> usize {
        self.readings.iter().filter(|k| k.is_open()).count()
    }

    pub fn passage_exit_count(&self) -> usize {
        self.readings.iter().filter(|k| k.is_passage()).count()
    }

    pub fn classify(&self) -> CellClass {
        CellClass::from_exit_count(self.non_wall_exit_count())
    }

    /// Non-wall directions in scan order.
    pub fn open_exits(&self) -> Vec<RelativeDirection> {
        self.iter()
            .filter(|(_, k)| k.is_open())
            .map(|(d, _)| d)
            .collect()
    }

    /// Passage directions in scan order.
    pub fn passage_exits(&self) -> Vec<RelativeDirection> {
        self.iter()
            .filter(|(_, k)| k.is_passage())
            .map(|(d, _)| d)
            .collect()
    }

    /// First non-wall direction in scan order.
    pub fn first_open(&self) -> Option<RelativeDirection> {
        self.iter().find(|(_, k)| k.is_open()).map(|(d, _)| d)
    }

    /// The forward opening of a corridor: first non-wall direction that is
    /// not BEHIND.
    pub fn corridor_exit(&self) -> Option<RelativeDirection> {
        self.iter()
            .find(|(d, k)| *d != RelativeDirection::Behind && k.is_open())
            .map(|(d, _)| d)
    }
}
