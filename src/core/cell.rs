//! What the proximity sensor reports for one neighbouring cell.

use serde::{Deserialize, Serialize};

/// Sensed state of a neighbouring cell.
///
/// The controller only ever asks two questions of a reading: is it a wall,
/// and is it a passage. `Passage` is the port's "preferred open cell"
/// flag. The bundled maze host raises it for open cells the agent has not
/// stood on during the current run; cells it has already trodden read
/// `BeenBefore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    /// Impassable
    #[default]
    Wall,
    /// Open cell flagged as a passage
    Passage,
    /// Open cell without the passage flag
    BeenBefore,
}

impl CellKind {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }

    /// Any non-wall reading.
    #[inline]
    pub fn is_open(self) -> bool {
        self != CellKind::Wall
    }

    #[inline]
    pub fn is_passage(self) -> bool {
        self == CellKind::Passage
    }
}
