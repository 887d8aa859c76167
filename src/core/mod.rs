//! Fundamental types: coordinates, headings and sensor readings.

mod cell;
mod coord;
mod heading;

pub use cell::CellKind;
pub use coord::Coordinate;
pub use heading::{Heading, RelativeDirection, SCAN_ORDER};
