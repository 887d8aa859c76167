//! Sensor port trait for agent abstraction.

use crate::core::{CellKind, Coordinate, Heading, RelativeDirection};

/// Trait for providing local sensing and accepting heading commands.
///
/// Implement this trait to connect a `NavigationController` to a maze
/// simulator or to real hardware. Queries must be free of side effects; the
/// controller issues exactly one of `face` / `set_heading` per step.
///
/// # Example
///
/// ```ignore
/// struct MyAgent { /* ... */ }
///
/// impl SensorPort for MyAgent {
///     fn look(&self, direction: RelativeDirection) -> CellKind {
///         self.proximity[direction as usize]
///     }
///     fn heading(&self) -> Heading { self.heading }
///     fn location(&self) -> Coordinate { self.cell }
///     fn run_count(&self) -> u32 { self.runs }
///     fn set_heading(&mut self, heading: Heading) { self.heading = heading; }
/// }
/// ```
pub trait SensorPort {
    /// Reading of the neighbouring cell in `direction`, relative to the
    /// current heading.
    fn look(&self, direction: RelativeDirection) -> CellKind;

    /// Current absolute heading.
    fn heading(&self) -> Heading;

    /// Current cell.
    fn location(&self) -> Coordinate;

    /// Completed traversals since the maze was (re)generated.
    fn run_count(&self) -> u32;

    /// Turn directly to an absolute heading.
    fn set_heading(&mut self, heading: Heading);

    /// Turn towards a direction relative to the heading at call time.
    ///
    /// Default implementation resolves the direction against `heading()`
    /// and delegates to `set_heading`.
    fn face(&mut self, direction: RelativeDirection) {
        let target = self.heading().turn(direction);
        self.set_heading(target);
    }
}
