//! Reference host: ASCII mazes, a grid robot and a multi-run driver.
//!
//! Used by the `marga` binary and the integration tests. Real hosts
//! implement [`SensorPort`](crate::sensor::SensorPort) themselves and only
//! need the controller.

pub mod maze;
pub mod robot;
pub mod runner;

pub use maze::GridMaze;
pub use robot::MazeRobot;
pub use runner::{MazeRunner, RunSummary};
