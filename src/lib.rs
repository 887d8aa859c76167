//! # Marga: Maze Navigation Controller
//!
//! A grid maze navigation controller that explores an unknown maze once,
//! remembers which way it left every junction, and replays the remembered
//! route on later runs through the same maze.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::config::SimulationConfig;
//! use marga::sim::{GridMaze, MazeRunner};
//! use marga::{NavigationController, NavigatorConfig};
//!
//! let maze = GridMaze::parse("#######\n#S....#\n###.###\n#T..###\n#######\n")?;
//! let controller = NavigationController::new(NavigatorConfig::seeded(42));
//! let mut runner = MazeRunner::new(controller, maze, SimulationConfig::default());
//!
//! for summary in runner.run_all()? {
//!     println!("run {}: {} steps", summary.run, summary.steps);
//! }
//! # Ok::<(), marga::MargaError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Coordinates, headings and sensor readings
//! - [`sensor`]: The [`SensorPort`] trait a host implements
//! - [`geometry`]: Local four-way view and cell classification
//! - [`memory`]: Junction memory shared across runs
//! - [`controller`]: Explore / backtrack / route state machine
//! - [`config`]: TOML configuration
//! - [`sim`]: Reference host used by the binary and tests

pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod geometry;
pub mod memory;
pub mod sensor;
pub mod sim;

pub use crate::config::{MargaConfig, NavigatorConfig, SimulationConfig};
pub use crate::controller::{
    ExitSelector, Mode, NavigationController, NavigationProgress, Steer, StepReport,
};
pub use crate::core::{CellKind, Coordinate, Heading, RelativeDirection};
pub use crate::error::{MargaError, Result};
pub use crate::geometry::{CellClass, LocalView};
pub use crate::memory::{JunctionMemory, JunctionRecord};
pub use crate::sensor::SensorPort;
