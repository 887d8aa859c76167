//! Navigation modes, commands and step reports.

use std::fmt;

use crate::core::{Coordinate, Heading, RelativeDirection};
use crate::geometry::CellClass;
use crate::sensor::SensorPort;

/// Navigation mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Depth-first exploration of untrodden cells
    #[default]
    Explore,
    /// Retracing towards the last junction with unexplored exits
    Backtrack,
    /// Replaying remembered junction exits from a previous run
    Route,
}

impl Mode {
    /// Mode name for logging
    pub fn name(self) -> &'static str {
        match self {
            Mode::Explore => "Explore",
            Mode::Backtrack => "Backtrack",
            Mode::Route => "Route",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single heading command issued in a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    /// Turn towards a direction relative to the current heading
    Face(RelativeDirection),
    /// Turn directly to an absolute heading
    SetHeading(Heading),
}

impl Steer {
    /// Absolute heading this command leaves the agent facing.
    pub fn resolve(self, current: Heading) -> Heading {
        match self {
            Steer::Face(direction) => current.turn(direction),
            Steer::SetHeading(heading) => heading,
        }
    }

    /// Issue the command through a port.
    pub fn apply<P: SensorPort + ?Sized>(self, port: &mut P) {
        match self {
            Steer::Face(direction) => port.face(direction),
            Steer::SetHeading(heading) => port.set_heading(heading),
        }
    }
}

impl fmt::Display for Steer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Steer::Face(direction) => write!(f, "face {}", direction),
            Steer::SetHeading(heading) => write!(f, "set {}", heading),
        }
    }
}

/// What happened during one controller step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Step index within the current run
    pub step: usize,
    /// Cell the step was taken in
    pub location: Coordinate,
    /// Classification of that cell
    pub class: CellClass,
    /// Mode the step was handled in
    pub mode_before: Mode,
    /// Mode for the next step
    pub mode_after: Mode,
    /// Command issued through the port
    pub command: Steer,
    /// Heading after the command
    pub heading: Heading,
}

/// Navigation progress tracking
#[derive(Clone, Debug, Default)]
pub struct NavigationProgress {
    /// Current mode name
    pub mode: String,
    /// Steps taken in the current run
    pub steps: usize,
    /// Junction records held in memory
    pub junctions_recorded: usize,
    /// Times a route replay had to fall back to exploration
    pub route_fallbacks: usize,
    /// Mazes started (including ones caused by untrusted memory)
    pub mazes_started: usize,
}
