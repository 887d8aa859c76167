//! Error types for Marga

use thiserror::Error;

use crate::core::{Coordinate, Heading};
use crate::geometry::CellClass;

/// Marga error type
#[derive(Error, Debug)]
pub enum MargaError {
    /// Exit selection found nothing to choose from although the cell was
    /// classified as having open exits. Either the classifier or the
    /// sensor port is inconsistent.
    #[error("No candidate exits at {location} ({class}, heading {heading})")]
    NoCandidateExits {
        /// Cell where selection failed
        location: Coordinate,
        /// Classification computed for that cell
        class: CellClass,
        /// Heading at the time of the step
        heading: Heading,
    },

    /// Exit heading written for a coordinate that was never recorded.
    #[error("No junction recorded at {0}")]
    UnknownJunction(Coordinate),

    /// A run exceeded the configured step budget.
    #[error("Step limit exceeded: {steps} steps without reaching the target")]
    StepLimit {
        /// Steps taken when the run was abandoned
        steps: usize,
    },

    /// Malformed maze description.
    #[error("Maze format error: {0}")]
    MazeFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MargaError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoCandidateExits { .. } => "NO_CANDIDATE_EXITS",
            Self::UnknownJunction(_) => "UNKNOWN_JUNCTION",
            Self::StepLimit { .. } => "STEP_LIMIT",
            Self::MazeFormat(_) => "MAZE_FORMAT",
            Self::Config(_) => "CONFIG",
            Self::Io(_) => "IO",
        }
    }

    /// Invariant violations inside the controller. The host must stop
    /// driving the controller when one of these is returned.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoCandidateExits { .. } | Self::UnknownJunction(_)
        )
    }
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
