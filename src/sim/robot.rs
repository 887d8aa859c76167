//! Simulated maze robot
//!
//! Grid kinematics: the robot turns instantly and moves one cell per tick.
//! Moving into a wall leaves it in place and counts a collision.

use std::collections::HashSet;

use crate::core::{CellKind, Coordinate, Heading, RelativeDirection};
use crate::sensor::SensorPort;

use super::maze::GridMaze;

/// Robot state inside a [`GridMaze`]
pub struct MazeRobot {
    maze: GridMaze,
    /// Current cell
    position: Coordinate,
    /// Current heading
    heading: Heading,
    /// Heading restored at the start of every run
    start_heading: Heading,
    /// Cells entered during the current run, start included
    trodden: HashSet<Coordinate>,
    /// Completed runs on this maze
    runs: u32,
    /// Blocked moves during the current run
    collisions: usize,
}

impl MazeRobot {
    /// Place a robot on the maze start cell.
    pub fn new(maze: GridMaze, start_heading: Heading) -> Self {
        let position = maze.start();
        let mut robot = Self {
            maze,
            position,
            heading: start_heading,
            start_heading,
            trodden: HashSet::new(),
            runs: 0,
            collisions: 0,
        };
        robot.reset_run();
        robot
    }

    /// Get the maze
    #[inline]
    pub fn maze(&self) -> &GridMaze {
        &self.maze
    }

    /// Blocked moves in the current run
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Has the robot reached the target cell?
    #[inline]
    pub fn at_target(&self) -> bool {
        self.position == self.maze.target()
    }

    /// Cells entered during the current run
    pub fn trodden(&self) -> &HashSet<Coordinate> {
        &self.trodden
    }

    /// Move one cell along the current heading.
    ///
    /// Returns true if a collision occurred.
    pub fn advance(&mut self) -> bool {
        let next = self.position.step(self.heading);
        if !self.maze.is_open(next) {
            self.collisions += 1;
            return true;
        }
        self.position = next;
        self.trodden.insert(next);
        false
    }

    /// Put the robot back on the start cell and forget trodden cells.
    pub fn reset_run(&mut self) {
        self.position = self.maze.start();
        self.heading = self.start_heading;
        self.trodden.clear();
        self.trodden.insert(self.position);
        self.collisions = 0;
    }

    /// Count a finished traversal.
    pub fn complete_run(&mut self) {
        self.runs += 1;
    }

    /// Replace the maze and zero the run counter.
    pub fn regenerate(&mut self, maze: GridMaze) {
        self.maze = maze;
        self.runs = 0;
        self.reset_run();
    }
}

impl SensorPort for MazeRobot {
    fn look(&self, direction: RelativeDirection) -> CellKind {
        let cell = self.position.step(self.heading.turn(direction));
        if !self.maze.is_open(cell) {
            CellKind::Wall
        } else if self.trodden.contains(&cell) {
            CellKind::BeenBefore
        } else {
            CellKind::Passage
        }
    }

    fn heading(&self) -> Heading {
        self.heading
    }

    fn location(&self) -> Coordinate {
        self.position
    }

    fn run_count(&self) -> u32 {
        self.runs
    }

    fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }
}
