//! Multi-run driver: steps the controller until the robot reaches the
//! target, once per run.

use std::collections::HashMap;

use log::{debug, info};

use crate::config::SimulationConfig;
use crate::controller::{Mode, NavigationController, StepReport};
use crate::core::Coordinate;
use crate::error::{MargaError, Result};
use crate::sensor::SensorPort;

use super::maze::GridMaze;
use super::robot::MazeRobot;

/// Outcome of one traversal.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Run counter value the run started with
    pub run: u32,
    /// Controller steps taken
    pub steps: usize,
    /// Blocked moves
    pub collisions: usize,
    /// Cells occupied, start and target included
    pub path: Vec<Coordinate>,
    /// Steps handled per mode
    pub mode_steps: HashMap<Mode, usize>,
    /// Per-step reports
    pub reports: Vec<StepReport>,
    /// Length in cells of the shortest start-target path
    pub shortest: Option<usize>,
}

impl RunSummary {
    /// Steps handled in the given mode.
    pub fn steps_in(&self, mode: Mode) -> usize {
        self.mode_steps.get(&mode).copied().unwrap_or(0)
    }

    /// True when every step of the run was handled in `mode`.
    pub fn only_in(&self, mode: Mode) -> bool {
        self.steps_in(mode) == self.steps
    }

    /// Modes seen during the run, in first-seen order.
    pub fn modes_seen(&self) -> Vec<Mode> {
        let mut seen = Vec::new();
        for report in &self.reports {
            if !seen.contains(&report.mode_before) {
                seen.push(report.mode_before);
            }
        }
        seen
    }
}

/// Drives a [`NavigationController`] through repeated runs of one maze.
pub struct MazeRunner {
    controller: NavigationController,
    robot: MazeRobot,
    config: SimulationConfig,
}

impl MazeRunner {
    pub fn new(controller: NavigationController, maze: GridMaze, config: SimulationConfig) -> Self {
        let robot = MazeRobot::new(maze, config.start_heading);
        Self {
            controller,
            robot,
            config,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn robot(&self) -> &MazeRobot {
        &self.robot
    }

    /// Swap in a new maze. The run counter restarts at zero.
    pub fn regenerate(&mut self, maze: GridMaze) {
        self.robot.regenerate(maze);
        self.controller.on_reset();
    }

    /// Run once from start to target.
    ///
    /// Controller errors end the run immediately; so does exceeding
    /// `max_steps_per_run`.
    pub fn run_once(&mut self) -> Result<RunSummary> {
        self.robot.reset_run();
        self.controller.on_reset();

        let run = self.robot.run_count();
        let shortest = self
            .robot
            .maze()
            .shortest_path(self.robot.maze().start(), self.robot.maze().target())
            .map(|p| p.len());

        let mut path = vec![self.robot.location()];
        let mut reports = Vec::new();
        let mut mode_steps = HashMap::new();

        while !self.robot.at_target() {
            if reports.len() >= self.config.max_steps_per_run {
                return Err(MargaError::StepLimit {
                    steps: reports.len(),
                });
            }

            let report = self.controller.on_step(&mut self.robot)?;
            *mode_steps.entry(report.mode_before).or_insert(0) += 1;
            reports.push(report);

            if !self.robot.advance() {
                path.push(self.robot.location());
            }
        }

        self.robot.complete_run();

        let summary = RunSummary {
            run,
            steps: reports.len(),
            collisions: self.robot.collisions(),
            path,
            mode_steps,
            reports,
            shortest,
        };
        info!(
            "[Sim] Run {} reached target in {} steps ({} collisions)",
            run, summary.steps, summary.collisions
        );
        debug!("[Sim] Progress: {:?}", self.controller.progress());
        Ok(summary)
    }

    /// Run `config.runs` traversals back to back.
    pub fn run_all(&mut self) -> Result<Vec<RunSummary>> {
        (0..self.config.runs).map(|_| self.run_once()).collect()
    }
}
