//! Navigation controller implementation.

use log::{debug, info, trace, warn};

use crate::config::NavigatorConfig;
use crate::core::{CellKind, Coordinate, Heading, RelativeDirection};
use crate::error::{MargaError, Result};
use crate::geometry::{CellClass, LocalView};
use crate::memory::JunctionMemory;
use crate::sensor::SensorPort;

use super::selector::ExitSelector;
use super::state::{Mode, NavigationProgress, Steer, StepReport};

/// Everything sensed at the start of a step.
struct StepContext {
    location: Coordinate,
    heading: Heading,
    view: LocalView,
    class: CellClass,
}

impl StepContext {
    fn no_candidates(&self) -> MargaError {
        MargaError::NoCandidateExits {
            location: self.location,
            class: self.class,
            heading: self.heading,
        }
    }

    /// Reading in the direction a command leaves the agent facing.
    fn ahead_after(&self, steer: Steer) -> CellKind {
        let facing = steer.resolve(self.heading);
        self.view.look(facing.relative_to(self.heading))
    }
}

/// Navigation controller
///
/// Implements the explore / backtrack / route state machine on top of a
/// junction memory. The host calls [`on_step`](Self::on_step) once per tick
/// and [`on_reset`](Self::on_reset) between runs.
pub struct NavigationController {
    /// Configuration
    config: NavigatorConfig,
    /// Junction facts for the current maze
    memory: JunctionMemory,
    /// Random exit selection
    selector: ExitSelector,
    /// Current mode
    mode: Mode,
    /// Steps since the current run began
    step_counter: usize,
    /// Cell the first run of the current maze started from
    start: Option<Coordinate>,
    /// Run counter seen at the last step 0
    last_run_count: Option<u32>,
    /// Route replays that degraded to exploration
    route_fallbacks: usize,
    /// Mazes started
    mazes_started: usize,
}

impl NavigationController {
    /// Create a new navigation controller
    pub fn new(config: NavigatorConfig) -> Self {
        let selector = ExitSelector::new(config.rng_seed);
        Self {
            config,
            memory: JunctionMemory::new(),
            selector,
            mode: Mode::Explore,
            step_counter: 0,
            start: None,
            last_run_count: None,
            route_fallbacks: 0,
            mazes_started: 0,
        }
    }

    /// Get current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Steps taken in the current run
    pub fn step_counter(&self) -> usize {
        self.step_counter
    }

    /// Start cell of the current maze, once known
    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    /// Junction memory
    pub fn memory(&self) -> &JunctionMemory {
        &self.memory
    }

    /// Get navigation progress
    pub fn progress(&self) -> NavigationProgress {
        NavigationProgress {
            mode: self.mode.name().to_string(),
            steps: self.step_counter,
            junctions_recorded: self.memory.len(),
            route_fallbacks: self.route_fallbacks,
            mazes_started: self.mazes_started,
        }
    }

    /// Called by the host between runs.
    ///
    /// Only the step counter is cleared; the mode is re-derived from the run
    /// counter on the next step, so calling this at any time (or twice) is
    /// safe.
    pub fn on_reset(&mut self) {
        debug!("[Nav] Reset after {} steps", self.step_counter);
        self.step_counter = 0;
    }

    /// Handle one tick: sense, update memory, issue exactly one command.
    ///
    /// On error no command is issued and the step counter does not advance.
    pub fn on_step<P: SensorPort + ?Sized>(&mut self, port: &mut P) -> Result<StepReport> {
        let location = port.location();
        let heading = port.heading();

        if self.step_counter == 0 {
            self.begin_run(location, port.run_count());
        }

        let view = LocalView::capture(&*port);
        let ctx = StepContext {
            location,
            heading,
            view,
            class: view.classify(),
        };

        let mode_before = self.mode;
        let command = match self.mode {
            Mode::Explore => self.explore(&ctx)?,
            Mode::Backtrack => self.backtrack(&ctx)?,
            Mode::Route => self.route(&ctx)?,
        };
        command.apply(port);

        if mode_before != self.mode {
            debug!(
                "[Nav] {} -> {} at {} ({})",
                mode_before, self.mode, location, ctx.class
            );
        }
        trace!(
            "[Nav] Step {} at {} facing {}: {} {}, {}",
            self.step_counter, location, heading, ctx.class, self.mode, command
        );

        let report = StepReport {
            step: self.step_counter,
            location,
            class: ctx.class,
            mode_before,
            mode_after: self.mode,
            command,
            heading: command.resolve(heading),
        };
        self.step_counter += 1;
        Ok(report)
    }

    // Run boundary

    fn begin_run(&mut self, location: Coordinate, runs: u32) {
        if runs == 0 {
            self.start_new_maze(location);
        } else if let Some(reason) = self.untrusted_memory_reason(location, runs) {
            warn!(
                "[Nav] Run {} at {}: memory untrusted ({}), exploring from scratch",
                runs, location, reason
            );
            self.start_new_maze(location);
        } else {
            self.start.get_or_insert(location);
            self.mode = Mode::Route;
            info!(
                "[Nav] Run {}: replaying route from {} ({} junctions remembered)",
                runs,
                location,
                self.memory.len()
            );
        }
        self.last_run_count = Some(runs);
    }

    fn untrusted_memory_reason(&self, location: Coordinate, runs: u32) -> Option<&'static str> {
        if !self.config.validate_route_memory {
            return None;
        }
        match (self.start, self.last_run_count) {
            (None, _) => Some("no start cell remembered"),
            (Some(start), _) if start != location => Some("start cell moved"),
            (_, Some(last)) if runs < last => Some("run counter went backwards"),
            _ => None,
        }
    }

    fn start_new_maze(&mut self, location: Coordinate) {
        self.memory.clear();
        self.mode = Mode::Explore;
        self.start = Some(location);
        self.mazes_started += 1;
        info!("[Nav] New maze, exploring from {}", location);
    }

    // Mode handlers

    fn explore(&mut self, ctx: &StepContext) -> Result<Steer> {
        match ctx.class {
            CellClass::DeadEnd => {
                let steer = self.dead_end(ctx)?;
                if self.step_counter != 0 {
                    self.mode = Mode::Backtrack;
                }
                Ok(steer)
            }
            CellClass::Corridor => {
                let steer = self.corridor(ctx)?;
                if self.step_counter == 0 {
                    // The start cell is where every replay begins.
                    self.memory.record_or_get(ctx.location, None);
                    self.memory
                        .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
                }
                Ok(steer)
            }
            CellClass::Junction => self.explore_junction(ctx),
        }
    }

    fn explore_junction(&mut self, ctx: &StepContext) -> Result<Steer> {
        let record = self.memory.record_or_get(ctx.location, Some(ctx.heading));

        if record.visited {
            let steer = Steer::Face(RelativeDirection::Behind);
            self.memory
                .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
            self.mode = Mode::Backtrack;
            return Ok(steer);
        }

        let direction = self
            .selector
            .junction_exit(&ctx.view)
            .ok_or_else(|| ctx.no_candidates())?;
        let steer = Steer::Face(direction);
        self.memory.mark_visited(ctx.location)?;
        self.memory
            .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
        Ok(steer)
    }

    fn backtrack(&mut self, ctx: &StepContext) -> Result<Steer> {
        let steer = match ctx.class {
            CellClass::DeadEnd => self.dead_end(ctx)?,
            CellClass::Junction => return self.backtrack_junction(ctx),
            CellClass::Corridor => {
                let steer = self.corridor(ctx)?;
                if self.start == Some(ctx.location) {
                    self.memory.record_or_get(ctx.location, None);
                    self.memory
                        .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
                }
                steer
            }
        };

        if ctx.ahead_after(steer).is_passage() {
            self.mode = Mode::Explore;
        }
        Ok(steer)
    }

    fn backtrack_junction(&mut self, ctx: &StepContext) -> Result<Steer> {
        if ctx.view.passage_exit_count() == 0 {
            let Some(arrival) = self.memory.arrival_heading(ctx.location) else {
                warn!(
                    "[Nav] Backtracked into unrecorded junction {}, exploring it",
                    ctx.location
                );
                return self.adopt_junction(ctx);
            };
            let steer = Steer::SetHeading(arrival.opposite());
            self.memory.set_exit_heading(ctx.location, arrival.opposite())?;
            return Ok(steer);
        }

        let direction = self
            .selector
            .pick(&ctx.view.passage_exits())
            .ok_or_else(|| ctx.no_candidates())?;
        let steer = Steer::Face(direction);
        self.memory.record_or_get(ctx.location, Some(ctx.heading));
        self.memory
            .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
        self.mode = Mode::Explore;
        Ok(steer)
    }

    fn route(&mut self, ctx: &StepContext) -> Result<Steer> {
        if ctx.class == CellClass::DeadEnd {
            return self.dead_end(ctx);
        }

        match self.memory.exit_heading(ctx.location) {
            Some(exit) if self.is_usable_exit(ctx, exit) => {
                self.memory.set_exit_heading(ctx.location, exit)?;
                Ok(Steer::SetHeading(exit))
            }
            Some(exit) => {
                warn!(
                    "[Nav] Stale route at {}: recorded {} while facing {}",
                    ctx.location, exit, ctx.heading
                );
                self.route_fallback(ctx)
            }
            None if ctx.class == CellClass::Corridor => self.corridor(ctx),
            None => {
                warn!("[Nav] No route memory at junction {}", ctx.location);
                self.route_fallback(ctx)
            }
        }
    }

    /// A recorded exit is replayed unless it would reverse the agent (it
    /// arrived along the remembered exit) or it now reads as a wall. At
    /// step 0 the current heading carries no history, so reversal is not
    /// checked.
    fn is_usable_exit(&self, ctx: &StepContext, exit: Heading) -> bool {
        let reverses = self.step_counter != 0 && exit.opposite() == ctx.heading;
        let blocked = ctx.view.look(exit.relative_to(ctx.heading)).is_wall();
        !reverses && !blocked
    }

    fn route_fallback(&mut self, ctx: &StepContext) -> Result<Steer> {
        self.route_fallbacks += 1;
        match ctx.class {
            CellClass::Junction => self.adopt_junction(ctx),
            _ => {
                let steer = self.corridor(ctx)?;
                self.memory.record_or_get(ctx.location, Some(ctx.heading));
                self.memory
                    .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
                self.mode = Mode::Explore;
                Ok(steer)
            }
        }
    }

    /// Treat the current junction as freshly discovered: record it if
    /// needed, pick an exit with the exploration rule and switch to
    /// exploring.
    fn adopt_junction(&mut self, ctx: &StepContext) -> Result<Steer> {
        let direction = self
            .selector
            .junction_exit(&ctx.view)
            .ok_or_else(|| ctx.no_candidates())?;
        let steer = Steer::Face(direction);
        self.memory.record_or_get(ctx.location, Some(ctx.heading));
        self.memory.mark_visited(ctx.location)?;
        self.memory
            .set_exit_heading(ctx.location, steer.resolve(ctx.heading))?;
        self.mode = Mode::Explore;
        Ok(steer)
    }

    // Mode-agnostic cell handlers

    fn dead_end(&self, ctx: &StepContext) -> Result<Steer> {
        if self.step_counter != 0 {
            return Ok(Steer::Face(RelativeDirection::Behind));
        }
        ctx.view
            .first_open()
            .map(Steer::Face)
            .ok_or_else(|| ctx.no_candidates())
    }

    fn corridor(&self, ctx: &StepContext) -> Result<Steer> {
        ctx.view
            .corridor_exit()
            .map(Steer::Face)
            .ok_or_else(|| ctx.no_candidates())
    }
}
