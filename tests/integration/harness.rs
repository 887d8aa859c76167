//! Test harness: a hand-driven sensor port and a perfect-maze generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marga::{CellKind, Coordinate, Heading, RelativeDirection, SensorPort};

/// Enable log output once per test binary.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// A heading command observed by [`ScriptedPort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortCommand {
    Face(RelativeDirection),
    SetHeading(Heading),
}

/// Sensor port whose position and readings are set by the test.
///
/// Readings are stored by absolute heading, so turning the port changes what
/// `look` returns the same way a real robot's sensors would.
pub struct ScriptedPort {
    /// Readings indexed by `Heading::index()`
    readings: [CellKind; 4],
    heading: Heading,
    location: Coordinate,
    runs: u32,
    /// Every command received, in order
    pub commands: Vec<PortCommand>,
}

impl ScriptedPort {
    pub fn new(location: Coordinate, heading: Heading) -> Self {
        Self {
            readings: [CellKind::Wall; 4],
            heading,
            location,
            runs: 0,
            commands: Vec::new(),
        }
    }

    /// Move the port to a cell and heading.
    pub fn place(&mut self, location: Coordinate, heading: Heading) -> &mut Self {
        self.location = location;
        self.heading = heading;
        self
    }

    /// Set the four neighbour readings by absolute direction.
    pub fn sees(
        &mut self,
        north: CellKind,
        east: CellKind,
        south: CellKind,
        west: CellKind,
    ) -> &mut Self {
        self.readings = [north, east, south, west];
        self
    }

    pub fn set_runs(&mut self, runs: u32) -> &mut Self {
        self.runs = runs;
        self
    }

    pub fn last_command(&self) -> Option<PortCommand> {
        self.commands.last().copied()
    }
}

impl SensorPort for ScriptedPort {
    fn look(&self, direction: RelativeDirection) -> CellKind {
        self.readings[self.heading.turn(direction).index() as usize]
    }

    fn heading(&self) -> Heading {
        self.heading
    }

    fn location(&self) -> Coordinate {
        self.location
    }

    fn run_count(&self) -> u32 {
        self.runs
    }

    fn set_heading(&mut self, heading: Heading) {
        self.commands.push(PortCommand::SetHeading(heading));
        self.heading = heading;
    }

    fn face(&mut self, direction: RelativeDirection) {
        self.commands.push(PortCommand::Face(direction));
        self.heading = self.heading.turn(direction);
    }
}

/// Generate a perfect maze (exactly one path between any two cells) of
/// `cols` x `rows` rooms with a recursive backtracker.
///
/// The start is the top-left room and the target the bottom-right one.
pub fn perfect_maze(cols: usize, rows: usize, seed: u64) -> String {
    let width = 2 * cols + 1;
    let height = 2 * rows + 1;
    let mut grid = vec![vec!['#'; width]; height];
    let mut carved = vec![vec![false; cols]; rows];
    let mut rng = StdRng::seed_from_u64(seed);

    let mut stack = vec![(0usize, 0usize)];
    carved[0][0] = true;
    grid[1][1] = '.';

    while let Some(&(cx, cy)) = stack.last() {
        let mut neighbours = Vec::with_capacity(4);
        if cx > 0 && !carved[cy][cx - 1] {
            neighbours.push((cx - 1, cy));
        }
        if cx + 1 < cols && !carved[cy][cx + 1] {
            neighbours.push((cx + 1, cy));
        }
        if cy > 0 && !carved[cy - 1][cx] {
            neighbours.push((cx, cy - 1));
        }
        if cy + 1 < rows && !carved[cy + 1][cx] {
            neighbours.push((cx, cy + 1));
        }

        if neighbours.is_empty() {
            stack.pop();
            continue;
        }

        let (nx, ny) = neighbours[rng.random_range(0..neighbours.len())];
        carved[ny][nx] = true;
        grid[2 * ny + 1][2 * nx + 1] = '.';
        grid[cy + ny + 1][cx + nx + 1] = '.';
        stack.push((nx, ny));
    }

    grid[1][1] = 'S';
    grid[2 * rows - 1][2 * cols - 1] = 'T';

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
