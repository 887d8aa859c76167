//! ASCII maze loader for the reference host.
//!
//! Format: one text row per maze row, `#` wall, `.` open, `S` start,
//! `T` target. Rows must all have the same width and exactly one `S` and
//! one `T` must be present. Anything outside the grid reads as wall.
//!
//! ```text
//! #######
//! #S....#
//! ###.###
//! #T..###
//! #######
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use crate::core::{Coordinate, Heading};
use crate::error::{MargaError, Result};

/// Static maze geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMaze {
    width: usize,
    height: usize,
    /// Row-major open flags
    open: Vec<bool>,
    start: Coordinate,
    target: Coordinate,
}

impl GridMaze {
    /// Parse a maze from its text form. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(MargaError::MazeFormat("maze is empty".to_string()));
        }

        let mut open = Vec::with_capacity(width * height);
        let mut start = None;
        let mut target = None;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MargaError::MazeFormat(format!(
                    "row {} has width {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let here = Coordinate::new(x as i32, y as i32);
                let cell_open = match ch {
                    '#' => false,
                    '.' => true,
                    'S' => {
                        if start.replace(here).is_some() {
                            return Err(MargaError::MazeFormat("more than one start".to_string()));
                        }
                        true
                    }
                    'T' => {
                        if target.replace(here).is_some() {
                            return Err(MargaError::MazeFormat(
                                "more than one target".to_string(),
                            ));
                        }
                        true
                    }
                    other => {
                        return Err(MargaError::MazeFormat(format!(
                            "unexpected character {:?} at {}",
                            other, here
                        )));
                    }
                };
                open.push(cell_open);
            }
        }

        let start = start.ok_or_else(|| MargaError::MazeFormat("no start cell".to_string()))?;
        let target =
            target.ok_or_else(|| MargaError::MazeFormat("no target cell".to_string()))?;

        Ok(Self {
            width,
            height,
            open,
            start,
            target,
        })
    }

    /// Load a maze from a text file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Is the cell inside the grid and not a wall?
    pub fn is_open(&self, cell: Coordinate) -> bool {
        if cell.x < 0 || cell.y < 0 {
            return false;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        x < self.width && y < self.height && self.open[y * self.width + x]
    }

    /// Number of open neighbours of a cell.
    pub fn open_neighbours(&self, cell: Coordinate) -> usize {
        Heading::ALL
            .iter()
            .filter(|&&h| self.is_open(cell.step(h)))
            .count()
    }

    /// Shortest cell path between two open cells, both ends included.
    pub fn shortest_path(&self, from: Coordinate, to: Coordinate) -> Option<Vec<Coordinate>> {
        if !self.is_open(from) || !self.is_open(to) {
            return None;
        }

        let mut came_from: HashMap<Coordinate, Coordinate> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        came_from.insert(from, from);

        while let Some(cell) = queue.pop_front() {
            if cell == to {
                let mut path = vec![to];
                let mut current = to;
                while current != from {
                    current = came_from[&current];
                    path.push(current);
                }
                path.reverse();
                return Some(path);
            }
            for heading in Heading::ALL {
                let next = cell.step(heading);
                if self.is_open(next) && !came_from.contains_key(&next) {
                    came_from.insert(next, cell);
                    queue.push_back(next);
                }
            }
        }
        None
    }
}
