//! Junction memory.
//!
//! Keyed store of per-coordinate junction facts. Records are created the
//! first time a coordinate is treated as a junction and are reused on every
//! later visit; the first arrival heading is never overwritten while the
//! exit heading always reflects the most recent departure.

use std::collections::HashMap;

use log::{debug, trace};

use crate::core::{Coordinate, Heading};
use crate::error::{MargaError, Result};

/// Facts remembered about one junction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JunctionRecord {
    /// Cell this record describes. Always equal to its key in the memory.
    pub coordinate: Coordinate,
    /// Heading the agent was facing when it first entered this cell as a
    /// junction. `None` for the start cell, which is never "entered".
    pub arrival_heading: Option<Heading>,
    /// Heading chosen the most recent time the agent left this cell.
    /// `None` until the first departure.
    pub exit_heading: Option<Heading>,
    /// Set the first time exploration departs from this cell.
    pub visited: bool,
}

impl JunctionRecord {
    fn new(coordinate: Coordinate, arrival_heading: Option<Heading>) -> Self {
        Self {
            coordinate,
            arrival_heading,
            exit_heading: None,
            visited: false,
        }
    }
}

/// Junction records indexed by cell coordinate.
#[derive(Clone, Debug, Default)]
pub struct JunctionMemory {
    records: HashMap<Coordinate, JunctionRecord>,
}

impl JunctionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup.
    pub fn find(&self, coordinate: Coordinate) -> Option<JunctionRecord> {
        self.records.get(&coordinate).copied()
    }

    /// Return the record at `coordinate`, creating it with the given arrival
    /// heading if absent. On repeat calls the argument is ignored.
    pub fn record_or_get(
        &mut self,
        coordinate: Coordinate,
        arrival_heading: Option<Heading>,
    ) -> JunctionRecord {
        let count = self.records.len();
        *self.records.entry(coordinate).or_insert_with(|| {
            debug!(
                "[Memory] Junction {} at {} arrival {}",
                count,
                coordinate,
                arrival_heading.map_or("-", Heading::name)
            );
            JunctionRecord::new(coordinate, arrival_heading)
        })
    }

    /// Overwrite the exit heading of an existing record.
    pub fn set_exit_heading(&mut self, coordinate: Coordinate, heading: Heading) -> Result<()> {
        let record = self
            .records
            .get_mut(&coordinate)
            .ok_or(MargaError::UnknownJunction(coordinate))?;
        trace!("[Memory] Exit {} at {}", heading, coordinate);
        record.exit_heading = Some(heading);
        Ok(())
    }

    /// Flag a record as departed-from by exploration. Returns the previous
    /// value of the flag.
    pub fn mark_visited(&mut self, coordinate: Coordinate) -> Result<bool> {
        let record = self
            .records
            .get_mut(&coordinate)
            .ok_or(MargaError::UnknownJunction(coordinate))?;
        Ok(std::mem::replace(&mut record.visited, true))
    }

    /// First-seen arrival heading, if recorded.
    pub fn arrival_heading(&self, coordinate: Coordinate) -> Option<Heading> {
        self.records
            .get(&coordinate)
            .and_then(|r| r.arrival_heading)
    }

    /// Most recent exit heading, if recorded.
    pub fn exit_heading(&self, coordinate: Coordinate) -> Option<Heading> {
        self.records.get(&coordinate).and_then(|r| r.exit_heading)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every junction (new maze).
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &JunctionRecord> {
        self.records.values()
    }
}
