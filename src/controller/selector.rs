//! Uniform random exit selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::RelativeDirection;
use crate::geometry::LocalView;

/// Picks one exit uniformly from a candidate list.
///
/// Candidate lists are always built in sensor scan order, so a seeded
/// selector makes whole runs reproducible.
#[derive(Clone, Debug)]
pub struct ExitSelector {
    rng: StdRng,
}

impl ExitSelector {
    /// Create a selector. `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Uniform pick. `None` only for an empty list.
    pub fn pick(&mut self, candidates: &[RelativeDirection]) -> Option<RelativeDirection> {
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx])
    }

    /// Junction exit choice: passages if there are any, otherwise any
    /// non-wall exit.
    pub fn junction_exit(&mut self, view: &LocalView) -> Option<RelativeDirection> {
        let passages = view.passage_exits();
        if passages.is_empty() {
            self.pick(&view.open_exits())
        } else {
            self.pick(&passages)
        }
    }
}
