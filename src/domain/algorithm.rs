//! Selects how a generation is computed.
//!
//! Both strategies produce identical grids; parallel only pays off once the
//! grid is large enough to amortize the rayon split.

use super::{Grid, Rule};

/// Evolution strategy used by the automaton
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows split across the rayon pool
    Parallel,
}

impl Algorithm {
    /// Cell count from which `auto` picks the parallel path
    pub const PARALLEL_THRESHOLD: usize = 100 * 100;

    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Pick a strategy from the grid size
    pub fn auto(rows: usize, cols: usize) -> Self {
        if rows.saturating_mul(cols) >= Self::PARALLEL_THRESHOLD {
            Algorithm::Parallel
        } else {
            Algorithm::Serial
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Advance `grid` by one generation with this strategy
    pub fn step(self, grid: &Grid, rule: &dyn Rule) -> Grid {
        match self {
            Algorithm::Serial => grid.step(rule),
            Algorithm::Parallel => grid.step_parallel(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_auto_switches_on_size() {
        assert_eq!(Algorithm::auto(40, 60), Algorithm::Serial);
        assert_eq!(Algorithm::auto(100, 100), Algorithm::Parallel);
        assert_eq!(Algorithm::auto(0, 0), Algorithm::Serial);
        assert_eq!(Algorithm::auto(usize::MAX, 2), Algorithm::Parallel);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Serial", "Parallel"]);
    }
}
