use super::{Cell, Grid};

/// A fixed arrangement of alive cells, stored as `(row, col)` offsets
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    /// Place pattern on grid with its top-left corner at `(row, col)`.
    /// Offsets that fall outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

impl Grid {
    /// Dead grid with a single pattern stamped at `(row, col)`
    pub fn from_pattern(rows: usize, cols: usize, pattern: &Pattern, row: usize, col: usize) -> Self {
        let mut grid = Grid::new(rows, cols);
        pattern.place_on(&mut grid, row, col);
        grid
    }
}

/// Small still lifes, oscillators and spaceships
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    /// Blinker - horizontal bar in the middle row of a 3x3 box
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ]
        )
    }

    /// Glider - travels one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConwayRule;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let empty = Pattern::new("Empty", "", vec![]);
        assert_eq!((empty.rows, empty.cols), (0, 0));
    }

    #[test]
    fn test_place_clips_at_edges() {
        let grid = Grid::from_pattern(2, 2, &presets::beacon(), 0, 0);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::toad(), presets::beacon()] {
            let grid = Grid::from_pattern(10, 10, &pattern, 3, 3);
            let once = grid.step(&ConwayRule);
            assert_ne!(once, grid, "{} should change", pattern.name);
            assert_eq!(once.step(&ConwayRule), grid, "{} should return", pattern.name);
        }
    }
}
