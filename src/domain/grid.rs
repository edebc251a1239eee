use super::{Cell, rules::Rule};
use rand::Rng;
use rayon::prelude::*;

/// Grid is the toroidal `rows x cols` board behind the hero background.
/// Cells are stored row-major; every generation produces a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Panics if `rows * cols` overflows; `grid_dimensions` keeps container sizes below that.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Seed a grid where each cell is independently alive with `alive_probability`.
    /// Same size limit as `new`.
    pub fn random<R: Rng>(rows: usize, cols: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| Cell::from_alive(rng.random::<f64>() < alive_probability))
            .collect();
        Self { rows, cols, cells }
    }

    /// Get grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// A grid with no rows or no columns holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors with toroidal wrapping.
    /// On a single row or column the wrapped neighbors can be the cell itself,
    /// and they are counted every time they are visited.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        if self.is_empty() {
            return 0;
        }
        let (rows, cols) = (self.rows, self.cols);

        (0..3)
            .flat_map(|dr| (0..3).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 1 || dc != 1)
            .map(|(dr, dc)| {
                // (row + dr - 1 + rows) % rows without going negative
                let r = (row % rows + rows + dr - 1) % rows;
                let c = (col % cols + cols + dc - 1) % cols;
                self.cells[self.get_index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, rule: &dyn Rule, row: usize, col: usize) -> Cell {
        let current = self.cells[self.get_index(row, col)];
        rule.evolve(current, self.count_live_neighbors(row, col))
    }

    /// Pure evolution - reads only `self`, returns the next generation (serial)
    pub fn step(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(rule, row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Same generation as `step`, with rows spread over the rayon pool
    pub fn step_parallel(&self, rule: &dyn Rule) -> Self {
        let cols = self.cols;
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(rule, row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Iterate over all cells as `(row, col, cell)`
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Positions of the alive cells, row-major
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }
}
