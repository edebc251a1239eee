//! The automaton engine: owns the current grid and replaces it wholesale on
//! every step, initialize and resize.

use super::{Algorithm, Grid, Rule, default_rule};
use crate::config::MAX_GRID_CELLS;
use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Grid size that fits a `width x height` pixel container.
/// Negative, non-finite or zero-cell-size inputs collapse to `(0, 0)`, and so
/// does a container holding more than `MAX_GRID_CELLS` cells.
pub fn grid_dimensions(width: f32, height: f32, cell_size: f32) -> (usize, usize) {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return (0, 0);
    }
    let fit = |extent: f32| {
        if extent.is_finite() && extent > 0.0 {
            (extent / cell_size).floor() as usize
        } else {
            0
        }
    };
    let (rows, cols) = (fit(height), fit(width));
    if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_GRID_CELLS) {
        warn!("{width}x{height}px @ {cell_size}px exceeds {MAX_GRID_CELLS} cells, using an empty grid");
        return (0, 0);
    }
    (rows, cols)
}

/// Conway automaton on a toroidal grid.
/// Starts uninitialized (`grid()` is `None`) until `initialize` or `resize`.
pub struct Automaton<R: Rng = StdRng> {
    grid: Option<Grid>,
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
    alive_probability: f64,
    generation: u64,
    rng: R,
}

impl Automaton<StdRng> {
    /// Engine seeded from the operating system's entropy source
    pub fn new(alive_probability: f64) -> Self {
        Self::with_rng(alive_probability, StdRng::from_os_rng())
    }
}

impl<R: Rng> Automaton<R> {
    /// Engine drawing its seeding randomness from `rng`
    pub fn with_rng(alive_probability: f64, rng: R) -> Self {
        Self {
            grid: None,
            rule: default_rule(),
            algorithm: Algorithm::default(),
            alive_probability: clamp_probability(alive_probability),
            generation: 0,
            rng,
        }
    }

    /// Swap the transition rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn alive_probability(&self) -> f64 {
        self.alive_probability
    }

    /// Current grid, `None` before the first initialize
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.grid.is_some()
    }

    /// Generations stepped since the last seeding
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed a fresh `rows x cols` grid; the probability is kept for later resizes
    pub fn initialize(&mut self, rows: usize, cols: usize, alive_probability: f64) -> &Grid {
        self.alive_probability = clamp_probability(alive_probability);
        self.seed(rows, cols)
    }

    /// Re-derive the dimensions from the container and reseed.
    /// Nothing from the previous grid survives.
    pub fn resize(&mut self, width: f32, height: f32, cell_size: f32) -> &Grid {
        let (rows, cols) = grid_dimensions(width, height, cell_size);
        debug!("resize {width}x{height}px @ {cell_size}px -> {rows}x{cols} cells");
        self.seed(rows, cols)
    }

    /// Reseed at the current dimensions
    pub fn reseed(&mut self) -> &Grid {
        let (rows, cols) = self.grid.as_ref().map_or((0, 0), Grid::dimensions);
        self.seed(rows, cols)
    }

    /// Advance one generation. Does nothing while uninitialized.
    pub fn step(&mut self) -> Option<&Grid> {
        let next = self
            .grid
            .as_ref()
            .map(|grid| self.algorithm.step(grid, self.rule.as_ref()))?;
        self.generation += 1;
        Some(&*self.grid.insert(next))
    }

    fn seed(&mut self, rows: usize, cols: usize) -> &Grid {
        let grid = Grid::random(rows, cols, self.alive_probability, &mut self.rng);
        debug!(
            "seeded {rows}x{cols} grid, {} alive (p = {})",
            grid.population(),
            self.alive_probability
        );
        self.generation = 0;
        self.grid.insert(grid)
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
