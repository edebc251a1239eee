mod cell;
mod grid;
mod rules;
mod patterns;
mod algorithm;
mod automaton;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, default_rule};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use automaton::{Automaton, grid_dimensions};
