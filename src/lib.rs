// Domain layer - automaton engine
pub mod domain;

// README rendering
pub mod markdown;

// Application layer - host-side composition
pub mod application;

pub mod config;

// Infrastructure layer - drawing and input for the demo window
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Automaton, Cell, Grid, Pattern, presets, Algorithm, grid_dimensions};
pub use markdown::{MarkdownRenderer, RepoRef, escape_html};
pub use application::{HeroBackground, ReadmeView};
pub use config::{ConfigError, LifeConfig};
