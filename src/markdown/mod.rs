//! README rendering for the project showcase.
//!
//! A fixed Markdown dialect converted by ordered whole-text substitution
//! passes. The pass order is observable in the output and must not change.

mod escape;
mod images;
mod renderer;

pub use escape::escape_html;
pub use images::{RepoRef, RepoRefError, resolve_image_src};
pub use renderer::MarkdownRenderer;
