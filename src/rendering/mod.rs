use macroquad::prelude::*;
use crate::application::HeroBackground;
use crate::domain::Grid;
use ::rand::Rng;

/// Page background behind the hero section
fn background_color() -> Color {
    Color::from_rgba(249, 249, 249, 255) // #f9f9f9
}

fn alive_color() -> Color {
    Color::from_rgba(26, 26, 26, 255) // #1a1a1a
}

/// Paint the grid: one filled square per alive cell, with a one pixel gap
/// so neighbouring cells stay distinguishable
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    clear_background(background_color());

    let side = (cell_size - 1.0).max(1.0);
    let color = alive_color();
    for (row, col) in grid.alive_cells() {
        draw_rectangle(col as f32 * cell_size, row as f32 * cell_size, side, side, color);
    }
}

/// Small status line in the bottom-left corner
pub fn draw_status<R: Rng>(background: &HeroBackground<R>) {
    let (rows, cols) = background.grid().map_or((0, 0), Grid::dimensions);
    let status = if background.is_running { "Running" } else { "Paused" };
    let text = format!(
        "{rows}x{cols} | gen {} | {} | {} | FPS {}",
        background.automaton.generation(),
        background.automaton.algorithm().name(),
        status,
        get_fps()
    );
    draw_text(&text, 8.0, screen_height() - 8.0, 16.0, Color::from_rgba(120, 120, 120, 255));
}
