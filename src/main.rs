use macroquad::prelude::*;
use log::{error, info};
use portfolio_core::{HeroBackground, LifeConfig, input, rendering};

fn window_conf() -> Conf {
    Conf {
        window_title: "Portfolio hero background".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut background = match HeroBackground::new(LifeConfig::default()) {
        Ok(background) => background,
        Err(err) => {
            error!("cannot start background: {err}");
            return;
        }
    };

    let mut size = (screen_width(), screen_height());
    let (rows, cols) = background.resize(size.0, size.1);
    info!("hero background {rows}x{cols} cells, stepping every {} frames", background.config.step_every_frames);

    loop {
        // Any container change reseeds from scratch
        let current = (screen_width(), screen_height());
        if current != size {
            size = current;
            background.resize(size.0, size.1);
        }

        background = input::process_keyboard_input(background);
        background = background.tick();

        match background.grid() {
            Some(grid) => rendering::draw_grid(grid, background.config.cell_size),
            None => clear_background(WHITE),
        }
        rendering::draw_status(&background);

        next_frame().await;
    }
}
