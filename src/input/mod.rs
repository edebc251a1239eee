use macroquad::prelude::*;
use crate::application::HeroBackground;
use ::rand::Rng;

/// Process keyboard input functionally
pub fn process_keyboard_input<R: Rng>(background: HeroBackground<R>) -> HeroBackground<R> {
    let actions: [(KeyCode, fn(HeroBackground<R>) -> HeroBackground<R>); 2] = [
        (KeyCode::Space, HeroBackground::toggle_running),
        (KeyCode::R, HeroBackground::reseed),
    ];

    actions.iter().fold(background, |bg, (key, action)| {
        if is_key_pressed(*key) { action(bg) } else { bg }
    })
}
