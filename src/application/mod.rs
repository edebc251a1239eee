mod background;
mod readme;

pub use background::HeroBackground;
pub use readme::ReadmeView;
