use crate::config::{ConfigError, LifeConfig};
use crate::domain::{Algorithm, Automaton, Grid};
use log::{debug, warn};
use rand::{Rng, rngs::StdRng};

/// HeroBackground drives the automaton from a redraw loop.
/// The host calls `tick` once per frame; a generation is computed only
/// every `step_every_frames` ticks.
pub struct HeroBackground<R: Rng = StdRng> {
    pub automaton: Automaton<R>,
    pub config: LifeConfig,
    pub is_running: bool,
    pub frame_count: u64,
}

impl HeroBackground<StdRng> {
    /// Background with an OS-seeded automaton
    pub fn new(config: LifeConfig) -> Result<Self, ConfigError> {
        let config = config.validate().inspect_err(|err| warn!("rejected background config: {err}"))?;
        Ok(Self::with_automaton(config, Automaton::new(config.alive_probability)))
    }
}

impl<R: Rng> HeroBackground<R> {
    /// Background around an existing automaton; `config` is trusted as given
    pub fn with_automaton(config: LifeConfig, automaton: Automaton<R>) -> Self {
        Self {
            automaton,
            config,
            is_running: true,
            frame_count: 0,
        }
    }

    /// Current grid for painting
    pub fn grid(&self) -> Option<&Grid> {
        self.automaton.grid()
    }

    /// Fit the grid to a new container size. The old pattern is discarded.
    pub fn resize(&mut self, width: f32, height: f32) -> (usize, usize) {
        let (rows, cols) = self
            .automaton
            .resize(width, height, self.config.cell_size)
            .dimensions();
        let algorithm = Algorithm::auto(rows, cols);
        if algorithm != self.automaton.algorithm() {
            debug!("switching to {} stepping for {rows}x{cols}", algorithm.name());
            self.automaton.set_algorithm(algorithm);
        }
        self.frame_count = 0;
        (rows, cols)
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Stop stepping; `tick` becomes a no-op
    pub fn pause(mut self) -> Self {
        self.is_running = false;
        self
    }

    pub fn resume(mut self) -> Self {
        self.is_running = true;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Fresh random pattern at the current size
    pub fn reseed(mut self) -> Self {
        self.automaton.reseed();
        self.frame_count = 0;
        self
    }

    /// Advance the redraw counter, stepping on every Nth frame
    pub fn tick(mut self) -> Self {
        if !self.is_running {
            return self;
        }

        self.frame_count += 1;
        if self.frame_count % u64::from(self.config.step_every_frames.max(1)) == 0 {
            self.automaton.step();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::sync::{Mutex, Once};

    /// Keeps every warning emitted while the tests run
    struct WarningLog(Mutex<Vec<String>>);

    static WARNINGS: WarningLog = WarningLog(Mutex::new(Vec::new()));

    impl log::Log for WarningLog {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    fn capture_warnings() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            if log::set_logger(&WARNINGS).is_ok() {
                log::set_max_level(log::LevelFilter::Warn);
            }
        });
    }

    fn background() -> HeroBackground {
        let config = LifeConfig::default();
        let automaton = Automaton::with_rng(config.alive_probability, StdRng::seed_from_u64(1));
        HeroBackground::with_automaton(config, automaton)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = LifeConfig::default().with_cell_size(0.0);
        assert!(matches!(HeroBackground::new(config), Err(ConfigError::InvalidCellSize(_))));
        assert!(HeroBackground::new(LifeConfig::default()).is_ok());
    }

    #[test]
    fn test_rejected_config_is_logged() {
        capture_warnings();
        let config = LifeConfig::default().with_alive_probability(2.0);
        assert!(HeroBackground::new(config).is_err());
        let lines = WARNINGS.0.lock().map(|lines| lines.clone()).unwrap_or_default();
        assert!(
            lines.iter().any(|line| line.contains("rejected background config") && line.contains("2")),
            "{lines:?}"
        );
    }

    #[test]
    fn test_resize_uses_cell_size() {
        let mut bg = background();
        assert!(bg.grid().is_none());
        assert_eq!(bg.resize(1920.0, 1080.0), (72, 128));
        assert_eq!(bg.grid().map(Grid::dimensions), Some((72, 128)));
    }

    #[test]
    fn test_large_grids_step_in_parallel() {
        let mut bg = background();
        bg.resize(300.0, 300.0);
        assert_eq!(bg.automaton.algorithm(), Algorithm::Serial);
        bg.resize(1500.0, 1500.0);
        assert_eq!(bg.automaton.algorithm(), Algorithm::Parallel);
    }

    #[test]
    fn test_steps_every_eighth_frame() {
        let mut bg = background();
        bg.resize(150.0, 150.0);
        for _ in 0..7 {
            bg = bg.tick();
        }
        assert_eq!(bg.automaton.generation(), 0);
        bg = bg.tick();
        assert_eq!(bg.automaton.generation(), 1);
        for _ in 0..16 {
            bg = bg.tick();
        }
        assert_eq!(bg.automaton.generation(), 3);
    }

    #[test]
    fn test_paused_background_does_not_advance() {
        let mut bg = background().with_running(false);
        bg.resize(150.0, 150.0);
        for _ in 0..32 {
            bg = bg.tick();
        }
        assert_eq!(bg.frame_count, 0);
        assert_eq!(bg.automaton.generation(), 0);
        assert!(bg.toggle_running().is_running);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut bg = background().pause();
        bg.resize(150.0, 150.0);
        for _ in 0..8 {
            bg = bg.tick();
        }
        assert!(!bg.is_running);
        assert_eq!(bg.automaton.generation(), 0);

        bg = bg.resume();
        for _ in 0..8 {
            bg = bg.tick();
        }
        assert!(bg.is_running);
        assert_eq!(bg.automaton.generation(), 1);
        assert!(bg.pause().pause().resume().is_running);
    }

    #[test]
    fn test_tick_before_resize_is_harmless() {
        let mut bg = background();
        for _ in 0..8 {
            bg = bg.tick();
        }
        assert!(bg.grid().is_none());
    }

    #[test]
    fn test_reseed_resets_counters() {
        let mut bg = background();
        bg.resize(90.0, 90.0);
        for _ in 0..20 {
            bg = bg.tick();
        }
        let bg = bg.reseed();
        assert_eq!(bg.frame_count, 0);
        assert_eq!(bg.automaton.generation(), 0);
        assert_eq!(bg.grid().map(Grid::dimensions), Some((6, 6)));
    }
}
