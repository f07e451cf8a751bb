use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::clock::LogicalClock;
use crate::config::GameConfig;
use crate::game::Game;
use crate::input::InputManager;
use crate::renderer::{GameRenderer, GlyphSet, RenderView};

/// The terminal application: drives [`Game`] from the keyboard at a fixed frame rate.
pub struct App {
    game: Game,
    clock: LogicalClock,
    /// Frames info
    frame_budget: Duration,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &GameConfig) -> Self {
        let clock = LogicalClock::new(config.frame_rate);
        Self {
            game: Game::new(config),
            frame_budget: Duration::from_secs(1) / clock.frame_rate(),
            clock,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(GlyphSet::detect(config.ascii_glyphs)),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.game.is_running() {
            // Calculate FPS
            let frame_start = Instant::now();
            let frame_time = frame_start.duration_since(self.last_frame_time);
            self.last_frame_time = frame_start;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            let scene = self.game.view();
            terminal.draw(|frame| {
                let view = RenderView {
                    scene: &scene,
                    field: *self.game.field(),
                    area: frame.area(),
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(self.game.scene())?;
            let input = self.input_manager.tick_input(self.clock.now());
            self.game.step(&input);
            self.clock.advance();

            // Sleep off whatever is left of the frame
            if let Some(remaining) = self.frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        log::info!(
            "Exiting after {} ticks with score {}",
            self.clock.ticks(),
            self.game.score()
        );
        Ok(())
    }
}
