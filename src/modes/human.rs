use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Framebuffer, Renderer};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    framebuffer: Framebuffer,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    needs_redraw: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    /// Play with deterministic fruit placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_engine(GameEngine::with_seed(config, seed))
    }

    fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.reset();
        let config = engine.config();
        let framebuffer = Framebuffer::new(config.screen_width, config.screen_height);
        let renderer = Renderer::new(config.block_size);

        let mut mode = Self {
            engine,
            state,
            framebuffer,
            renderer,
            input_handler: InputHandler::new(),
            should_quit: false,
            needs_redraw: true,
        };
        mode.redraw();
        mode
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("game started, waiting for a direction key");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "game closed after {} ticks and {} deaths",
            self.state.ticks, self.state.deaths
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if self.needs_redraw {
                terminal
                    .draw(|frame| {
                        self.renderer
                            .render(frame, &self.framebuffer, self.state.paused);
                    })
                    .context("Failed to draw frame")?;
                self.needs_redraw = false;
            }

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::GameAction(action) => {
                        let was_paused = self.state.paused;
                        self.engine.handle_action(&mut self.state, action);
                        self.needs_redraw |= was_paused != self.state.paused;
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick(&mut self.state);

        if outcome.needs_redraw() {
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        self.engine.draw(&self.state, &mut self.framebuffer);
        self.needs_redraw = true;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
