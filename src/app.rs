use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval_at, sleep_until, Instant};

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct GameApp {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Current tick delay; shrinks over time and resets on restart
    delay_ms: u64,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl GameApp {
    pub fn new(config: GameConfig) -> Self {
        let delay_ms = config.initial_delay_ms;
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            delay_ms,
            should_quit: false,
            pending_direction: None,
        }
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

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The tick period is the current delay, so the pace follows the ramp.
        // The game-over screen keeps ticking for the banner color cycle.
        let mut next_tick = Instant::now() + Duration::from_millis(self.delay_ms);

        // Difficulty ramp: every ramp interval the delay shrinks by a fixed
        // step, saturating at zero. It never grows back mid-game.
        let ramp_period = Duration::from_secs(self.engine.config().ramp_interval_secs);
        let mut ramp_timer = interval_at(Instant::now() + ramp_period, ramp_period);

        loop {
            tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game tick: update (while alive) and render
                _ = sleep_until(next_tick) => {
                    next_tick = Instant::now() + Duration::from_millis(self.delay_ms);

                    if self.state.is_alive {
                        self.update_game();
                    }

                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Speed ramp
                _ = ramp_timer.tick() => {
                    self.delay_ms = self.delay_ms.saturating_sub(self.engine.config().delay_step_ms);
                }

                // Ctrl+C delivered as a signal rather than a key event
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
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let game_over = !self.state.is_alive;
            match self.input_handler.handle_key_event(key, game_over) {
                KeyAction::Steer(direction) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::Restart => {
                    self.restart_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let action = self
            .pending_direction
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        self.pending_direction = None;

        let result = self.engine.step(&mut self.state, action);
        self.metrics.observe_score(self.state.score());

        if result.terminated && !self.state.is_alive {
            self.metrics.on_game_over(self.state.score());
        }
    }

    /// Back to a fresh game: snake, food, score and delay reset; highscore,
    /// clouds and the grown cloud target carry over
    fn restart_game(&mut self) {
        self.engine.restart(&mut self.state);
        self.delay_ms = self.engine.config().initial_delay_ms;
        self.metrics.on_game_start();
        self.pending_direction = None;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_initialization() {
        let config = GameConfig::default();
        let app = GameApp::new(config);
        assert!(app.state.is_alive);
        assert_eq!(app.state.score(), -1);
        assert_eq!(app.delay_ms, 120);
    }

    #[test]
    fn test_restart_resets_score_and_delay() {
        let mut app = GameApp::new(GameConfig::default());
        app.state.is_alive = false;
        app.delay_ms = 40;
        app.state.snake.pending_growth += 5;

        app.restart_game();

        assert!(app.state.is_alive);
        assert_eq!(app.state.score(), -1);
        assert_eq!(app.delay_ms, 120);
        assert_eq!(app.pending_direction, None);
    }

    #[test]
    fn test_game_over_updates_metrics() {
        let mut app = GameApp::new(GameConfig::default());

        // Walk the snake straight into the bottom wall
        while app.state.is_alive {
            app.update_game();
        }

        assert_eq!(app.metrics.games_played, 1);
    }

    #[test]
    fn test_delay_ramp_saturates() {
        let mut app = GameApp::new(GameConfig::default());
        app.delay_ms = 3;
        app.delay_ms = app.delay_ms.saturating_sub(app.engine.config().delay_step_ms);
        assert_eq!(app.delay_ms, 0);
    }
}
