use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, stdin, stdout, Stderr, Write};
use std::time::Duration;
use tokio::time::timeout;

use crate::game::{FruitSource, GameConfig, GameSession, SessionStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// How long each tick waits for a key before carrying on with the
/// current heading. The game is paced by the player, not a clock.
const INPUT_WAIT: Duration = Duration::from_millis(250);

/// Interactive play: a plain menu wrapping one TUI game at a time
pub struct HumanMode {
    config: GameConfig,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    /// Menu loop: `p` plays one blocking game, `q` quits
    pub async fn run(&mut self) -> Result<()> {
        loop {
            println!();
            println!("Enter one of the following:");
            println!(" p to play");
            println!(" q to quit");
            if self.metrics.games_played > 0 {
                println!("(high score so far: {})", self.metrics.high_score);
            }
            print!("Choice? ");
            stdout().flush().context("Failed to flush stdout")?;

            let choice = read_line()?.trim().to_lowercase();
            if choice.contains('q') {
                break;
            }
            if choice.contains('p') {
                let score = self.play_game().await?;
                self.metrics.on_game_over(score);
                println!("Game over. Your score is {score}. Press Enter");
                read_line()?;
            }
        }
        Ok(())
    }

    /// Play one game to completion (or early quit) and report its score
    async fn play_game(&mut self) -> Result<i32> {
        let mut session = GameSession::new(self.config.clone(), FruitSource::live())?;
        self.metrics.on_game_start();

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut out = stderr();
        execute!(out, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.game_loop(&mut terminal, &mut session).await;

        self.cleanup_terminal(&mut terminal)?;
        result?;

        Ok(session.final_score())
    }

    async fn game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        session: &mut GameSession,
    ) -> Result<()> {
        let mut events = EventStream::new();

        loop {
            self.metrics.update();
            terminal
                .draw(|frame| self.renderer.render(frame, session, &self.metrics))
                .context("Failed to draw frame")?;

            if session.status() == SessionStatus::GameOver {
                // leave the final screen up until a key is pressed
                wait_for_key(&mut events).await;
                return Ok(());
            }

            let requested = match timeout(INPUT_WAIT, events.next()).await {
                // no key within the window: keep the current heading
                Err(_) => None,
                Ok(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                    match self.input_handler.handle_key_event(key) {
                        KeyAction::Steer(direction) => Some(direction),
                        KeyAction::Quit => return Ok(()),
                        KeyAction::None => None,
                    }
                }
                Ok(Some(Ok(_))) => None,
                Ok(Some(Err(err))) => return Err(err).context("Failed to read terminal event"),
                // event stream closed
                Ok(None) => return Ok(()),
            };

            session.tick(requested)?;
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

async fn wait_for_key(events: &mut EventStream) {
    while let Some(Ok(event)) = events.next().await {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                return;
            }
        }
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_construction() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.metrics.games_played, 0);
        assert_eq!(mode.config.playable_width, 20);
    }
}
