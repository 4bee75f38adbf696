use crate::command::Command;
use crate::game::Game;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Runs a game in the terminal: collects key presses, advances the game once
/// per tick, and redraws it after each tick
#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    game: Game<R>,
    tick_period: Duration,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, tick_period: Duration) -> App<R> {
        App { game, tick_period }
    }

    /// Play until the game ends and return the final score.  If the snake
    /// crashed, the final board stays up until a key is pressed.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<u32> {
        tracing::info!(tick_period = ?self.tick_period, "Game started");
        let mut next_tick = Instant::now() + self.tick_period;
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if self.game.is_over() {
                break;
            }
            self.collect_input(next_tick)?;
            self.game.advance();
            // A late tick pushes back the ones after it rather than being
            // made up for.
            next_tick = next_tick.max(Instant::now()) + self.tick_period;
        }
        if self.game.collided() {
            wait_for_key()?;
        }
        tracing::info!(score = self.game.score(), "Game finished");
        Ok(self.game.score())
    }

    /// Buffer key presses until `deadline` or until the player quits
    fn collect_input(&mut self, deadline: Instant) -> io::Result<()> {
        while !self.game.is_over() {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                break;
            }
            self.handle_event(&read()?);
        }
        Ok(())
    }
}

impl<R> App<R> {
    fn handle_event(&mut self, event: &Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd.direction() {
            Some(d) => self.game.buffer_turn(d),
            None => self.game.request_quit(),
        }
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if read()?.is_key_press() {
            return Ok(());
        }
    }
}
