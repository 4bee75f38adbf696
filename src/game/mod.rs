mod actions;
mod body;
mod direction;
mod render;
pub(crate) use self::direction::{Bounds, Direction};
use self::actions::{ActionQueue, Turn};
use self::body::{Body, Segments};
use crate::config::Config;
use rand::Rng;
use ratatui::{layout::Position, Frame};

/// A game in progress: the snake, the apple, and everything needed to move
/// them forwards one tick at a time
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    body: Body,
    direction: Direction,
    actions: ActionQueue,
    apple: Position,
    score: u32,
    state: GameState,
}

impl<R: Rng> Game<R> {
    /// Start a new game: a one-cell snake in the middle of the field, heading
    /// east, that will uncoil to the configured starting length over the
    /// next few ticks, plus an apple somewhere at random.
    pub(crate) fn new(config: &Config, mut rng: R) -> Game<R> {
        let bounds = config.bounds;
        let apple = random_cell(&mut rng, bounds);
        let body = Body::new(bounds.center(), config.starting_length.saturating_sub(1));
        tracing::debug!(?bounds, ?apple, "Starting new game");
        Game {
            rng,
            bounds,
            body,
            direction: Direction::East,
            actions: ActionQueue::new(),
            apple,
            score: 0,
            state: GameState::Running,
        }
    }

    /// Apply at most one buffered turn and then move the snake forwards one
    /// cell.  Does nothing once the game is over.
    pub(crate) fn advance(&mut self) {
        if self.is_over() {
            return;
        }
        match self.actions.pop_and_apply(&mut self.direction) {
            Some(Turn::Applied(dir)) => tracing::trace!(?dir, "Turned"),
            Some(Turn::Rejected(dir)) => {
                tracing::trace!(?dir, heading = ?self.direction, "Rejected turn");
            }
            None => (),
        }
        self.tick();
    }

    fn tick(&mut self) {
        let Some(head) = self.body.head() else {
            return;
        };
        let next = self.direction.advance(head, self.bounds);
        debug_assert!(self.bounds.contains(next), "snake left the field");
        if self.body.contains(next) {
            tracing::info!(
                at = ?next,
                length = self.body.len(),
                score = self.score,
                "Snake ran into itself"
            );
            self.state = GameState::Collided(next);
            return;
        }
        if next == self.apple {
            self.score += 1;
            self.body.pending_growth += 1;
            // The new apple may land on the snake.
            self.apple = random_cell(&mut self.rng, self.bounds);
            tracing::debug!(score = self.score, apple = ?self.apple, "Ate apple");
        }
        self.body.add_head(next);
        if self.body.pending_growth > 0 {
            self.body.pending_growth -= 1;
        } else {
            self.body.remove_tail();
        }
    }
}

impl<R> Game<R> {
    /// Queue a turn to be applied on a later tick
    pub(crate) fn buffer_turn(&mut self, direction: Direction) {
        self.actions.buffer(direction);
        tracing::trace!(?direction, queued = self.actions.len(), "Buffered turn");
    }

    /// End the game at the player's request
    pub(crate) fn request_quit(&mut self) {
        if !self.is_over() {
            tracing::info!(score = self.score, "Player quit");
            self.state = GameState::Quit;
        }
    }

    pub(crate) fn is_over(&self) -> bool {
        self.state != GameState::Running
    }

    /// Did the game end with the snake running into itself?
    pub(crate) fn collided(&self) -> bool {
        matches!(self.state, GameState::Collided(_))
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Return a read-only view of everything that gets drawn
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            body: &self.body,
            apple: self.apple,
            score: self.score,
            bounds: self.bounds,
            collision: match self.state {
                GameState::Collided(pos) => Some(pos),
                _ => None,
            },
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self.snapshot(), frame.area());
    }
}

/// A read-only view of a [`Game`] for drawing
#[derive(Clone, Copy, Debug)]
pub(crate) struct Snapshot<'a> {
    body: &'a Body,
    pub(crate) apple: Position,
    pub(crate) score: u32,
    pub(crate) bounds: Bounds,

    /// The cell the snake tried to move into when it ran into itself
    pub(crate) collision: Option<Position>,
}

impl<'a> Snapshot<'a> {
    /// Positions of the snake's segments, head first
    pub(crate) fn segments(&self) -> Segments<'a> {
        self.body.iter()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    /// The snake tried to move into the given cell, which it already occupied
    Collided(Position),
    Quit,
}

/// Pick a cell uniformly at random.  Occupied cells are not excluded.
fn random_cell<R: Rng>(rng: &mut R, bounds: Bounds) -> Position {
    Position::new(
        rng.random_range(0..bounds.width),
        rng.random_range(0..bounds.height),
    )
}
