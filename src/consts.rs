//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default time between movements of the snake, in milliseconds
pub(crate) const TICK_PERIOD_MS: u64 = 100;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS);

/// Default dimensions of the playing field, in cells
pub(crate) const LEVEL_SIZE: Size = Size {
    width: 32,
    height: 32,
};

/// Largest allowed width or height of the playing field.  Each cell is drawn
/// [`CELL_WIDTH`] columns wide, and the result has to fit in a terminal
/// coordinate.
pub(crate) const MAX_LEVEL_SIDE: u16 = 255;

/// Length the snake uncoils to after spawning, before any apples are eaten
pub(crate) const STARTING_LENGTH: u32 = 10;

/// Number of terminal columns used to draw one cell, so that cells come out
/// roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head, body, and the apple.  These are drawn as solid
/// blocks of background color.
pub(crate) const BLOCK_SYMBOL: char = ' ';

/// Glyph for the cell the snake ran into
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head
pub(crate) const HEAD_STYLE: Style = Style::new().bg(Color::White);

/// Style for the rest of the snake's body
pub(crate) const BODY_STYLE: Style = Style::new().bg(Color::Green);

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().bg(Color::Red);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Message shown beneath the score once the snake has crashed
pub(crate) const GAME_OVER_MESSAGE: &str = " Game over! Press any key.";
