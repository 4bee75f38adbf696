use super::Snapshot;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
};

impl Snapshot<'_> {
    /// Size of the bordered box the field is drawn in
    fn block_size(&self) -> Size {
        let Size { width, height } = self.bounds.size();
        Size {
            width: width.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: height.saturating_add(2),
        }
    }
}

impl Widget for Snapshot<'_> {
    /*
     * ┌────────────────┐
     * │                │
     * │    [][]        │
     * │              ##│
     * └────────────────┘
     *  Score: N
     *  Game over! Press any key.
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_size = self.block_size();
        let display = center_rect(
            area,
            Size {
                width: block_size.width,
                height: block_size.height.saturating_add(2),
            },
        );
        let [block_area, score_area, msg_area] = Layout::vertical([
            Constraint::Length(block_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Block::bordered().render(block_area, buf);

        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        field.draw_cell(self.apple, consts::BLOCK_SYMBOL, consts::APPLE_STYLE);
        // Draw from the tail up so that the head ends up on top if the snake
        // overlaps itself
        for pos in self.segments().skip(1).rev() {
            field.draw_cell(pos, consts::BLOCK_SYMBOL, consts::BODY_STYLE);
        }
        if let Some(head) = self.segments().next() {
            field.draw_cell(head, consts::BLOCK_SYMBOL, consts::HEAD_STYLE);
        }
        if let Some(pos) = self.collision {
            field.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        Line::raw(format!(" Score: {}", self.score)).render(score_area, buf);
        if self.collision.is_some() {
            Line::raw(consts::GAME_OVER_MESSAGE).render(msg_area, buf);
        }
    }
}

/// Draws cells of the playing field, each [`consts::CELL_WIDTH`] columns
/// wide, clipped to `area`
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for column in 0..consts::CELL_WIDTH {
            let Some(x) = x.checked_add(column) else {
                return;
            };
            if !self.area.contains(Position { x, y }) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Body, Direction, Game, GameState};
    use crate::config::Config;
    use crate::consts;
    use crate::game::Bounds;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::{
        buffer::Buffer,
        layout::{Position, Rect},
        widgets::Widget,
    };

    fn small_game() -> Game<ChaCha12Rng> {
        let config = Config {
            bounds: Bounds {
                width: 12,
                height: 3,
            },
            ..Config::default()
        };
        Game::new(&config, ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF))
    }

    #[test]
    fn running_game() {
        let mut game = small_game();
        game.body = Body::from_iter([Position::new(1, 1), Position::new(0, 1)]);
        game.apple = Position::new(3, 0);
        game.score = 2;
        let area = Rect::new(0, 0, 26, 7);
        let mut buffer = Buffer::empty(area);
        game.snapshot().render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌────────────────────────┐",
            "│                        │",
            "│                        │",
            "│                        │",
            "└────────────────────────┘",
            " Score: 2",
            "",
        ]);
        expected.set_style(Rect::new(7, 1, 2, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(1, 2, 2, 1), consts::BODY_STYLE);
        expected.set_style(Rect::new(3, 2, 2, 1), consts::HEAD_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn centered_in_larger_area() {
        let mut game = small_game();
        game.body = Body::from_iter([Position::new(0, 0)]);
        game.apple = Position::new(11, 2);
        let area = Rect::new(0, 0, 30, 9);
        let mut buffer = Buffer::empty(area);
        game.snapshot().render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "  ┌────────────────────────┐  ",
            "  │                        │  ",
            "  │                        │  ",
            "  │                        │  ",
            "  └────────────────────────┘  ",
            "   Score: 0",
            "",
            "",
        ]);
        expected.set_style(Rect::new(3, 2, 2, 1), consts::HEAD_STYLE);
        expected.set_style(Rect::new(25, 4, 2, 1), consts::APPLE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn self_collision() {
        let mut game = small_game();
        game.body = Body::from_iter([
            Position::new(2, 1),
            Position::new(3, 1),
            Position::new(3, 0),
            Position::new(2, 0),
        ]);
        game.direction = Direction::North;
        game.apple = Position::new(10, 2);
        game.score = 3;
        game.advance();
        assert_eq!(game.state, GameState::Collided(Position::new(2, 0)));

        let area = Rect::new(0, 0, 26, 7);
        let mut buffer = Buffer::empty(area);
        game.snapshot().render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌────────────────────────┐",
            "│    ××                  │",
            "│                        │",
            "│                        │",
            "└────────────────────────┘",
            " Score: 3",
            " Game over! Press any key.",
        ]);
        expected.set_style(Rect::new(21, 3, 2, 1), consts::APPLE_STYLE);
        expected.set_style(Rect::new(7, 1, 2, 1), consts::BODY_STYLE);
        expected.set_style(Rect::new(7, 2, 2, 1), consts::BODY_STYLE);
        expected.set_style(Rect::new(5, 2, 2, 1), consts::HEAD_STYLE);
        expected.set_style(Rect::new(5, 1, 2, 1), consts::COLLISION_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn clipped_to_small_area() {
        let mut game = small_game();
        game.body = Body::from_iter([Position::new(11, 2)]);
        game.apple = Position::new(0, 0);
        let area = Rect::new(0, 0, 6, 3);
        let mut buffer = Buffer::empty(area);
        game.snapshot().render(area, &mut buffer);
        // Nothing is drawn outside the buffer, and nothing panics.
        assert_eq!(buffer.area, area);
    }
}
