use ratatui::layout::{Position, Size};

/// One of the four axis-aligned headings the snake can travel in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the `(dx, dy)` step for this heading.  `y` grows downwards.
    pub(crate) fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Can a snake heading in `self` be turned to face `requested`?
    ///
    /// The check is made on each axis independently: a turn is refused if
    /// *either* component of `requested` is the negation of the same component
    /// of `self`.  As a result, re-requesting the current heading is refused
    /// too (its zero component negates to itself), which is harmless.
    pub(crate) fn accepts_turn(self, requested: Direction) -> bool {
        let (cx, cy) = self.delta();
        let (rx, ry) = requested.delta();
        !(rx == -cx || ry == -cy)
    }

    /// Return the cell one step from `pos` in this direction, wrapping around
    /// the edges of `bounds`.
    pub(crate) fn advance(self, pos: Position, bounds: Bounds) -> Position {
        let (dx, dy) = self.delta();
        Position {
            x: wrap_step(pos.x, dx, bounds.width),
            y: wrap_step(pos.y, dy, bounds.height),
        }
    }
}

/// Dimensions of the playing field, in cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The cell in the middle of the field, rounding towards the bottom-right
    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Bounds {
        Bounds {
            width: size.width,
            height: size.height,
        }
    }
}

/// Move `coord` by `delta` along an axis of length `size`, joining the two ends
/// of the axis.
///
/// A negative step that would go below zero lands at `size + delta` directly
/// rather than relying on modular arithmetic over a signed intermediate.
fn wrap_step(coord: u16, delta: i8, size: u16) -> u16 {
    let magnitude = u16::from(delta.unsigned_abs());
    if delta < 0 {
        if coord < magnitude {
            size - magnitude
        } else {
            coord - magnitude
        }
    } else {
        coord.saturating_add(magnitude) % size
    }
}
