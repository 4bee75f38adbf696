use ratatui::layout::Position;
use std::collections::{vec_deque, VecDeque};

/// The cells occupied by the snake, ordered from head (newest) to tail
/// (oldest)
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Body {
    /// Segment positions; the head is at the front of the deque.
    segments: VecDeque<Position>,

    /// How many upcoming tail removals to skip.  A freshly-spawned snake is a
    /// single cell carrying credit for the rest of its length, so that it
    /// uncoils onto the board instead of appearing at full length.
    pub(crate) pending_growth: u32,
}

impl Body {
    /// Create a one-segment body at `head` that will grow by `pending_growth`
    /// cells over the following ticks
    pub(crate) fn new(head: Position, pending_growth: u32) -> Body {
        let mut body = Body {
            segments: VecDeque::new(),
            pending_growth,
        };
        body.add_head(head);
        body
    }

    /// Insert a new head segment at `pos`.  No collision check is made.
    pub(crate) fn add_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Drop the tail segment, if there is one
    pub(crate) fn remove_tail(&mut self) {
        let _ = self.segments.pop_back();
    }

    /// Return the position of the head, or `None` if the body is empty
    pub(crate) fn head(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Does any segment occupy `pos`?  The tail counts, even on a tick where
    /// it is about to move.
    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Iterate over segment positions from head to tail
    pub(crate) fn iter(&self) -> Segments<'_> {
        Segments(self.segments.iter())
    }
}

impl FromIterator<Position> for Body {
    /// Build a body from positions listed head first, with no pending growth
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Body {
        Body {
            segments: iter.into_iter().collect(),
            pending_growth: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = Position;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Segments<'a> {
        self.iter()
    }
}

/// Head-to-tail iterator over the positions in a [`Body`]
#[derive(Clone, Debug)]
pub(crate) struct Segments<'a>(vec_deque::Iter<'a, Position>);

impl Iterator for Segments<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Position> {
        self.0.next_back().copied()
    }
}

impl ExactSizeIterator for Segments<'_> {}
