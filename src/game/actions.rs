use super::direction::Direction;
use std::collections::VecDeque;

/// Turn requests received since the snake last moved, oldest first.
///
/// Any number of key presses may arrive between two ticks, but only one turn
/// is consumed per tick, so a quick double-tap can't fold the snake back onto
/// its own neck before it has moved a cell.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ActionQueue(VecDeque<Direction>);

impl ActionQueue {
    pub(crate) fn new() -> ActionQueue {
        ActionQueue::default()
    }

    /// Append a turn request.  Requests are not checked against the heading
    /// until they are popped.
    pub(crate) fn buffer(&mut self, direction: Direction) {
        self.0.push_back(direction);
    }

    /// Remove the oldest request, if any, and turn `heading` to it if the turn
    /// is legal.  Returns the outcome, or `None` if the queue was empty.
    pub(crate) fn pop_and_apply(&mut self, heading: &mut Direction) -> Option<Turn> {
        let requested = self.0.pop_front()?;
        if heading.accepts_turn(requested) {
            *heading = requested;
            Some(Turn::Applied(requested))
        } else {
            Some(Turn::Rejected(requested))
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

/// What became of a popped turn request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Turn {
    Applied(Direction),
    Rejected(Direction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_empty() {
        let mut queue = ActionQueue::new();
        let mut heading = Direction::East;
        assert_eq!(queue.pop_and_apply(&mut heading), None);
        assert_eq!(heading, Direction::East);
    }

    #[test]
    fn reversal_rejected() {
        let mut queue = ActionQueue::new();
        let mut heading = Direction::East;
        queue.buffer(Direction::West);
        assert_eq!(
            queue.pop_and_apply(&mut heading),
            Some(Turn::Rejected(Direction::West))
        );
        assert_eq!(heading, Direction::East);
        assert_eq!(queue, ActionQueue::new());
    }

    #[test]
    fn one_turn_per_pop_in_order() {
        let mut queue = ActionQueue::new();
        let mut heading = Direction::East;
        queue.buffer(Direction::North);
        queue.buffer(Direction::West);
        queue.buffer(Direction::South);
        assert_eq!(queue.len(), 3);

        assert_eq!(
            queue.pop_and_apply(&mut heading),
            Some(Turn::Applied(Direction::North))
        );
        assert_eq!(heading, Direction::North);
        assert_eq!(queue.len(), 2);

        assert_eq!(
            queue.pop_and_apply(&mut heading),
            Some(Turn::Applied(Direction::West))
        );
        assert_eq!(heading, Direction::West);

        assert_eq!(
            queue.pop_and_apply(&mut heading),
            Some(Turn::Applied(Direction::South))
        );
        assert_eq!(heading, Direction::South);
        assert_eq!(queue, ActionQueue::new());
    }

    #[test]
    fn double_tap_cannot_reverse() {
        // South is judged against the heading at the time it's popped, which
        // is North by then.
        let mut queue = ActionQueue::new();
        let mut heading = Direction::East;
        queue.buffer(Direction::North);
        queue.buffer(Direction::South);
        assert_eq!(
            queue.pop_and_apply(&mut heading),
            Some(Turn::Applied(Direction::North))
        );
        assert_eq!(
            queue.pop_and_apply(&mut heading),
            Some(Turn::Rejected(Direction::South))
        );
        assert_eq!(heading, Direction::North);
    }
}
