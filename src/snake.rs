use std::collections::VecDeque;

use log::debug;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one unit along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered body segments (head first) plus the current heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Turns the snake unless `direction` reverses the current heading.
    ///
    /// Returns whether the heading was accepted. The change is applied at once;
    /// there is no per-tick queue, so the last accepted key before a tick wins.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            debug!("ignored reversal {:?} -> {:?}", self.direction, direction);
            return false;
        }

        self.direction = direction;
        true
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Inserts a new head, growing the body by one segment.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes up to `count` tail segments, never the last remaining one.
    ///
    /// Returns how many segments were removed.
    pub fn shrink(&mut self, count: usize) -> usize {
        let mut removed = 0;
        while removed < count && self.body.len() > 1 {
            let _ = self.body.pop_back();
            removed += 1;
        }
        removed
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_both_axes() {
        let bounds = GridSize {
            width: 24,
            height: 24,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 23, y: 23 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: 3, y: 24 }.is_within_bounds(bounds));
    }

    #[test]
    fn next_head_follows_heading() {
        let snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up);

        assert_eq!(snake.next_head_position(), Position { x: 5, y: 4 });
    }

    #[test]
    fn turn_rejects_reverse() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up);

        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);

        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn turn_compares_against_latest_accepted_heading() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        // Two quick turns between ticks end up facing the original reverse.
        assert!(snake.turn(Direction::Up));
        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn shrink_never_removes_last_segment() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 1, y: 2 }],
            Direction::Right,
        );

        assert_eq!(snake.shrink(2), 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.shrink(2), 0);
        assert_eq!(snake.head(), Position { x: 2, y: 2 });
    }

    #[test]
    fn push_head_grows_front() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.push_head(snake.next_head_position());

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert!(snake.occupies(Position { x: 5, y: 5 }));
    }
}
