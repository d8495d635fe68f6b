use std::time::{Duration, Instant};

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, START_CELL};
use crate::food::{Food, FoodGenerator, FoodKind, RandomSource};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Heading of a freshly started snake.
pub const START_DIRECTION: Direction = Direction::Right;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last play-through ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one call to [`Session::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Idle,
    Moved,
    Ate(FoodKind),
    GameOver(DeathReason),
}

/// Complete mutable game state for one play-through.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    started_at: Instant,
    foods: FoodGenerator<R>,
}

impl Session<StdRng> {
    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64, now: Instant) -> Self {
        Self::new(bounds, StdRng::seed_from_u64(seed), now)
    }
}

impl<R: RandomSource> Session<R> {
    #[must_use]
    pub fn new(bounds: GridSize, rng: R, now: Instant) -> Self {
        let mut foods = FoodGenerator::new(bounds, rng);
        let food = foods.spawn();

        Self {
            snake: start_snake(),
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            started_at: now,
            foods,
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let head = self.snake.next_head_position();

        if !head.is_within_bounds(self.bounds()) {
            return self.end(DeathReason::WallCollision);
        }

        // Checked against the body before it moves, tail included.
        if self.snake.occupies(head) {
            return self.end(DeathReason::SelfCollision);
        }

        self.snake.push_head(head);

        if head != self.food.position {
            self.snake.shrink(1);
            return TickOutcome::Moved;
        }

        let kind = self.food.kind;
        self.score = self.score.saturating_add_signed(kind.score_delta());
        if kind.length_delta() < 0 {
            self.snake.shrink(kind.length_delta().unsigned_abs() as usize);
        }
        self.food = self.foods.spawn();

        TickOutcome::Ate(kind)
    }

    /// Applies a direction key. Reversals of the current heading are dropped.
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.snake.turn(direction)
    }

    /// Resets to a fresh play-through whose elapsed time starts at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.snake = start_snake();
        self.food = self.foods.spawn();
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.started_at = now;
        info!("new game started");
    }

    fn end(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            "game over: {reason:?}, score {}, length {}, {} ticks",
            self.score,
            self.snake.len(),
            self.tick_count
        );
        TickOutcome::GameOver(reason)
    }
}

impl<R> Session<R> {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Time since this play-through started.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.foods.bounds()
    }

    /// Message shown when the play-through ends.
    #[must_use]
    pub fn game_over_message(&self) -> String {
        format!("Game Over! Score: {}", self.score)
    }
}

fn start_snake() -> Snake {
    let (x, y) = START_CELL;
    Snake::new(Position { x, y }, START_DIRECTION)
}
