use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::snake::Position;

/// Chance of spawning bad food.
pub const BAD_FOOD_CHANCE: f64 = 0.10;

/// Chance of spawning gold food.
pub const GOLD_FOOD_CHANCE: f64 = 0.10;

/// Food type and its effect when eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FoodKind {
    Normal,
    Gold,
    Bad,
}

impl FoodKind {
    /// Picks a kind from one uniform roll in `[0, 1)`.
    #[must_use]
    pub fn from_roll(roll: f64) -> Self {
        if roll < BAD_FOOD_CHANCE {
            Self::Bad
        } else if roll < BAD_FOOD_CHANCE + GOLD_FOOD_CHANCE {
            Self::Gold
        } else {
            Self::Normal
        }
    }

    /// Score change applied when eaten.
    #[must_use]
    pub fn score_delta(self) -> i32 {
        match self {
            Self::Normal => 1,
            Self::Gold => 3,
            Self::Bad => -5,
        }
    }

    /// Nominal length change when eaten.
    ///
    /// The session applies it on top of the head insert of the same tick, so
    /// `-2` nets one segment shorter than before the tick.
    #[must_use]
    pub fn length_delta(self) -> i32 {
        match self {
            Self::Normal | Self::Gold => 1,
            Self::Bad => -2,
        }
    }
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    #[must_use]
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Creates a normal food at `position`.
    #[must_use]
    pub fn normal(position: Position) -> Self {
        Self::new(position, FoodKind::Normal)
    }
}

/// Source of randomness for food placement.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

impl RandomSource for StdRng {
    fn next_uniform(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

/// Places food on the grid with a single long-lived random source.
#[derive(Debug, Clone)]
pub struct FoodGenerator<R> {
    bounds: GridSize,
    rng: R,
}

impl<R: RandomSource> FoodGenerator<R> {
    #[must_use]
    pub fn new(bounds: GridSize, rng: R) -> Self {
        Self { bounds, rng }
    }

    /// Spawns food on any cell of the grid.
    ///
    /// The snake is not consulted: food may land under its body and stay
    /// unreachable until the body moves off it.
    pub fn spawn(&mut self) -> Food {
        let x = self.rng.next_int(u32::from(self.bounds.width));
        let y = self.rng.next_int(u32::from(self.bounds.height));
        let kind = FoodKind::from_roll(self.rng.next_uniform());

        // Grid dimensions are u16, so both coordinates fit in i32.
        let position = Position {
            x: x as i32,
            y: y as i32,
        };
        debug!("spawned {kind:?} food at ({}, {})", position.x, position.y);

        Food::new(position, kind)
    }
}

impl<R> FoodGenerator<R> {
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{FoodGenerator, FoodKind, RandomSource};

    /// Replays fixed draws; falls back to zero once exhausted.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedRandom {
        pub(crate) ints: VecDeque<u32>,
        pub(crate) uniforms: VecDeque<f64>,
    }

    impl RandomSource for ScriptedRandom {
        fn next_uniform(&mut self) -> f64 {
            self.uniforms.pop_front().unwrap_or(0.5)
        }

        fn next_int(&mut self, bound: u32) -> u32 {
            self.ints.pop_front().unwrap_or(0) % bound
        }
    }

    #[test]
    fn roll_thresholds_pick_kind() {
        assert_eq!(FoodKind::from_roll(0.0), FoodKind::Bad);
        assert_eq!(FoodKind::from_roll(0.099), FoodKind::Bad);
        assert_eq!(FoodKind::from_roll(0.10), FoodKind::Gold);
        assert_eq!(FoodKind::from_roll(0.199), FoodKind::Gold);
        assert_eq!(FoodKind::from_roll(0.20), FoodKind::Normal);
        assert_eq!(FoodKind::from_roll(0.999), FoodKind::Normal);
    }

    #[test]
    fn kinds_carry_fixed_effects() {
        assert_eq!(
            (FoodKind::Normal.score_delta(), FoodKind::Normal.length_delta()),
            (1, 1)
        );
        assert_eq!(
            (FoodKind::Gold.score_delta(), FoodKind::Gold.length_delta()),
            (3, 1)
        );
        assert_eq!(
            (FoodKind::Bad.score_delta(), FoodKind::Bad.length_delta()),
            (-5, -2)
        );
    }

    #[test]
    fn spawn_uses_draws_in_order() {
        let rng = ScriptedRandom {
            ints: VecDeque::from([7, 11]),
            uniforms: VecDeque::from([0.15]),
        };
        let mut foods = FoodGenerator::new(
            GridSize {
                width: 24,
                height: 24,
            },
            rng,
        );

        let food = foods.spawn();

        assert_eq!(food.position, Position { x: 7, y: 11 });
        assert_eq!(food.kind, FoodKind::Gold);
    }

    #[test]
    fn seeded_spawns_stay_in_bounds() {
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let mut foods = FoodGenerator::new(bounds, StdRng::seed_from_u64(7));

        for _ in 0..200 {
            assert!(foods.spawn().position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let bounds = GridSize {
            width: 24,
            height: 24,
        };
        let mut left = FoodGenerator::new(bounds, StdRng::seed_from_u64(99));
        let mut right = FoodGenerator::new(bounds, StdRng::seed_from_u64(99));

        for _ in 0..20 {
            assert_eq!(left.spawn(), right.spawn());
        }
    }

    #[test]
    fn seeded_distribution_roughly_matches_weights() {
        let mut foods = FoodGenerator::new(
            GridSize {
                width: 24,
                height: 24,
            },
            StdRng::seed_from_u64(3),
        );
        let mut bad = 0;
        let mut gold = 0;
        for _ in 0..10_000 {
            match foods.spawn().kind {
                FoodKind::Bad => bad += 1,
                FoodKind::Gold => gold += 1,
                FoodKind::Normal => {}
            }
        }

        assert!((800..1200).contains(&bad), "bad = {bad}");
        assert!((800..1200).contains(&gold), "gold = {gold}");
    }
}
