//! Momentum-based difficulty controller.
//!
//! Each answer turns into a delta (+1 correct, -1 wrong, +0.5 for a fast
//! correct answer, -0.5 for any slow answer). Momentum decays by half before
//! the delta is added and is clamped to `[-3, 3]`. Crossing `+2` moves one
//! level up, crossing `-2` one level down; either move resets momentum to 0.

use tracing::{debug, info};

use crate::drill_engine::{error::DrillError, models::Difficulty};

pub const MOMENTUM_MIN: f64 = -3.0;
pub const MOMENTUM_MAX: f64 = 3.0;
pub const ADVANCE_THRESHOLD: f64 = 2.0;
pub const RETREAT_THRESHOLD: f64 = -2.0;
pub const DECAY: f64 = 0.5;

const FAST_FRACTION: f64 = 0.7;
const SLOW_FRACTION: f64 = 1.5;
const FAST_BONUS: f64 = 0.5;
const SLOW_PENALTY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyController {
    level: Difficulty,
    momentum: f64,
}

impl DifficultyController {
    pub fn new(start: Difficulty) -> Self {
        DifficultyController { level: start, momentum: 0.0 }
    }

    /// Start at a tier given by index; anything outside `0..=2` is rejected.
    pub fn from_index(index: usize) -> Result<Self, DrillError> {
        Difficulty::from_index(index)
            .map(DifficultyController::new)
            .ok_or(DrillError::InvalidLevelIndex(index))
    }

    /// Level the next question should be asked at.
    pub fn current_level(&self) -> Difficulty {
        self.level
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Feed one answer and return the level it was asked at.
    ///
    /// The level after the update is read through [`current_level`].
    /// Negative response times are not rejected; they count as fast.
    ///
    /// [`current_level`]: DifficultyController::current_level
    pub fn update(&mut self, correct: bool, response_time_s: f64) -> Difficulty {
        let previous = self.level;
        let delta = answer_delta(previous, correct, response_time_s);
        self.momentum = (DECAY * self.momentum + delta).clamp(MOMENTUM_MIN, MOMENTUM_MAX);
        debug!(level = %previous, correct, response_time_s, delta, momentum = self.momentum, "momentum updated");

        let next = if self.momentum >= ADVANCE_THRESHOLD {
            previous.harder()
        } else if self.momentum <= RETREAT_THRESHOLD {
            previous.easier()
        } else {
            None
        };

        if let Some(next) = next {
            info!(from = %previous, to = %next, "difficulty changed");
            self.level = next;
            self.momentum = 0.0;
        }

        previous
    }
}

/// Raw momentum change for one answer at `level`.
fn answer_delta(level: Difficulty, correct: bool, response_time_s: f64) -> f64 {
    let target = level.target_time_s();
    let mut delta = if correct { 1.0 } else { -1.0 };
    if correct && response_time_s < FAST_FRACTION * target {
        delta += FAST_BONUS;
    }
    if response_time_s > SLOW_FRACTION * target {
        delta -= SLOW_PENALTY;
    }
    delta
}
