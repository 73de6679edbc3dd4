use super::roller::RandomSource;

/// A die with half-open bounds: raw rolls land in `[min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct Dice {
    min: i32,
    max: i32,
}

/// One roll. `raw` is the value before correction; when `raw` falls below 1
/// it is remapped to exactly 1 and `clamped` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub value: i32,
    pub raw: i32,
    pub clamped: bool,
}

impl Dice {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Rolls once: `floor(u * (max - min)) + min`, then the clamp. With the
    /// service bounds of `[-2, 6)` the clamp absorbs -2, -1 and 0, so the
    /// final distribution over 1..=5 is skewed toward 1. That skew is
    /// observable behavior and must survive any refactor.
    pub fn roll(&self, source: &dyn RandomSource) -> RollOutcome {
        let span = f64::from(self.max - self.min);
        let raw = (source.next_uniform() * span).floor() as i32 + self.min;

        if raw < 1 {
            RollOutcome { value: 1, raw, clamped: true }
        } else {
            RollOutcome { value: raw, raw, clamped: false }
        }
    }
}

/// The info-level log line for a roll, announced under the player's name when
/// one was supplied.
pub fn announcement(player: Option<&str>, value: i32) -> String {
    match player {
        Some(name) => format!("{} is rolling the dice: {}", name, value),
        None => format!("Anonymous player is rolling the dice: {}", value),
    }
}
