pub mod domain;
mod roller;


pub use domain::{announcement, Dice, RollOutcome};
pub use roller::{RandomSource, ThreadRngSource};
