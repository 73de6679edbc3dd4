use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    dice::{announcement, Dice},
    state::SharedState,
};

// Bounds handed to the dice by this endpoint. Raw rolls below 1 are corrected
// by the clamp in `Dice::roll`.
const ROLL_MIN: i32 = -2;
const ROLL_MAX: i32 = 6;

#[derive(Debug, Deserialize)]
pub struct RollParams {
    pub player: Option<String>,
}

// ==============================================================================
// === REST API Handlers
// =============================================================================

#[instrument(skip(state))]
pub async fn roll_dice_handler(
    State(state): State<SharedState>,
    Query(params): Query<RollParams>,
) -> String {
    let outcome = Dice::new(ROLL_MIN, ROLL_MAX).roll(state.random.as_ref());

    if outcome.clamped {
        tracing::warn!(raw = outcome.raw, "Illegal number rolled, setting result to '1'");
    }
    tracing::info!("{}", announcement(params.player.as_deref(), outcome.value));

    outcome.value.to_string()
}
