pub mod config;
pub mod dice;
pub mod handlers;
pub mod state;

use axum::{http::Method, routing::get, Router};
use crate::config::Config;
use crate::dice::ThreadRngSource;
use crate::handlers::rest;
use crate::state::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_app(config: Config) -> Router {
    let state = Arc::new(AppState {
        random: Arc::new(ThreadRngSource::new()),
        config: Arc::new(config),
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/rolldice", get(rest::roll_dice_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)))
        .layer(cors)
}
