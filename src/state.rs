use std::sync::Arc;

use crate::config::Config;
use crate::dice::RandomSource;

pub struct AppState {
    pub random: Arc<dyn RandomSource>,
    pub config: Arc<Config>,
}

pub type SharedState = Arc<AppState>;
