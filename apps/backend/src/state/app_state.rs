use std::sync::Arc;

use crate::repos::games::GameStore;
use crate::services::games::GameService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Game orchestration over the configured store
    pub games: GameService,
}

impl AppState {
    /// Create a new AppState over the given store
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self {
            games: GameService::new(store),
        }
    }
}
