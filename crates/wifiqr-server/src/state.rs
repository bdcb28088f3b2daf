//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state handed to every handler.
///
/// The encoder itself is pure and stateless; the only shared state is the
/// server configuration (render defaults).
pub type SharedState = Arc<RwLock<AppState>>;

/// Application state.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create new shared application state from a loaded configuration.
    #[must_use]
    pub fn shared(config: ServerConfig) -> SharedState {
        Arc::new(RwLock::new(Self { config }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_state_exposes_config() {
        let state = AppState::shared(ServerConfig::default());
        let guard = state.read().await;
        assert_eq!(guard.config.render.border, 4);
    }
}
