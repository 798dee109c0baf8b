use std::sync::Arc;

use fomo_relay::ContactRelay;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound relay for contact-form submissions.
    pub relay: Arc<dyn ContactRelay>,
}
