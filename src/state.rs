//! Shared application state for all routes.

use crate::service::StudentService;
use std::sync::Arc;

/// Handed to every handler. The gateway is constructed once at startup and
/// injected here; nothing reaches for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn StudentService>,
}
