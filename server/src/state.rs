//! Application state

use std::sync::Arc;

use frameview_core::TableFrame;

use crate::config::Config;

/// Shared application state
///
/// This struct implements Clone to allow it to be used as Axum state.
/// The frame is immutable for the lifetime of the process, so fields are
/// plain Arcs with no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub frame: Arc<TableFrame>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, frame: TableFrame) -> Self {
        Self {
            config: Arc::new(config),
            frame: Arc::new(frame),
        }
    }
}
