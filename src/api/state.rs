//! Application state shared across request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::history::{HistoryStore, InMemoryHistory};

/// Shared application state.
///
/// Holds the loaded year tables and the calculation history store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    history: Arc<dyn HistoryStore>,
}

impl AppState {
    /// Creates a state with the given tables and an in-memory history.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_history(config, Arc::new(InMemoryHistory::new()))
    }

    /// Creates a state with a caller-provided history store.
    pub fn with_history(config: ConfigLoader, history: Arc<dyn HistoryStore>) -> Self {
        Self {
            config: Arc::new(config),
            history,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the history store.
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }
}
