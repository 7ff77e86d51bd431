//! Application state for the break audit API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::options::ReconcileOptions;

/// Shared application state.
///
/// Holds the server-wide reconciliation defaults. Individual requests
/// may override thresholds per run.
#[derive(Clone)]
pub struct AppState {
    /// Default reconciliation parameters.
    options: Arc<ReconcileOptions>,
}

impl AppState {
    /// Creates a new application state with the given default options.
    pub fn new(options: ReconcileOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// Returns a reference to the default options.
    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ReconcileOptions::default())
    }
}
