//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{InMemoryPayslipStore, PayslipStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded tax configuration and the payslip store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn PayslipStore>,
}

impl AppState {
    /// Creates a state backed by an empty in-memory payslip store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(InMemoryPayslipStore::new()))
    }

    /// Creates a state with an explicit payslip store.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn PayslipStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payslip store.
    pub fn store(&self) -> &dyn PayslipStore {
        self.store.as_ref()
    }
}
