//! Application state for the Table-Rate Shipping Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::CarrierConfig;
use crate::lookup::RateLookup;

/// Shared application state.
///
/// Contains resources shared across all request handlers: the carrier
/// configuration and the injected rate-table capability.
#[derive(Clone)]
pub struct AppState {
    /// The loaded carrier configuration.
    config: Arc<CarrierConfig>,
    /// The rate table queried during resolution.
    rates: Arc<dyn RateLookup + Send + Sync>,
}

impl AppState {
    /// Creates a new application state from the carrier configuration and a
    /// rate lookup.
    pub fn new<L>(config: CarrierConfig, rates: L) -> Self
    where
        L: RateLookup + Send + Sync + 'static,
    {
        Self {
            config: Arc::new(config),
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the carrier configuration.
    pub fn config(&self) -> &CarrierConfig {
        &self.config
    }

    /// Returns a reference to the rate lookup.
    pub fn rates(&self) -> &(dyn RateLookup + Send + Sync) {
        self.rates.as_ref()
    }
}
