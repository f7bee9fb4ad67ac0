//! HTTP API module for the Table-Rate Shipping Engine.
//!
//! This module provides the REST API endpoint for quoting a shipment
//! against the own-transport carrier's table rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::{ApiError, ConditionCode};
pub use state::AppState;
