//! Configuration loading and management for the Table-Rate Shipping Engine.
//!
//! This module provides functionality to load the carrier configuration from
//! a YAML file, including the active flag, titles, condition name, handling
//! fee, and the customer-facing error message.
//!
//! # Example
//!
//! ```no_run
//! use tablerate_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/own_transport").unwrap();
//! println!("Carrier: {}", config.carrier().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CarrierConfig, HandlingFeeType};
