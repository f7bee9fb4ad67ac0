//! Table-Rate Shipping Engine for the own-transport carrier
//!
//! This crate resolves shipping quotes from a table-rate matrix keyed by
//! destination and a configured condition (weight, discounted subtotal, or
//! item count), applying free-shipping adjustments to the package totals
//! before the rate lookup.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
