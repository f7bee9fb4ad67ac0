//! Core data models for the Table-Rate Shipping Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod condition;
mod line_item;
mod rate_result;
mod shipment_request;

pub use condition::ConditionName;
pub use line_item::{FreeShipping, LineItem};
pub use rate_result::{
    CARRIER_CODE, FREE_SHIPPING_METHOD, METHOD_CODE, QuoteResult, RateError, RateOutcome,
    ShippingMethod,
};
pub use shipment_request::{Destination, ShipmentRequest};
