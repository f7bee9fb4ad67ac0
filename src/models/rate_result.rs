//! Quote outcome models.
//!
//! This module contains the [`ShippingMethod`] and [`RateError`] results a
//! resolution can produce, the [`RateOutcome`] that holds exactly one of
//! them, and the [`QuoteResult`] envelope returned by the API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The carrier code for the own-transport carrier.
pub const CARRIER_CODE: &str = "own_transport";

/// The single method code offered by the own-transport carrier.
pub const METHOD_CODE: &str = "own_transport";

/// The free-shipping method identifier that qualifies exemptions as ours.
///
/// Line items whose free shipping was granted by a different method keep
/// their weight billable under the weight condition.
pub const FREE_SHIPPING_METHOD: &str = "own_transport_bestway";

/// A priced shipping method offered to the customer.
///
/// Immutable once constructed; the price already includes any handling fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Carrier code ("own_transport").
    pub carrier: String,
    /// Configured carrier title shown to the customer.
    pub carrier_title: String,
    /// Method code ("own_transport").
    pub method: String,
    /// Configured method name shown to the customer.
    pub method_title: String,
    /// Final price charged to the customer.
    pub price: Decimal,
    /// Carrier's internal cost basis from the rate table.
    pub cost: Decimal,
}

/// A carrier-level error returned when no rate applies to the shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateError {
    /// Carrier code ("own_transport").
    pub carrier: String,
    /// Configured carrier title shown to the customer.
    pub carrier_title: String,
    /// Configured error message shown to the customer.
    pub error_message: String,
}

/// The outcome of a rate resolution: a method or an error, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RateOutcome {
    /// A shipping method was resolved, priced or free.
    Method(ShippingMethod),
    /// No rate applies; the configured error message is surfaced.
    Error(RateError),
}

impl RateOutcome {
    /// Returns the shipping method, if this outcome is one.
    pub fn method(&self) -> Option<&ShippingMethod> {
        match self {
            RateOutcome::Method(method) => Some(method),
            RateOutcome::Error(_) => None,
        }
    }

    /// Returns the rate error, if this outcome is one.
    pub fn error(&self) -> Option<&RateError> {
        match self {
            RateOutcome::Method(_) => None,
            RateOutcome::Error(error) => Some(error),
        }
    }
}

/// The quote envelope returned by the API.
///
/// `outcome` is `None` when the carrier declined: inactive, or a fully
/// exempt shipment that no table row covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the quote.
    pub engine_version: String,
    /// The resolved outcome, when the carrier offered one.
    pub outcome: Option<RateOutcome>,
}
