//! Shipment request and destination models.
//!
//! This module defines the [`ShipmentRequest`] aggregate that the resolver
//! consumes and the [`Destination`] it quotes against. The resolver never
//! mutates a request: all totals adjustments happen on private copies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ConditionName, FreeShipping, LineItem};

/// The destination address of a shipment.
///
/// Region and postcode are optional; table-rate rows may match them with
/// wildcards. The address also carries the cart-level free-shipping flag
/// applied by the promotion engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// ISO country code (e.g., "US").
    pub country_id: String,
    /// Region or state code, when known.
    #[serde(default)]
    pub region: Option<String>,
    /// Postal code, when known.
    #[serde(default)]
    pub postcode: Option<String>,
    /// Address-level free-shipping grant.
    #[serde(default)]
    pub free_shipping: FreeShipping,
}

/// A shipment quote request: cart contents, destination, and package totals.
///
/// The weight/value/quantity totals arrive pre-aggregated from the cart.
/// `free_method_weight` is the portion of the package weight that upstream
/// processing left billable after removing items another method ships free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Top-level cart lines. Bundle children are nested, never top-level.
    pub items: Vec<LineItem>,
    /// Where the package ships to.
    pub destination: Destination,
    /// Total package weight.
    pub package_weight: Decimal,
    /// Total item quantity across the package.
    pub package_qty: Decimal,
    /// Package value before discounts.
    pub package_value: Decimal,
    /// Package value after discounts.
    pub package_value_with_discount: Decimal,
    /// Billable weight remaining after upstream free-method adjustments.
    #[serde(default)]
    pub free_method_weight: Decimal,
    /// Explicit condition override; falls back to carrier configuration.
    #[serde(default)]
    pub condition_name: Option<ConditionName>,
}
