//! Request types for the Table-Rate Shipping Engine API.
//!
//! This module defines the JSON request structures for the `/quote` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ConditionName, Destination, FreeShipping, LineItem, ShipmentRequest};

/// Request body for the `/quote` endpoint.
///
/// Carries the cart contents, the destination, and the pre-aggregated
/// package totals for a single shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Top-level cart lines.
    pub items: Vec<LineItemRequest>,
    /// Where the package ships to.
    pub destination: DestinationRequest,
    /// Total package weight.
    pub package_weight: Decimal,
    /// Total item quantity across the package.
    pub package_qty: Decimal,
    /// Package value before discounts.
    pub package_value: Decimal,
    /// Package value after discounts.
    pub package_value_with_discount: Decimal,
    /// Billable weight after upstream free-method adjustments; defaults to
    /// the package weight when omitted.
    #[serde(default)]
    pub free_method_weight: Option<Decimal>,
    /// Explicit condition override.
    #[serde(default)]
    pub condition_name: Option<ConditionName>,
}

/// Destination information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRequest {
    /// ISO country code.
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

/// Line item information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Quantity ordered for this line.
    pub qty: Decimal,
    /// Weight for the whole line.
    pub weight: Decimal,
    /// Row total before discounts.
    pub base_row_total: Decimal,
    /// Free-shipping grant on this line.
    #[serde(default)]
    pub free_shipping: FreeShipping,
    /// The method that granted free shipping, when one did.
    #[serde(default)]
    pub free_shipping_method: Option<String>,
    /// Whether the product is virtual.
    #[serde(default)]
    pub is_virtual: bool,
    /// Whether a bundle's children ship separately.
    #[serde(default)]
    pub ship_separately: bool,
    /// Child lines, for bundle products.
    #[serde(default)]
    pub children: Vec<LineItemRequest>,
}

impl From<DestinationRequest> for Destination {
    fn from(req: DestinationRequest) -> Self {
        Destination {
            country_id: req.country_id,
            region: req.region,
            postcode: req.postcode,
            free_shipping: req.free_shipping,
        }
    }
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            qty: req.qty,
            weight: req.weight,
            base_row_total: req.base_row_total,
            free_shipping: req.free_shipping,
            free_shipping_method: req.free_shipping_method,
            is_virtual: req.is_virtual,
            ship_separately: req.ship_separately,
            children: req.children.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<QuoteRequest> for ShipmentRequest {
    fn from(req: QuoteRequest) -> Self {
        let free_method_weight = req.free_method_weight.unwrap_or(req.package_weight);
        ShipmentRequest {
            items: req.items.into_iter().map(Into::into).collect(),
            destination: req.destination.into(),
            package_weight: req.package_weight,
            package_qty: req.package_qty,
            package_value: req.package_value,
            package_value_with_discount: req.package_value_with_discount,
            free_method_weight,
            condition_name: req.condition_name,
        }
    }
}
