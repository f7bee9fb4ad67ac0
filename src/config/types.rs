//! Configuration types for the own-transport carrier.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the carrier's YAML configuration file.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{ConditionName, METHOD_CODE};

/// How the handling fee is applied to a looked-up price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlingFeeType {
    /// A flat amount added to the price.
    Fixed,
    /// A percentage markup on the price.
    Percent,
}

impl Default for HandlingFeeType {
    fn default() -> Self {
        HandlingFeeType::Fixed
    }
}

/// Carrier configuration for the own-transport carrier.
///
/// Read-only from the resolver's perspective. Loaded from `carrier.yaml` by
/// [`crate::config::ConfigLoader`].
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierConfig {
    /// Whether the carrier participates in quoting at all.
    pub active: bool,
    /// Carrier title shown to the customer.
    pub title: String,
    /// Method name shown to the customer.
    pub name: String,
    /// The rate dimension used when the request carries no override.
    #[serde(default)]
    pub condition_name: ConditionName,
    /// Whether virtual items contribute to the package value.
    #[serde(default = "default_include_virtual_price")]
    pub include_virtual_price: bool,
    /// Customer-facing message when no rate applies.
    pub specific_error_message: String,
    /// Handling fee amount; interpretation depends on `handling_fee_type`.
    #[serde(default)]
    pub handling_fee: Decimal,
    /// Whether the handling fee is a flat amount or a percentage.
    #[serde(default)]
    pub handling_fee_type: HandlingFeeType,
}

fn default_include_virtual_price() -> bool {
    true
}

impl CarrierConfig {
    /// Returns the methods this carrier offers, keyed by method code.
    ///
    /// The own-transport carrier offers exactly one method.
    pub fn allowed_methods(&self) -> HashMap<String, String> {
        HashMap::from([(METHOD_CODE.to_string(), self.name.clone())])
    }
}
