//! Handling-fee application.
//!
//! The carrier may mark up the looked-up price with a configured handling
//! fee, either a flat amount or a percentage of the price.

use rust_decimal::Decimal;

use crate::config::{CarrierConfig, HandlingFeeType};

/// Applies the configured handling fee to a base price.
///
/// A fixed fee adds a flat amount; a percent fee multiplies the price by
/// `1 + fee/100`. With the default zero fee the price passes through
/// unchanged.
///
/// # Example
///
/// ```
/// use tablerate_engine::calculation::apply_handling_fee;
/// use tablerate_engine::config::CarrierConfig;
/// use rust_decimal::Decimal;
///
/// let config: CarrierConfig = serde_yaml::from_str(
///     "active: true\ntitle: t\nname: n\nspecific_error_message: m\nhandling_fee: \"2.00\"\n",
/// ).unwrap();
/// assert_eq!(
///     apply_handling_fee(Decimal::from(10), &config),
///     Decimal::from(12)
/// );
/// ```
pub fn apply_handling_fee(price: Decimal, config: &CarrierConfig) -> Decimal {
    match config.handling_fee_type {
        HandlingFeeType::Fixed => price + config.handling_fee,
        HandlingFeeType::Percent => {
            price * (Decimal::ONE + config.handling_fee / Decimal::ONE_HUNDRED)
        }
    }
}
