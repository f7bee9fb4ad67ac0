//! Rate resolution for the own-transport carrier.
//!
//! This module drives the whole pipeline: gate on the active flag, adjust
//! the package totals for virtual items and free-shipping grants, query the
//! rate table, and decide between a priced method, a free method, a rate
//! error, or no offer at all.

use rust_decimal::Decimal;

use crate::config::CarrierConfig;
use crate::lookup::{RateLookup, RateQuery};
use crate::models::{
    CARRIER_CODE, METHOD_CODE, RateError, RateOutcome, ShipmentRequest, ShippingMethod,
};

use super::condition::select_condition;
use super::free_shipping::collect_free_shipping;
use super::handling_fee::apply_handling_fee;
use super::virtual_items::virtual_value_deduction;

/// Resolves the carrier's offer for a shipment request.
///
/// Returns `None` when the carrier declines: it is inactive, or the whole
/// shipment is exempt and no table row covers either lookup. Otherwise the
/// outcome is exactly one of a shipping method or a rate error.
///
/// The request is adjusted on private copies only; the caller's aggregate is
/// never mutated, so calling twice with the same request gives the same
/// outcome.
///
/// # Decision tree
///
/// 1. Primary lookup with the billable weight (`free_method_weight`, or the
///    other-method free weight when one accrued) and the quantity left after
///    this carrier's own exemptions.
/// 2. A rate with a non-negative price yields a method; the price is zero
///    when every unit was exempt, otherwise the table price plus handling
///    fee.
/// 3. With no usable rate and every unit exempt, a second lookup runs on the
///    pure free totals; a hit yields a free method, a miss yields nothing.
/// 4. With no usable rate and billable units remaining, the configured error
///    message is surfaced as a rate error.
pub fn collect_rate<L>(
    request: &ShipmentRequest,
    config: &CarrierConfig,
    rates: &L,
) -> Option<RateOutcome>
where
    L: RateLookup + ?Sized,
{
    if !config.active {
        return None;
    }

    let mut package_value = request.package_value;
    let mut package_value_with_discount = request.package_value_with_discount;

    if !config.include_virtual_price {
        let deduction = virtual_value_deduction(&request.items);
        package_value -= deduction.package_value;
        package_value_with_discount -= deduction.package_value_with_discount;
    }

    let free = collect_free_shipping(&request.items, &request.destination);
    package_value -= free.free_package_value;
    package_value_with_discount -= free.free_package_value;

    let free_method_weight = if free.free_weight > Decimal::ZERO {
        free.free_weight
    } else {
        request.free_method_weight
    };

    let condition = select_condition(request, config);
    let fully_exempt = request.package_qty == free.free_qty;

    let query = RateQuery {
        destination: &request.destination,
        condition,
        weight: free_method_weight,
        qty: request.package_qty - free.free_qty,
        value: package_value,
        value_with_discount: package_value_with_discount,
    };

    match rates.find_rate(&query) {
        Some(found) if found.price >= Decimal::ZERO => {
            let price = if fully_exempt {
                Decimal::ZERO
            } else {
                apply_handling_fee(found.price, config)
            };
            Some(RateOutcome::Method(shipping_method(price, found.cost, config)))
        }
        _ if fully_exempt => {
            // The table had no row for the zero-quantity request. Retry on
            // the pure free totals so a matching rate still yields a
            // zero-cost method.
            let retry = RateQuery {
                destination: &request.destination,
                condition,
                weight: request.package_weight,
                qty: free.free_qty,
                value: free.free_package_value,
                value_with_discount: free.free_package_value,
            };

            match rates.find_rate(&retry) {
                Some(found) if found.price >= Decimal::ZERO => Some(RateOutcome::Method(
                    shipping_method(Decimal::ZERO, Decimal::ZERO, config),
                )),
                _ => None,
            }
        }
        _ => Some(RateOutcome::Error(RateError {
            carrier: CARRIER_CODE.to_string(),
            carrier_title: config.title.clone(),
            error_message: config.specific_error_message.clone(),
        })),
    }
}

fn shipping_method(price: Decimal, cost: Decimal, config: &CarrierConfig) -> ShippingMethod {
    ShippingMethod {
        carrier: CARRIER_CODE.to_string(),
        carrier_title: config.title.clone(),
        method: METHOD_CODE.to_string(),
        method_title: config.name.clone(),
        price,
        cost,
    }
}
