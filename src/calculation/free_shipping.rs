//! Free-shipping accounting.
//!
//! This module walks the cart once and accumulates three totals that drive
//! the rate lookup: the quantity exempted by this carrier's own free-shipping
//! grants, the package value those grants cover, and the weight that must
//! stay billable because a different method granted the exemption.

use rust_decimal::Decimal;

use crate::models::{Destination, FREE_SHIPPING_METHOD, LineItem};

/// Accumulated free-shipping totals for a shipment.
///
/// `free_qty` and `free_package_value` come from this carrier's own grants
/// and shrink the quantity and value the rate table sees. `free_weight`
/// moves the opposite way: it is weight other methods made free that this
/// carrier still has to transport, so it replaces the billable weight used
/// for the weight condition. The two pools are deliberately separate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FreeShippingTotals {
    /// Units exempted from the quantity condition.
    pub free_qty: Decimal,
    /// Package value exempted by the grants behind `free_qty`.
    pub free_package_value: Decimal,
    /// Weight granted free by a different method; stays billable here.
    pub free_weight: Decimal,
}

/// Collects free-shipping totals from the top-level, non-virtual cart lines.
///
/// For a bundle whose children ship separately, each non-virtual child with
/// a grant contributes `parent_qty × (child_qty − exempt_units)`: bundle
/// grants compound at the parent quantity multiplier.
///
/// For a standalone item, the grant applies when the item or the destination
/// address carries one and the item's granting method is absent or is this
/// carrier's own. The item-level grant takes precedence over the
/// address-level one when both are present.
///
/// Independently of either branch, any line whose granting method is set and
/// is not this carrier's own adds its integer-truncated weight to
/// `free_weight`.
pub fn collect_free_shipping(items: &[LineItem], destination: &Destination) -> FreeShippingTotals {
    let mut totals = FreeShippingTotals::default();

    for item in items {
        if item.is_virtual {
            continue;
        }

        if item.has_children() && item.ship_separately {
            for child in &item.children {
                if child.free_shipping.is_free() && !child.is_virtual {
                    totals.free_qty +=
                        item.qty * (child.qty - child.free_shipping.exempt_units());
                }
            }
        } else if (item.free_shipping.is_free() || destination.free_shipping.is_free())
            && item
                .free_shipping_method
                .as_deref()
                .is_none_or(|method| method == FREE_SHIPPING_METHOD)
        {
            let grant = if item.free_shipping.is_free() {
                item.free_shipping
            } else {
                destination.free_shipping
            };
            totals.free_qty += item.qty - grant.exempt_units();
            totals.free_package_value += item.base_row_total;
        }

        if let Some(method) = item.free_shipping_method.as_deref() {
            if method != FREE_SHIPPING_METHOD {
                totals.free_weight += item.weight.trunc();
            }
        }
    }

    totals
}
