//! Virtual-item value exclusion.
//!
//! When the carrier is configured to exclude virtual prices, the value of
//! virtual items must not contribute to the package value the rate table is
//! queried with. This module computes the amounts to deduct.

use rust_decimal::Decimal;

use crate::models::LineItem;

/// Amounts to deduct from the package value totals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VirtualValueDeduction {
    /// Deduction from the pre-discount package value.
    pub package_value: Decimal,
    /// Deduction from the discounted package value.
    pub package_value_with_discount: Decimal,
}

/// Computes the virtual-item value to exclude from the package totals.
///
/// Scans top-level items only:
/// - for bundles whose children ship separately, each virtual child's row
///   total is deducted from the pre-discount package value;
/// - for standalone virtual items, the row total is deducted from both the
///   pre-discount and the discounted package value.
///
/// A non-virtual parent shipped together with a virtual child is not
/// adjusted: such children are folded into the parent's own row total and
/// covered by the parent's own virtual flag.
pub fn virtual_value_deduction(items: &[LineItem]) -> VirtualValueDeduction {
    let mut deduction = VirtualValueDeduction::default();

    for item in items {
        if item.has_children() && item.ship_separately {
            for child in &item.children {
                if child.is_virtual {
                    deduction.package_value += child.base_row_total;
                }
            }
        } else if item.is_virtual {
            deduction.package_value += item.base_row_total;
            deduction.package_value_with_discount += item.base_row_total;
        }
    }

    deduction
}
