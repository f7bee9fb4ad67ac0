//! Condition name model.
//!
//! This module defines the [`ConditionName`] enum naming the dimension of a
//! shipment (weight, discounted subtotal, or item count) used to select a
//! rate bucket from the table-rate matrix.

use serde::{Deserialize, Serialize};

/// The dimension used to select a rate bucket from the table-rate matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionName {
    /// Rate buckets are keyed by total package weight.
    PackageWeight,
    /// Rate buckets are keyed by order subtotal after discounts.
    PackageValueWithDiscount,
    /// Rate buckets are keyed by number of items in the package.
    PackageQty,
}

impl ConditionName {
    /// All recognized conditions, in catalog order.
    pub const ALL: [ConditionName; 3] = [
        ConditionName::PackageWeight,
        ConditionName::PackageValueWithDiscount,
        ConditionName::PackageQty,
    ];

    /// Returns the configuration code for this condition.
    pub fn as_code(&self) -> &'static str {
        match self {
            ConditionName::PackageWeight => "package_weight",
            ConditionName::PackageValueWithDiscount => "package_value_with_discount",
            ConditionName::PackageQty => "package_qty",
        }
    }

    /// Returns the human-readable label for this condition.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionName::PackageWeight => "Weight vs. Destination",
            ConditionName::PackageValueWithDiscount => "Price vs. Destination",
            ConditionName::PackageQty => "# of Items vs. Destination",
        }
    }

    /// Returns the short label used when presenting rate thresholds.
    pub fn short_label(&self) -> &'static str {
        match self {
            ConditionName::PackageWeight => "Weight (and above)",
            ConditionName::PackageValueWithDiscount => "Order Subtotal (and above)",
            ConditionName::PackageQty => "# of Items (and above)",
        }
    }
}

impl Default for ConditionName {
    /// Weight vs. destination is the default rate dimension.
    fn default() -> Self {
        ConditionName::PackageWeight
    }
}
