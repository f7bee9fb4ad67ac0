//! Line item model and the free-shipping flag.
//!
//! This module defines the [`LineItem`] struct for cart lines and the
//! [`FreeShipping`] flag that records how many units of a line were granted
//! free shipping by the promotion engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A free-shipping grant on a line item or destination address.
///
/// The promotion engine records free shipping either as a plain flag or as a
/// numeric value. The numeric form counts the units that remain billable
/// under the quantity condition; the boolean form exempts the entire line.
///
/// # Example
///
/// ```
/// use tablerate_engine::models::FreeShipping;
/// use rust_decimal::Decimal;
///
/// let full = FreeShipping::Flag(true);
/// assert!(full.is_free());
/// assert_eq!(full.exempt_units(), Decimal::ZERO);
///
/// let partial = FreeShipping::Units(Decimal::from(4));
/// assert!(partial.is_free());
/// assert_eq!(partial.exempt_units(), Decimal::from(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FreeShipping {
    /// Whole-line flag: `true` exempts the entire line.
    Flag(bool),
    /// Numeric grant counting the units excluded from the exemption.
    Units(Decimal),
}

impl FreeShipping {
    /// Returns true if this grant exempts any part of the line.
    ///
    /// A numeric grant of zero counts as no grant at all.
    pub fn is_free(&self) -> bool {
        match self {
            FreeShipping::Flag(flag) => *flag,
            FreeShipping::Units(units) => !units.is_zero(),
        }
    }

    /// Returns the unit count carried by a numeric grant, zero otherwise.
    ///
    /// A boolean grant carries no unit count: the whole line is exempt and
    /// nothing is held back from the quantity condition.
    pub fn exempt_units(&self) -> Decimal {
        match self {
            FreeShipping::Flag(_) => Decimal::ZERO,
            FreeShipping::Units(units) => *units,
        }
    }
}

impl Default for FreeShipping {
    fn default() -> Self {
        FreeShipping::Flag(false)
    }
}

/// A line in the cart being quoted.
///
/// Items form a shallow two-level tree: a bundle parent owns its children
/// directly, and child lines never appear at the top level of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity ordered for this line.
    pub qty: Decimal,
    /// Weight per the catalog, for the whole line.
    pub weight: Decimal,
    /// Row total before discounts, in base currency.
    pub base_row_total: Decimal,
    /// Free-shipping grant on this line.
    #[serde(default)]
    pub free_shipping: FreeShipping,
    /// The carrier method that granted free shipping, when one did.
    #[serde(default)]
    pub free_shipping_method: Option<String>,
    /// Whether the product is virtual (nothing to ship).
    #[serde(default)]
    pub is_virtual: bool,
    /// Whether a bundle's children ship separately from the parent.
    #[serde(default)]
    pub ship_separately: bool,
    /// Child lines, for bundle products. Empty for simple items.
    #[serde(default)]
    pub children: Vec<LineItem>,
}

impl LineItem {
    /// Returns true if this line is a bundle with child lines.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
