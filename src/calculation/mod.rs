//! Calculation logic for the Table-Rate Shipping Engine.
//!
//! This module contains the rate-resolution pipeline: virtual-item value
//! exclusion, free-shipping accounting, condition selection and the code
//! catalog, handling-fee application, and the resolver that turns a
//! shipment request into a priced method, a free method, or a rate error.

mod condition;
mod free_shipping;
mod handling_fee;
mod resolver;
mod virtual_items;

pub use condition::{condition_codes, condition_label, select_condition};
pub use free_shipping::{FreeShippingTotals, collect_free_shipping};
pub use handling_fee::apply_handling_fee;
pub use resolver::collect_rate;
pub use virtual_items::{VirtualValueDeduction, virtual_value_deduction};
