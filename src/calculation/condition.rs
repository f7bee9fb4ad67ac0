//! Condition selection and the condition code catalog.
//!
//! The catalog mirrors the carrier's admin vocabulary: the `condition_name`
//! code type carries the full labels and `condition_name_short` the labels
//! used next to rate thresholds. Querying an unknown type or code is a hard
//! configuration error.

use crate::config::CarrierConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ConditionName, ShipmentRequest};

const CODE_TYPE_CONDITION_NAME: &str = "condition_name";
const CODE_TYPE_CONDITION_NAME_SHORT: &str = "condition_name_short";

/// Returns the condition the rate lookup should bucket by.
///
/// A condition carried on the request overrides the configured one; the
/// configuration itself defaults to the weight condition.
pub fn select_condition(request: &ShipmentRequest, config: &CarrierConfig) -> ConditionName {
    request.condition_name.unwrap_or(config.condition_name)
}

/// Returns all `(code, label)` pairs for a catalog code type.
///
/// # Errors
///
/// Returns [`EngineError::UnknownCodeType`] when the code type is not
/// `condition_name` or `condition_name_short`.
pub fn condition_codes(code_type: &str) -> EngineResult<Vec<(&'static str, &'static str)>> {
    let label_for: fn(&ConditionName) -> &'static str = match code_type {
        CODE_TYPE_CONDITION_NAME => ConditionName::label,
        CODE_TYPE_CONDITION_NAME_SHORT => ConditionName::short_label,
        _ => {
            return Err(EngineError::UnknownCodeType {
                code_type: code_type.to_string(),
            });
        }
    };

    Ok(ConditionName::ALL
        .into_iter()
        .map(|condition| (condition.as_code(), label_for(&condition)))
        .collect())
}

/// Returns the label for a single catalog code.
///
/// # Errors
///
/// Returns [`EngineError::UnknownCodeType`] for an unknown code type and
/// [`EngineError::UnknownConditionCode`] for an unknown code within a known
/// type.
///
/// # Example
///
/// ```
/// use tablerate_engine::calculation::condition_label;
///
/// let label = condition_label("condition_name", "package_weight").unwrap();
/// assert_eq!(label, "Weight vs. Destination");
/// ```
pub fn condition_label(code_type: &str, code: &str) -> EngineResult<&'static str> {
    let codes = condition_codes(code_type)?;

    codes
        .into_iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| label)
        .ok_or_else(|| EngineError::UnknownConditionCode {
            code_type: code_type.to_string(),
            code: code.to_string(),
        })
}
