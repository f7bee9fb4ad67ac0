//! Rate lookup capability and the in-memory table-rate matrix.
//!
//! The resolver depends on the [`RateLookup`] trait rather than a concrete
//! rate store, so tests can inject deterministic fakes and services can plug
//! in whatever persistence they use. [`InMemoryTableRate`] is the bundled
//! implementation: a row list with destination wildcards and
//! "value and above" threshold matching, loadable from the CSV layout used
//! for table-rate imports.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ConditionName, Destination};

/// Wildcard marker for destination columns in table-rate rows.
pub const WILDCARD: &str = "*";

/// The totals a rate lookup matches against.
///
/// The resolver builds queries from adjusted totals; callers never pass a
/// raw [`crate::models::ShipmentRequest`] to a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuery<'a> {
    /// Destination the package ships to.
    pub destination: &'a Destination,
    /// The dimension rate buckets are keyed by.
    pub condition: ConditionName,
    /// Billable package weight.
    pub weight: Decimal,
    /// Billable item quantity.
    pub qty: Decimal,
    /// Package value before discounts.
    pub value: Decimal,
    /// Package value after discounts.
    pub value_with_discount: Decimal,
}

impl RateQuery<'_> {
    /// Returns the value compared against row thresholds for this query's
    /// condition.
    pub fn condition_value(&self) -> Decimal {
        match self.condition {
            ConditionName::PackageWeight => self.weight,
            ConditionName::PackageValueWithDiscount => self.value_with_discount,
            ConditionName::PackageQty => self.qty,
        }
    }
}

/// A matched rate: the price to charge and the carrier's cost basis.
///
/// A negative price is possible in imported data and signals "no usable
/// rate" to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLookupResult {
    /// Price from the rate table.
    pub price: Decimal,
    /// Carrier's internal cost basis.
    pub cost: Decimal,
}

/// The injected rate-table capability.
///
/// Implementations own the matching semantics for their store; the bundled
/// [`InMemoryTableRate`] documents the reference behavior.
pub trait RateLookup {
    /// Finds the rate for the given query, or `None` when no row matches.
    fn find_rate(&self, query: &RateQuery<'_>) -> Option<RateLookupResult>;
}

/// One row of the table-rate matrix.
///
/// Destination columns accept the `*` wildcard. `condition_value` is the
/// lower bound of the bucket: a row applies to any query whose condition
/// value is at or above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRateRow {
    /// ISO country code or `*`.
    pub country: String,
    /// Region code or `*`.
    pub region: String,
    /// Postal code or `*`.
    pub postcode: String,
    /// Lower bound of the condition bucket ("and above").
    pub condition_value: Decimal,
    /// Price charged for this bucket.
    pub price: Decimal,
    /// Carrier cost basis for this bucket.
    pub cost: Decimal,
}

impl TableRateRow {
    fn matches_destination(&self, destination: &Destination) -> bool {
        column_matches(&self.country, Some(&destination.country_id))
            && column_matches(&self.region, destination.region.as_deref())
            && column_matches(&self.postcode, destination.postcode.as_deref())
    }

    /// Higher scores win when several rows match a destination: an exact
    /// country beats any region or postcode match alone.
    fn specificity(&self) -> u8 {
        let mut score = 0;
        if self.country != WILDCARD {
            score += 4;
        }
        if self.region != WILDCARD {
            score += 2;
        }
        if self.postcode != WILDCARD {
            score += 1;
        }
        score
    }
}

fn column_matches(column: &str, value: Option<&str>) -> bool {
    if column == WILDCARD {
        return true;
    }
    value == Some(column)
}

/// An in-memory table-rate matrix.
///
/// Matching picks the most destination-specific rows first, then the
/// highest bucket at or below the query's condition value.
///
/// # Example
///
/// ```
/// use tablerate_engine::lookup::{InMemoryTableRate, RateLookup, RateQuery, TableRateRow};
/// use tablerate_engine::models::{ConditionName, Destination, FreeShipping};
/// use rust_decimal::Decimal;
///
/// let table = InMemoryTableRate::with_rows(vec![TableRateRow {
///     country: "US".to_string(),
///     region: "*".to_string(),
///     postcode: "*".to_string(),
///     condition_value: Decimal::ZERO,
///     price: Decimal::from(15),
///     cost: Decimal::from(10),
/// }]);
///
/// let destination = Destination {
///     country_id: "US".to_string(),
///     region: None,
///     postcode: None,
///     free_shipping: FreeShipping::Flag(false),
/// };
/// let query = RateQuery {
///     destination: &destination,
///     condition: ConditionName::PackageWeight,
///     weight: Decimal::from(5),
///     qty: Decimal::ONE,
///     value: Decimal::from(100),
///     value_with_discount: Decimal::from(100),
/// };
/// assert_eq!(table.find_rate(&query).unwrap().price, Decimal::from(15));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableRate {
    rows: Vec<TableRateRow>,
}

impl InMemoryTableRate {
    /// Creates a matrix from the given rows.
    pub fn with_rows(rows: Vec<TableRateRow>) -> Self {
        Self { rows }
    }

    /// Loads a matrix from a CSV file.
    ///
    /// The expected header is
    /// `country,region,postcode,condition_value,price,cost`, matching the
    /// import layout of table-rate carriers.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path_str = path.as_ref().display().to_string();

        let mut reader =
            csv::Reader::from_path(path.as_ref()).map_err(|e| EngineError::RateImportError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: TableRateRow = record.map_err(|e| EngineError::RateImportError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
            rows.push(row);
        }

        Ok(Self::with_rows(rows))
    }

    /// Returns the number of rows in the matrix.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the matrix holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RateLookup for InMemoryTableRate {
    fn find_rate(&self, query: &RateQuery<'_>) -> Option<RateLookupResult> {
        let threshold = query.condition_value();

        self.rows
            .iter()
            .filter(|row| {
                row.matches_destination(query.destination) && row.condition_value <= threshold
            })
            .max_by_key(|row| (row.specificity(), row.condition_value))
            .map(|row| RateLookupResult {
                price: row.price,
                cost: row.cost,
            })
    }
}
