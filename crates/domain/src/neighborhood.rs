//! Neighborhood — a district name with its price per square meter.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::NeighborhoodId;

/// Maximum number of characters in a district name.
pub const MAX_NAME_LEN: usize = 45;

/// Maximum number of digits (integer and fractional combined) in a price.
pub const MAX_VALUE_DIGITS: u32 = 13;

/// A stored neighborhood record.
///
/// The serialized form uses the camel-case field names of the persisted
/// file and the HTTP API; the price is written as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: NeighborhoodId,
    pub name_district: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value_district_m2: Decimal,
}

/// A neighborhood submitted for creation, before an id is assigned.
///
/// Decoding is lenient so that bad field values surface as validation
/// failures: a missing or `null` name decodes as empty and a missing or
/// `null` price decodes as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNeighborhood {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name_district: String,
    #[serde(default)]
    pub value_district_m2: Option<SubmittedPrice>,
}

/// A price as received from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmittedPrice {
    Exact(Decimal),
    /// A JSON number that does not fit in a [`Decimal`] without losing
    /// digits. Only its sign is kept.
    OutOfRange { positive: bool },
}

impl SubmittedPrice {
    /// Convert a JSON number, keeping every digit a [`Decimal`] can hold.
    #[must_use]
    pub fn from_number(number: &serde_json::Number) -> Self {
        if let Some(value) = number.as_i64() {
            return Self::Exact(Decimal::from(value));
        }
        if let Some(value) = number.as_u64() {
            return Self::Exact(Decimal::from(value));
        }
        let value = number.as_f64().unwrap_or_default();
        let positive = value > 0.0;
        // f64's Display never uses an exponent, so `1e30` is spelled out in full.
        match Decimal::from_str(&value.to_string()) {
            Ok(exact) if exact > Decimal::ZERO || !positive => Self::Exact(exact),
            _ => Self::OutOfRange { positive },
        }
    }
}

impl From<Decimal> for SubmittedPrice {
    fn from(value: Decimal) -> Self {
        Self::Exact(value)
    }
}

impl<'de> Deserialize<'de> for SubmittedPrice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Number::deserialize(deserializer).map(|number| Self::from_number(&number))
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewNeighborhood {
    #[must_use]
    pub fn new(name_district: impl Into<String>, value_district_m2: Option<Decimal>) -> Self {
        Self {
            name_district: name_district.into(),
            value_district_m2: value_district_m2.map(SubmittedPrice::from),
        }
    }

    /// Check field rules in order; the first failing rule is reported.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first rule that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.checked_value().map(|_| ())
    }

    /// Validate and turn the candidate into a [`Neighborhood`] with `id`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first rule that fails.
    pub fn into_neighborhood(self, id: NeighborhoodId) -> Result<Neighborhood, ValidationError> {
        let value_district_m2 = self.checked_value()?;
        Ok(Neighborhood {
            id,
            name_district: self.name_district,
            value_district_m2,
        })
    }

    fn checked_value(&self) -> Result<Decimal, ValidationError> {
        if self.name_district.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name_district.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }
        let value = match self.value_district_m2 {
            None => return Err(ValidationError::MissingValue),
            Some(SubmittedPrice::OutOfRange { positive: false }) => {
                return Err(ValidationError::NonPositiveValue);
            }
            Some(SubmittedPrice::OutOfRange { positive: true }) => {
                return Err(ValidationError::ValueTooLong);
            }
            Some(SubmittedPrice::Exact(value)) => value,
        };
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveValue);
        }
        if total_digits(value) > MAX_VALUE_DIGITS {
            return Err(ValidationError::ValueTooLong);
        }
        Ok(value)
    }
}

/// Count integer plus fractional digits, ignoring trailing fractional zeros.
///
/// `0.005` counts as 3 (no integer digit, three fractional ones) and
/// `2000.0` counts as 4.
#[must_use]
pub fn total_digits(value: Decimal) -> u32 {
    let normalized = value.normalize();
    let scale = normalized.scale();
    let significant = normalized
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(0, |log| log + 1);
    significant.max(scale)
}
