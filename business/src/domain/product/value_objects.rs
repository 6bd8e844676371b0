use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::errors::ProductError;

/// Catalog category. The external representation is the upper-case member name
/// (`"CLOTHS"`, `"FOOD"`, ...) and lookups by name are case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    pub fn from_name(name: &str) -> Result<Self, ProductError> {
        Self::from_str(name).map_err(|_| ProductError::UnknownCategory(name.to_string()))
    }
}

/// Parses a textual price into an exact decimal.
///
/// The scale of the input is kept, so `"12.50"` is stored and emitted as
/// `12.50`, never as a binary float approximation.
pub fn parse_price(raw: &str) -> Result<BigDecimal, ProductError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ProductError::InvalidPrice(raw.to_string()));
    }
    BigDecimal::from_str(trimmed).map_err(|_| ProductError::InvalidPrice(raw.to_string()))
}
