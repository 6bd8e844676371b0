use super::errors::ProductError;
use super::value_objects::Category;

/// Listing criteria. At most one filter is applied per listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    All,
    ByName(String),
    ByCategory(Category),
    ByAvailability(bool),
}

impl ProductFilter {
    /// Picks the filter from raw query parameters.
    ///
    /// Priority is `name`, then `category`, then `available`; lower-priority
    /// parameters are ignored once one applies. Empty `name` or `category`
    /// values count as absent, while any `available` value must be a
    /// recognised token.
    pub fn from_query(
        name: Option<&str>,
        category: Option<&str>,
        available: Option<&str>,
    ) -> Result<Self, ProductError> {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            return Ok(Self::ByName(name.to_string()));
        }

        if let Some(category) = category.filter(|c| !c.is_empty()) {
            return Category::from_name(category).map(Self::ByCategory);
        }

        if let Some(available) = available {
            return parse_availability(available).map(Self::ByAvailability);
        }

        Ok(Self::All)
    }
}

/// Accepts `true`/`1`/`yes` and `false`/`0`/`no`, ignoring case.
pub fn parse_availability(raw: &str) -> Result<bool, ProductError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ProductError::InvalidAvailability(raw.to_string())),
    }
}
