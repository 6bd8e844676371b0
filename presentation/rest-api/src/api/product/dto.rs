use bigdecimal::BigDecimal;
use poem_openapi::Object;
use serde_json::Value;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::{Category, parse_price};

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// An `id` sent by the client is ignored: it is assigned by the store on
/// create and taken from the path on update.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description, empty when omitted
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Exact decimal price, as a JSON string (`"12.50"`) or number (`12.5`)
    pub price: Value,
    /// Whether the product can be ordered
    pub available: bool,
    /// Category name, e.g. `CLOTHS` (case-sensitive)
    pub category: String,
}

/// Decimal strings and JSON numbers are both parsed from their source digits,
/// so no price ever passes through a float.
fn price_from_json(value: &Value) -> Result<BigDecimal, ProductError> {
    match value {
        Value::String(raw) => parse_price(raw),
        Value::Number(number) => parse_price(&number.to_string()),
        other => Err(ProductError::InvalidPrice(other.to_string())),
    }
}

impl ProductRequest {
    pub fn into_create_params(self) -> Result<CreateProductParams, ProductError> {
        Ok(CreateProductParams {
            price: price_from_json(&self.price)?,
            category: Category::from_name(&self.category)?,
            name: self.name,
            description: self.description,
            available: self.available,
        })
    }

    pub fn into_update_params(self, id: ProductId) -> Result<UpdateProductParams, ProductError> {
        Ok(UpdateProductParams {
            id,
            price: price_from_json(&self.price)?,
            category: Category::from_name(&self.category)?,
            name: self.name,
            description: self.description,
            available: self.available,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Store-assigned identifier
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Exact decimal price
    pub price: String,
    /// Whether the product can be ordered
    pub available: bool,
    /// Category name
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            available: product.available,
            category: product.category.to_string(),
        }
    }
}
