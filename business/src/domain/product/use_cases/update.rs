use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};
use crate::domain::product::value_objects::Category;

/// Full replacement of a product's fields. `id` comes from the request path and
/// always wins over any id the client put in the payload.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
