use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub filter: ProductFilter,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, ProductError>;
}
