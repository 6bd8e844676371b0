use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductId};
use super::value_objects::Category;

/// Store port for products.
///
/// Finders return every matching row exactly once, ordered by id. `update` and
/// `delete` do not check that the row exists; callers look it up first.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts the product and returns the id assigned by the store.
    async fn create(&self, product: &Product) -> Result<ProductId, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category: Category)
    -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_availability(&self, available: bool)
    -> Result<Vec<Product>, RepositoryError>;
}
