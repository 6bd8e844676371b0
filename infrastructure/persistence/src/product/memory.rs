use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Category;

#[derive(Debug, Default)]
struct Table {
    last_id: ProductId,
    rows: BTreeMap<ProductId, Product>,
}

/// Process-local product store for development and tests.
///
/// Ids start at 1 and are never reused, like a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct ProductRepositoryInMemory {
    table: RwLock<Table>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    async fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .filter(|&p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn create(&self, product: &Product) -> Result<ProductId, RepositoryError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, product.clone().with_id(id));

        tracing::debug!(product_id = id, "inserted product");
        Ok(id)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or(RepositoryError::Persistence)?;
        let mut table = self.table.write().await;
        // Same as an UPDATE matching zero rows
        if let Some(row) = table.rows.get_mut(&id) {
            *row = product.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.select(|_| true).await)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.select(|p| p.name == name).await)
    }

    async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.select(|p| p.category == category).await)
    }

    async fn find_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.select(|p| p.available == available).await)
    }
}
