use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Category;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "products query failed");
    RepositoryError::DatabaseError
}

fn into_domain(entities: Vec<ProductEntity>) -> Vec<Product> {
    entities.into_iter().map(|e| e.into_domain()).collect()
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &Product) -> Result<ProductId, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id"#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.category.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(id)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let id = product.id.ok_or(RepositoryError::Persistence)?;

        sqlx::query(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                available = $5,
                category = $6
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.available)
        .bind(product.category.to_string())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, available, category FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, available, category FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(into_domain(entities))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, available, category FROM products WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(into_domain(entities))
    }

    async fn find_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, available, category FROM products WHERE category = $1 ORDER BY id",
        )
        .bind(category.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(into_domain(entities))
    }

    async fn find_by_availability(
        &self,
        available: bool,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, available, category FROM products WHERE available = $1 ORDER BY id",
        )
        .bind(available)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(into_domain(entities))
    }
}
