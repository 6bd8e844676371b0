use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductId};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::Category;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &Product) -> Result<ProductId, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        async fn find(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
        async fn all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn price(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw).unwrap()
}

pub fn stored_product(id: ProductId, name: &str, category: Category, available: bool) -> Product {
    Product::from_repository(
        id,
        name.to_string(),
        format!("{name} description"),
        price("9.99"),
        available,
        category,
    )
}
