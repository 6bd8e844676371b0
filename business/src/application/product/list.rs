use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Request to list products: {:?}", params.filter));

        let products = match params.filter {
            ProductFilter::All => self.repository.all().await?,
            ProductFilter::ByName(name) => self.repository.find_by_name(&name).await?,
            ProductFilter::ByCategory(category) => {
                self.repository.find_by_category(category).await?
            }
            ProductFilter::ByAvailability(available) => {
                self.repository.find_by_availability(available).await?
            }
        };

        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
