use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Request to update product with id: {}", params.id));

        // Verify product exists; the store itself does not re-check on update
        if self.repository.find(params.id).await?.is_none() {
            self.logger
                .warn(&format!("Product with id '{}' was not found", params.id));
            return Err(ProductError::NotFound);
        }

        let updated_product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            available: params.available,
            category: params.category,
        })?
        .with_id(params.id);

        self.repository.update(&updated_product).await?;

        self.logger
            .info(&format!("Product updated: {}", params.id));
        Ok(updated_product)
    }
}
