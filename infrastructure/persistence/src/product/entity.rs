use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::Category;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        let category = Category::from_name(&self.category).unwrap_or_else(|_| {
            tracing::warn!(
                product_id = self.id,
                category = %self.category,
                "unrecognised stored category, reading it as UNKNOWN"
            );
            Category::Unknown
        });

        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.available,
            category,
        )
    }
}
