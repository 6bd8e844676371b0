use bigdecimal::BigDecimal;

use super::errors::ProductError;
use super::value_objects::Category;

/// Store-assigned product identifier.
pub type ProductId = i64;

/// Longest accepted name, in characters. Matches the `products.name` column.
pub const NAME_MAX_CHARS: usize = 100;
/// Longest accepted description, in characters. Matches `products.description`.
pub const DESCRIPTION_MAX_CHARS: usize = 250;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// `None` until the store has inserted the row.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.name.chars().count() > NAME_MAX_CHARS {
            return Err(ProductError::NameTooLong);
        }

        let description = props.description.unwrap_or_default();
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ProductError::DescriptionTooLong);
        }

        Ok(Self {
            id: None,
            name: props.name,
            description,
            price: props.price,
            available: props.available,
            category: props.category,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: BigDecimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            price,
            available,
            category,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }
}
