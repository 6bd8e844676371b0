#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.description_too_long")]
    DescriptionTooLong,
    #[error("product.unknown_category")]
    UnknownCategory(String),
    #[error("product.invalid_price")]
    InvalidPrice(String),
    #[error("product.invalid_availability")]
    InvalidAvailability(String),
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
