use storefront_core::{DomainError, ProductId};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {id} has an invalid price")]
    InvalidPrice {
        id: ProductId,
        #[source]
        source: DomainError,
    },

    #[error("product {0} has an empty name")]
    EmptyName(ProductId),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
