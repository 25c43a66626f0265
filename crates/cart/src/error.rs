use storefront_core::{DomainError, ProductId};
use thiserror::Error;

/// Failures a cart operation reports to its caller.
///
/// Storage failures are deliberately absent: they are logged and swallowed by the
/// store, since the in-memory cart stays authoritative.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// The product id does not exist in the catalog.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Checkout was requested with no items in the cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Reasons a stored cart snapshot is rejected during hydration.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to decode cart snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("line for product {id} has an invalid price")]
    InvalidPrice {
        id: ProductId,
        #[source]
        source: DomainError,
    },

    #[error("cart total overflows")]
    Overflow,
}
