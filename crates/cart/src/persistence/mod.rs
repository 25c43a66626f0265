//! Key/value persistence for the cart snapshot.
//!
//! The substrate offers string get/set only: no transactions, no versions. The cart
//! writes its whole snapshot under [`CART_KEY`] after every mutation.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use std::sync::Arc;

use thiserror::Error;

/// Well-known key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Persistence failures. Never fatal for the cart.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("quota exceeded writing {key:?}: {bytes} bytes over limit of {limit}")]
    QuotaExceeded {
        key: String,
        bytes: usize,
        limit: usize,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed store of string values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}
