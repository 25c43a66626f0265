//! Shopping cart for the storefront.
//!
//! [`CartStore`] owns the authoritative list of line items. Every mutation is
//! written through a [`KeyValueStore`], published as a [`CartEvent`] and then
//! handed to a [`Presenter`] for display, in that order.

pub mod error;
pub mod event;
pub mod line_item;
pub mod persistence;
pub mod presenter;
pub mod receipt;
pub mod state;
pub mod store;

pub use error::{CartError, SnapshotError};
pub use event::{CartCleared, CartEvent, CheckedOut, ItemAdded, ItemRemoved};
pub use line_item::CartLineItem;
pub use persistence::{
    CART_KEY, FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, PersistenceError,
};
pub use presenter::{CartView, Presenter, RecordingPresenter};
pub use receipt::Receipt;
pub use state::CartState;
pub use store::{CartStore, Hydration};
