//! `storefront-core` — shared storefront building blocks.
//!
//! Pure domain primitives (identifiers, errors, money rules). No IO.

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::{MAX_UNIT_PRICE, check_unit_price, format_money, round_to_cents};
