use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ProductId;

/// One product in the cart plus the selected quantity.
///
/// The product is copied when the line is created, so later catalog changes
/// (a new price, a renamed product) never reach items already in the cart.
/// Serialized flat: the product record with a `quantity` field added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartLineItem {
    /// New line for `product` with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_quantity(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn unit_price(&self) -> Decimal {
        self.product.price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity, unrounded. Saturates at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.product.price().saturating_mul(Decimal::from(self.quantity))
    }

    /// Unit price times quantity, or `None` if it does not fit in a `Decimal`.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.product.price().checked_mul(Decimal::from(self.quantity))
    }

    pub(crate) fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity
    }

    pub(crate) fn absorb(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }
}
