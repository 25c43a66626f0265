//! In-memory cart contents and their snapshot encoding.

use rust_decimal::Decimal;
use serde::Serialize;

use storefront_catalog::Product;
use storefront_core::{ProductId, check_unit_price};

use crate::error::SnapshotError;
use crate::line_item::CartLineItem;

/// Ordered cart contents.
///
/// Invariants:
/// - at most one line per product id
/// - every line has quantity >= 1
/// - insertion order is display order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.product_id() == id)
    }

    /// Add one unit of `product`; returns the resulting line quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        let id = product.id();
        match self.items.iter_mut().find(|item| item.product_id() == id) {
            Some(existing) => existing.increment(),
            None => {
                self.items.push(CartLineItem::new(product.clone()));
                1
            }
        }
    }

    /// Remove the line for `id`; returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id() != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity over all lines. Not rounded.
    ///
    /// Saturates at `Decimal::MAX`; carts built from validated prices never get there.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Exact total, or `None` if any line total or the sum overflows.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |acc, item| {
            acc.checked_add(item.checked_line_total()?)
        })
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity()))
    }

    /// Encode as the JSON snapshot stored under the cart key.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a snapshot.
    ///
    /// `null` decodes to an empty cart. Lines with quantity 0 are dropped and
    /// repeated product ids are merged into the first occurrence, so the result
    /// always satisfies the cart invariants. A line whose price the catalog would
    /// reject, or a total that overflows, fails the whole snapshot.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, SnapshotError> {
        let raw: Option<Vec<CartLineItem>> = serde_json::from_str(snapshot)?;
        let mut state = Self::new();
        for line in raw.unwrap_or_default() {
            check_unit_price(line.unit_price()).map_err(|source| SnapshotError::InvalidPrice {
                id: line.product_id(),
                source,
            })?;
            if line.quantity() == 0 {
                tracing::debug!(product_id = %line.product_id(), "dropping zero-quantity line");
                continue;
            }
            match state
                .items
                .iter_mut()
                .find(|item| item.product_id() == line.product_id())
            {
                Some(existing) => {
                    tracing::debug!(product_id = %line.product_id(), "merging duplicate line");
                    existing.absorb(line.quantity());
                }
                None => state.items.push(line),
            }
        }
        if state.checked_total().is_none() {
            return Err(SnapshotError::Overflow);
        }
        Ok(state)
    }

    #[cfg(test)]
    pub(crate) fn from_lines(lines: Vec<(Product, u32)>) -> Self {
        Self {
            items: lines
                .into_iter()
                .map(|(product, qty)| CartLineItem::with_quantity(product, qty))
                .collect(),
        }
    }
}
