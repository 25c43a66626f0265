use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::format_money;

use crate::state::CartState;

/// Summary of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_ref: Uuid,
    pub lines: usize,
    pub items: u32,
    #[serde(with = "storefront_core::money::json_number")]
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn for_cart(state: &CartState, placed_at: DateTime<Utc>) -> Self {
        Self {
            order_ref: Uuid::now_v7(),
            lines: state.len(),
            items: state.item_count(),
            total: state.total(),
            placed_at,
        }
    }

    /// Text shown on the blocking checkout dialog.
    pub fn acknowledgment(&self) -> String {
        format!(
            "Proceeding to checkout...\n\nTotal: {}\n\nThank you for your purchase!",
            format_money(self.total)
        )
    }
}
