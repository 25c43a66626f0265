//! The cart store: authoritative cart state plus its side effects.

use chrono::Utc;
use rust_decimal::Decimal;

use storefront_catalog::Catalog;
use storefront_core::{ProductId, format_money};
use storefront_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::error::CartError;
use crate::event::{CartCleared, CartEvent, CheckedOut, ItemAdded, ItemRemoved};
use crate::persistence::{CART_KEY, KeyValueStore};
use crate::presenter::{CartView, Presenter};
use crate::receipt::Receipt;
use crate::state::CartState;

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear your cart?";
pub const CLEARED_NOTICE: &str = "Cart cleared";
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty!";

/// Result of loading the persisted snapshot at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// No snapshot was stored.
    Missing,
    /// Snapshot decoded; holds the number of lines restored.
    Restored(usize),
    /// Snapshot could not be read or decoded and was discarded.
    Discarded,
}

/// Owns the cart and drives persistence, events and presentation.
///
/// Every mutating operation follows the same order: mutate, persist, publish,
/// render. Nothing is published or rendered before the write was attempted.
pub struct CartStore<C, S, P> {
    catalog: C,
    storage: S,
    presenter: P,
    state: CartState,
    bus: InMemoryEventBus<EventEnvelope<CartEvent>>,
    next_sequence: u64,
}

impl<C, S, P> CartStore<C, S, P>
where
    C: Catalog,
    S: KeyValueStore,
    P: Presenter,
{
    /// Create a store with an empty cart. Call [`CartStore::hydrate`] to load the
    /// persisted snapshot, or use [`CartStore::open`].
    pub fn new(catalog: C, storage: S, presenter: P) -> Self {
        Self {
            catalog,
            storage,
            presenter,
            state: CartState::new(),
            bus: InMemoryEventBus::new(),
            next_sequence: 0,
        }
    }

    /// Create a store, hydrate it from storage and draw the initial cart.
    pub fn open(catalog: C, storage: S, presenter: P) -> Self {
        let mut store = Self::new(catalog, storage, presenter);
        store.hydrate();
        store.refresh();
        store
    }

    /// Load the snapshot stored under the cart key.
    ///
    /// Missing or unreadable snapshots leave the cart empty; the failure is logged,
    /// never returned.
    pub fn hydrate(&mut self) -> Hydration {
        let raw = match self.storage.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.state = CartState::new();
                return Hydration::Missing;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read cart snapshot; starting empty");
                self.state = CartState::new();
                return Hydration::Discarded;
            }
        };

        match CartState::from_snapshot(&raw) {
            Ok(state) => {
                let lines = state.len();
                self.state = state;
                tracing::info!(lines, items = self.state.item_count(), "cart hydrated");
                Hydration::Restored(lines)
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed cart snapshot");
                self.state = CartState::new();
                Hydration::Discarded
            }
        }
    }

    /// Add one unit of `product_id`; returns the resulting line quantity.
    pub fn add_item(&mut self, product_id: ProductId) -> Result<u32, CartError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or(CartError::NotFound(product_id))?;
        let name = product.name().to_string();
        let quantity = self.state.add(product);

        tracing::info!(%product_id, quantity, "added to cart");
        self.persist();
        self.publish(CartEvent::ItemAdded(ItemAdded {
            product_id,
            name: name.clone(),
            quantity,
            occurred_at: Utc::now(),
        }));
        self.refresh();
        self.presenter.notify(&format!("{name} added to cart!"));
        Ok(quantity)
    }

    /// Remove the line for `product_id`. Absent products are not an error.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let removed = self.state.remove(product_id);

        tracing::info!(%product_id, removed, "removed from cart");
        self.persist();
        self.publish(CartEvent::ItemRemoved(ItemRemoved {
            product_id,
            removed,
            occurred_at: Utc::now(),
        }));
        self.refresh();
        removed
    }

    /// Empty the cart after the user confirms. Returns false when declined, in
    /// which case nothing was written, published or drawn.
    pub fn clear(&mut self) -> bool {
        if !self.presenter.confirm(CLEAR_PROMPT) {
            tracing::debug!("clear declined");
            return false;
        }

        self.state.clear();
        tracing::info!("cart cleared");
        self.persist();
        self.publish(CartEvent::CartCleared(CartCleared {
            occurred_at: Utc::now(),
        }));
        self.refresh();
        self.presenter.notify(CLEARED_NOTICE);
        true
    }

    /// Report the total, then empty the cart and close the cart surface.
    ///
    /// There is no payment step: a non-empty cart always checks out.
    pub fn checkout(&mut self) -> Result<Receipt, CartError> {
        if self.state.is_empty() {
            self.presenter.acknowledge(EMPTY_CART_NOTICE);
            return Err(CartError::EmptyCart);
        }

        let receipt = Receipt::for_cart(&self.state, Utc::now());
        self.presenter.acknowledge(&receipt.acknowledgment());

        self.state.clear();
        tracing::info!(
            order_ref = %receipt.order_ref,
            items = receipt.items,
            total = %format_money(receipt.total),
            "checked out"
        );
        self.persist();
        self.publish(CartEvent::CheckedOut(CheckedOut {
            receipt: receipt.clone(),
        }));
        self.refresh();
        self.presenter.close_cart();
        Ok(receipt)
    }

    /// Exact cart total; round with `format_money` for display.
    pub fn compute_total(&self) -> Decimal {
        self.state.total()
    }

    pub fn item_count(&self) -> u32 {
        self.state.item_count()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Take the store apart, e.g. to inspect what a presenter recorded.
    pub fn into_parts(self) -> (C, S, P) {
        (self.catalog, self.storage, self.presenter)
    }

    /// Receive every cart event published from now on.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<CartEvent>> {
        self.bus.subscribe()
    }

    /// Redraw the cart without changing it.
    pub fn refresh(&mut self) {
        let view = CartView::of(&self.state);
        self.presenter.render(&view);
    }

    fn persist(&self) {
        let snapshot = match self.state.to_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode cart snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_KEY, &snapshot) {
            tracing::warn!(error = %e, "failed to persist cart; keeping in-memory state");
        }
    }

    fn publish(&mut self, event: CartEvent) {
        let envelope = EventEnvelope::wrap(self.next_sequence, event);
        self.next_sequence += 1;
        if let Err(e) = self.bus.publish(envelope) {
            tracing::warn!(error = %e, "failed to publish cart event");
        }
    }
}
