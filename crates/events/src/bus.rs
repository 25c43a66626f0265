//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is for distribution, not storage: the cart snapshot in the key-value
//! store is the source of truth, and an event is only published after the write
//! for its mutation has been attempted.

use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// Each subscription receives a copy of every message published after it was
/// created (broadcast semantics). Messages arrive in publish order.
///
/// ```ignore
/// let subscription = store.subscribe();
/// for envelope in subscription.drain() {
///     tracing::info!(event = envelope.payload().event_type(), "cart event");
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Drain every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Transport-agnostic pub/sub abstraction.
///
/// `publish()` can fail; callers decide whether that matters. The cart store logs
/// and carries on, since a missed notification never corrupts cart state.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
