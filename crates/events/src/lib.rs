//! Storefront event plumbing: typed events, envelopes and an observer bus.
//!
//! The cart store publishes a fact for every completed mutation; presentation and
//! logging layers subscribe instead of being called from inside the domain.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
