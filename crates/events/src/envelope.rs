use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for a published event.
///
/// `sequence_number` is monotonically increasing per publisher, so subscribers can
/// detect gaps or replays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    sequence_number: u64,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            sequence_number,
            payload,
        }
    }

    /// Wrap a payload with a fresh time-ordered event id.
    pub fn wrap(sequence_number: u64, payload: E) -> Self {
        Self::new(Uuid::now_v7(), sequence_number, payload)
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
