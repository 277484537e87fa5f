use chrono::{DateTime, Utc};

/// Structural contract for events raised by the business domain.
///
/// Nothing publishes or consumes these yet. The trait pins the shape every
/// future event type must satisfy: a constant name identifying the event
/// kind, and the moment the event was created.
pub trait DomainEvent {
    fn name(&self) -> &'static str;
    fn created_at(&self) -> DateTime<Utc>;
}
