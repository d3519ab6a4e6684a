//! Typed, synchronous event publishing (mechanics only).

pub mod event;
pub mod publisher;

pub use event::Event;
pub use publisher::{EventPublisher, Subscriber};
