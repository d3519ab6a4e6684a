//! Event publishing to an explicit, ordered list of subscribers.
//!
//! There is no global bus: each publisher is typed by the payload it carries
//! and owns its subscriber list. Publishing is synchronous and in-process.
//!
//! ## Ordering
//!
//! Subscribers are notified in registration order, and all of them receive
//! the **same** `&mut E`. The final payload state is therefore a function of
//! that order; callers who need a specific outcome register subscribers in
//! the order they want them to run.
//!
//! ## Failures
//!
//! `publish` returns nothing and isolates nothing. A subscriber that panics
//! unwinds through `publish` and later subscribers are not notified.

use crate::event::Event;

/// Receives a mutable payload of type `E`.
pub trait Subscriber<E>: Send + Sync {
    fn notify(&self, event: &mut E);
}

impl<E, F> Subscriber<E> for F
where
    F: Fn(&mut E) + Send + Sync,
{
    fn notify(&self, event: &mut E) {
        self(event)
    }
}

/// Publisher for a single payload type.
pub struct EventPublisher<E> {
    subscribers: Vec<Box<dyn Subscriber<E>>>,
}

impl<E> EventPublisher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber; it runs after every subscriber registered before it.
    pub fn subscribe<S>(&mut self, subscriber: S)
    where
        S: Subscriber<E> + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Builder-style variant of [`EventPublisher::subscribe`].
    pub fn with_subscriber<S>(mut self, subscriber: S) -> Self
    where
        S: Subscriber<E> + 'static,
    {
        self.subscribe(subscriber);
        self
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E: Event> EventPublisher<E> {
    /// Notify every subscriber, in registration order, with the same payload.
    pub fn publish(&self, event: &mut E) {
        tracing::debug!(
            event_type = event.event_type(),
            version = event.version(),
            subscribers = self.subscribers.len(),
            "publishing event"
        );

        for subscriber in &self.subscribers {
            subscriber.notify(event);
        }
    }
}

impl<E> Default for EventPublisher<E> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }
}

impl<E> core::fmt::Debug for EventPublisher<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventPublisher")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
