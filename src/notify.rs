//! Change notification for client-side stores.
//!
//! Stores own a [`Subscribers`] list and notify it after every mutation.
//! Consumers register either a callback or a channel receiver instead of
//! polling shared state.
//!
//! # Example
//!
//! ```
//! use roofline::notify::Subscribers;
//!
//! let mut subscribers: Subscribers<String> = Subscribers::new();
//! let (_id, rx) = subscribers.subscribe_channel();
//!
//! subscribers.notify(&"changed".to_string());
//! assert_eq!(rx.try_recv().unwrap(), "changed");
//! ```

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Listener<E> {
    Callback(Box<dyn FnMut(&E) + Send>),
    Channel(Sender<E>),
}

/// An ordered list of change listeners.
pub struct Subscribers<E> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E: Clone> Subscribers<E> {
    /// Create an empty listener list.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked with every event.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.push(Listener::Callback(Box::new(callback)))
    }

    /// Register a channel that receives a clone of every event.
    ///
    /// Dropping the receiver unsubscribes it on the next notification.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, Receiver<E>) {
        let (tx, rx) = mpsc::channel();
        (self.push(Listener::Channel(tx)), rx)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener in registration order.
    pub fn notify(&mut self, event: &E) {
        self.listeners.retain_mut(|(_, listener)| match listener {
            Listener::Callback(callback) => {
                callback(event);
                true
            }
            Listener::Channel(tx) => tx.send(event.clone()).is_ok(),
        });
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn push(&mut self, listener: Listener<E>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }
}

impl<E: Clone> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
