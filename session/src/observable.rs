//! Single-value observable with replay-on-subscribe.
//!
//! DESIGN
//! ======
//! Holds the current value and an ordered list of callbacks. `set` swaps the
//! value, then notifies every callback synchronously in registration order.
//! The lock is released before any callback runs, so a callback may read the
//! observable (or subscribe/unsubscribe) without deadlocking.
//!
//! A [`Subscription`] only holds a weak reference, so disposing it after the
//! observable is gone is a no-op.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    callbacks: Vec<(u64, Callback<T>)>,
    next_id: u64,
    /// Bumped on every `set`; a notification pass stops once it is stale.
    version: u64,
}

/// Observable value shared between clones.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { value, callbacks: Vec::new(), next_id: 0, version: 0 })),
        }
    }

    /// Snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Replace the value and notify every subscriber.
    ///
    /// If a callback sets a newer value, that nested `set` notifies everyone
    /// and this pass stops, so no subscriber ends on a superseded value.
    pub fn set(&self, value: T) {
        let (version, snapshot, callbacks) = {
            let mut inner = self.lock();
            inner.value = value;
            inner.version += 1;
            let callbacks: Vec<Callback<T>> = inner.callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect();
            (inner.version, inner.value.clone(), callbacks)
        };
        for callback in callbacks {
            if self.lock().version != version {
                break;
            }
            callback(&snapshot);
        }
    }

    /// Register `callback`; it is called right away with the current value.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let (id, snapshot) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.callbacks.push((id, Arc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&snapshot);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .callbacks
                    .retain(|(cb_id, _)| *cb_id != id);
            }
        })
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().callbacks.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle returned by [`Observable::subscribe`].
///
/// Dropping the handle disposes it.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { unsubscribe: Some(Box::new(unsubscribe)) }
    }

    /// Stop further notifications. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }

    /// `false` once disposed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
