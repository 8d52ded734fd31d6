//! Viewport providers and resize subscriptions.
//!
//! A [`ViewportProvider`] exposes the current viewport width and a push-based
//! resize notification. Listeners are held by a [`ListenerRegistry`]; each
//! registration hands back a [`Subscription`] that deregisters the listener
//! when it is dropped or explicitly unsubscribed.
//!
//! # Delivery guarantee
//!
//! Once [`Subscription::unsubscribe`] returns (or the subscription is
//! dropped), the listener is never invoked again. This also holds when the
//! deregistration happens from inside another listener while a notification
//! is being dispatched.

mod simulated;
mod terminal;

pub use simulated::SimulatedViewport;
pub use terminal::{TerminalSize, TerminalViewport, ViewportError};

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::breakpoint::ViewportWidth;

/// Callback invoked with the new width on every resize notification.
pub type ResizeListener = Box<dyn Fn(ViewportWidth) + Send + Sync + 'static>;

/// Source of viewport width readings and resize notifications.
pub trait ViewportProvider: Send + Sync {
    /// Synchronous read of the current width.
    fn current_width(&self) -> ViewportWidth;

    /// Register a listener for resize notifications.
    fn on_resize(&self, listener: ResizeListener) -> Subscription;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

struct ListenerSlot {
    active: AtomicBool,
    callback: ResizeListener,
}

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, Arc<ListenerSlot>)>>,
}

impl RegistryInner {
    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

/// Shared notification registry used by the viewport providers.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RegistryInner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: ResizeListener) -> Subscription {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let slot = Arc::new(ListenerSlot {
            active: AtomicBool::new(true),
            callback,
        });
        self.inner.listeners.lock().push((id, Arc::clone(&slot)));
        tracing::debug!(listener = id.0, "resize listener registered");
        Subscription {
            id,
            slot,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `width` to every registered listener, in registration order.
    ///
    /// Returns the number of listeners invoked.
    pub fn notify(&self, width: ViewportWidth) -> usize {
        // Snapshot so listeners may (un)subscribe without deadlocking.
        let snapshot: Vec<Arc<ListenerSlot>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, slot)| Arc::clone(slot))
            .collect();

        let mut delivered = 0;
        for slot in snapshot {
            if slot.active.load(Ordering::Acquire) {
                (slot.callback)(width);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle to a registered resize listener.
#[must_use = "dropping a Subscription deregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    slot: Arc<ListenerSlot>,
    registry: Weak<RegistryInner>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.slot.active.load(Ordering::Acquire)
    }

    /// Deregister the listener. Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        if !self.slot.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
        tracing::debug!(listener = self.id.0, "resize listener removed");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
