use std::sync::atomic::{AtomicU32, Ordering};

use crate::breakpoint::ViewportWidth;
use crate::viewport::{ListenerRegistry, ResizeListener, Subscription, ViewportProvider};

/// Viewport with a width set by hand.
///
/// Used by tests and headless runs: [`SimulatedViewport::resize`] stores the
/// new width and notifies listeners synchronously, exactly like a host window
/// would on a resize.
#[derive(Debug)]
pub struct SimulatedViewport {
    width: AtomicU32,
    listeners: ListenerRegistry,
}

impl SimulatedViewport {
    pub fn new(width: ViewportWidth) -> Self {
        Self {
            width: AtomicU32::new(width),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Returns the number of listeners notified.
    pub fn resize(&self, width: ViewportWidth) -> usize {
        self.width.store(width, Ordering::SeqCst);
        let delivered = self.listeners.notify(width);
        tracing::debug!(width, delivered, "simulated resize");
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ViewportProvider for SimulatedViewport {
    fn current_width(&self) -> ViewportWidth {
        self.width.load(Ordering::SeqCst)
    }

    fn on_resize(&self, listener: ResizeListener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
