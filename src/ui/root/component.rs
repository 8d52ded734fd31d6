//! The responsive root component.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::breakpoint::{Breakpoint, Breakpoints, ViewportWidth};
use crate::ui::mvi::Reducer;
use crate::ui::screens::{Screen, ScreenSet};
use crate::viewport::{Subscription, ViewportProvider};

use super::intent::RootIntent;
use super::reducer::RootReducer;
use super::state::RootState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Default)]
struct Shared {
    state: RootState,
    dirty: bool,
}

/// Read-only view of a root's state that stays valid after unmount.
#[derive(Clone)]
pub struct RootHandle {
    shared: Arc<Mutex<Shared>>,
}

impl RootHandle {
    pub fn state(&self) -> RootState {
        self.shared.lock().state.clone()
    }

    pub fn width(&self) -> ViewportWidth {
        self.shared.lock().state.width
    }

    pub fn needs_render(&self) -> bool {
        self.shared.lock().dirty
    }
}

impl fmt::Debug for RootHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootHandle")
            .field("state", &self.state())
            .finish()
    }
}

/// Renders exactly one of three screens, chosen by viewport width.
///
/// Mounting reads the width, subscribes to resize notifications and mounts
/// the child for the initial band. Each notification overwrites the stored
/// width and flags the root for re-render; the child is swapped on the next
/// render (or [`ResponsiveRoot::reconcile`]). Unmounting, explicitly or by
/// dropping the root, releases the subscription before the child is dropped.
pub struct ResponsiveRoot {
    provider: Arc<dyn ViewportProvider>,
    screens: ScreenSet,
    shared: Arc<Mutex<Shared>>,
    child: Option<(Breakpoint, Box<dyn Screen>)>,
    subscription: Option<Subscription>,
}

impl ResponsiveRoot {
    pub fn mount(provider: Arc<dyn ViewportProvider>, screens: ScreenSet) -> Self {
        Self::mount_with(provider, screens, Breakpoints::default())
    }

    pub fn mount_with(
        provider: Arc<dyn ViewportProvider>,
        screens: ScreenSet,
        breakpoints: Breakpoints,
    ) -> Self {
        let shared = Arc::new(Mutex::new(Shared {
            state: RootState::new(breakpoints),
            dirty: false,
        }));

        let width = provider.current_width();
        {
            let mut guard = shared.lock();
            dispatch_mvi!(guard, state, RootReducer, RootIntent::Mount { width });
        }

        let listener_state = Arc::clone(&shared);
        let subscription = provider.on_resize(Box::new(move |width| {
            let mut guard = listener_state.lock();
            dispatch_mvi!(guard, state, RootReducer, RootIntent::Resize { width });
            guard.dirty = true;
        }));

        let mut root = Self {
            provider,
            screens,
            shared,
            child: None,
            subscription: Some(subscription),
        };
        let band = root.reconcile();
        tracing::info!(width, band = ?band, "responsive root mounted");
        root
    }

    /// The mount/unmount half of a render: make the mounted child match the
    /// band of the current width.
    pub fn reconcile(&mut self) -> Option<Breakpoint> {
        let target = {
            let mut guard = self.shared.lock();
            dispatch_mvi!(guard, state, RootReducer, RootIntent::Render);
            guard.dirty = false;
            guard.state.mounted
        };

        let current = self.child.as_ref().map(|(band, _)| *band);
        if current != target {
            // Old child goes first so two screens never coexist.
            self.child = None;
            if let Some(band) = target {
                tracing::info!(from = ?current, to = %band, "switching screen");
                self.child = Some((band, self.screens.build(band)));
            }
        }
        target
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.reconcile();
        if let Some((_, child)) = self.child.as_mut() {
            child.render(frame, area);
        }
    }

    pub fn width(&self) -> ViewportWidth {
        self.shared.lock().state.width
    }

    /// Band of the currently mounted child.
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.child.as_ref().map(|(band, _)| *band)
    }

    pub fn child(&self) -> Option<&dyn Screen> {
        self.child.as_ref().map(|(_, child)| child.as_ref())
    }

    pub fn state(&self) -> RootState {
        self.shared.lock().state.clone()
    }

    pub fn handle(&self) -> RootHandle {
        RootHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Whether a resize notification arrived since the last render.
    pub fn needs_render(&self) -> bool {
        self.shared.lock().dirty
    }

    /// Width as the provider reports it right now.
    pub fn provider_width(&self) -> ViewportWidth {
        self.provider.current_width()
    }

    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(mut subscription) = self.subscription.take() else {
            return;
        };
        subscription.unsubscribe();
        {
            let mut guard = self.shared.lock();
            dispatch_mvi!(guard, state, RootReducer, RootIntent::Unmount);
            guard.dirty = false;
        }
        let unmounted = self.child.take().map(|(band, _)| band);
        tracing::info!(band = ?unmounted, "responsive root unmounted");
    }
}

impl Drop for ResponsiveRoot {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for ResponsiveRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsiveRoot")
            .field("state", &self.state())
            .field("child", &self.child().map(|c| c.name()))
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
