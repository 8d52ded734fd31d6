//! Intents for the responsive root.

use crate::breakpoint::ViewportWidth;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootIntent {
    /// Component mounted with the width read from the provider.
    Mount { width: ViewportWidth },

    /// Resize notification from the provider. Ignored when unmounted.
    Resize { width: ViewportWidth },

    /// Render pass: the mounted band follows the current width.
    Render,

    /// Component unmounted.
    Unmount,
}

impl Intent for RootIntent {}
