//! State of the responsive root.

use crate::breakpoint::{Breakpoint, Breakpoints, ViewportWidth};
use crate::ui::mvi::UiState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootState {
    /// Most recent width received while mounted, or the width read at mount.
    pub width: ViewportWidth,
    /// Band of the mounted child. `None` before mount and after unmount.
    pub mounted: Option<Breakpoint>,
    /// Number of completed renders.
    pub renders: u64,
    pub breakpoints: Breakpoints,
}

impl RootState {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            ..Self::default()
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Band the current width falls into, regardless of what is mounted.
    pub fn target(&self) -> Breakpoint {
        self.breakpoints.classify(self.width)
    }
}

impl UiState for RootState {}
