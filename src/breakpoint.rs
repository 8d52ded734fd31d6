//! Width breakpoints: viewport width → layout band.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Viewport width in device-independent pixels.
pub type ViewportWidth = u32;

/// Smallest width classified as [`Breakpoint::Tablet`].
pub const TABLET_MIN_WIDTH: ViewportWidth = 768;

/// Smallest width classified as [`Breakpoint::Desktop`].
pub const DESKTOP_MIN_WIDTH: ViewportWidth = 1025;

/// Layout band selected from the viewport width.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn label(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a width with the default thresholds.
///
/// - `width < 768` → [`Breakpoint::Mobile`]
/// - `768..=1024` → [`Breakpoint::Tablet`]
/// - `width > 1024` → [`Breakpoint::Desktop`]
pub fn classify(width: ViewportWidth) -> Breakpoint {
    Breakpoints::default().classify(width)
}

/// Band thresholds. Each threshold is the first width of its band.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    #[serde(default = "default_tablet_min")]
    pub tablet_min: ViewportWidth,
    #[serde(default = "default_desktop_min")]
    pub desktop_min: ViewportWidth,
}

fn default_tablet_min() -> ViewportWidth {
    TABLET_MIN_WIDTH
}

fn default_desktop_min() -> ViewportWidth {
    DESKTOP_MIN_WIDTH
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet_min: TABLET_MIN_WIDTH,
            desktop_min: DESKTOP_MIN_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Total over all widths as long as `tablet_min <= desktop_min`;
    /// bands are half-open so no width falls into two of them.
    pub fn classify(&self, width: ViewportWidth) -> Breakpoint {
        if width < self.tablet_min {
            Breakpoint::Mobile
        } else if width < self.desktop_min {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.tablet_min > 0 && self.tablet_min < self.desktop_min
    }
}
