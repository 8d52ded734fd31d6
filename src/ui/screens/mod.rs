//! Top-level screens selected by the responsive root.
//!
//! Each screen is an opaque child: it takes nothing from the root and draws
//! itself into the area it is given. [`ScreenSet`] holds one factory per
//! band; the root builds a fresh instance whenever the band changes and drops
//! the previous one.

mod desktop;
mod mobile;
mod tablet;

pub use desktop::DesktopScreen;
pub use mobile::MobileScreen;
pub use tablet::TabletScreen;

use std::fmt;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::breakpoint::Breakpoint;

pub trait Screen {
    fn name(&self) -> &'static str;

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect);
}

pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

pub struct ScreenSet {
    mobile: ScreenFactory,
    tablet: ScreenFactory,
    desktop: ScreenFactory,
}

impl ScreenSet {
    pub fn new<M, T, D>(mobile: M, tablet: T, desktop: D) -> Self
    where
        M: Fn() -> Box<dyn Screen> + 'static,
        T: Fn() -> Box<dyn Screen> + 'static,
        D: Fn() -> Box<dyn Screen> + 'static,
    {
        Self {
            mobile: Box::new(mobile),
            tablet: Box::new(tablet),
            desktop: Box::new(desktop),
        }
    }

    /// Construct a new screen instance for `breakpoint`.
    pub fn build(&self, breakpoint: Breakpoint) -> Box<dyn Screen> {
        let factory = match breakpoint {
            Breakpoint::Mobile => &self.mobile,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Desktop => &self.desktop,
        };
        factory()
    }
}

impl Default for ScreenSet {
    fn default() -> Self {
        Self::new(
            || Box::new(MobileScreen::new()),
            || Box::new(TabletScreen::new()),
            || Box::new(DesktopScreen::new()),
        )
    }
}

impl fmt::Debug for ScreenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenSet").finish_non_exhaustive()
    }
}
