//! Shared test utilities: screen doubles that count their own instances.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use responsive_root::breakpoint::Breakpoint;
use responsive_root::ui::screens::{Screen, ScreenSet};

#[derive(Default)]
struct Tally {
    live: HashMap<Breakpoint, usize>,
    built: usize,
}

/// Live and total instance counts for the counting screens.
#[derive(Clone, Default)]
pub struct ScreenCounters {
    tally: Arc<Mutex<Tally>>,
}

impl ScreenCounters {
    pub fn live(&self, band: Breakpoint) -> usize {
        self.tally.lock().live.get(&band).copied().unwrap_or(0)
    }

    pub fn total_live(&self) -> usize {
        self.tally.lock().live.values().sum()
    }

    /// Instances constructed so far, dropped ones included.
    pub fn built(&self) -> usize {
        self.tally.lock().built
    }
}

pub struct CountingScreen {
    band: Breakpoint,
    serial: usize,
    counters: ScreenCounters,
}

impl CountingScreen {
    fn new(band: Breakpoint, counters: ScreenCounters) -> Self {
        let serial = {
            let mut tally = counters.tally.lock();
            tally.built += 1;
            *tally.live.entry(band).or_default() += 1;
            tally.built
        };
        Self {
            band,
            serial,
            counters,
        }
    }
}

impl Drop for CountingScreen {
    fn drop(&mut self) {
        let mut tally = self.counters.tally.lock();
        if let Some(live) = tally.live.get_mut(&self.band) {
            *live -= 1;
        }
    }
}

impl Screen for CountingScreen {
    fn name(&self) -> &'static str {
        match self.band {
            Breakpoint::Mobile => "MobileScreen",
            Breakpoint::Tablet => "TabletScreen",
            Breakpoint::Desktop => "DesktopScreen",
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let text = format!("{} #{}", self.name(), self.serial);
        frame.render_widget(Paragraph::new(text), area);
    }
}

pub fn counting_screens() -> (ScreenSet, ScreenCounters) {
    let counters = ScreenCounters::default();
    let (m, t, d) = (counters.clone(), counters.clone(), counters.clone());
    let set = ScreenSet::new(
        move || Box::new(CountingScreen::new(Breakpoint::Mobile, m.clone())),
        move || Box::new(CountingScreen::new(Breakpoint::Tablet, t.clone())),
        move || Box::new(CountingScreen::new(Breakpoint::Desktop, d.clone())),
    );
    (set, counters)
}

/// Flatten a buffer into one line of text per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
