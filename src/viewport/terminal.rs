use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

use thiserror::Error;

use crate::breakpoint::ViewportWidth;
use crate::viewport::{ListenerRegistry, ResizeListener, Subscription, ViewportProvider};

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("Failed to read terminal size: {source}")]
    SizeUnavailable {
        #[source]
        source: io::Error,
    },
}

/// Terminal dimensions as reported by the host.
///
/// `pixel_width` is zero when the terminal does not report pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
    pub pixel_width: u16,
}

impl TerminalSize {
    /// Query the controlling terminal.
    pub fn query() -> io::Result<Self> {
        match crossterm::terminal::window_size() {
            Ok(size) if size.columns > 0 => Ok(Self {
                columns: size.columns,
                rows: size.rows,
                pixel_width: size.width,
            }),
            _ => {
                let (columns, rows) = crossterm::terminal::size()?;
                Ok(Self {
                    columns,
                    rows,
                    pixel_width: 0,
                })
            }
        }
    }

    /// Width in pixels, estimated from the column count when the terminal
    /// does not report pixels.
    pub fn width_px(&self, cell_width_px: u32) -> ViewportWidth {
        if self.pixel_width > 0 {
            ViewportWidth::from(self.pixel_width)
        } else {
            ViewportWidth::from(self.columns).saturating_mul(cell_width_px)
        }
    }
}

/// Viewport backed by the terminal window.
///
/// The UI loop feeds terminal resize events to
/// [`TerminalViewport::handle_resize`], which re-reads the width and
/// notifies listeners.
#[derive(Debug)]
pub struct TerminalViewport {
    width: AtomicU32,
    cell_width_px: u32,
    width_override: Option<ViewportWidth>,
    listeners: ListenerRegistry,
}

impl TerminalViewport {
    /// Read the initial size from the terminal.
    ///
    /// With an override set the terminal is not queried at all.
    pub fn open(
        cell_width_px: u32,
        width_override: Option<ViewportWidth>,
    ) -> Result<Self, ViewportError> {
        let size = match width_override {
            Some(_) => TerminalSize::default(),
            None => TerminalSize::query().map_err(|source| ViewportError::SizeUnavailable { source })?,
        };
        Ok(Self::with_size(size, cell_width_px, width_override))
    }

    pub fn with_size(
        size: TerminalSize,
        cell_width_px: u32,
        width_override: Option<ViewportWidth>,
    ) -> Self {
        let width = width_override.unwrap_or_else(|| size.width_px(cell_width_px));
        tracing::info!(
            width,
            columns = size.columns,
            pixel_width = size.pixel_width,
            pinned = width_override.is_some(),
            "terminal viewport opened"
        );
        Self {
            width: AtomicU32::new(width),
            cell_width_px,
            width_override,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Handle a terminal resize event carrying the new cell dimensions.
    pub fn handle_resize(&self, columns: u16, rows: u16) {
        let pixel_width = crossterm::terminal::window_size()
            .map(|size| size.width)
            .unwrap_or(0);
        self.apply_size(TerminalSize {
            columns,
            rows,
            pixel_width,
        });
    }

    /// Store the width derived from `size` and notify listeners.
    ///
    /// Every call notifies, even when the width is unchanged.
    pub fn apply_size(&self, size: TerminalSize) -> usize {
        let width = self
            .width_override
            .unwrap_or_else(|| size.width_px(self.cell_width_px));
        self.width.store(width, Ordering::SeqCst);
        let delivered = self.listeners.notify(width);
        tracing::debug!(
            width,
            columns = size.columns,
            rows = size.rows,
            delivered,
            "terminal resized"
        );
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ViewportProvider for TerminalViewport {
    fn current_width(&self) -> ViewportWidth {
        self.width.load(Ordering::SeqCst)
    }

    fn on_resize(&self, listener: ResizeListener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
