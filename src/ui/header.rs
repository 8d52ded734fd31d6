use crate::breakpoint::{Breakpoint, ViewportWidth};
use crate::ui::theme::{
    BAND_DESKTOP, BAND_MOBILE, BAND_TABLET, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

fn band_color(band: Breakpoint) -> ratatui::style::Color {
    match band {
        Breakpoint::Mobile => BAND_MOBILE,
        Breakpoint::Tablet => BAND_TABLET,
        Breakpoint::Desktop => BAND_DESKTOP,
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, band: Option<Breakpoint>, width: ViewportWidth) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let band_span = match band {
            Some(band) => Span::styled(
                band.label(),
                Style::default()
                    .fg(band_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("unmounted", separator_style),
        };
        let line = Line::from(vec![
            Span::styled("  responsive-root", text_style),
            Span::styled("  │  ", separator_style),
            band_span,
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{width}px"), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
