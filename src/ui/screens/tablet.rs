use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::screens::Screen;
use crate::ui::theme::{ACCENT, CARD_BORDER, TEXT_DIM, TEXT_PRIMARY};

const NAV: [&str; 4] = ["Home", "Latest", "Saved", "Profile"];

/// Navigation list beside a content pane.
#[derive(Debug, Default)]
pub struct TabletScreen;

impl TabletScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for TabletScreen {
    fn name(&self) -> &'static str {
        "Tablet home"
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let [nav, content] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .areas(area);

        let items: Vec<ListItem<'_>> = NAV
            .iter()
            .map(|entry| ListItem::new(Line::styled(*entry, Style::default().fg(TEXT_DIM))))
            .collect();
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(CARD_BORDER)),
            ),
            nav,
        );

        let body = Paragraph::new(Line::styled(self.name(), Style::default().fg(TEXT_PRIMARY)))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Line::styled("Home", Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(CARD_BORDER)),
            );
        frame.render_widget(body, content);
    }
}
