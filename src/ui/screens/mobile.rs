use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::screens::Screen;
use crate::ui::theme::{ACCENT, CARD_BORDER, TEXT_DIM, TEXT_PRIMARY};

const SECTIONS: [&str; 3] = ["Highlights", "Latest", "Saved"];

/// Single column of stacked cards with a tab bar at the bottom.
#[derive(Debug, Default)]
pub struct MobileScreen;

impl MobileScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for MobileScreen {
    fn name(&self) -> &'static str {
        "Mobile home"
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let [content, tabs] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .areas(area);

        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(content);

        for (section, card) in SECTIONS.iter().zip(cards.iter()) {
            let block = Block::default()
                .title(Line::styled(*section, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(CARD_BORDER));
            let body = Paragraph::new(Line::styled(self.name(), Style::default().fg(TEXT_PRIMARY)))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(body, *card);
        }

        let tab_bar = Paragraph::new(Line::styled(
            " Home · Search · Profile ",
            Style::default().fg(TEXT_DIM),
        ))
        .centered()
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(CARD_BORDER)),
        );
        frame.render_widget(tab_bar, tabs);
    }
}
