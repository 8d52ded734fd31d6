use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::screens::Screen;
use crate::ui::theme::{ACCENT, CARD_BORDER, TEXT_DIM, TEXT_PRIMARY};

const NAV: [&str; 4] = ["Home", "Latest", "Saved", "Profile"];
const ASIDE: [&str; 3] = ["Trending", "Suggestions", "Activity"];

/// Side bar, content pane and an aside column.
#[derive(Debug, Default)]
pub struct DesktopScreen;

impl DesktopScreen {
    pub fn new() -> Self {
        Self
    }
}

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Line::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER))
}

fn list(entries: &[&'static str]) -> List<'static> {
    List::new(
        entries
            .iter()
            .map(|entry| ListItem::new(Line::styled(*entry, Style::default().fg(TEXT_DIM))))
            .collect::<Vec<_>>(),
    )
}

impl Screen for DesktopScreen {
    fn name(&self) -> &'static str {
        "Desktop home"
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let [sidebar, content, aside] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(55),
                Constraint::Percentage(25),
            ])
            .areas(area);

        frame.render_widget(list(&NAV).block(panel("Menu")), sidebar);

        let body = Paragraph::new(Line::styled(self.name(), Style::default().fg(TEXT_PRIMARY)))
            .wrap(Wrap { trim: true })
            .block(panel("Home"));
        frame.render_widget(body, content);

        frame.render_widget(list(&ASIDE).block(panel("Around")), aside);
    }
}
