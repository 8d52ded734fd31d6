use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::root::ResponsiveRoot;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draw one full frame: chrome plus the root's mounted screen.
pub fn draw(frame: &mut Frame<'_>, root: &mut ResponsiveRoot) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Clear, body);
    root.render(frame, body);

    // Header after the root so it reports the band that was just mounted.
    frame.render_widget(Header::new().widget(root.breakpoint(), root.width()), header);
    frame.render_widget(Footer::new().widget(footer), footer);
}
