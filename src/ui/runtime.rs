use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::error::AppError;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::root::ResponsiveRoot;
use crate::ui::screens::ScreenSet;
use crate::ui::terminal_guard::setup_terminal;
use crate::viewport::TerminalViewport;

pub fn run(config: &Config, shutdown: ShutdownHandle) -> Result<(), AppError> {
    let viewport = Arc::new(TerminalViewport::open(
        config.viewport.cell_width_px,
        config.viewport.width_override,
    )?);
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let mut root =
        ResponsiveRoot::mount_with(viewport.clone(), ScreenSet::default(), config.breakpoints);

    loop {
        terminal.draw(|frame| draw(frame, &mut root))?;
        if shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if is_quit_key(&key) {
                    shutdown.signal();
                }
            }
            Ok(AppEvent::Resize(cols, rows)) => viewport.handle_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    root.unmount();
    drop(guard);
    Ok(())
}

fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
