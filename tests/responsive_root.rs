//! End-to-end tests for the responsive root against a simulated viewport.

mod common;

use std::sync::Arc;

use common::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use responsive_root::breakpoint::{Breakpoint, Breakpoints};
use responsive_root::ui::render::draw;
use responsive_root::ui::root::ResponsiveRoot;
use responsive_root::ui::screens::ScreenSet;
use responsive_root::viewport::SimulatedViewport;

fn mount_at(width: u32) -> (Arc<SimulatedViewport>, ResponsiveRoot, ScreenCounters) {
    let viewport = Arc::new(SimulatedViewport::new(width));
    let (screens, counters) = counting_screens();
    let root = ResponsiveRoot::mount(viewport.clone(), screens);
    (viewport, root, counters)
}

// -- Mounting ----------------------------------------------------------------

#[test]
fn mount_narrow_renders_only_mobile() {
    let (_viewport, root, counters) = mount_at(500);

    assert_eq!(counters.live(Breakpoint::Mobile), 1);
    assert_eq!(counters.live(Breakpoint::Tablet), 0);
    assert_eq!(counters.live(Breakpoint::Desktop), 0);
    assert_eq!(root.breakpoint(), Some(Breakpoint::Mobile));
    assert_eq!(root.child().map(|c| c.name()), Some("MobileScreen"));
}

#[test]
fn mount_reads_width_and_subscribes_once() {
    let (viewport, root, _counters) = mount_at(1300);

    assert_eq!(root.width(), 1300);
    assert_eq!(root.provider_width(), 1300);
    assert_eq!(root.breakpoint(), Some(Breakpoint::Desktop));
    assert_eq!(viewport.listener_count(), 1);
    assert!(!root.needs_render());
}

#[test]
fn mount_at_each_boundary() {
    for (width, band) in [
        (767, Breakpoint::Mobile),
        (768, Breakpoint::Tablet),
        (1024, Breakpoint::Tablet),
        (1025, Breakpoint::Desktop),
    ] {
        let (_viewport, root, counters) = mount_at(width);
        assert_eq!(root.breakpoint(), Some(band), "width {width}");
        assert_eq!(counters.total_live(), 1);
    }
}

// -- Resizing ----------------------------------------------------------------

#[test]
fn resize_to_narrow_swaps_tablet_for_mobile() {
    let (viewport, mut root, counters) = mount_at(900);
    assert_eq!(counters.live(Breakpoint::Tablet), 1);

    assert_eq!(viewport.resize(300), 1);
    assert!(root.needs_render());
    assert_eq!(root.width(), 300);

    assert_eq!(root.reconcile(), Some(Breakpoint::Mobile));
    assert!(!root.needs_render());
    assert_eq!(counters.live(Breakpoint::Mobile), 1);
    assert_eq!(counters.live(Breakpoint::Tablet), 0);
    assert_eq!(counters.total_live(), 1);
}

#[test]
fn every_notification_updates_state() {
    let (viewport, root, _counters) = mount_at(900);

    for width in [901, 902, 903, 300, 1500] {
        viewport.resize(width);
        assert_eq!(root.width(), width);
    }
}

#[test]
fn same_width_twice_keeps_the_same_child() {
    let (viewport, mut root, counters) = mount_at(1200);
    let built = counters.built();

    viewport.resize(700);
    root.reconcile();
    let after_first = root.state();
    let built_after_first = counters.built();

    viewport.resize(700);
    root.reconcile();
    let after_second = root.state();

    assert_eq!(after_first.width, after_second.width);
    assert_eq!(after_first.mounted, after_second.mounted);
    assert_eq!(after_second.renders, after_first.renders + 1);
    assert_eq!(built_after_first, built + 1);
    assert_eq!(counters.built(), built_after_first);
    assert_eq!(counters.live(Breakpoint::Mobile), 1);
}

#[test]
fn resize_within_band_does_not_remount() {
    let (viewport, mut root, counters) = mount_at(800);

    viewport.resize(1000);
    root.reconcile();
    viewport.resize(768);
    root.reconcile();

    assert_eq!(counters.built(), 1);
    assert_eq!(root.breakpoint(), Some(Breakpoint::Tablet));
}

#[test]
fn custom_breakpoints_drive_selection() {
    let viewport = Arc::new(SimulatedViewport::new(500));
    let (screens, counters) = counting_screens();
    let mut root = ResponsiveRoot::mount_with(
        viewport.clone(),
        screens,
        Breakpoints {
            tablet_min: 400,
            desktop_min: 600,
        },
    );
    assert_eq!(root.breakpoint(), Some(Breakpoint::Tablet));

    viewport.resize(650);
    root.reconcile();
    assert_eq!(root.breakpoint(), Some(Breakpoint::Desktop));
    assert_eq!(counters.total_live(), 1);
}

// -- Unmounting --------------------------------------------------------------

#[test]
fn resize_after_unmount_is_ignored() {
    let (viewport, root, counters) = mount_at(900);
    let handle = root.handle();
    let before = handle.state();

    root.unmount();
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(counters.total_live(), 0);

    assert_eq!(viewport.resize(300), 0);
    let after = handle.state();
    assert_eq!(after.width, before.width);
    assert_eq!(after.mounted, None);
    assert!(!handle.needs_render());
    assert_eq!(counters.total_live(), 0);
}

#[test]
fn dropping_root_releases_subscription() {
    let (viewport, root, counters) = mount_at(1100);
    let handle = root.handle();

    drop(root);
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(counters.total_live(), 0);

    viewport.resize(200);
    assert_eq!(handle.width(), 1100);
}

#[test]
fn two_roots_on_one_viewport_are_independent() {
    let viewport = Arc::new(SimulatedViewport::new(900));
    let (first_screens, first_counters) = counting_screens();
    let (second_screens, second_counters) = counting_screens();
    let first = ResponsiveRoot::mount(viewport.clone(), first_screens);
    let mut second = ResponsiveRoot::mount(viewport.clone(), second_screens);
    assert_eq!(viewport.listener_count(), 2);

    first.unmount();
    assert_eq!(viewport.listener_count(), 1);

    assert_eq!(viewport.resize(1400), 1);
    second.reconcile();
    assert_eq!(second.breakpoint(), Some(Breakpoint::Desktop));
    assert_eq!(first_counters.total_live(), 0);
    assert_eq!(second_counters.live(Breakpoint::Desktop), 1);
}

// -- Rendering ---------------------------------------------------------------

#[test]
fn draw_shows_selected_screen_and_header() {
    let (viewport, mut root, _counters) = mount_at(500);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    terminal.draw(|frame| draw(frame, &mut root)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("MobileScreen #1"), "{text}");
    assert!(text.contains("mobile"), "{text}");
    assert!(text.contains("500px"), "{text}");

    viewport.resize(1600);
    terminal.draw(|frame| draw(frame, &mut root)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("DesktopScreen #2"), "{text}");
    assert!(!text.contains("MobileScreen"), "{text}");
    assert!(text.contains("1600px"), "{text}");
}

#[test]
fn default_screens_render_their_names() {
    for (width, name) in [
        (400, "Mobile home"),
        (900, "Tablet home"),
        (1800, "Desktop home"),
    ] {
        let viewport = Arc::new(SimulatedViewport::new(width));
        let mut root = ResponsiveRoot::mount(viewport, ScreenSet::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        terminal.draw(|frame| draw(frame, &mut root)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(name), "width {width}: {text}");
    }
}
