use super::*;

fn outer(x: f32, y: f32, w: f32, h: f32) -> Option<egui::Rect> {
    Some(egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h)))
}

fn snapshot(rect: Option<egui::Rect>) -> HostSnapshot {
    HostSnapshot {
        minimized: Some(false),
        outer_rect: rect,
        ..HostSnapshot::default()
    }
}

#[test]
fn first_monitor_report_changes_screen() {
    let mut tracker = HostTracker::default();
    let events = tracker.observe(HostSnapshot {
        monitor_size: Some(egui::vec2(2560.0, 1440.0)),
        ..HostSnapshot::default()
    });
    assert_eq!(
        events,
        vec![ChromeEvent::ScreenChanged(Rect::new(0.0, 0.0, 2560.0, 1440.0))]
    );

    let again = tracker.observe(HostSnapshot {
        monitor_size: Some(egui::vec2(2560.0, 1440.0)),
        ..HostSnapshot::default()
    });
    assert!(again.is_empty());
}

#[test]
fn unminimize_reports_restore() {
    let mut tracker = HostTracker::default();
    tracker.observe(HostSnapshot {
        minimized: Some(true),
        ..HostSnapshot::default()
    });

    let events = tracker.observe(HostSnapshot {
        minimized: Some(false),
        ..HostSnapshot::default()
    });
    assert_eq!(events, vec![ChromeEvent::HostRestored]);
}

#[test]
fn platform_move_and_resize_are_reported() {
    let mut tracker = HostTracker::default();
    assert!(tracker.observe(snapshot(outer(10.0, 10.0, 800.0, 600.0))).is_empty());

    let events = tracker.observe(snapshot(outer(50.0, 60.0, 900.0, 600.0)));
    assert_eq!(
        events,
        vec![
            ChromeEvent::HostMoved(Point::new(50.0, 60.0)),
            ChromeEvent::HostResized(Size::new(900.0, 600.0)),
        ]
    );
}

#[test]
fn stale_reports_are_dropped_while_command_in_flight() {
    let mut tracker = HostTracker::default();
    tracker.observe(snapshot(outer(10.0, 10.0, 800.0, 600.0)));

    let target = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1920.0, 1080.0));
    tracker.expect_rect(target);

    assert!(tracker.observe(snapshot(outer(10.0, 10.0, 800.0, 600.0))).is_empty());
    assert!(tracker.observe(snapshot(Some(target))).is_empty());

    let events = tracker.observe(snapshot(outer(5.0, 0.0, 1920.0, 1080.0)));
    assert_eq!(events, vec![ChromeEvent::HostMoved(Point::new(5.0, 0.0))]);
}

#[test]
fn close_request_is_forwarded() {
    let mut tracker = HostTracker::default();
    let events = tracker.observe(HostSnapshot {
        close_requested: true,
        ..HostSnapshot::default()
    });
    assert_eq!(events, vec![ChromeEvent::CloseRequested]);
}
