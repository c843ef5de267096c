//! Host window observations turned into chrome events.

use chrome_core::{ChromeEvent, Point, Rect, Size};
use eframe::egui;

/// Frames to wait for the platform to report a commanded geometry before
/// trusting its reports again.
const PENDING_FRAME_BUDGET: u8 = 30;

/// One frame's view of the native window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostSnapshot {
    pub close_requested: bool,
    pub minimized: Option<bool>,
    pub monitor_size: Option<egui::Vec2>,
    pub outer_rect: Option<egui::Rect>,
}

impl HostSnapshot {
    pub fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| {
            let viewport = i.viewport();
            Self {
                close_requested: viewport.close_requested(),
                minimized: viewport.minimized,
                monitor_size: viewport.monitor_size,
                outer_rect: viewport.outer_rect,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Expected {
    Position(egui::Pos2),
    Rect(egui::Rect),
}

#[derive(Debug, Clone, Copy)]
struct PendingGeometry {
    expected: Expected,
    frames_left: u8,
}

/// Diffs successive [`HostSnapshot`]s into [`ChromeEvent`]s.
///
/// While a geometry command is in flight the platform keeps reporting the old
/// rect for a few frames; those reports are dropped so they cannot overwrite
/// the chrome's geometry.
#[derive(Debug, Default)]
pub struct HostTracker {
    minimized: Option<bool>,
    monitor_size: Option<egui::Vec2>,
    last_outer: Option<egui::Rect>,
    pending: Option<PendingGeometry>,
}

impl HostTracker {
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<ChromeEvent> {
        self.observe(HostSnapshot::capture(ctx))
    }

    pub fn expect_position(&mut self, pos: egui::Pos2) {
        self.pending = Some(PendingGeometry {
            expected: Expected::Position(pos),
            frames_left: PENDING_FRAME_BUDGET,
        });
    }

    pub fn expect_rect(&mut self, rect: egui::Rect) {
        self.pending = Some(PendingGeometry {
            expected: Expected::Rect(rect),
            frames_left: PENDING_FRAME_BUDGET,
        });
    }

    pub fn observe(&mut self, snapshot: HostSnapshot) -> Vec<ChromeEvent> {
        let mut events = Vec::new();

        if snapshot.close_requested {
            events.push(ChromeEvent::CloseRequested);
        }

        if let Some(size) = snapshot.monitor_size {
            if self.monitor_size != Some(size) {
                self.monitor_size = Some(size);
                events.push(ChromeEvent::ScreenChanged(Rect::new(
                    0.0, 0.0, size.x, size.y,
                )));
            }
        }

        if let Some(minimized) = snapshot.minimized {
            if self.minimized == Some(true) && !minimized {
                events.push(ChromeEvent::HostRestored);
            }
            self.minimized = Some(minimized);
        }

        if self.minimized != Some(true) {
            if let Some(outer) = snapshot.outer_rect {
                self.observe_outer(outer, &mut events);
            }
        }

        events
    }

    fn observe_outer(&mut self, outer: egui::Rect, events: &mut Vec<ChromeEvent>) {
        if let Some(pending) = self.pending.as_mut() {
            let settled = match pending.expected {
                Expected::Position(pos) => close_to(outer.min, pos),
                Expected::Rect(rect) => {
                    close_to(outer.min, rect.min) && close_to(outer.max, rect.max)
                }
            };
            pending.frames_left = pending.frames_left.saturating_sub(1);
            if settled || pending.frames_left == 0 {
                self.pending = None;
            }
            self.last_outer = Some(outer);
            return;
        }

        if let Some(last) = self.last_outer {
            if !close_to(last.min, outer.min) {
                events.push(ChromeEvent::HostMoved(Point::new(outer.min.x, outer.min.y)));
            }
            if !close_to(last.size().to_pos2(), outer.size().to_pos2()) {
                events.push(ChromeEvent::HostResized(Size::new(
                    outer.width(),
                    outer.height(),
                )));
            }
        }
        self.last_outer = Some(outer);
    }
}

fn close_to(a: egui::Pos2, b: egui::Pos2) -> bool {
    (a.x - b.x).abs() < 1.0 && (a.y - b.y).abs() < 1.0
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
