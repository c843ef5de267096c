//! Title-bar drag tracking.
//!
//! Turns press/move/release on the drag region into absolute window
//! positions without going through the window manager's move API.

use crate::geometry::Point;

/// Anchor captured when the pointer goes down on the drag region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub anchor_pointer: Point,
    pub anchor_window: Point,
}

/// Signals the drag region raises for the chrome to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    ToggleRequested,
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// A down while already pressed replaces the anchor.
    pub fn on_pointer_down(&mut self, position: Point, window_position: Point) {
        if self.session.is_some() {
            tracing::debug!("pointer down while pressed; resetting drag anchor");
        }
        self.session = Some(DragSession {
            anchor_pointer: position,
            anchor_window: window_position,
        });
    }

    /// Returns the window position for this pointer position, always computed
    /// from the anchor so intermediate moves cannot accumulate error.
    pub fn on_pointer_move(&self, position: Point) -> Option<Point> {
        let session = self.session?;
        Some(session.anchor_window + (position - session.anchor_pointer))
    }

    pub fn on_pointer_up(&mut self, _position: Point) {
        self.session = None;
    }

    pub fn on_double_click(&self) -> DragSignal {
        DragSignal::ToggleRequested
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
