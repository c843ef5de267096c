//! The hosted widget seen from the chrome, and the collaborators it consumes.

use crate::geometry::Rect;

/// Close notification handed to the content. Accepted unless the content
/// calls [`CloseEvent::ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseEvent {
    accepted: bool,
}

impl Default for CloseEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl CloseEvent {
    pub fn new() -> Self {
        Self { accepted: true }
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

pub trait ChromeContent {
    fn window_title(&self) -> String;

    /// Geometry the content asked for before being wrapped. Only the size
    /// survives; the chrome centers itself on screen.
    fn requested_geometry(&self) -> Rect;

    fn close_event(&mut self, event: &mut CloseEvent) {
        event.accept();
    }
}

/// Source of the usable (non-taskbar) desktop area.
pub trait ScreenGeometry {
    fn available_geometry(&self) -> Rect;
}

impl ScreenGeometry for Rect {
    fn available_geometry(&self) -> Rect {
        *self
    }
}
