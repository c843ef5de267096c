//! Events the host feeds into the chrome and commands it gets back.

use crate::geometry::{Point, Rect, Size};
use crate::state::TitleBarButton;

/// Input to [`crate::WindowChrome::dispatch`]. Pointer positions are screen
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    TitleBarDoubleClicked,
    ButtonClicked(TitleBarButton),
    /// A minimized window was shown again from outside (taskbar, dock).
    HostRestored,
    HostMoved(Point),
    HostResized(Size),
    ScreenChanged(Rect),
    /// The platform asked the window to close.
    CloseRequested,
}

impl ChromeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChromeEvent::PointerDown(_) => "pointer_down",
            ChromeEvent::PointerMove(_) => "pointer_move",
            ChromeEvent::PointerUp(_) => "pointer_up",
            ChromeEvent::TitleBarDoubleClicked => "title_bar_double_clicked",
            ChromeEvent::ButtonClicked(_) => "button_clicked",
            ChromeEvent::HostRestored => "host_restored",
            ChromeEvent::HostMoved(_) => "host_moved",
            ChromeEvent::HostResized(_) => "host_resized",
            ChromeEvent::ScreenChanged(_) => "screen_changed",
            ChromeEvent::CloseRequested => "close_requested",
        }
    }
}

/// Window-manager requests produced by chrome transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    MoveTo(Point),
    SetGeometry(Rect),
    Minimize,
    SetTitle(String),
    Close,
    /// Keep the window open after a platform close request was vetoed.
    CancelClose,
}
