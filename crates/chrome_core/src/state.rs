//! Window state and the button visibility derived from it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleBarButton {
    Minimize,
    Maximize,
    Restore,
    Close,
}

impl TitleBarButton {
    pub fn label(self) -> &'static str {
        match self {
            TitleBarButton::Minimize => "minimize",
            TitleBarButton::Maximize => "maximize",
            TitleBarButton::Restore => "restore",
            TitleBarButton::Close => "close",
        }
    }
}

/// Which title-bar buttons are shown.
///
/// Never stored on its own: always recomputed with [`ButtonVisibility::derive`]
/// from the resting window state, so it cannot drift from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub minimize: bool,
    pub maximize: bool,
    pub restore: bool,
    pub close: bool,
}

impl ButtonVisibility {
    /// `resting` is the state the window shows (or returns to, when minimized).
    pub fn derive(resting: WindowState, resizable: bool) -> Self {
        let maximized = resting == WindowState::Maximized;
        Self {
            minimize: true,
            maximize: resizable && !maximized,
            restore: resizable && maximized,
            close: true,
        }
    }

    pub fn is_visible(&self, button: TitleBarButton) -> bool {
        match button {
            TitleBarButton::Minimize => self.minimize,
            TitleBarButton::Maximize => self.maximize,
            TitleBarButton::Restore => self.restore,
            TitleBarButton::Close => self.close,
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
