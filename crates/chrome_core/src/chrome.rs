//! Frameless window chrome: window state, geometry and title-bar intents.

use crate::config::ChromeConfig;
use crate::content::{ChromeContent, CloseEvent, ScreenGeometry};
use crate::drag::{DragController, DragSignal};
use crate::events::{ChromeEvent, WindowCommand};
use crate::geometry::{Point, Rect, Size};
use crate::layout::TitleBarLayout;
use crate::state::{ButtonVisibility, TitleBarButton, WindowState};

pub struct WindowChrome<C> {
    config: ChromeConfig,
    layout: TitleBarLayout,
    content: C,
    drag: DragController,
    state: WindowState,
    /// Normal or Maximized; what a minimized window comes back to.
    resting: WindowState,
    normal_geometry: Rect,
    available: Rect,
    fixed_size: Option<Size>,
    title: String,
    /// Set once the user or the application placed the window explicitly.
    placed: bool,
    closed: bool,
    commands: Vec<WindowCommand>,
}

impl<C: ChromeContent> WindowChrome<C> {
    pub fn new(content: C, config: ChromeConfig, screen: &impl ScreenGeometry) -> Self {
        let requested = content.requested_geometry();
        let available = screen.available_geometry();
        let fixed_size = (!config.resizable).then(|| requested.size());
        let normal_geometry = requested.with_center(available.center());
        let title = content.window_title();

        tracing::debug!(
            x = normal_geometry.x,
            y = normal_geometry.y,
            width = normal_geometry.width,
            height = normal_geometry.height,
            resizable = config.resizable,
            "window chrome created"
        );

        Self {
            layout: TitleBarLayout::for_config(&config),
            config,
            content,
            drag: DragController::new(),
            state: WindowState::Normal,
            resting: WindowState::Normal,
            normal_geometry,
            available,
            fixed_size,
            title,
            placed: false,
            closed: false,
            commands: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, event: ChromeEvent) {
        if self.closed {
            tracing::debug!(event = event.name(), "chrome closed; ignoring event");
            return;
        }

        match event {
            ChromeEvent::PointerDown(pos) => {
                let window_pos = self.position();
                self.drag.on_pointer_down(pos, window_pos);
            }
            ChromeEvent::PointerMove(pos) => {
                if let Some(target) = self.drag.on_pointer_move(pos) {
                    if self.state == WindowState::Normal {
                        self.move_to(target);
                    }
                }
            }
            ChromeEvent::PointerUp(pos) => self.drag.on_pointer_up(pos),
            ChromeEvent::TitleBarDoubleClicked => match self.drag.on_double_click() {
                DragSignal::ToggleRequested => self.toggle_maximized(),
            },
            ChromeEvent::ButtonClicked(button) => self.button_clicked(button),
            ChromeEvent::HostRestored => {
                if self.state == WindowState::Minimized {
                    let resting = self.resting;
                    self.set_state(resting);
                    // Geometry may have changed while minimized.
                    self.commands.push(WindowCommand::SetGeometry(self.geometry()));
                }
            }
            ChromeEvent::HostMoved(pos) => {
                if self.state == WindowState::Normal && !self.drag.is_pressed() {
                    self.normal_geometry = self.normal_geometry.with_position(pos);
                }
            }
            ChromeEvent::HostResized(size) => self.host_resized(size),
            ChromeEvent::ScreenChanged(available) => self.screen_changed(available),
            ChromeEvent::CloseRequested => {
                if !self.close() {
                    self.commands.push(WindowCommand::CancelClose);
                }
            }
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if !self.closed {
            self.commands.push(WindowCommand::SetTitle(self.title.clone()));
        }
    }

    /// Runs the content's close handler once. Returns `true` if this call
    /// closed the chrome; already closed or vetoed closes return `false`.
    pub fn close(&mut self) -> bool {
        if self.closed {
            tracing::debug!("close on closed chrome ignored");
            return false;
        }

        let mut event = CloseEvent::new();
        self.content.close_event(&mut event);
        if !event.is_accepted() {
            tracing::info!("close vetoed by content");
            return false;
        }

        self.closed = true;
        let pos = self.position();
        self.drag.on_pointer_up(pos);
        self.commands.push(WindowCommand::Close);
        tracing::info!(title = %self.title, "window chrome closed");
        true
    }

    /// Moves and resizes the normal geometry. A fixed-size chrome keeps its
    /// size and only moves.
    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.closed {
            return;
        }
        let geometry = match self.fixed_size {
            Some(size) => geometry.with_size(size),
            None => geometry,
        };
        self.normal_geometry = geometry;
        self.placed = true;
        if self.state == WindowState::Normal {
            self.commands.push(WindowCommand::SetGeometry(geometry));
        }
    }

    /// Returns `false` when the chrome is closed or locked to a fixed size.
    pub fn resize(&mut self, size: Size) -> bool {
        if self.closed {
            return false;
        }
        if self.fixed_size.is_some() {
            tracing::debug!(
                width = size.width,
                height = size.height,
                "resize rejected for fixed-size chrome"
            );
            return false;
        }
        let geometry = self.normal_geometry.with_size(size);
        self.set_geometry(geometry);
        true
    }

    pub fn take_commands(&mut self) -> Vec<WindowCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn title_bar_layout(&self) -> &TitleBarLayout {
        &self.layout
    }

    pub fn button_visibility(&self) -> ButtonVisibility {
        ButtonVisibility::derive(self.resting, self.config.resizable)
    }

    /// Current outer geometry. Maximized windows cover the available area;
    /// otherwise the last normal geometry, also while minimized.
    pub fn geometry(&self) -> Rect {
        match self.resting {
            WindowState::Maximized => self.available,
            _ => self.normal_geometry,
        }
    }

    pub fn position(&self) -> Point {
        self.geometry().position()
    }

    pub fn size(&self) -> Size {
        self.geometry().size()
    }

    pub fn normal_geometry(&self) -> Rect {
        self.normal_geometry
    }

    pub fn available_geometry(&self) -> Rect {
        self.available
    }

    pub fn fixed_size(&self) -> Option<Size> {
        self.fixed_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_pressed()
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    fn button_clicked(&mut self, button: TitleBarButton) {
        if !self.layout.has_button(button) {
            tracing::debug!(button = button.label(), "click on absent button ignored");
            return;
        }
        tracing::debug!(button = button.label(), "title bar button clicked");

        match button {
            TitleBarButton::Minimize => self.minimize(),
            TitleBarButton::Maximize => self.maximize(),
            TitleBarButton::Restore => self.restore(),
            TitleBarButton::Close => {
                self.close();
            }
        }
    }

    fn toggle_maximized(&mut self) {
        if !self.config.resizable {
            tracing::debug!("double click ignored for fixed-size chrome");
            return;
        }
        match self.state {
            WindowState::Maximized => self.restore(),
            WindowState::Normal => self.maximize(),
            WindowState::Minimized => {}
        }
    }

    fn minimize(&mut self) {
        if self.state == WindowState::Minimized {
            return;
        }
        self.set_state(WindowState::Minimized);
        self.commands.push(WindowCommand::Minimize);
    }

    fn maximize(&mut self) {
        if self.state != WindowState::Normal {
            return;
        }
        self.set_state(WindowState::Maximized);
        self.commands.push(WindowCommand::SetGeometry(self.available));
    }

    fn restore(&mut self) {
        if self.state != WindowState::Maximized {
            return;
        }
        self.set_state(WindowState::Normal);
        self.commands.push(WindowCommand::SetGeometry(self.normal_geometry));
    }

    fn move_to(&mut self, pos: Point) {
        self.normal_geometry = self.normal_geometry.with_position(pos);
        self.placed = true;
        self.commands.push(WindowCommand::MoveTo(pos));
    }

    fn host_resized(&mut self, size: Size) {
        if let Some(fixed) = self.fixed_size {
            if size != fixed {
                tracing::debug!(
                    width = size.width,
                    height = size.height,
                    "clamping host resize to fixed size"
                );
                self.commands.push(WindowCommand::SetGeometry(self.normal_geometry));
            }
            return;
        }
        if self.state == WindowState::Normal {
            self.normal_geometry = self.normal_geometry.with_size(size);
        }
    }

    fn screen_changed(&mut self, available: Rect) {
        if available == self.available {
            return;
        }
        self.available = available;

        match self.state {
            WindowState::Maximized => {
                self.commands.push(WindowCommand::SetGeometry(available));
            }
            WindowState::Normal if !self.placed => {
                self.normal_geometry = self.normal_geometry.with_center(available.center());
                self.commands.push(WindowCommand::MoveTo(self.normal_geometry.position()));
            }
            _ => {}
        }
    }

    fn set_state(&mut self, next: WindowState) {
        tracing::debug!(from = ?self.state, to = ?next, "window state transition");
        self.state = next;
        if next != WindowState::Minimized {
            self.resting = next;
        }
    }
}

#[cfg(test)]
#[path = "tests/chrome_tests.rs"]
mod tests;
