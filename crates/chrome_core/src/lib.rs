//! Application-drawn window chrome for frameless windows.
//!
//! [`WindowChrome`] wraps a content widget, owns the window state
//! (normal, minimized, maximized) and turns title-bar input into
//! [`WindowCommand`]s for the host windowing layer. [`DragController`]
//! synthesizes drag-to-move from raw pointer events on the title bar.
//!
//! ```
//! use chrome_core::{ChromeConfig, ChromeContent, ChromeEvent, Rect, TitleBarButton, WindowChrome, WindowState};
//!
//! struct Editor;
//!
//! impl ChromeContent for Editor {
//!     fn window_title(&self) -> String {
//!         "Editor".to_string()
//!     }
//!
//!     fn requested_geometry(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 600.0)
//!     }
//! }
//!
//! let screen = Rect::new(0.0, 0.0, 1920.0, 1080.0);
//! let mut chrome = WindowChrome::new(Editor, ChromeConfig::default(), &screen);
//! chrome.dispatch(ChromeEvent::ButtonClicked(TitleBarButton::Maximize));
//!
//! assert_eq!(chrome.state(), WindowState::Maximized);
//! assert_eq!(chrome.geometry(), screen);
//! ```

pub mod chrome;
pub mod config;
pub mod content;
pub mod drag;
pub mod error;
pub mod events;
pub mod geometry;
pub mod layout;
pub mod state;
pub mod theme;

pub use chrome::WindowChrome;
pub use config::{load_settings, load_settings_from, ChromeConfig, ChromeSettings};
pub use content::{ChromeContent, CloseEvent, ScreenGeometry};
pub use drag::{DragController, DragSession, DragSignal};
pub use error::ChromeError;
pub use events::{ChromeEvent, WindowCommand};
pub use geometry::{Point, Rect, Size};
pub use layout::{ButtonAlignment, Margins, TitleBarItem, TitleBarLayout};
pub use state::{ButtonVisibility, TitleBarButton, WindowState};
pub use theme::{ColorGroup, ColorRole, Palette, Rgb};
