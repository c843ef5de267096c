//! UI layer: app shell, title bar and palette.

pub mod app;
pub mod theme;
pub mod title_bar;
