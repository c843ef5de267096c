//! Title-bar item ordering.
//!
//! Placement only; nothing here touches window state.

use crate::config::ChromeConfig;
use crate::state::{ButtonVisibility, TitleBarButton};

pub const LOGO_MAX_SIZE: f32 = 30.0;
pub const OSX_LEADING_SPACER: f32 = 4.0;
pub const OSX_BUTTON_MARGIN: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleBarItem {
    /// Fixed-width gap.
    Spacer(f32),
    /// Takes all remaining width.
    Stretch,
    Logo,
    Title,
    Button(TitleBarButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAlignment {
    Left,
    Right,
}

/// Margins around a title-bar element, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleBarLayout {
    items: Vec<TitleBarItem>,
    alignment: ButtonAlignment,
    logo_margins: Margins,
    button_margins: Margins,
}

impl TitleBarLayout {
    pub fn for_config(config: &ChromeConfig) -> Self {
        let has_logo = config.logo.is_some();
        let mut items = Vec::with_capacity(8);

        if config.osx_button_order {
            items.push(TitleBarItem::Spacer(OSX_LEADING_SPACER));
            items.push(TitleBarItem::Button(TitleBarButton::Close));
            items.push(TitleBarItem::Button(TitleBarButton::Minimize));
            if config.resizable {
                items.push(TitleBarItem::Button(TitleBarButton::Restore));
                items.push(TitleBarItem::Button(TitleBarButton::Maximize));
            }
            items.push(TitleBarItem::Title);
            items.push(TitleBarItem::Stretch);
            if has_logo {
                items.push(TitleBarItem::Logo);
            }

            Self {
                items,
                alignment: ButtonAlignment::Left,
                logo_margins: Margins {
                    left: 0.0,
                    top: 3.0,
                    right: 3.0,
                    bottom: 0.0,
                },
                button_margins: Margins {
                    left: OSX_BUTTON_MARGIN,
                    top: OSX_BUTTON_MARGIN,
                    right: OSX_BUTTON_MARGIN,
                    bottom: OSX_BUTTON_MARGIN,
                },
            }
        } else {
            if has_logo {
                items.push(TitleBarItem::Logo);
            }
            items.push(TitleBarItem::Title);
            items.push(TitleBarItem::Stretch);
            items.push(TitleBarItem::Button(TitleBarButton::Minimize));
            if config.resizable {
                items.push(TitleBarItem::Button(TitleBarButton::Maximize));
                items.push(TitleBarItem::Button(TitleBarButton::Restore));
            }
            items.push(TitleBarItem::Button(TitleBarButton::Close));

            Self {
                items,
                alignment: ButtonAlignment::Right,
                logo_margins: Margins {
                    left: 3.0,
                    top: 3.0,
                    right: 0.0,
                    bottom: 0.0,
                },
                button_margins: Margins::default(),
            }
        }
    }

    pub fn items(&self) -> &[TitleBarItem] {
        &self.items
    }

    /// Items with currently hidden buttons removed.
    pub fn visible_items(&self, visibility: &ButtonVisibility) -> Vec<TitleBarItem> {
        self.items
            .iter()
            .copied()
            .filter(|item| match item {
                TitleBarItem::Button(button) => visibility.is_visible(*button),
                _ => true,
            })
            .collect()
    }

    /// Whether `button` exists at all for this configuration.
    pub fn has_button(&self, button: TitleBarButton) -> bool {
        self.items.contains(&TitleBarItem::Button(button))
    }

    pub fn alignment(&self) -> ButtonAlignment {
        self.alignment
    }

    pub fn logo_margins(&self) -> Margins {
        self.logo_margins
    }

    pub fn button_margins(&self) -> Margins {
        self.button_margins
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
