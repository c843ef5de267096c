//! Static dark palette applied once at startup.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Active,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    ToolTipBase,
    ToolTipText,
    Text,
    Dark,
    Shadow,
    Button,
    ButtonText,
    BrightText,
    Link,
    Highlight,
    HighlightedText,
}

/// Colour of the title label text (`#bbb`).
pub const TITLE_TEXT: Rgb = Rgb(0xbb, 0xbb, 0xbb);

const DISABLED_TEXT: Rgb = Rgb(127, 127, 127);

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(ColorGroup, ColorRole, Rgb)>,
}

impl Palette {
    pub fn dark() -> Self {
        use ColorGroup::{Active, Disabled};
        use ColorRole::*;

        Self {
            entries: vec![
                (Active, Window, Rgb(53, 53, 53)),
                (Active, WindowText, Rgb::WHITE),
                (Disabled, WindowText, DISABLED_TEXT),
                (Active, Base, Rgb(42, 42, 42)),
                (Active, AlternateBase, Rgb(66, 66, 66)),
                (Active, ToolTipBase, Rgb::WHITE),
                (Active, ToolTipText, Rgb(53, 53, 53)),
                (Active, Text, Rgb::WHITE),
                (Disabled, Text, DISABLED_TEXT),
                (Active, Dark, Rgb(35, 35, 35)),
                (Active, Shadow, Rgb(20, 20, 20)),
                (Active, Button, Rgb(53, 53, 53)),
                (Active, ButtonText, Rgb::WHITE),
                (Disabled, ButtonText, DISABLED_TEXT),
                (Active, BrightText, Rgb(255, 0, 0)),
                (Active, Link, Rgb(42, 130, 218)),
                (Active, Highlight, Rgb(42, 130, 218)),
                (Disabled, Highlight, Rgb(80, 80, 80)),
                (Active, HighlightedText, Rgb::WHITE),
                (Disabled, HighlightedText, DISABLED_TEXT),
            ],
        }
    }

    /// Disabled lookups without their own entry use the active colour.
    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Option<Rgb> {
        self.find(group, role).or_else(|| match group {
            ColorGroup::Disabled => self.find(ColorGroup::Active, role),
            ColorGroup::Active => None,
        })
    }

    pub fn active(&self, role: ColorRole) -> Option<Rgb> {
        self.color(ColorGroup::Active, role)
    }

    fn find(&self, group: ColorGroup, role: ColorRole) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(g, r, _)| *g == group && *r == role)
            .map(|(_, _, rgb)| *rgb)
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
