//! Dark palette mapped onto egui visuals.

use chrome_core::{ColorRole, Palette, Rgb};
use eframe::egui;

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn role(palette: &Palette, role: ColorRole, fallback: egui::Color32) -> egui::Color32 {
    palette.active(role).map(color).unwrap_or(fallback)
}

pub fn visuals_for_palette(palette: &Palette) -> egui::Visuals {
    let mut v = egui::Visuals::dark();

    let window = role(palette, ColorRole::Window, v.window_fill);
    let base = role(palette, ColorRole::Base, v.extreme_bg_color);
    let highlight = role(palette, ColorRole::Highlight, v.selection.bg_fill);
    let button = role(palette, ColorRole::Button, v.widgets.inactive.bg_fill);

    v.window_fill = window;
    v.panel_fill = window;
    v.extreme_bg_color = base;
    v.faint_bg_color = role(palette, ColorRole::AlternateBase, v.faint_bg_color);
    v.override_text_color = palette.active(ColorRole::Text).map(color);
    v.hyperlink_color = role(palette, ColorRole::Link, v.hyperlink_color);
    v.error_fg_color = role(palette, ColorRole::BrightText, v.error_fg_color);
    v.selection.bg_fill = highlight;
    v.selection.stroke = egui::Stroke::new(
        1.0,
        role(palette, ColorRole::HighlightedText, egui::Color32::WHITE),
    );
    v.window_stroke = egui::Stroke::new(1.0, role(palette, ColorRole::Dark, window));
    v.widgets.noninteractive.bg_fill = window;
    v.widgets.inactive.bg_fill = button;
    v.widgets.inactive.weak_bg_fill = button;
    v.widgets.hovered.bg_fill = highlight.gamma_multiply(0.85);
    v.widgets.active.bg_fill = highlight;

    v
}

/// Installs the palette on the context. Never fails: missing roles keep
/// egui's dark defaults.
pub fn apply_palette(ctx: &egui::Context, palette: &Palette) {
    ctx.set_visuals(visuals_for_palette(palette));
    tracing::debug!("applied dark palette");
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
