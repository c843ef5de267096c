//! Title bar drawn from the chrome's layout.

use chrome_core::{
    layout::LOGO_MAX_SIZE, theme::TITLE_TEXT, ChromeEvent, Margins, TitleBarButton, TitleBarItem,
};
use eframe::egui;

use crate::controller::orchestration::to_point;
use crate::ui::theme::color;

const TITLE_LEFT_MARGIN: f32 = 10.0;
const BUTTON_WIDTH: f32 = 36.0;
const GLYPH_SIZE: f32 = 14.0;

pub fn button_glyph(button: TitleBarButton) -> &'static str {
    match button {
        TitleBarButton::Minimize => "🗕",
        TitleBarButton::Maximize => "🗖",
        TitleBarButton::Restore => "🗗",
        TitleBarButton::Close => "🗙",
    }
}

/// Splits at the stretch: items before it pack from the left edge, items
/// after it pack from the right edge.
pub fn split_at_stretch(items: &[TitleBarItem]) -> (&[TitleBarItem], &[TitleBarItem]) {
    match items.iter().position(|item| *item == TitleBarItem::Stretch) {
        Some(idx) => (&items[..idx], &items[idx + 1..]),
        None => (items, &[]),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    LeftToRight,
    RightToLeft,
}

pub struct TitleBar<'a> {
    pub items: Vec<TitleBarItem>,
    pub title: &'a str,
    /// Screen position of the window's top-left corner.
    pub window_origin: egui::Pos2,
    pub logo: Option<&'a egui::TextureHandle>,
    pub logo_margins: Margins,
    pub button_margins: Margins,
    pub hover_fill: egui::Color32,
    pub close_hover_fill: egui::Color32,
}

impl TitleBar<'_> {
    /// Draws the bar and returns the chrome events it produced this frame.
    pub fn show(self, ui: &mut egui::Ui) -> Vec<ChromeEvent> {
        let mut events = Vec::new();

        // Registered before the buttons so they sit on top of it.
        let drag = ui.interact(
            ui.max_rect(),
            egui::Id::new("chrome_title_bar"),
            egui::Sense::click_and_drag(),
        );
        self.drag_events(&drag, &mut events);

        let (leading, trailing) = split_at_stretch(&self.items);

        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            self.run(ui, leading.iter().copied(), Direction::LeftToRight, &mut events);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.run(
                    ui,
                    trailing.iter().rev().copied(),
                    Direction::RightToLeft,
                    &mut events,
                );
            });
        });

        events
    }

    fn drag_events(&self, drag: &egui::Response, events: &mut Vec<ChromeEvent>) {
        let screen = |local: egui::Pos2| to_point(self.window_origin + local.to_vec2());

        if drag.double_clicked() {
            events.push(ChromeEvent::TitleBarDoubleClicked);
        }
        if let Some(pos) = drag.interact_pointer_pos() {
            if drag.drag_started() {
                events.push(ChromeEvent::PointerDown(screen(pos)));
            }
            if drag.dragged() {
                events.push(ChromeEvent::PointerMove(screen(pos)));
            }
        }
        if drag.drag_stopped() {
            let pos = drag
                .interact_pointer_pos()
                .or(drag.hover_pos())
                .unwrap_or(egui::Pos2::ZERO);
            events.push(ChromeEvent::PointerUp(screen(pos)));
        }
    }

    /// Places `items` in layout order; consecutive buttons share one margin.
    fn run(
        &self,
        ui: &mut egui::Ui,
        items: impl Iterator<Item = TitleBarItem>,
        direction: Direction,
        events: &mut Vec<ChromeEvent>,
    ) {
        let (lead, trail) = match direction {
            Direction::LeftToRight => (self.button_margins.left, self.button_margins.right),
            Direction::RightToLeft => (self.button_margins.right, self.button_margins.left),
        };

        let mut items = items.peekable();
        let mut prev_button = false;
        while let Some(item) = items.next() {
            let is_button = matches!(item, TitleBarItem::Button(_));
            if is_button && !prev_button {
                ui.add_space(lead);
            }
            self.item(ui, item, direction, events);
            if is_button && !matches!(items.peek(), Some(TitleBarItem::Button(_))) {
                ui.add_space(trail);
            }
            prev_button = is_button;
        }
    }

    fn item(
        &self,
        ui: &mut egui::Ui,
        item: TitleBarItem,
        direction: Direction,
        events: &mut Vec<ChromeEvent>,
    ) {
        match item {
            TitleBarItem::Spacer(width) => ui.add_space(width),
            TitleBarItem::Stretch => {}
            TitleBarItem::Logo => {
                let Some(texture) = self.logo else {
                    return;
                };
                let (before, after) = match direction {
                    Direction::LeftToRight => (self.logo_margins.left, self.logo_margins.right),
                    Direction::RightToLeft => (self.logo_margins.right, self.logo_margins.left),
                };
                let side = LOGO_MAX_SIZE.min(ui.available_height() - self.logo_margins.top);
                ui.add_space(before);
                ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(side, side)));
                ui.add_space(after);
            }
            TitleBarItem::Title => {
                let label =
                    egui::Label::new(egui::RichText::new(self.title).color(color(TITLE_TEXT)))
                        .selectable(false)
                        .truncate();
                if direction == Direction::LeftToRight {
                    ui.add_space(TITLE_LEFT_MARGIN);
                    ui.add(label);
                } else {
                    ui.add(label);
                    ui.add_space(TITLE_LEFT_MARGIN);
                }
            }
            TitleBarItem::Button(button) => {
                if self.button(ui, button).clicked() {
                    events.push(ChromeEvent::ButtonClicked(button));
                }
            }
        }
    }

    fn button(&self, ui: &mut egui::Ui, button: TitleBarButton) -> egui::Response {
        let size = egui::vec2(BUTTON_WIDTH, ui.available_height());
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let response = response.on_hover_text(button.label());

        let glyph_color = if response.hovered() {
            let fill = match button {
                TitleBarButton::Close => self.close_hover_fill,
                _ => self.hover_fill,
            };
            ui.painter().rect_filled(rect, 0.0, fill);
            egui::Color32::WHITE
        } else {
            color(TITLE_TEXT)
        };

        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            button_glyph(button),
            egui::FontId::proportional(GLYPH_SIZE),
            glyph_color,
        );

        response
    }
}

#[cfg(test)]
#[path = "tests/title_bar_tests.rs"]
mod tests;
