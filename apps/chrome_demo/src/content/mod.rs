//! Demo content hosted inside the chrome.

use chrome_core::{ChromeContent, CloseEvent, Rect};
use eframe::egui;

/// What the content asked the chrome to do this frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentResponse {
    pub close_requested: bool,
    pub new_title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NotesContent {
    title: String,
    title_draft: String,
    width: f32,
    height: f32,
    notes: String,
    confirm_close: bool,
    close_warned: bool,
}

impl NotesContent {
    pub fn new(title: impl Into<String>, width: f32, height: f32) -> Self {
        let title = title.into();
        Self {
            title_draft: title.clone(),
            title,
            width,
            height,
            notes: String::new(),
            confirm_close: false,
            close_warned: false,
        }
    }

    pub fn with_confirm_close(mut self, confirm: bool) -> Self {
        self.confirm_close = confirm;
        self
    }

    /// Set when a close was vetoed and the next one will go through.
    pub fn close_warned(&self) -> bool {
        self.close_warned
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> ContentResponse {
        let mut response = ContentResponse::default();

        ui.horizontal(|ui| {
            ui.label("Title");
            let edit = ui.text_edit_singleline(&mut self.title_draft);
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Apply").clicked() || submitted) && self.title_draft != self.title {
                self.title = self.title_draft.clone();
                response.new_title = Some(self.title.clone());
            }
        });

        ui.add_space(6.0);
        ui.checkbox(&mut self.confirm_close, "Confirm before closing");
        if self.close_warned {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "Close again to quit.",
            );
        }

        ui.add_space(6.0);
        ui.add_sized(
            [ui.available_width(), (ui.available_height() - 40.0).max(60.0)],
            egui::TextEdit::multiline(&mut self.notes).hint_text("Notes"),
        );

        ui.add_space(6.0);
        if ui.button("Close from content").clicked() {
            response.close_requested = true;
        }

        response
    }
}

impl ChromeContent for NotesContent {
    fn window_title(&self) -> String {
        self.title.clone()
    }

    fn requested_geometry(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    fn close_event(&mut self, event: &mut CloseEvent) {
        if self.confirm_close && !self.close_warned {
            self.close_warned = true;
            tracing::info!("close vetoed until confirmed");
            event.ignore();
            return;
        }
        event.accept();
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
