//! eframe shell that hosts the chrome.

use std::path::Path;

use anyhow::Context as _;
use chrome_core::{ColorRole, Palette, WindowChrome};
use eframe::egui;

use crate::content::NotesContent;
use crate::controller::{events::HostTracker, orchestration::apply_window_commands};
use crate::ui::{
    theme::{apply_palette, color},
    title_bar::TitleBar,
};

const CLOSE_HOVER_FILL: egui::Color32 = egui::Color32::from_rgb(0xc4, 0x2b, 0x1c);

pub struct ChromeDemoApp {
    chrome: WindowChrome<NotesContent>,
    tracker: HostTracker,
    palette: Palette,
    title_bar_height: f32,
    logo: Option<egui::TextureHandle>,
}

impl ChromeDemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        chrome: WindowChrome<NotesContent>,
        title_bar_height: f32,
    ) -> Self {
        let palette = Palette::dark();
        apply_palette(&cc.egui_ctx, &palette);

        let logo = chrome.config().logo.as_deref().and_then(|path| {
            load_logo(&cc.egui_ctx, path)
                .inspect_err(|err| {
                    tracing::warn!(path = %path.display(), "logo not loaded: {err:#}");
                })
                .ok()
        });

        Self {
            chrome,
            tracker: HostTracker::default(),
            palette,
            title_bar_height,
            logo,
        }
    }

    fn title_bar(&mut self, ui: &mut egui::Ui) {
        let layout = self.chrome.title_bar_layout();
        let window_origin = ui
            .ctx()
            .input(|i| i.viewport().outer_rect.map(|r| r.min))
            .unwrap_or_else(|| {
                let pos = self.chrome.position();
                egui::pos2(pos.x, pos.y)
            });
        let hover_fill = self
            .palette
            .active(ColorRole::Highlight)
            .map(color)
            .unwrap_or(egui::Color32::DARK_GRAY);

        let bar = TitleBar {
            items: layout.visible_items(&self.chrome.button_visibility()),
            title: self.chrome.title(),
            window_origin,
            logo: self.logo.as_ref(),
            logo_margins: layout.logo_margins(),
            button_margins: layout.button_margins(),
            hover_fill,
            close_hover_fill: CLOSE_HOVER_FILL,
        };
        let events = bar.show(ui);

        for event in events {
            self.chrome.dispatch(event);
        }
        if self.chrome.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
}

impl eframe::App for ChromeDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.tracker.poll(ctx) {
            self.chrome.dispatch(event);
        }

        let bar_fill = self
            .palette
            .active(ColorRole::Dark)
            .map(color)
            .unwrap_or(ctx.style().visuals.panel_fill);
        egui::TopBottomPanel::top("chrome_title_bar")
            .exact_height(self.title_bar_height)
            .frame(egui::Frame::new().fill(bar_fill))
            .show(ctx, |ui| self.title_bar(ui));

        let response = egui::CentralPanel::default()
            .show(ctx, |ui| self.chrome.content_mut().ui(ui))
            .inner;

        if let Some(title) = response.new_title {
            self.chrome.set_title(title);
        }
        if response.close_requested {
            self.chrome.close();
        }

        apply_window_commands(ctx, self.chrome.take_commands(), &mut self.tracker);
    }
}

/// Decodes an image file into a texture for the title-bar logo.
pub fn load_logo(ctx: &egui::Context, path: &Path) -> anyhow::Result<egui::TextureHandle> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let [w, h] = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw());
    Ok(ctx.load_texture(
        format!("chrome-logo:{}", path.display()),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}
