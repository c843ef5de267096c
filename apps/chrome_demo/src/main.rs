use std::path::PathBuf;

use anyhow::Result;
use chrome_core::{load_settings, ChromeSettings, Rect, WindowChrome};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod content;
mod controller;
mod ui;

use content::NotesContent;
use ui::app::ChromeDemoApp;

#[derive(Parser, Debug, Default)]
#[command(about = "Frameless window chrome demo")]
struct Args {
    /// Settings file; defaults to ./chrome.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
    /// Disable maximize/restore and lock the window size.
    #[arg(long)]
    fixed_size: bool,
    /// Close/minimize/maximize on the left, macOS style.
    #[arg(long)]
    osx_buttons: bool,
    #[arg(long)]
    logo: Option<PathBuf>,
    #[arg(long)]
    width: Option<f32>,
    #[arg(long)]
    height: Option<f32>,
    /// Veto the first close until confirmed.
    #[arg(long)]
    confirm_close: bool,
}

impl Args {
    fn apply(&self, settings: &mut ChromeSettings) {
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }
        if self.fixed_size {
            settings.resizable = false;
        }
        if self.osx_buttons {
            settings.osx_buttons = true;
        }
        if let Some(logo) = &self.logo {
            settings.logo = Some(logo.clone());
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    args.apply(&mut settings);

    let screen = Rect::new(
        0.0,
        0.0,
        settings.fallback_screen_width,
        settings.fallback_screen_height,
    );
    let content = NotesContent::new(settings.title.clone(), settings.width, settings.height)
        .with_confirm_close(args.confirm_close);
    let chrome = WindowChrome::new(content, settings.chrome_config(), &screen);

    let geometry = chrome.geometry();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(chrome.title())
        .with_decorations(false)
        .with_position([geometry.x, geometry.y])
        .with_inner_size([geometry.width, geometry.height])
        .with_resizable(chrome.config().resizable);
    if let Some(size) = chrome.fixed_size() {
        viewport = viewport
            .with_min_inner_size([size.width, size.height])
            .with_max_inner_size([size.width, size.height]);
    }

    tracing::info!(
        title = chrome.title(),
        resizable = chrome.config().resizable,
        osx_buttons = chrome.config().osx_button_order,
        "starting chrome demo"
    );

    let app_name = chrome.title().to_owned();
    let title_bar_height = settings.title_bar_height;
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(ChromeDemoApp::new(cc, chrome, title_bar_height)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe failed: {err}"))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
