use super::*;
use chrome_core::{ChromeConfig, TitleBarLayout};

fn bar<'a>(items: Vec<TitleBarItem>, title: &'a str) -> TitleBar<'a> {
    TitleBar {
        items,
        title,
        window_origin: egui::pos2(100.0, 50.0),
        logo: None,
        logo_margins: Margins::default(),
        button_margins: Margins::default(),
        hover_fill: egui::Color32::DARK_GRAY,
        close_hover_fill: egui::Color32::RED,
    }
}

#[test]
fn stretch_splits_default_layout_into_title_and_buttons() {
    let layout = TitleBarLayout::for_config(&ChromeConfig::default());
    let (leading, trailing) = split_at_stretch(layout.items());

    assert_eq!(leading, &[TitleBarItem::Title]);
    assert_eq!(
        trailing.last(),
        Some(&TitleBarItem::Button(TitleBarButton::Close))
    );
}

#[test]
fn osx_layout_keeps_buttons_leading() {
    let layout = TitleBarLayout::for_config(&ChromeConfig {
        osx_button_order: true,
        ..ChromeConfig::default()
    });
    let (leading, trailing) = split_at_stretch(layout.items());

    assert_eq!(leading.get(1), Some(&TitleBarItem::Button(TitleBarButton::Close)));
    assert!(trailing.is_empty());
}

#[test]
fn missing_stretch_keeps_everything_leading() {
    let items = [TitleBarItem::Title];
    let (leading, trailing) = split_at_stretch(&items);
    assert_eq!(leading.len(), 1);
    assert!(trailing.is_empty());
}

#[test]
fn every_button_has_a_distinct_glyph() {
    let glyphs = [
        TitleBarButton::Minimize,
        TitleBarButton::Maximize,
        TitleBarButton::Restore,
        TitleBarButton::Close,
    ]
    .map(button_glyph);

    for (i, a) in glyphs.iter().enumerate() {
        for b in &glyphs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn idle_frame_produces_no_events() {
    let ctx = egui::Context::default();
    let layout = TitleBarLayout::for_config(&ChromeConfig::default());
    let mut events = Vec::new();

    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::TopBottomPanel::top("title_bar")
            .exact_height(30.0)
            .show(ctx, |ui| {
                events = bar(layout.items().to_vec(), "Idle").show(ui);
            });
    });

    assert!(events.is_empty());
}
