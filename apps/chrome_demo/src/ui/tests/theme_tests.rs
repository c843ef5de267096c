use super::*;

#[test]
fn dark_palette_drives_panel_and_text_colors() {
    let palette = Palette::dark();
    let visuals = visuals_for_palette(&palette);

    let window = palette.active(ColorRole::Window).map(color);
    assert_eq!(Some(visuals.panel_fill), window);
    assert_eq!(visuals.override_text_color, palette.active(ColorRole::Text).map(color));
    assert!(visuals.dark_mode);
}

#[test]
fn rgb_maps_channel_for_channel() {
    assert_eq!(color(Rgb(0x35, 0x35, 0x35)), egui::Color32::from_rgb(0x35, 0x35, 0x35));
}
