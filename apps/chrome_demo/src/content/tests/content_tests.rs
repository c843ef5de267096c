use super::*;
use chrome_core::{ChromeConfig, WindowChrome, WindowCommand};

const SCREEN: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

#[test]
fn requested_geometry_carries_configured_size() {
    let content = NotesContent::new("Notes", 640.0, 480.0);
    assert_eq!(content.requested_geometry(), Rect::new(0.0, 0.0, 640.0, 480.0));
    assert_eq!(content.window_title(), "Notes");
}

#[test]
fn accepts_close_without_confirmation() {
    let mut content = NotesContent::new("Notes", 640.0, 480.0);
    let mut event = CloseEvent::new();
    content.close_event(&mut event);
    assert!(event.is_accepted());
    assert!(!content.close_warned());
}

#[test]
fn confirm_close_vetoes_first_attempt_only() {
    let content = NotesContent::new("Notes", 640.0, 480.0).with_confirm_close(true);
    let mut chrome = WindowChrome::new(content, ChromeConfig::default(), &SCREEN);

    assert!(!chrome.close());
    assert!(chrome.content_mut().close_warned());
    assert!(!chrome.take_commands().contains(&WindowCommand::Close));

    assert!(chrome.close());
    assert_eq!(chrome.take_commands(), vec![WindowCommand::Close]);
}
