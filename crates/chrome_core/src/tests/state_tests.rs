use super::*;

#[test]
fn normal_resizable_shows_maximize_only() {
    let v = ButtonVisibility::derive(WindowState::Normal, true);
    assert!(v.minimize && v.close);
    assert!(v.maximize);
    assert!(!v.restore);
}

#[test]
fn maximized_shows_restore_only() {
    let v = ButtonVisibility::derive(WindowState::Maximized, true);
    assert!(!v.maximize);
    assert!(v.restore);
}

#[test]
fn maximize_and_restore_are_never_both_visible() {
    for state in [
        WindowState::Normal,
        WindowState::Minimized,
        WindowState::Maximized,
    ] {
        for resizable in [true, false] {
            let v = ButtonVisibility::derive(state, resizable);
            assert!(!(v.maximize && v.restore), "{state:?} resizable={resizable}");
        }
    }
}

#[test]
fn fixed_size_never_shows_maximize_or_restore() {
    for state in [WindowState::Normal, WindowState::Maximized] {
        let v = ButtonVisibility::derive(state, false);
        assert!(!v.is_visible(TitleBarButton::Maximize));
        assert!(!v.is_visible(TitleBarButton::Restore));
        assert!(v.is_visible(TitleBarButton::Minimize));
        assert!(v.is_visible(TitleBarButton::Close));
    }
}
