use super::*;

#[test]
fn move_without_down_is_ignored() {
    let drag = DragController::new();
    assert_eq!(drag.on_pointer_move(Point::new(50.0, 50.0)), None);
}

#[test]
fn move_relocates_by_pointer_delta() {
    let mut drag = DragController::new();
    drag.on_pointer_down(Point::new(600.0, 250.0), Point::new(560.0, 240.0));

    let pos = drag.on_pointer_move(Point::new(650.0, 230.0));
    assert_eq!(pos, Some(Point::new(610.0, 220.0)));
}

#[test]
fn intermediate_moves_do_not_change_final_position() {
    let mut drag = DragController::new();
    drag.on_pointer_down(Point::new(100.0, 100.0), Point::new(10.0, 20.0));

    let mut last = None;
    for step in 1..=37 {
        let offset = step as f32 * 0.1;
        last = drag.on_pointer_move(Point::new(100.0 + offset, 100.0 - offset));
    }
    assert!(last.is_some());

    let direct = drag.on_pointer_move(Point::new(140.0, 75.0));
    assert_eq!(direct, Some(Point::new(50.0, -5.0)));
}

#[test]
fn up_ends_session() {
    let mut drag = DragController::new();
    drag.on_pointer_down(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    drag.on_pointer_up(Point::new(5.0, 5.0));

    assert!(!drag.is_pressed());
    assert_eq!(drag.on_pointer_move(Point::new(40.0, 40.0)), None);
}

#[test]
fn up_without_down_is_harmless() {
    let mut drag = DragController::new();
    drag.on_pointer_up(Point::new(1.0, 1.0));
    assert!(!drag.is_pressed());
}

#[test]
fn second_down_resets_anchor() {
    let mut drag = DragController::new();
    drag.on_pointer_down(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    drag.on_pointer_down(Point::new(50.0, 50.0), Point::new(300.0, 300.0));

    assert_eq!(
        drag.on_pointer_move(Point::new(60.0, 50.0)),
        Some(Point::new(310.0, 300.0))
    );
}

#[test]
fn double_click_signals_without_drag() {
    let drag = DragController::new();
    assert_eq!(drag.on_double_click(), DragSignal::ToggleRequested);
    assert!(!drag.is_pressed());
}
