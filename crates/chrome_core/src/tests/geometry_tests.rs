use super::*;

#[test]
fn point_difference_is_componentwise() {
    let delta = Point::new(130.0, 75.0) - Point::new(100.0, 50.0);
    assert_eq!(delta, Point::new(30.0, 25.0));
    assert_eq!(Point::new(10.0, 10.0) + delta, Point::new(40.0, 35.0));
}

#[test]
fn with_center_keeps_size() {
    let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    let centered = rect.with_center(Point::new(960.0, 540.0));

    assert_eq!(centered.position(), Point::new(560.0, 240.0));
    assert_eq!(centered.size(), Size::new(800.0, 600.0));
}
