use super::*;

#[test]
fn canvas_rejects_degenerate_sizes() {
    assert!(Canvas::new(0, 2048).is_err());
    assert!(Canvas::new(4096, 0).is_err());
    assert!(Canvas::new(4096, 1).is_err());
    assert!(Canvas::new(70_000, 2048).is_err());
    assert!(Canvas::new(4096, 2048).is_ok());
}

#[test]
fn canvas_fractions_truncate() {
    let c = Canvas::new(4096, 2048).unwrap();
    assert_eq!(c.horizon(), 1024);
    assert_eq!(c.frac_x(0.35), 1433);
    assert_eq!(c.frac_y(0.28), 573);
    assert_eq!(c.frac_x(0.85), 3481);
}

#[test]
fn rgb_truncates_and_saturates() {
    assert_eq!(Rgb8::from_f64_trunc(30.9, 58.1, 249.99), Rgb8::new(30, 58, 249));
    assert_eq!(Rgb8::from_f64_trunc(-3.0, 300.0, 0.0), Rgb8::new(0, 255, 0));
}

#[test]
fn inclusive_rect_covers_end_pixel() {
    let r = inclusive_rect(10, 20, 18, 32);
    assert_eq!(r.width(), 9.0);
    assert_eq!(r.height(), 13.0);
    assert_eq!(r.x0, 10.0);
    assert_eq!(r.y1, 33.0);
}
