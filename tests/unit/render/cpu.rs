use super::*;
use crate::foundation::core::inclusive_rect;

fn px(img: &image::RgbImage, x: u32, y: u32) -> [u8; 3] {
    img.get_pixel(x, y).0
}

#[test]
fn empty_scene_is_opaque_black() {
    let scene = Scene::new(Canvas::new(16, 8).unwrap());
    let img = render_scene(&scene).unwrap();
    assert_eq!(img.dimensions(), (16, 8));
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn integer_rects_fill_exact_pixels() {
    let mut scene = Scene::new(Canvas::new(32, 32).unwrap());
    scene.fill_rect(inclusive_rect(4, 6, 12, 18), Rgb8::new(251, 191, 36));
    let img = render_scene(&scene).unwrap();

    assert_eq!(px(&img, 4, 6), [251, 191, 36]);
    assert_eq!(px(&img, 12, 18), [251, 191, 36]);
    assert_eq!(px(&img, 13, 18), [0, 0, 0]);
    assert_eq!(px(&img, 12, 19), [0, 0, 0]);
    assert_eq!(px(&img, 3, 6), [0, 0, 0]);
}

#[test]
fn later_ops_paint_over_earlier_ones() {
    let mut scene = Scene::new(Canvas::new(20, 20).unwrap());
    scene.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Rgb8::new(10, 20, 30));
    scene.push(DrawOp::FillCircle {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
        color: Rgb8::new(200, 100, 50),
    });
    let img = render_scene(&scene).unwrap();
    assert_eq!(px(&img, 10, 10), [200, 100, 50]);
    assert_eq!(px(&img, 0, 0), [10, 20, 30]);
    assert_eq!(px(&img, 19, 19), [10, 20, 30]);
}
