use super::*;
use crate::scene::plan::DrawOp;

fn canvas() -> Canvas {
    Canvas::new(4096, 2048).unwrap()
}

#[test]
fn sky_starts_at_reference_color() {
    assert_eq!(sky_color(canvas(), 0), Rgb8::new(30, 58, 138));
    // Last sky row: ratio = 1023 / 1024.
    assert_eq!(sky_color(canvas(), 1023), Rgb8::new(95, 129, 249));
}

#[test]
fn ground_switches_from_water_to_grass() {
    let c = canvas();
    assert_eq!(ground_color(c, 1024), Rgb8::new(5, 150, 105));
    // ratio 0.2998 is still water, 0.3008 is grass.
    assert_eq!(ground_color(c, 1024 + 307), Rgb8::new(8, 160, 97));
    assert_eq!(ground_color(c, 1024 + 308), Rgb8::new(6, 122, 53));
    assert_eq!(ground_color(c, 2047), Rgb8::new(6, 184, 69));
}

#[test]
fn row_color_dispatches_on_horizon() {
    let c = canvas();
    assert_eq!(row_color(c, 1023), sky_color(c, 1023));
    assert_eq!(row_color(c, 1024), ground_color(c, 1024));
}

#[test]
fn backdrop_bands_tile_every_row_once() {
    let c = Canvas::new(64, 37).unwrap();
    let mut scene = Scene::new(c);
    push_backdrop(&mut scene);

    let mut next_row = 0.0;
    for op in &scene.ops {
        let DrawOp::FillRect { rect, color } = op else {
            panic!("backdrop emitted a non-rect op");
        };
        assert_eq!(rect.y0, next_row);
        assert_eq!(rect.x0, 0.0);
        assert_eq!(rect.x1, 64.0);
        assert!(rect.y1 > rect.y0);
        for y in rect.y0 as u32..rect.y1 as u32 {
            assert_eq!(row_color(c, y), *color);
        }
        next_row = rect.y1;
    }
    assert_eq!(next_row, 37.0);
}
