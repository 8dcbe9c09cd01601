use super::*;
use crate::scene::text::resolve_font;

#[test]
fn caption_origin_centers_and_floors() {
    let c = Canvas::new(4096, 2048).unwrap();
    assert_eq!(caption_origin(c, 1000.0, TITLE_Y_FRAC), (1548, 409));
    assert_eq!(caption_origin(c, 1001.7, SUBTITLE_Y_FRAC), (1547, 512));
    // Wider than the canvas: starts left of zero.
    let narrow = Canvas::new(100, 50).unwrap();
    assert_eq!(caption_origin(narrow, 301.0, 0.0).0, -101);
}

#[test]
fn captions_emit_shadow_then_foreground() {
    let Some(font) = resolve_font(None) else {
        return;
    };
    let mut engine = TextLayoutEngine::new(&font).unwrap();
    let mut scene = Scene::new(Canvas::new(4096, 2048).unwrap());
    push_captions(&mut scene, &mut engine, "AUSTIN SKYLINE", "Placeholder").unwrap();

    let ops: Vec<_> = scene.text_ops().collect();
    assert_eq!(ops.len(), 4);
    for pair in ops.chunks(2) {
        let (
            DrawOp::Text {
                text: a,
                origin: shadow,
                color: shadow_color,
            },
            DrawOp::Text {
                text: b,
                origin: fg,
                color: fg_color,
            },
        ) = (pair[0], pair[1])
        else {
            panic!("expected text ops");
        };
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(*shadow_color, Rgb8::BLACK);
        assert_eq!(*fg_color, Rgb8::WHITE);
        assert_eq!(shadow.x - fg.x, SHADOW_OFFSET_PX as f64);
        assert_eq!(shadow.y - fg.y, SHADOW_OFFSET_PX as f64);
    }
}
