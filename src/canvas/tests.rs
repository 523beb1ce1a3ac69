use super::*;
use crate::draw::{Overlay, RasterSnapshot, Rgba};
use crate::input::{Point, PointerEvent, Tool};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn create_canvas() -> PatternCanvas {
    PatternCanvas::new(CanvasSettings::default()).expect("canvas should allocate")
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn content(canvas: &PatternCanvas) -> RasterSnapshot {
    canvas.content_snapshot().expect("content snapshot")
}

fn hex(value: &str) -> Color {
    Color::from_hex(value).unwrap()
}

#[test]
fn new_canvas_uses_settings() {
    let canvas = create_canvas();
    assert_eq!(canvas.width(), 800);
    assert_eq!(canvas.height(), 600);
    assert_eq!(canvas.tool(), Tool::Brush);
    assert_eq!(canvas.brush_size(), 5);
    assert_eq!(canvas.color().to_hex(), "#6366f1");
    assert!(!canvas.is_drawing());
    assert_eq!(content(&canvas).count_opaque(0), 0);
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let settings = CanvasSettings {
        width: 0,
        ..CanvasSettings::default()
    };
    assert!(matches!(
        PatternCanvas::new(settings),
        Err(CanvasError::InvalidSize { width: 0, .. })
    ));
}

#[test]
fn brush_size_is_clamped_to_valid_range() {
    let mut canvas = create_canvas();
    assert_eq!(canvas.set_brush_size(0), 1);
    assert_eq!(canvas.set_brush_size(50), 20);
    assert_eq!(canvas.set_brush_size(7), 7);
    assert_eq!(canvas.brush_size(), 7);
}

#[test]
fn brush_scenario_paints_red_segment() {
    let mut canvas = create_canvas();
    let blank_png = canvas.export_png().unwrap();

    canvas.select_tool(Tool::Brush);
    canvas.set_color(hex("#ff0000"));
    canvas.set_brush_size(5);
    canvas.begin_stroke(p(10.0, 10.0));
    canvas.continue_stroke(p(50.0, 10.0));
    canvas.end_stroke(p(50.0, 10.0));

    let snap = content(&canvas);
    let red = Rgba {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    for x in [10, 30, 49] {
        for y in 8..=11 {
            assert_eq!(snap.pixel(x, y), red, "pixel ({x}, {y}) should be solid red");
        }
    }
    assert!(snap.pixel(30, 5).is_transparent());
    assert!(snap.pixel(30, 14).is_transparent());
    assert!(snap.pixel(4, 10).is_transparent());
    assert!(snap.pixel(56, 10).is_transparent());
    assert!(!canvas.is_drawing());

    let png = canvas.export_png().unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    assert_ne!(png, blank_png);
}

#[test]
fn square_stamp_covers_fifty_pixel_box() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Square);
    canvas.set_color(hex("#00ff00"));
    canvas.end_stroke(p(100.0, 100.0));

    let snap = content(&canvas);
    let green = Rgba {
        r: 0,
        g: 255,
        b: 0,
        a: 255,
    };
    assert_eq!(snap.pixel(75, 75), green);
    assert_eq!(snap.pixel(124, 124), green);
    assert_eq!(snap.pixel(100, 100), green);
    assert!(snap.pixel(74, 100).is_transparent());
    assert!(snap.pixel(125, 100).is_transparent());
    assert!(snap.pixel(100, 74).is_transparent());
    assert!(snap.pixel(100, 125).is_transparent());
    assert_eq!(snap.count_opaque(0), 50 * 50);

    // The stamp sits on top of background and overlays in the composition.
    let composite = canvas.composite_snapshot().unwrap();
    assert_eq!(composite.pixel(100, 100), green);
}

#[test]
fn circle_stamp_is_centered_with_half_size_radius() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Circle);
    canvas.set_color(hex("#000000"));
    canvas.begin_stroke(p(200.0, 150.0));
    canvas.end_stroke(p(200.0, 150.0));

    let snap = content(&canvas);
    let (mut total, mut sum_x, mut sum_y) = (0.0, 0.0, 0.0);
    for (x, y, px) in snap.pixels() {
        let weight = px.a as f64;
        total += weight;
        sum_x += weight * (x as f64 + 0.5);
        sum_y += weight * (y as f64 + 0.5);
    }
    assert!(total > 0.0);
    assert!((sum_x / total - 200.0).abs() < 0.5);
    assert!((sum_y / total - 150.0).abs() < 0.5);

    let area = snap.count_opaque(127) as f64;
    let expected = std::f64::consts::PI * 25.0 * 25.0;
    assert!((area - expected).abs() / expected < 0.02, "area {area} vs {expected}");

    assert_eq!(snap.pixel(223, 150).a, 255);
    assert!(snap.pixel(227, 150).is_transparent());
}

#[test]
fn triangle_stamp_points_up() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Triangle);
    canvas.end_stroke(p(300.0, 300.0));

    let snap = content(&canvas);
    // Wide near the base, narrow near the apex.
    assert_eq!(snap.pixel(280, 322).a, 255);
    assert!(snap.pixel(280, 280).is_transparent());
    assert_eq!(snap.pixel(300, 280).a, 255);
    assert!(snap.pixel(300, 326).is_transparent());
}

#[test]
fn continue_stroke_never_mutates_for_non_freehand_tools() {
    for tool in [Tool::Square, Tool::Circle, Tool::Triangle, Tool::Line] {
        let mut canvas = create_canvas();
        canvas.select_tool(tool);
        canvas.begin_stroke(p(100.0, 100.0));
        canvas.continue_stroke(p(200.0, 200.0));
        canvas.continue_stroke(p(300.0, 150.0));

        assert!(canvas.is_drawing());
        assert_eq!(
            content(&canvas).count_opaque(0),
            0,
            "{tool} must not draw while the pointer moves"
        );
    }
}

#[test]
fn line_tool_draws_from_anchor_to_release() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Line);
    canvas.set_brush_size(4);
    canvas.begin_stroke(p(100.0, 200.0));
    canvas.continue_stroke(p(150.0, 260.0));
    canvas.end_stroke(p(300.0, 200.0));

    let snap = content(&canvas);
    assert_eq!(snap.pixel(200, 199).a, 255);
    assert!(snap.pixel(150, 259).is_transparent());
    assert!(matches!(canvas.drawing_state(), DrawingState::Idle));
}

#[test]
fn release_without_press_is_ignored_for_freehand_and_line() {
    for tool in [Tool::Brush, Tool::Eraser, Tool::Line] {
        let mut canvas = create_canvas();
        canvas.select_tool(tool);
        canvas.end_stroke(p(100.0, 100.0));
        assert_eq!(content(&canvas).count_opaque(0), 0);
    }
}

#[test]
fn bare_release_requests_redraw_only_when_it_stamps() {
    for tool in [Tool::Brush, Tool::Eraser, Tool::Line] {
        let mut canvas = create_canvas();
        canvas.select_tool(tool);
        canvas.take_redraw();
        canvas.end_stroke(p(100.0, 100.0));
        assert!(!canvas.needs_redraw(), "{tool:?} should not redraw");
    }

    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Circle);
    canvas.take_redraw();
    canvas.end_stroke(p(100.0, 100.0));
    assert!(canvas.take_redraw());
}

#[test]
fn overlay_toggles_preserve_drawn_content() {
    let mut canvas = create_canvas();
    canvas.set_color(hex("#ec4899"));
    canvas.begin_stroke(p(60.0, 60.0));
    canvas.continue_stroke(p(400.0, 300.0));
    canvas.end_stroke(p(400.0, 300.0));
    canvas.select_tool(Tool::Circle);
    canvas.end_stroke(p(500.0, 400.0));

    let before = content(&canvas);
    let under_stroke = canvas.composite_snapshot().unwrap().pixel(230, 180);

    for (overlay, visible) in [
        (Overlay::Grid, false),
        (Overlay::Ruler, false),
        (Overlay::Grid, true),
        (Overlay::Ruler, true),
        (Overlay::Ruler, false),
        (Overlay::Grid, false),
        (Overlay::Grid, true),
    ] {
        canvas.set_overlay(overlay, visible);
    }

    assert_eq!(content(&canvas), before);
    assert_eq!(canvas.composite_snapshot().unwrap().pixel(230, 180), under_stroke);
}

#[test]
fn grid_toggle_changes_only_the_overlay_pixels() {
    let mut canvas = create_canvas();
    let with_grid = canvas.composite_snapshot().unwrap();
    canvas.set_overlay(Overlay::Grid, false);
    let without_grid = canvas.composite_snapshot().unwrap();

    let white = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    assert_eq!(without_grid.pixel(40, 300), white);
    assert_ne!(with_grid.pixel(40, 300), white);
    assert_eq!(with_grid.pixel(50, 310), without_grid.pixel(50, 310));
}

#[test]
fn set_overlay_flags_redraw_only_on_change() {
    let mut canvas = create_canvas();
    assert!(canvas.take_redraw());

    canvas.set_overlay(Overlay::Grid, true);
    assert!(!canvas.needs_redraw());

    canvas.set_overlay(Overlay::Grid, false);
    assert!(canvas.take_redraw());
    assert!(!canvas.overlays().grid);
}

#[test]
fn clear_matches_fresh_canvas_with_same_overlays() {
    let mut canvas = create_canvas();
    canvas.set_overlay(Overlay::Ruler, false);
    canvas.begin_stroke(p(100.0, 100.0));
    canvas.continue_stroke(p(700.0, 500.0));
    canvas.end_stroke(p(700.0, 500.0));
    canvas.select_tool(Tool::Square);
    canvas.end_stroke(p(300.0, 300.0));

    canvas.clear();

    let mut fresh = create_canvas();
    fresh.set_overlay(Overlay::Ruler, false);

    assert_eq!(
        canvas.composite_snapshot().unwrap(),
        fresh.composite_snapshot().unwrap()
    );
    assert_eq!(content(&canvas).count_opaque(0), 0);
}

#[test]
fn eraser_only_lowers_opacity() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Square);
    canvas.set_color(hex("#ef4444"));
    canvas.end_stroke(p(100.0, 100.0));
    let before = content(&canvas);

    canvas.select_tool(Tool::Eraser);
    canvas.set_brush_size(5);
    canvas.begin_stroke(p(60.0, 100.0));
    canvas.continue_stroke(p(140.0, 100.0));
    canvas.continue_stroke(p(140.0, 160.0));
    canvas.end_stroke(p(140.0, 160.0));
    let after = content(&canvas);

    for ((x, y, old), (_, _, new)) in before.pixels().zip(after.pixels()) {
        assert!(new.a <= old.a, "pixel ({x}, {y}) gained opacity");
        if old.is_transparent() {
            assert!(new.is_transparent(), "pixel ({x}, {y}) gained color");
        }
    }
    assert!(after.pixel(100, 100).is_transparent());
    assert_eq!(after.pixel(100, 80).a, 255);
}

#[test]
fn eraser_uses_double_brush_width() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Square);
    canvas.end_stroke(p(100.0, 100.0));

    canvas.select_tool(Tool::Eraser);
    canvas.set_brush_size(4);
    canvas.begin_stroke(p(70.0, 100.0));
    canvas.continue_stroke(p(130.0, 100.0));
    canvas.end_stroke(p(130.0, 100.0));

    let snap = content(&canvas);
    // Eight pixels wide: rows 96..=103 cleared, rows 94 and 105 untouched.
    assert!(snap.pixel(100, 96).is_transparent());
    assert!(snap.pixel(100, 103).is_transparent());
    assert_eq!(snap.pixel(100, 94).a, 255);
    assert_eq!(snap.pixel(100, 105).a, 255);
}

#[test]
fn tool_is_locked_for_the_stroke_in_progress() {
    let mut canvas = create_canvas();
    canvas.set_color(hex("#000000"));
    canvas.begin_stroke(p(100.0, 300.0));
    canvas.select_tool(Tool::Eraser);
    canvas.continue_stroke(p(200.0, 300.0));
    canvas.end_stroke(p(200.0, 300.0));

    assert_eq!(content(&canvas).pixel(150, 300).a, 255);
    assert_eq!(canvas.tool(), Tool::Eraser);
}

#[test]
fn leaving_the_surface_ends_stroke_at_last_in_bounds_point() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Line);
    canvas.begin_stroke(p(100.0, 100.0));
    canvas.continue_stroke(p(150.0, 150.0));
    canvas.continue_stroke(p(1000.0, 1000.0));
    canvas.handle_pointer(PointerEvent::Leave);

    assert!(!canvas.is_drawing());
    let snap = content(&canvas);
    assert_eq!(snap.pixel(125, 125).a, 255);
    assert!(snap.pixel(170, 170).is_transparent());
}

#[test]
fn leave_while_idle_is_a_no_op() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Square);
    canvas.leave();
    assert_eq!(content(&canvas).count_opaque(0), 0);
}

#[test]
fn pointer_down_while_drawing_ends_previous_stroke() {
    let mut canvas = create_canvas();
    canvas.select_tool(Tool::Line);
    canvas.begin_stroke(p(10.0, 100.0));
    canvas.continue_stroke(p(60.0, 100.0));
    canvas.begin_stroke(p(300.0, 100.0));
    assert!(canvas.is_drawing());
    canvas.end_stroke(p(400.0, 100.0));

    let snap = content(&canvas);
    assert_eq!(snap.pixel(35, 100).a, 255);
    assert!(snap.pixel(200, 100).is_transparent());
    assert_eq!(snap.pixel(350, 100).a, 255);
}

#[test]
fn pointer_events_drive_the_brush() {
    let mut canvas = create_canvas();
    for event in [
        PointerEvent::Move(p(10.0, 300.0)),
        PointerEvent::Down(p(20.0, 300.0)),
        PointerEvent::Move(p(120.0, 300.0)),
        PointerEvent::Up(p(120.0, 300.0)),
        PointerEvent::Move(p(120.0, 400.0)),
    ] {
        canvas.handle_pointer(event);
    }

    let snap = content(&canvas);
    assert_eq!(snap.pixel(70, 300).a, 255);
    assert!(snap.pixel(120, 360).is_transparent());
}

#[test]
fn export_does_not_disturb_drawing_state() {
    let mut canvas = create_canvas();
    canvas.begin_stroke(p(10.0, 10.0));
    let uri = canvas.export_data_uri().unwrap();
    assert!(canvas.is_drawing());

    let (mime, bytes) = decode_data_uri(&uri).unwrap();
    assert_eq!(mime, "image/png");
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}
