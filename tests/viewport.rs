use cardcraft::viewport::{PinchTracker, Viewport, MAX_SCALE, MIN_SCALE};
use egui::{Pos2, Vec2};

fn close(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn screen_doc_round_trip() {
    let mut vp = Viewport::new();
    vp.scale = 1.7;
    vp.offset = Vec2::new(33.0, -12.0);

    let screen = Pos2::new(250.0, 140.0);
    assert!(close(vp.doc_to_screen(vp.screen_to_doc(screen)), screen));
}

#[test]
fn wheel_zoom_keeps_the_point_under_the_pointer() {
    let mut vp = Viewport::new();
    let pointer = Pos2::new(100.0, 100.0);
    let doc_point = vp.screen_to_doc(pointer);

    // Scroll up: zoom in one notch.
    vp.wheel_zoom(pointer, -1.0);
    assert!(vp.scale > 1.0);
    assert!(close(vp.doc_to_screen(doc_point), pointer));

    // And back out.
    vp.wheel_zoom(pointer, 1.0);
    assert!(close(vp.doc_to_screen(doc_point), pointer));
}

#[test]
fn wheel_zoom_holds_anchor_at_arbitrary_transform() {
    let mut vp = Viewport::new();
    vp.scale = 0.8;
    vp.offset = Vec2::new(-40.0, 25.0);

    let pointer = Pos2::new(310.0, 420.0);
    let doc_point = vp.screen_to_doc(pointer);
    for _ in 0..10 {
        vp.wheel_zoom(pointer, -1.0);
    }
    assert!(close(vp.doc_to_screen(doc_point), pointer));
}

#[test]
fn scale_is_clamped() {
    let mut vp = Viewport::new();
    for _ in 0..200 {
        vp.zoom_in_step();
    }
    assert_eq!(vp.scale, MAX_SCALE);

    for _ in 0..200 {
        vp.zoom_out_step();
    }
    assert_eq!(vp.scale, MIN_SCALE);
}

#[test]
fn reset_restores_identity() {
    let mut vp = Viewport::new();
    vp.wheel_zoom(Pos2::new(50.0, 80.0), -1.0);
    vp.pan(Vec2::new(12.0, 34.0));
    assert!(!vp.is_identity());

    vp.reset();
    assert!(vp.is_identity());
}

#[test]
fn pinch_first_frame_only_seeds() {
    let mut vp = Viewport::new();
    let mut pinch = PinchTracker::new();

    pinch.update(&mut vp, Pos2::new(100.0, 100.0), Pos2::new(200.0, 100.0));
    assert!(vp.is_identity());
}

#[test]
fn pinch_spread_zooms_in_toward_midpoint() {
    let mut vp = Viewport::new();
    let mut pinch = PinchTracker::new();

    // Fingers 100px apart, then spread to 150px about the same midpoint.
    let mid = Pos2::new(150.0, 100.0);
    let mid_doc = vp.screen_to_doc(mid);
    pinch.update(&mut vp, Pos2::new(100.0, 100.0), Pos2::new(200.0, 100.0));
    pinch.update(&mut vp, Pos2::new(75.0, 100.0), Pos2::new(225.0, 100.0));

    assert!((vp.scale - 1.5).abs() < 1e-4);
    assert!(close(vp.doc_to_screen(mid_doc), mid));
}

#[test]
fn pinch_midpoint_drift_pans_the_view() {
    let mut vp = Viewport::new();
    let mut pinch = PinchTracker::new();

    pinch.update(&mut vp, Pos2::new(100.0, 100.0), Pos2::new(200.0, 100.0));
    // Same spread, both fingers moved 30px right.
    pinch.update(&mut vp, Pos2::new(130.0, 100.0), Pos2::new(230.0, 100.0));

    assert!((vp.scale - 1.0).abs() < 1e-4);
    assert!((vp.offset.x - 30.0).abs() < 1e-3);
    assert!(vp.offset.y.abs() < 1e-3);
}

#[test]
fn pinch_scale_is_clamped() {
    let mut vp = Viewport::new();
    let mut pinch = PinchTracker::new();

    pinch.update(&mut vp, Pos2::new(100.0, 100.0), Pos2::new(101.0, 100.0));
    pinch.update(&mut vp, Pos2::new(0.0, 100.0), Pos2::new(500.0, 100.0));
    assert_eq!(vp.scale, MAX_SCALE);

    pinch.end();
    pinch.update(&mut vp, Pos2::new(0.0, 100.0), Pos2::new(500.0, 100.0));
    pinch.update(&mut vp, Pos2::new(100.0, 100.0), Pos2::new(101.0, 100.0));
    assert_eq!(vp.scale, MIN_SCALE);
}
