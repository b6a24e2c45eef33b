#![allow(clippy::float_cmp)]

use super::*;

fn panel() -> PanelRect {
    PanelRect { left: 100.0, top: 50.0, width: 250.0, height: 300.0 }
}

// =============================================================
// Drag
// =============================================================

#[test]
fn idle_gesture_produces_no_update() {
    assert_eq!(Gesture::default().on_move(Point::new(10.0, 10.0)), None);
    assert!(!Gesture::default().is_active());
}

#[test]
fn drag_keeps_grab_offset() {
    let mut g = Gesture::Idle;
    assert!(g.begin_drag(Point::new(110.0, 60.0), panel()));
    assert_eq!(
        g.on_move(Point::new(210.0, 160.0)),
        Some(PanelUpdate::Move { left: 200.0, top: 150.0 })
    );
}

#[test]
fn drag_can_move_panel_to_negative_coordinates() {
    let mut g = Gesture::Idle;
    g.begin_drag(Point::new(110.0, 60.0), panel());
    assert_eq!(g.on_move(Point::new(0.0, 0.0)), Some(PanelUpdate::Move { left: -10.0, top: -10.0 }));
}

#[test]
fn drag_does_not_start_during_resize() {
    let mut g = Gesture::Idle;
    g.begin_resize(Point::new(350.0, 350.0), panel());
    assert!(!g.begin_drag(Point::new(110.0, 60.0), panel()));
    assert!(matches!(g, Gesture::Resizing { .. }));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_applies_pointer_delta() {
    let mut g = Gesture::Idle;
    g.begin_resize(Point::new(350.0, 350.0), panel());
    assert_eq!(
        g.on_move(Point::new(400.0, 330.0)),
        Some(PanelUpdate::Resize { width: 300.0, height: 280.0 })
    );
}

#[test]
fn resize_is_clamped_to_minimum() {
    let mut g = Gesture::Idle;
    g.begin_resize(Point::new(350.0, 350.0), panel());
    assert_eq!(
        g.on_move(Point::new(0.0, 0.0)),
        Some(PanelUpdate::Resize { width: 150.0, height: 150.0 })
    );
}

#[test]
fn resize_replaces_active_drag() {
    let mut g = Gesture::Idle;
    g.begin_drag(Point::new(110.0, 60.0), panel());
    g.begin_resize(Point::new(350.0, 350.0), panel());
    assert!(matches!(g.on_move(Point::new(360.0, 360.0)), Some(PanelUpdate::Resize { .. })));
}

// =============================================================
// Release
// =============================================================

#[test]
fn end_returns_to_idle() {
    let mut g = Gesture::Idle;
    g.begin_drag(Point::new(110.0, 60.0), panel());
    assert!(g.is_active());
    g.end();
    assert_eq!(g, Gesture::Idle);
    assert_eq!(g.on_move(Point::new(500.0, 500.0)), None);
}

#[test]
fn drag_can_start_after_resize_ends() {
    let mut g = Gesture::Idle;
    g.begin_resize(Point::new(350.0, 350.0), panel());
    g.end();
    assert!(g.begin_drag(Point::new(110.0, 60.0), panel()));
}

// =============================================================
// Style output
// =============================================================

#[test]
fn move_update_unsets_right_anchor() {
    let props = PanelUpdate::Move { left: 12.0, top: 34.5 }.style_properties();
    assert_eq!(
        props,
        vec![("left", "12px".to_owned()), ("top", "34.5px".to_owned()), ("right", "auto".to_owned())]
    );
}

#[test]
fn resize_update_sets_width_and_height() {
    let props = PanelUpdate::Resize { width: 150.0, height: 200.0 }.style_properties();
    assert_eq!(props, vec![("width", "150px".to_owned()), ("height", "200px".to_owned())]);
}
