use super::*;
use crate::animation::presets::Curves;
use crate::layout::test_support::{CLEAR, Probe, RED};

fn slide(start: Offset, end: Offset, curve: Curve) -> Slide {
    let child = Probe::fixed(Size::new(10, 10), RED).boxed();
    let mut node = Slide::new(child, start, end, 2.0, curve).unwrap();
    node.resolve_size(Constraints::UNBOUNDED).unwrap();
    node
}

#[test]
fn duration_must_be_positive_and_finite() {
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let child = Probe::flexible(RED).boxed();
        assert!(Slide::new(child, Offset::ZERO, Offset::ZERO, d, Curve::Linear).is_err());
    }
}

#[test]
fn animated_nodes_report_their_own_duration() {
    let child = Probe::flexible(RED).with_duration(9.0).boxed();
    let node = Fade::new(child, 0.0, 1.0, 3.0, Curve::Linear).unwrap();
    assert_eq!(node.duration(), Some(3.0));
    assert_eq!(node.kind(), "Fade");
}

#[test]
fn progress_follows_the_curve() {
    let node = slide(Offset::ZERO, Offset::ZERO, Curve::Linear);
    assert_eq!(node.progress_at(0.5).unwrap(), 0.25);
    assert_eq!(node.progress_at(2.0).unwrap(), 1.0);

    let eased = slide(Offset::ZERO, Offset::ZERO, Curves::EASE_IN);
    assert!(eased.progress_at(0.5).unwrap() < 0.25);
}

#[test]
fn slide_enters_from_the_left() {
    let mut node = slide(Offset::new(-1.0, 0.0), Offset::ZERO, Curve::Linear);

    assert!(node.frame(0.0).unwrap().is_fully_transparent());

    let mid = node.frame(1.0).unwrap();
    assert_eq!(mid.pixel(4, 5), Some(RED));
    assert_eq!(mid.pixel(5, 5), Some(CLEAR));

    let done = node.frame(2.0).unwrap();
    assert!((0..10).all(|x| done.pixel(x, 9) == Some(RED)));
}

#[test]
fn slide_snaps_to_end_at_full_progress() {
    let node = slide(Offset::new(0.3, -0.7), Offset::new(0.1, 0.2), Curve::Linear);
    assert_eq!(node.animation().offset_at(1.0), Offset::new(0.1, 0.2));
    assert_eq!(node.animation().offset_at(0.0), Offset::new(0.3, -0.7));
}

#[test]
fn slide_past_duration_is_transparent() {
    let mut node = slide(Offset::ZERO, Offset::ZERO, Curve::Linear);
    assert!(node.frame(2.5).unwrap().is_fully_transparent());
}

#[test]
fn zero_width_curve_window_fails_the_frame() {
    let curve = Curve::interval(0.5, 0.5, Curve::Linear);
    let mut node = slide(Offset::ZERO, Offset::ZERO, curve);
    let err = node.frame(1.0).unwrap_err();
    assert!(err.to_string().starts_with("invalid curve window:"), "{err}");
}

#[test]
fn fade_scales_alpha() {
    let child = Probe::fixed(Size::new(2, 2), RED).boxed();
    let mut node = Fade::new(child, 0.0, 1.0, 2.0, Curve::Linear).unwrap();
    node.resolve_size(Constraints::UNBOUNDED).unwrap();

    assert_eq!(node.frame(0.0).unwrap().pixel(0, 0), Some([255, 0, 0, 0]));
    assert_eq!(node.frame(1.0).unwrap().pixel(1, 1), Some([255, 0, 0, 127]));
    assert_eq!(node.frame(2.0).unwrap().pixel(0, 1), Some(RED));
}

#[test]
fn fade_out_reverses_the_ramp() {
    let child = Probe::fixed(Size::new(1, 1), RED).boxed();
    let node = Fade::new(child, 1.0, 0.25, 1.0, Curve::Linear).unwrap();
    assert_eq!(node.animation().opacity_at(0.0), 1.0);
    assert_eq!(node.animation().opacity_at(1.0), 0.25);
}
