use super::*;
use crate::foundation::bound::Bound;
use crate::layout::test_support::{CLEAR, Probe, RED};

#[test]
fn axis_offsets() {
    assert_eq!(AxisAlignment::Start.offset(10, 4), 0);
    assert_eq!(AxisAlignment::Center.offset(10, 4), 3);
    assert_eq!(AxisAlignment::Center.offset(10, 5), 2);
    assert_eq!(AxisAlignment::End.offset(10, 4), 6);
}

#[test]
fn center_floors_when_content_overflows() {
    assert_eq!(AxisAlignment::Center.offset(4, 7), -2);
    assert_eq!(AxisAlignment::End.offset(4, 7), -3);
}

#[test]
fn nine_way_positions() {
    let parent = Size::new(10, 8);
    let child = Size::new(4, 2);
    let cases = [
        (Alignment::TopLeft, (0, 0)),
        (Alignment::Top, (3, 0)),
        (Alignment::TopRight, (6, 0)),
        (Alignment::Left, (0, 3)),
        (Alignment::Center, (3, 3)),
        (Alignment::Right, (6, 3)),
        (Alignment::BottomLeft, (0, 6)),
        (Alignment::Bottom, (3, 6)),
        (Alignment::BottomRight, (6, 6)),
    ];
    for (alignment, expected) in cases {
        assert_eq!(alignment.position(parent, child), expected, "{alignment:?}");
    }
}

#[test]
fn takes_all_finite_space_and_centers_child() {
    let mut node = Aligned::new(
        Some(Probe::fixed(Size::new(2, 2), RED).boxed()),
        Alignment::Center,
    );
    let size = node
        .resolve_size(Constraints::tight(Size::new(6, 4)))
        .unwrap();
    assert_eq!(size, Size::new(6, 4));

    let frame = node.frame(0.0).unwrap();
    assert_eq!(frame.pixel(2, 1), Some(RED));
    assert_eq!(frame.pixel(3, 2), Some(RED));
    assert_eq!(frame.pixel(1, 1), Some(CLEAR));
    assert_eq!(frame.pixel(4, 1), Some(CLEAR));
}

#[test]
fn child_is_measured_with_loosened_constraints() {
    let probe = Probe::flexible(RED);
    let layouts = std::rc::Rc::clone(&probe.layouts);
    let mut node = Aligned::new(Some(probe.boxed()), Alignment::Center);
    node.resolve_size(Constraints::tight(Size::new(6, 4)))
        .unwrap();
    assert_eq!(
        layouts.borrow()[0],
        Constraints::loose(Bound::px(6), Bound::px(4))
    );
}

#[test]
fn shrinks_to_child_on_unbounded_axis() {
    let mut node = Aligned::new(
        Some(Probe::fixed(Size::new(3, 5), RED).boxed()),
        Alignment::Center,
    );
    let c = Constraints::loose(Bound::px(8), Bound::Unbounded);
    assert_eq!(node.resolve_size(c).unwrap(), Size::new(8, 5));
}

#[test]
fn oversized_child_is_clipped_from_the_origin() {
    let mut node = Aligned::new(
        Some(Probe::fixed(Size::new(10, 10), RED).boxed()),
        Alignment::BottomRight,
    );
    node.resolve_size(Constraints::tight(Size::new(4, 4)))
        .unwrap();
    let frame = node.frame(0.0).unwrap();
    assert_eq!(frame.size(), Size::new(4, 4));
    assert_eq!(frame.pixel(0, 0), Some(RED));
    assert_eq!(frame.pixel(3, 3), Some(RED));
}

#[test]
fn duration_defaults_to_child() {
    let node = Aligned::new(
        Some(Probe::flexible(RED).with_duration(3.0).boxed()),
        Alignment::Center,
    );
    assert_eq!(node.duration(), Some(3.0));
    assert_eq!(node.with_duration(1.0).duration(), Some(1.0));
}
