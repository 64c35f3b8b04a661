use super::*;
use crate::layout::test_support::{BLUE, CLEAR, Probe, RED};

fn loose(w: u32, h: u32) -> Constraints {
    Constraints::loose(Bound::px(w), Bound::px(h))
}

#[test]
fn empty_collapses_to_minimum_and_is_transparent() {
    let mut node = Empty::new();
    let c = Constraints::new(3, 2, Bound::px(9), Bound::Unbounded);
    assert_eq!(node.resolve_size(c).unwrap(), Size::new(3, 2));
    assert!(node.frame(0.0).unwrap().is_fully_transparent());
    assert_eq!(node.duration(), None);
}

#[test]
fn sized_box_fixes_both_axes_when_allowed() {
    let mut node = SizedBox::new(BoxSize::exact(5, 4), None);
    assert_eq!(node.resolve_size(loose(10, 10)).unwrap(), Size::new(5, 4));
}

#[test]
fn sized_box_yields_to_tighter_parent() {
    let mut node = SizedBox::new(BoxSize::exact(50, 4), None);
    assert_eq!(node.resolve_size(loose(10, 10)).unwrap(), Size::new(10, 4));
}

#[test]
fn fixed_extent_is_lifted_to_parent_minimum() {
    let parent = Constraints::new(8, 2, Bound::px(12), Bound::px(6));
    let mut node = SizedBox::new(BoxSize::exact(3, 9), None);
    let size = node.resolve_size(parent).unwrap();
    assert_eq!(size, Size::new(8, 6));
    assert!(parent.is_satisfied_by(size));
}

#[test]
fn oversized_box_pins_child_inside_parent() {
    let probe = Probe::flexible(RED);
    let layouts = std::rc::Rc::clone(&probe.layouts);
    let mut node = ColorBox::new(BLUE, BoxSize::exact(50, 50)).with_child(probe.boxed());
    let tight = Constraints::tight(Size::new(4, 3));
    assert_eq!(node.resolve_size(tight).unwrap(), Size::new(4, 3));
    assert_eq!(layouts.borrow()[0], tight);
    assert_eq!(node.frame(0.0).unwrap().size(), Size::new(4, 3));
}

#[test]
fn sized_box_passes_narrowed_constraints_to_child() {
    let probe = Probe::flexible(RED);
    let layouts = std::rc::Rc::clone(&probe.layouts);
    let spec = BoxSize {
        width: Some(6),
        ..BoxSize::default()
    };
    let mut node = SizedBox::new(spec, Some(probe.boxed()));
    assert_eq!(node.resolve_size(loose(10, 10)).unwrap(), Size::new(6, 0));
    assert_eq!(
        layouts.borrow()[0],
        Constraints::new(6, 0, Bound::px(6), Bound::px(10))
    );
    assert_eq!(node.frame(0.0).unwrap().size(), Size::new(6, 0));
}

#[test]
fn use_max_expands_without_fixed_size() {
    let mut node = SizedBox::new(BoxSize::expand(), None);
    assert_eq!(node.resolve_size(loose(7, 3)).unwrap(), Size::new(7, 3));

    let mut open = SizedBox::new(BoxSize::expand(), None);
    let c = Constraints::new(2, 1, Bound::Unbounded, Bound::px(3));
    assert_eq!(open.resolve_size(c).unwrap(), Size::new(2, 3));
}

#[test]
fn constrained_box_merges_extra_constraints() {
    let extra = Constraints::new(4, 0, Bound::px(6), Bound::px(2));
    let mut node = ConstrainedBox::new(extra, Some(Probe::fixed(Size::new(5, 2), RED).boxed()));
    assert_eq!(node.resolve_size(loose(10, 10)).unwrap(), Size::new(5, 2));

    let mut expand = ConstrainedBox::new(extra, None).use_max();
    assert_eq!(expand.resolve_size(loose(10, 10)).unwrap(), Size::new(6, 2));
}

#[test]
fn color_box_fills_and_blends_child_on_top() {
    let child = Probe::flexible(BLUE).boxed();
    let mut node = ColorBox::new(RED, BoxSize::exact(3, 2)).with_child(child);
    assert_eq!(node.resolve_size(loose(10, 10)).unwrap(), Size::new(3, 2));
    let frame = node.frame(0.0).unwrap();
    assert_eq!(frame.pixel(0, 0), Some(BLUE));
    assert_eq!(frame.pixel(2, 1), Some(BLUE));

    let mut plain = ColorBox::new(RED, BoxSize::exact(3, 2));
    plain.resolve_size(loose(10, 10)).unwrap();
    let frame = plain.frame(0.0).unwrap();
    assert_eq!(frame.size(), Size::new(3, 2));
    assert!((0..3).all(|x| frame.pixel(x, 1) == Some(RED)));
}

#[test]
fn color_box_respects_duration() {
    let mut node = ColorBox::new(RED, BoxSize::exact(2, 2)).with_duration(1.0);
    node.resolve_size(loose(10, 10)).unwrap();
    assert_eq!(node.frame(0.5).unwrap().pixel(0, 0), Some(RED));
    assert_eq!(node.frame(1.5).unwrap().pixel(0, 0), Some(CLEAR));
}

#[test]
fn clip_box_crops_natural_child() {
    let probe = Probe::fixed(Size::new(8, 8), RED);
    let layouts = std::rc::Rc::clone(&probe.layouts);
    let mut node = ClipBox::new(BoxSize::exact(3, 2), probe.boxed());
    assert_eq!(node.resolve_size(loose(10, 10)).unwrap(), Size::new(3, 2));
    assert_eq!(layouts.borrow()[0], Constraints::UNBOUNDED);

    let frame = node.frame(0.0).unwrap();
    assert_eq!(frame.size(), Size::new(3, 2));
    assert_eq!(frame.pixel(2, 1), Some(RED));
}

#[test]
fn clip_box_pads_small_child_with_transparency() {
    let mut node = ClipBox::new(BoxSize::exact(4, 4), Probe::fixed(Size::new(2, 2), RED).boxed());
    node.resolve_size(loose(10, 10)).unwrap();
    let frame = node.frame(0.0).unwrap();
    assert_eq!(frame.pixel(1, 1), Some(RED));
    assert_eq!(frame.pixel(3, 3), Some(CLEAR));
}
