use super::*;
use std::rc::Rc;
use crate::foundation::bound::Bound;
use crate::layout::test_support::{Probe, RED};

#[test]
fn resolve_size_records_size_and_constraints() {
    let mut p = Probe::flexible(RED);
    let c = Constraints::new(4, 3, Bound::px(10), Bound::Unbounded);
    assert!(!p.core().is_resolved());
    assert_eq!(p.resolve_size(c).unwrap(), Size::new(4, 3));
    assert_eq!(p.size(), Size::new(4, 3));
    assert_eq!(p.core().constraints(), Some(c));
}

#[test]
fn resolve_size_is_idempotent() {
    let mut p = Probe::flexible(RED);
    let c = Constraints::tight(Size::new(7, 2));
    let a = p.resolve_size(c).unwrap();
    let b = p.resolve_size(c).unwrap();
    assert_eq!(a, b);
    assert_eq!(p.layouts.borrow().len(), 2);
}

#[test]
fn frame_memoizes_the_last_time_only() {
    let mut p = Probe::flexible(RED);
    let paints = Rc::clone(&p.paints);
    p.resolve_size(Constraints::tight(Size::new(2, 2))).unwrap();

    let a = p.frame(0.5).unwrap();
    let b = p.frame(0.5).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(*paints.borrow(), vec![0.5]);

    p.frame(0.7).unwrap();
    p.frame(0.5).unwrap();
    assert_eq!(*paints.borrow(), vec![0.5, 0.7, 0.5]);
}

#[test]
fn resizing_clears_the_memo() {
    let mut p = Probe::flexible(RED);
    p.resolve_size(Constraints::tight(Size::new(2, 2))).unwrap();
    p.frame(1.0).unwrap();
    p.resolve_size(Constraints::tight(Size::new(3, 1))).unwrap();
    let f = p.frame(1.0).unwrap();
    assert_eq!(f.size(), Size::new(3, 1));
}

#[test]
fn out_of_range_times_render_transparent_without_painting() {
    let mut p = Probe::flexible(RED).with_duration(2.0);
    let paints = Rc::clone(&p.paints);
    p.resolve_size(Constraints::tight(Size::new(3, 3))).unwrap();

    for t in [-0.1, 2.5, f64::NAN] {
        let f = p.frame(t).unwrap();
        assert_eq!(f.size(), Size::new(3, 3));
        assert!(f.is_fully_transparent());
    }
    assert!(paints.borrow().is_empty());

    let f = p.frame(2.0).unwrap();
    assert_eq!(f.pixel(0, 0), Some(RED));
}

#[test]
fn unbounded_duration_renders_any_non_negative_time() {
    let mut p = Probe::flexible(RED);
    p.resolve_size(Constraints::tight(Size::new(1, 1))).unwrap();
    assert_eq!(p.frame(1.0e6).unwrap().pixel(0, 0), Some(RED));
}

#[test]
fn shared_helpers() {
    let c = Constraints::new(5, 6, Bound::px(9), Bound::px(9));
    assert_eq!(collapse_to_min(c), Size::new(5, 6));
    assert_eq!(forward_layout(None, c).unwrap(), Size::new(5, 6));
    assert!(forward_frame(None, Size::new(2, 2), 0.0).unwrap().is_fully_transparent());

    let nodes: Vec<Node> = vec![
        Probe::flexible(RED).with_duration(2.0).boxed(),
        Probe::flexible(RED).boxed(),
        Probe::flexible(RED).with_duration(5.0).boxed(),
    ];
    assert_eq!(longest_duration(&nodes), Some(5.0));
    assert_eq!(longest_duration(&nodes[1..2]), None);
}
