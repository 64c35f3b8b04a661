use std::sync::Arc;

use crate::foundation::bound::Bound;
use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::LayoutResult;
use crate::layout::constraints::Constraints;
use crate::layout::node::{
    LayoutNode, Node, NodeCore, collapse_to_min, empty_frame, forward_frame,
};
use crate::render::composite::paste_over;
use crate::render::raster::Raster;

/// Optional fixed extents shared by the box-like nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoxSize {
    /// Fixed width; `None` leaves the axis to the incoming constraints.
    pub width: Option<u32>,
    /// Fixed height; `None` leaves the axis to the incoming constraints.
    pub height: Option<u32>,
    /// Without a child, expand to finite maximums instead of collapsing to minimums.
    pub use_max: bool,
}

impl BoxSize {
    /// Both axes fixed.
    pub const fn exact(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            use_max: false,
        }
    }

    /// Expand to whatever finite space is offered.
    pub const fn expand() -> Self {
        Self {
            width: None,
            height: None,
            use_max: true,
        }
    }

    /// Pin each fixed axis to its extent, clamped into the incoming bounds.
    fn constraints(self, incoming: Constraints) -> Constraints {
        let pin = |fixed: Option<u32>, min: u32, max: Bound| match fixed {
            Some(v) => {
                let v = max.clamp_extent(v.max(min));
                (v, Bound::px(v))
            }
            None => (min, max),
        };
        let (min_width, max_width) = pin(self.width, incoming.min_width, incoming.max_width);
        let (min_height, max_height) = pin(self.height, incoming.min_height, incoming.max_height);
        Constraints::new(min_width, min_height, max_width, max_height)
    }

    fn childless(self, c: Constraints) -> Size {
        if !self.use_max {
            return collapse_to_min(c);
        }
        Size::new(
            c.max_width.finite_or(c.min_width),
            c.max_height.finite_or(c.min_height),
        )
    }
}

fn box_layout(
    spec: BoxSize,
    child: Option<&mut Node>,
    incoming: Constraints,
) -> LayoutResult<Size> {
    let c = spec.constraints(incoming);
    match child {
        Some(child) => child.resolve_size(c),
        None => Ok(spec.childless(c)),
    }
}

macro_rules! single_child_plumbing {
    () => {
        fn core(&self) -> &NodeCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut NodeCore {
            &mut self.core
        }

        fn duration(&self) -> Option<f64> {
            self.core
                .duration()
                .or_else(|| self.child.as_ref().and_then(|c| c.duration()))
        }

        fn visit_children(&self, f: &mut dyn FnMut(&dyn LayoutNode)) {
            if let Some(child) = &self.child {
                f(child.as_ref());
            }
        }

        fn visit_children_mut(&mut self, f: &mut dyn FnMut(&mut dyn LayoutNode)) {
            if let Some(child) = &mut self.child {
                f(child.as_mut());
            }
        }
    };
}
pub(crate) use single_child_plumbing;

/// Transparent leaf that collapses to the smallest allowed box.
pub struct Empty {
    core: NodeCore,
}

impl Empty {
    /// An empty leaf with unbounded duration.
    pub fn new() -> Self {
        Self {
            core: NodeCore::new(None),
        }
    }
}

impl Default for Empty {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutNode for Empty {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Empty"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        Ok(collapse_to_min(constraints))
    }

    fn paint(&mut self, _t: f64) -> LayoutResult<Arc<Raster>> {
        Ok(empty_frame(self.size()))
    }
}

/// Fixes width and/or height; with a child the child decides within the narrowed constraints.
pub struct SizedBox {
    core: NodeCore,
    spec: BoxSize,
    child: Option<Node>,
}

impl SizedBox {
    /// Box with the given size rules and optional child.
    pub fn new(spec: BoxSize, child: Option<Node>) -> Self {
        Self {
            core: NodeCore::new(None),
            spec,
            child,
        }
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }
}

impl LayoutNode for SizedBox {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "SizedBox"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        box_layout(self.spec, self.child.as_mut(), constraints)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        forward_frame(self.child.as_mut(), size, t)
    }
}

/// Merges additional constraints into whatever the parent offers.
pub struct ConstrainedBox {
    core: NodeCore,
    extra: Constraints,
    use_max: bool,
    child: Option<Node>,
}

impl ConstrainedBox {
    /// Impose `extra` on `child`.
    pub fn new(extra: Constraints, child: Option<Node>) -> Self {
        Self {
            core: NodeCore::new(None),
            extra,
            use_max: false,
            child,
        }
    }

    /// Without a child, expand to finite maximums.
    pub fn use_max(mut self) -> Self {
        self.use_max = true;
        self
    }
}

impl LayoutNode for ConstrainedBox {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "ConstrainedBox"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let spec = BoxSize {
            use_max: self.use_max,
            ..BoxSize::default()
        };
        box_layout(spec, self.child.as_mut(), constraints.merge(self.extra))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        forward_frame(self.child.as_mut(), size, t)
    }
}

/// Solid fill, sized like [`SizedBox`], with an optional child blended on top.
pub struct ColorBox {
    core: NodeCore,
    spec: BoxSize,
    color: Rgba8,
    child: Option<Node>,
}

impl ColorBox {
    /// Fill with `color` using the given size rules.
    pub fn new(color: Rgba8, spec: BoxSize) -> Self {
        Self {
            core: NodeCore::new(None),
            spec,
            color,
            child: None,
        }
    }

    /// Paint `child` over the fill.
    pub fn with_child(mut self, child: Node) -> Self {
        self.child = Some(child);
        self
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }
}

impl LayoutNode for ColorBox {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "ColorBox"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        box_layout(self.spec, self.child.as_mut(), constraints)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let mut canvas = Raster::filled(self.size(), self.color);
        if let Some(child) = &mut self.child {
            let frame = child.frame(t)?;
            paste_over(&mut canvas, &frame, (0, 0));
        }
        Ok(Arc::new(canvas))
    }
}

/// Sized by its constraints; lets the child take its natural (unbounded) size and crops it
/// from the top-left.
pub struct ClipBox {
    core: NodeCore,
    spec: BoxSize,
    child: Option<Node>,
}

impl ClipBox {
    /// Clip `child` to the box described by `spec`.
    pub fn new(spec: BoxSize, child: Node) -> Self {
        Self {
            core: NodeCore::new(None),
            spec,
            child: Some(child),
        }
    }
}

impl LayoutNode for ClipBox {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "ClipBox"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        if let Some(child) = &mut self.child {
            child.resolve_size(Constraints::UNBOUNDED)?;
        }
        Ok(self.spec.childless(self.spec.constraints(constraints)))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        let Some(child) = &mut self.child else {
            return Ok(empty_frame(size));
        };
        let frame = child.frame(t)?;
        if frame.size() == size {
            return Ok(frame);
        }
        Ok(Arc::new(frame.cropped(size)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/boxes.rs"]
mod tests;
