use std::sync::Arc;

use crate::foundation::core::{Size, Vec2};
use crate::foundation::error::LayoutResult;
use crate::layout::boxes::single_child_plumbing;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, empty_frame, forward_frame, forward_layout};
use crate::render::raster::Raster;

/// Displacement as a fraction of the node's own size on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Offset {
    /// Horizontal fraction; positive moves right.
    pub dx: f64,
    /// Vertical fraction; positive moves down.
    pub dy: f64,
}

impl Offset {
    /// No displacement.
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    /// Offset from fractions of the node's width and height.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// `true` when either axis moves the content entirely out of view.
    pub fn is_out_of_view(self) -> bool {
        self.dx.abs() >= 1.0 || self.dy.abs() >= 1.0
    }

    /// Whole-pixel shift for a frame of `size`: away from zero on each axis.
    pub fn pixels(self, size: Size) -> (i64, i64) {
        (
            away_from_zero(f64::from(size.width) * self.dx),
            away_from_zero(f64::from(size.height) * self.dy),
        )
    }

    pub(crate) fn lerp(self, other: Offset, t: f64) -> Offset {
        let v = Vec2::from(self).lerp(Vec2::from(other), t);
        Offset::new(v.x, v.y)
    }
}

impl From<Offset> for Vec2 {
    fn from(o: Offset) -> Self {
        Vec2::new(o.dx, o.dy)
    }
}

fn away_from_zero(v: f64) -> i64 {
    if v < 0.0 { v.floor() as i64 } else { v.ceil() as i64 }
}

/// Shifts its child's frame by a fractional [`Offset`] without changing its size.
///
/// Pixels shifted past an edge are dropped and the uncovered strip is transparent; an offset
/// of a full size or more on either axis renders nothing.
pub struct Translated {
    core: NodeCore,
    offset: Offset,
    child: Option<Node>,
}

impl Translated {
    /// Shift `child` by `offset`.
    pub fn new(offset: Offset, child: Node) -> Self {
        Self {
            core: NodeCore::new(None),
            offset,
            child: Some(child),
        }
    }

    /// Current offset.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Replace the offset. Frames are memoized per time only, so callers that animate the
    /// offset must render through [`LayoutNode::paint`].
    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }
}

impl LayoutNode for Translated {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "Translated"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        forward_layout(self.child.as_mut(), constraints)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        if self.offset.is_out_of_view() {
            return Ok(empty_frame(size));
        }
        let frame = forward_frame(self.child.as_mut(), size, t)?;
        if self.offset == Offset::ZERO {
            return Ok(frame);
        }
        let (dx, dy) = self.offset.pixels(size);
        Ok(Arc::new(frame.shifted(dx, dy)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/translate.rs"]
mod tests;
