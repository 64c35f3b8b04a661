//! The node contract: two-phase layout (constraints down, sizes up) and memoized rendering.
//!
//! Every concrete strategy implements [`LayoutNode::layout`] and [`LayoutNode::paint`]; the
//! provided [`LayoutNode::resolve_size`] and [`LayoutNode::frame`] wrap them with the shared
//! bookkeeping (recorded size, out-of-range handling, single-slot frame memo). Behaviour that
//! several strategies share lives in the free functions at the bottom of this module.

use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::LayoutResult;
use crate::layout::constraints::Constraints;
use crate::render::raster::Raster;

/// An owned node in a layout tree.
pub type Node = Box<dyn LayoutNode>;

/// Stable per-session node index, assigned depth-first when a session is built.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// State carried by every node.
///
/// The frame memo is keyed by exact equality of `t` and only saves recomputation when the same
/// time is requested twice in a row. Resolving a new size clears it.
#[derive(Debug, Default)]
pub struct NodeCore {
    duration: Option<f64>,
    constraints: Option<Constraints>,
    size: Option<Size>,
    memo: Option<(f64, Arc<Raster>)>,
    id: Option<NodeId>,
    parent: Option<NodeId>,
}

impl NodeCore {
    /// Core with an optional fixed duration (seconds).
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Explicit duration, if one was set.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Override the explicit duration.
    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration = duration;
    }

    /// Resolved size, or zero before the sizing pass.
    pub fn size(&self) -> Size {
        self.size.unwrap_or(Size::ZERO)
    }

    /// `true` once the sizing pass has run.
    pub fn is_resolved(&self) -> bool {
        self.size.is_some()
    }

    /// Constraints from the most recent sizing pass.
    pub fn constraints(&self) -> Option<Constraints> {
        self.constraints
    }

    /// Session-assigned id.
    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    /// Id of the owning node; diagnostic only.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn attach(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.id = Some(id);
        self.parent = parent;
    }

    fn record_layout(&mut self, constraints: Constraints, size: Size) {
        self.constraints = Some(constraints);
        self.size = Some(size);
        self.memo = None;
    }

    fn memo_hit(&self, t: f64) -> Option<Arc<Raster>> {
        match &self.memo {
            Some((last_t, frame)) if *last_t == t => Some(Arc::clone(frame)),
            _ => None,
        }
    }

    fn store_memo(&mut self, t: f64, frame: Arc<Raster>) {
        self.memo = Some((t, frame));
    }
}

/// A node that negotiates a pixel size with its parent and renders a frame for a time `t`.
pub trait LayoutNode {
    /// Shared node state.
    fn core(&self) -> &NodeCore;

    /// Shared node state, mutably.
    fn core_mut(&mut self) -> &mut NodeCore;

    /// Short type name used in layout reports.
    fn kind(&self) -> &'static str;

    /// Resolve children and compute this node's size for `constraints`.
    ///
    /// Called through [`LayoutNode::resolve_size`]; must be idempotent for equal constraints.
    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size>;

    /// Produce the frame at `t`, which is already known to be within `[0, duration]`.
    ///
    /// The returned raster must match [`LayoutNode::size`].
    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>>;

    /// Effective duration in seconds; `None` means unbounded.
    fn duration(&self) -> Option<f64> {
        self.core().duration()
    }

    /// Flex weight when this node is a flexible slot of an axis list.
    fn flex_weight(&self) -> Option<u32> {
        None
    }

    /// Visit direct children in paint order.
    fn visit_children(&self, _f: &mut dyn FnMut(&dyn LayoutNode)) {}

    /// Visit direct children in paint order, mutably.
    fn visit_children_mut(&mut self, _f: &mut dyn FnMut(&mut dyn LayoutNode)) {}

    /// Size from the most recent sizing pass.
    fn size(&self) -> Size {
        self.core().size()
    }

    /// Run the sizing pass and record the result.
    fn resolve_size(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let size = self.layout(constraints)?;
        if !constraints.is_satisfied_by(size) {
            tracing::debug!(kind = self.kind(), %constraints, ?size, "size outside constraints");
        }
        self.core_mut().record_layout(constraints, size);
        Ok(size)
    }

    /// Frame at `t`, memoized on the last requested time.
    ///
    /// Times before zero or past a finite duration yield a transparent frame of this node's size.
    fn frame(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        if let Some(hit) = self.core().memo_hit(t) {
            return Ok(hit);
        }
        let frame = if is_out_of_range(t, self.duration()) {
            empty_frame(self.size())
        } else {
            self.paint(t)?
        };
        self.core_mut().store_memo(t, Arc::clone(&frame));
        Ok(frame)
    }
}

fn is_out_of_range(t: f64, duration: Option<f64>) -> bool {
    t.is_nan() || t < 0.0 || duration.is_some_and(|d| t > d)
}

/// A fully transparent frame.
pub fn empty_frame(size: Size) -> Arc<Raster> {
    Arc::new(Raster::transparent(size))
}

/// Default leaf sizing: the smallest box the constraints allow.
pub fn collapse_to_min(constraints: Constraints) -> Size {
    constraints.min_size()
}

/// Single-child sizing: the child's size under the same constraints, or the minimum box.
pub fn forward_layout(child: Option<&mut Node>, constraints: Constraints) -> LayoutResult<Size> {
    match child {
        Some(child) => child.resolve_size(constraints),
        None => Ok(collapse_to_min(constraints)),
    }
}

/// Single-child rendering: the child's frame, or a transparent frame of `size`.
pub fn forward_frame(child: Option<&mut Node>, size: Size, t: f64) -> LayoutResult<Arc<Raster>> {
    match child {
        Some(child) => child.frame(t),
        None => Ok(empty_frame(size)),
    }
}

/// Longest finite duration among `nodes`; `None` when no node has one.
pub fn longest_duration<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Option<f64> {
    nodes
        .into_iter()
        .filter_map(|n| n.duration())
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/node.rs"]
mod tests;
