use std::fmt;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeId};
use crate::render::raster::Raster;
use crate::session::tracer::{LayoutTracer, NoopTracer};

/// Options for a [`RenderSession`].
#[derive(Clone)]
pub struct RenderSessionOpts {
    /// Receives a report per node after resolution and an event per rendered frame.
    pub tracer: Arc<dyn LayoutTracer>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            tracer: Arc::new(NoopTracer),
        }
    }
}

impl fmt::Debug for RenderSessionOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSessionOpts").finish_non_exhaustive()
    }
}

/// One node's state after size resolution.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeReport {
    /// Session-assigned id.
    pub id: Option<NodeId>,
    /// Id of the owning node; `None` for the root.
    pub parent: Option<NodeId>,
    /// Distance from the root.
    pub depth: usize,
    /// Node type name.
    pub kind: &'static str,
    /// Constraints of the last sizing pass.
    pub constraints: Option<Constraints>,
    /// Resolved size.
    pub size: Size,
    /// Effective duration; `None` when unbounded.
    pub duration: Option<f64>,
}

impl NodeReport {
    fn of(node: &dyn LayoutNode, depth: usize) -> Self {
        let core = node.core();
        Self {
            id: core.id(),
            parent: core.parent(),
            depth,
            kind: node.kind(),
            constraints: core.constraints(),
            size: node.size(),
            duration: node.duration(),
        }
    }
}

/// Driver-facing handle on a layout tree: resolve once per output size, then sample frames.
///
/// Frames may be requested in any order. The tree is single-threaded; render independent
/// sessions to parallelize.
pub struct RenderSession {
    root: Node,
    opts: RenderSessionOpts,
    resolved: Option<Size>,
}

impl RenderSession {
    /// Take ownership of `root` and number its nodes depth-first.
    #[tracing::instrument(skip_all, fields(root = root.kind()))]
    pub fn new(mut root: Node, opts: RenderSessionOpts) -> Self {
        let mut next = 0;
        assign_ids(root.as_mut(), None, &mut next);
        tracing::debug!(nodes = next, "session created");
        Self {
            root,
            opts,
            resolved: None,
        }
    }

    /// Pin the root to exactly `width x height` and resolve every node's size.
    ///
    /// Returns the root's size, which only differs from the request when the root ignores its
    /// constraints (e.g. a bare media clip).
    #[tracing::instrument(skip(self))]
    pub fn resolve(&mut self, width: u32, height: u32) -> LayoutResult<Size> {
        self.resolved = None;
        let size = self
            .root
            .resolve_size(Constraints::tight(Size::new(width, height)))?;
        self.resolved = Some(size);
        for node in self.report() {
            self.opts.tracer.on_layout(&node);
        }
        Ok(size)
    }

    /// Resolved root size, if [`RenderSession::resolve`] has succeeded.
    pub fn size(&self) -> Option<Size> {
        self.resolved
    }

    /// Timeline length of the root; `None` when unbounded.
    pub fn duration(&self) -> Option<f64> {
        self.root.duration()
    }

    /// The root node.
    pub fn root(&self) -> &dyn LayoutNode {
        self.root.as_ref()
    }

    /// RGBA frame at `t`. Times outside the timeline render transparent.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        if self.resolved.is_none() {
            return Err(LayoutError::validation(
                "render called before the session was resolved",
            ));
        }
        let frame = self.root.frame(t)?;
        self.opts.tracer.on_frame(t, frame.size());
        Ok(frame)
    }

    /// Packed RGB frame at `t` (alpha dropped).
    pub fn render_rgb(&mut self, t: f64) -> LayoutResult<Vec<u8>> {
        Ok(self.render(t)?.to_rgb())
    }

    /// Single-channel alpha plane at `t`.
    pub fn render_mask(&mut self, t: f64) -> LayoutResult<Vec<u8>> {
        Ok(self.render(t)?.to_mask())
    }

    /// Every node's state, depth-first in paint order.
    pub fn report(&self) -> Vec<NodeReport> {
        let mut out = Vec::new();
        collect_reports(self.root.as_ref(), 0, &mut out);
        out
    }

    /// [`RenderSession::report`] as pretty-printed JSON.
    pub fn report_json(&self) -> LayoutResult<String> {
        let json =
            serde_json::to_string_pretty(&self.report()).context("serialize layout report")?;
        Ok(json)
    }
}

fn assign_ids(node: &mut dyn LayoutNode, parent: Option<NodeId>, next: &mut u32) {
    let id = NodeId(*next);
    *next += 1;
    node.core_mut().attach(id, parent);
    node.visit_children_mut(&mut |child| assign_ids(child, Some(id), next));
}

fn collect_reports(node: &dyn LayoutNode, depth: usize, out: &mut Vec<NodeReport>) {
    out.push(NodeReport::of(node, depth));
    node.visit_children(&mut |child| collect_reports(child, depth + 1, out));
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
