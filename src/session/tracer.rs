use crate::foundation::core::Size;
use crate::session::render_session::NodeReport;

/// Sink for layout and render diagnostics, injected through
/// [`RenderSessionOpts`](crate::RenderSessionOpts).
///
/// Both hooks default to doing nothing.
pub trait LayoutTracer: Send + Sync {
    /// Called once per node, depth-first, after each size resolution.
    fn on_layout(&self, _node: &NodeReport) {}

    /// Called after every root frame render.
    fn on_frame(&self, _t: f64, _size: Size) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl LayoutTracer for NoopTracer {}

/// Forwards events to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTracer;

impl LayoutTracer for TracingTracer {
    fn on_layout(&self, node: &NodeReport) {
        tracing::debug!(
            id = ?node.id,
            parent = ?node.parent,
            depth = node.depth,
            kind = node.kind,
            constraints = ?node.constraints,
            width = node.size.width,
            height = node.size.height,
            duration = ?node.duration,
            "layout"
        );
    }

    fn on_frame(&self, t: f64, size: Size) {
        tracing::debug!(t, width = size.width, height = size.height, "frame");
    }
}
