use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, forward_frame, forward_layout};
use crate::render::raster::Raster;

/// Holds its child's first frame for `delay` seconds, then plays the child.
///
/// The node's duration is the child's (or an explicit one) extended by the delay.
pub struct Delayed {
    core: NodeCore,
    delay: f64,
    child: Option<Node>,
}

impl Delayed {
    /// Delay `child` by `delay` seconds. The delay must be finite and non-negative.
    pub fn new(delay: f64, child: Node) -> LayoutResult<Self> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(LayoutError::validation(format!(
                "delay must be finite and non-negative, got {delay}"
            )));
        }
        Ok(Self {
            core: NodeCore::new(None),
            delay,
            child: Some(child),
        })
    }

    /// Replace the child's duration before the delay is added.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }

    /// Seconds before the child starts playing.
    pub fn delay(&self) -> f64 {
        self.delay
    }
}

impl LayoutNode for Delayed {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Delayed"
    }

    fn duration(&self) -> Option<f64> {
        self.core
            .duration()
            .or_else(|| self.child.as_ref().and_then(|c| c.duration()))
            .map(|d| d + self.delay)
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

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        forward_layout(self.child.as_mut(), constraints)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        forward_frame(self.child.as_mut(), size, (t - self.delay).max(0.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/delay.rs"]
mod tests;
