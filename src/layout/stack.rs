use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::LayoutResult;
use crate::layout::align::Alignment;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, longest_duration};
use crate::render::composite::{Position, paste_over};
use crate::render::raster::Raster;

/// Children layered on top of each other, later children in front.
///
/// The stack is as large as its largest child (at least the minimum constraints, at most the
/// maximum). Children are alpha-blended so overlapping transparency shows through.
pub struct Stack {
    core: NodeCore,
    children: Vec<Node>,
    alignment: Alignment,
    offsets: Vec<Position>,
}

impl Stack {
    /// Stack `children` anchored by `alignment`.
    pub fn new(children: Vec<Node>, alignment: Alignment) -> Self {
        Self {
            core: NodeCore::new(None),
            children,
            alignment,
            offsets: Vec::new(),
        }
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }
}

impl LayoutNode for Stack {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Stack"
    }

    fn duration(&self) -> Option<f64> {
        self.core
            .duration()
            .or_else(|| longest_duration(&self.children))
    }

    fn visit_children(&self, f: &mut dyn FnMut(&dyn LayoutNode)) {
        for child in &self.children {
            f(child.as_ref());
        }
    }

    fn visit_children_mut(&mut self, f: &mut dyn FnMut(&mut dyn LayoutNode)) {
        for child in &mut self.children {
            f(child.as_mut());
        }
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let loose = constraints.loosen();
        let sizes = self
            .children
            .iter_mut()
            .map(|child| child.resolve_size(loose))
            .collect::<LayoutResult<Vec<_>>>()?;
        let largest = sizes
            .iter()
            .fold(constraints.min_size(), |acc, &s| acc.max(s));
        let size = constraints.constrain(largest);
        self.offsets = sizes
            .iter()
            .map(|&s| self.alignment.position(size, s))
            .collect();
        Ok(size)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let mut canvas = Raster::transparent(self.size());
        for (child, &pos) in self.children.iter_mut().zip(&self.offsets) {
            let frame = child.frame(t)?;
            if !frame.is_fully_transparent() {
                paste_over(&mut canvas, &frame, pos);
            }
        }
        Ok(Arc::new(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;
