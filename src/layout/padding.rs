use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::LayoutResult;
use crate::layout::boxes::single_child_plumbing;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, empty_frame};
use crate::render::composite::paste;
use crate::render::raster::Raster;

/// Per-side insets in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Left inset.
    pub left: u32,
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
}

impl EdgeInsets {
    /// Same inset on every side.
    pub const fn all(v: u32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// `horizontal` on left and right, `vertical` on top and bottom.
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Explicit insets, clockwise from the left.
    pub const fn only(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Left plus right.
    pub const fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom.
    pub const fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Surrounds a child with transparent insets.
pub struct Padding {
    core: NodeCore,
    insets: EdgeInsets,
    child: Option<Node>,
}

impl Padding {
    /// Pad `child` by `insets`.
    pub fn new(insets: EdgeInsets, child: Node) -> Self {
        Self {
            core: NodeCore::new(None),
            insets,
            child: Some(child),
        }
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }
}

impl LayoutNode for Padding {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "Padding"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let inner = constraints.deflate(self.insets.horizontal(), self.insets.vertical());
        let child = match &mut self.child {
            Some(child) => child.resolve_size(inner)?,
            None => inner.min_size(),
        };
        Ok(Size::new(
            child.width.saturating_add(self.insets.horizontal()),
            child.height.saturating_add(self.insets.vertical()),
        ))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        let Some(child) = &mut self.child else {
            return Ok(empty_frame(size));
        };
        let frame = child.frame(t)?;
        let mut canvas = Raster::transparent(size);
        paste(
            &mut canvas,
            &frame,
            (i64::from(self.insets.left), i64::from(self.insets.top)),
        );
        Ok(Arc::new(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/padding.rs"]
mod tests;
