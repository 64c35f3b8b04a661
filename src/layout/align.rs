use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::LayoutResult;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, empty_frame};
use crate::render::composite::{Position, paste};
use crate::render::raster::Raster;

/// Anchor along a single axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AxisAlignment {
    /// Left or top.
    #[default]
    Start,
    /// Middle.
    Center,
    /// Right or bottom.
    End,
}

impl AxisAlignment {
    /// Offset of `content` inside `container`. Negative when the content overflows.
    pub fn offset(self, container: u32, content: u32) -> i64 {
        let rem = i64::from(container) - i64::from(content);
        match self {
            Self::Start => 0,
            Self::Center => rem.div_euclid(2),
            Self::End => rem,
        }
    }
}

/// Nine-way anchor: three horizontal by three vertical positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Alignment {
    /// Top edge, left edge.
    #[default]
    TopLeft,
    /// Top edge, centered horizontally.
    Top,
    /// Top edge, right edge.
    TopRight,
    /// Centered vertically, left edge.
    Left,
    /// Centered on both axes.
    Center,
    /// Centered vertically, right edge.
    Right,
    /// Bottom edge, left edge.
    BottomLeft,
    /// Bottom edge, centered horizontally.
    Bottom,
    /// Bottom edge, right edge.
    BottomRight,
}

impl Alignment {
    /// Horizontal component.
    pub fn horizontal(self) -> AxisAlignment {
        match self {
            Self::TopLeft | Self::Left | Self::BottomLeft => AxisAlignment::Start,
            Self::Top | Self::Center | Self::Bottom => AxisAlignment::Center,
            Self::TopRight | Self::Right | Self::BottomRight => AxisAlignment::End,
        }
    }

    /// Vertical component.
    pub fn vertical(self) -> AxisAlignment {
        match self {
            Self::TopLeft | Self::Top | Self::TopRight => AxisAlignment::Start,
            Self::Left | Self::Center | Self::Right => AxisAlignment::Center,
            Self::BottomLeft | Self::Bottom | Self::BottomRight => AxisAlignment::End,
        }
    }

    /// Top-left position of `child` inside `parent`.
    pub fn position(self, parent: Size, child: Size) -> Position {
        (
            self.horizontal().offset(parent.width, child.width),
            self.vertical().offset(parent.height, child.height),
        )
    }
}

/// Takes all finite space offered and places its (possibly smaller) child by [`Alignment`].
///
/// On an unbounded axis it shrinks to the child (or the minimum constraint without a child).
/// A child larger than the node is clipped, anchored no further left/up than the origin.
pub struct Aligned {
    core: NodeCore,
    child: Option<Node>,
    alignment: Alignment,
}

impl Aligned {
    /// Align `child` inside the available space.
    pub fn new(child: Option<Node>, alignment: Alignment) -> Self {
        Self {
            core: NodeCore::new(None),
            child,
            alignment,
        }
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }
}

impl LayoutNode for Aligned {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Aligned"
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

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let child = match &mut self.child {
            Some(child) => Some(child.resolve_size(constraints.loosen())?),
            None => None,
        };
        let fallback = child.unwrap_or(constraints.min_size());
        Ok(Size::new(
            constraints.max_width.finite_or(fallback.width),
            constraints.max_height.finite_or(fallback.height),
        ))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        let Some(child) = &mut self.child else {
            return Ok(empty_frame(size));
        };
        let frame = child.frame(t)?;
        let (x, y) = self.alignment.position(size, frame.size());
        let mut canvas = Raster::transparent(size);
        paste(&mut canvas, &frame, (x.max(0), y.max(0)));
        Ok(Arc::new(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/align.rs"]
mod tests;
