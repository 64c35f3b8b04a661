//! Axis lists: children laid out along one axis, with fixed children measured first and
//! flexible slots sharing whatever main-axis space is left.

use std::sync::Arc;

use crate::foundation::bound::Bound;
use crate::foundation::core::Size;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::align::AxisAlignment;
use crate::layout::boxes::single_child_plumbing;
use crate::layout::constraints::Constraints;
use crate::layout::node::{
    LayoutNode, Node, NodeCore, forward_frame, forward_layout, longest_duration,
};
use crate::render::composite::{Position, paste};
use crate::render::raster::Raster;

/// Direction along which a [`FlexList`] places its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Extent of `size` along this axis.
    pub fn main(self, size: Size) -> u32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    pub fn cross(self, size: Size) -> u32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Build a size from main and cross extents.
    pub fn pack(self, main: u32, cross: u32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    fn main_bounds(self, c: Constraints) -> (u32, Bound) {
        match self {
            Self::Horizontal => (c.min_width, c.max_width),
            Self::Vertical => (c.min_height, c.max_height),
        }
    }

    fn cross_bounds(self, c: Constraints) -> (u32, Bound) {
        self.flip().main_bounds(c)
    }

    fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    fn position(self, main: i64, cross: i64) -> Position {
        match self {
            Self::Horizontal => (main, cross),
            Self::Vertical => (cross, main),
        }
    }
}

/// Marks a child of a [`FlexList`] as a flexible slot with a weight.
///
/// Outside an axis list it behaves exactly like its child.
pub struct Flex {
    core: NodeCore,
    weight: u32,
    child: Option<Node>,
}

impl Flex {
    /// Flexible slot with weight 1.
    pub fn new(child: Node) -> Self {
        Self {
            core: NodeCore::new(None),
            weight: 1,
            child: Some(child),
        }
    }

    /// Flexible slot with an explicit weight, which must be at least 1.
    pub fn with_weight(child: Node, weight: u32) -> LayoutResult<Self> {
        if weight == 0 {
            return Err(LayoutError::validation("flex weight must be at least 1"));
        }
        Ok(Self {
            weight,
            ..Self::new(child)
        })
    }
}

impl LayoutNode for Flex {
    single_child_plumbing!();

    fn kind(&self) -> &'static str {
        "Flex"
    }

    fn flex_weight(&self) -> Option<u32> {
        Some(self.weight)
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        forward_layout(self.child.as_mut(), constraints)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        forward_frame(self.child.as_mut(), size, t)
    }
}

/// Split `total` pixels proportionally to `weights`.
///
/// Each share is floored and the leftover pixels go one each to the largest fractional
/// remainders, later slots first on ties. The result always sums to `total`; with equal
/// weights the trailing slots absorb the slack.
pub(crate) fn distribute(total: u32, weights: &[u32]) -> Vec<u32> {
    let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if weight_sum == 0 {
        return vec![0; weights.len()];
    }

    let mut pieces = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for (i, &w) in weights.iter().enumerate() {
        let share = u64::from(total) * u64::from(w);
        pieces.push((share / weight_sum) as u32);
        remainders.push((i, share % weight_sum));
    }

    let assigned: u64 = pieces.iter().map(|&p| u64::from(p)).sum();
    let slack = (u64::from(total) - assigned) as usize;
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    for &(i, _) in remainders.iter().take(slack) {
        pieces[i] += 1;
    }
    pieces
}

/// Children in a row or column, painted back to back with an optional gap.
///
/// Fixed children are measured against the parent's maximums with no minimum. [`Flex`]
/// children then share the remaining main-axis space, which requires a finite main-axis
/// maximum. Painting uses hard paste; children must not overlap.
pub struct FlexList {
    core: NodeCore,
    axis: Axis,
    children: Vec<Node>,
    gap: u32,
    main_axis_alignment: AxisAlignment,
    cross_axis_alignment: AxisAlignment,
    positions: Vec<Position>,
}

impl FlexList {
    /// List along `axis`.
    pub fn new(axis: Axis, children: Vec<Node>) -> Self {
        Self {
            core: NodeCore::new(None),
            axis,
            children,
            gap: 0,
            main_axis_alignment: AxisAlignment::Start,
            cross_axis_alignment: AxisAlignment::Start,
            positions: Vec::new(),
        }
    }

    /// Horizontal list.
    pub fn row(children: Vec<Node>) -> Self {
        Self::new(Axis::Horizontal, children)
    }

    /// Vertical list.
    pub fn column(children: Vec<Node>) -> Self {
        Self::new(Axis::Vertical, children)
    }

    /// Pixels between consecutive children.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Placement of the whole run when the list is longer than its content.
    pub fn with_main_axis_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.main_axis_alignment = alignment;
        self
    }

    /// Placement of each child across the axis.
    pub fn with_cross_axis_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }

    /// The list's axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }
}

impl LayoutNode for FlexList {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "FlexList"
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

    #[tracing::instrument(level = "trace", skip(self), fields(axis = ?self.axis))]
    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let axis = self.axis;
        let (main_min, main_max) = axis.main_bounds(constraints);
        let (cross_min, cross_max) = axis.cross_bounds(constraints);
        let loose = constraints.loosen();

        let gaps = u32::try_from(self.children.len().saturating_sub(1))
            .unwrap_or(u32::MAX)
            .saturating_mul(self.gap);
        let mut extents = vec![Size::ZERO; self.children.len()];
        let mut flexible = Vec::new();
        let mut consumed = gaps;
        let mut cross = 0;
        for (i, child) in self.children.iter_mut().enumerate() {
            if let Some(weight) = child.flex_weight() {
                flexible.push((i, weight));
                continue;
            }
            let size = child.resolve_size(loose)?;
            consumed = consumed.saturating_add(axis.main(size));
            cross = cross.max(axis.cross(size));
            extents[i] = size;
        }
        let cross_extent = cross_max.clamp_extent(cross.max(cross_min));

        let mut content = consumed;
        if !flexible.is_empty() {
            let Some(total) = main_max.finite() else {
                return Err(LayoutError::unsatisfiable(format!(
                    "{} flexible children on an unbounded {:?} main axis",
                    flexible.len(),
                    axis
                )));
            };
            let weights: Vec<u32> = flexible.iter().map(|&(_, w)| w).collect();
            let pieces = distribute(total.saturating_sub(consumed), &weights);
            for (&(i, _), piece) in flexible.iter().zip(pieces) {
                let slot = Constraints::tight(axis.pack(piece, cross_extent));
                let size = self.children[i].resolve_size(slot)?;
                content = content.saturating_add(axis.main(size));
                extents[i] = size;
            }
        }
        let main_extent = main_max.clamp_extent(content.max(main_min));

        let mut cursor = self.main_axis_alignment.offset(main_extent, content).max(0);
        self.positions.clear();
        for size in &extents {
            let across = self
                .cross_axis_alignment
                .offset(cross_extent, axis.cross(*size))
                .max(0);
            self.positions.push(axis.position(cursor, across));
            cursor += i64::from(axis.main(*size)) + i64::from(self.gap);
        }

        Ok(axis.pack(main_extent, cross_extent))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let mut canvas = Raster::transparent(self.size());
        for (child, &pos) in self.children.iter_mut().zip(&self.positions) {
            let frame = child.frame(t)?;
            paste(&mut canvas, &frame, pos);
        }
        Ok(Arc::new(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flex.rs"]
mod tests;
