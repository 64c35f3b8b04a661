use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::align::Alignment;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, empty_frame};
use crate::render::composite::paste;
use crate::render::raster::Raster;

/// Plays children one after another.
///
/// Every child needs a finite duration; the sequence lasts for their sum unless overridden.
/// The active child is placed by [`Alignment`] on a transparent canvas as large as the largest
/// child.
pub struct Sequence {
    core: NodeCore,
    children: Vec<Node>,
    durations: Vec<f64>,
    alignment: Alignment,
}

impl Sequence {
    /// Sequence of `children`, rejecting any child without a finite duration.
    pub fn new(children: Vec<Node>, alignment: Alignment) -> LayoutResult<Self> {
        let durations = children
            .iter()
            .enumerate()
            .map(|(i, child)| match child.duration() {
                Some(d) if d.is_finite() && d >= 0.0 => Ok(d),
                _ => Err(LayoutError::validation(format!(
                    "sequence child {i} ({}) has no finite duration",
                    child.kind()
                ))),
            })
            .collect::<LayoutResult<Vec<_>>>()?;
        Ok(Self {
            core: NodeCore::new(None),
            children,
            durations,
            alignment,
        })
    }

    /// Override the summed duration. Times past the last child render transparent.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }

    /// Index of the child playing at `t` and the time relative to its start.
    pub fn active_at(&self, t: f64) -> Option<(usize, f64)> {
        let mut elapsed = 0.0;
        for (i, &d) in self.durations.iter().enumerate() {
            if t < elapsed + d {
                return Some((i, t - elapsed));
            }
            elapsed += d;
        }
        None
    }
}

impl LayoutNode for Sequence {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Sequence"
    }

    fn duration(&self) -> Option<f64> {
        self.core
            .duration()
            .or_else(|| Some(self.durations.iter().sum()))
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
        let mut size: Option<Size> = None;
        for child in &mut self.children {
            let s = child.resolve_size(constraints)?;
            size = Some(size.map_or(s, |acc| acc.max(s)));
        }
        Ok(size.unwrap_or(constraints.min_size()))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.size();
        let Some((index, local)) = self.active_at(t) else {
            return Ok(empty_frame(size));
        };
        let frame = self.children[index].frame(local)?;
        let mut canvas = Raster::transparent(size);
        paste(
            &mut canvas,
            &frame,
            self.alignment.position(size, frame.size()),
        );
        Ok(Arc::new(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sequence.rs"]
mod tests;
