//! Test-only nodes shared by the layout unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::core::{Rgba8, Size};
use crate::foundation::error::LayoutResult;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore};
use crate::render::raster::Raster;

/// Solid leaf that records every `t` it is painted at and every constraint it is resolved with.
pub(crate) struct Probe {
    core: NodeCore,
    fixed: Option<Size>,
    color: Rgba8,
    pub(crate) paints: Rc<RefCell<Vec<f64>>>,
    pub(crate) layouts: Rc<RefCell<Vec<Constraints>>>,
}

impl Probe {
    /// Collapses to the minimum of its constraints.
    pub(crate) fn flexible(color: Rgba8) -> Self {
        Self {
            core: NodeCore::new(None),
            fixed: None,
            color,
            paints: Rc::default(),
            layouts: Rc::default(),
        }
    }

    /// Always reports `size`, like a media clip.
    pub(crate) fn fixed(size: Size, color: Rgba8) -> Self {
        Self {
            fixed: Some(size),
            ..Self::flexible(color)
        }
    }

    pub(crate) fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }

    pub(crate) fn boxed(self) -> Node {
        Box::new(self)
    }
}

impl LayoutNode for Probe {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Probe"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        self.layouts.borrow_mut().push(constraints);
        Ok(self.fixed.unwrap_or(constraints.min_size()))
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        self.paints.borrow_mut().push(t);
        Ok(Arc::new(Raster::filled(self.size(), self.color)))
    }
}

pub(crate) const RED: Rgba8 = [255, 0, 0, 255];
pub(crate) const GREEN: Rgba8 = [0, 255, 0, 255];
pub(crate) const BLUE: Rgba8 = [0, 0, 255, 255];
pub(crate) const CLEAR: Rgba8 = [0, 0, 0, 0];
