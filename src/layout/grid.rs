use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore, longest_duration};
use crate::render::composite::paste;
use crate::render::raster::Raster;

/// Width of one grid column or height of one grid row.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridCellSize {
    /// Pixels, or a percentage of the grid's extent when `is_percentage` is set.
    pub value: f64,
    /// Interpret `value` as a percentage.
    pub is_percentage: bool,
    /// Extra pixels after the cell.
    pub gap: u32,
}

impl GridCellSize {
    /// A fixed number of pixels.
    pub const fn px(value: u32) -> Self {
        Self {
            value: value as f64,
            is_percentage: false,
            gap: 0,
        }
    }

    /// A percentage of the grid's total extent on this axis.
    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            is_percentage: true,
            gap: 0,
        }
    }

    /// Add a gap after the cell.
    pub const fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Cell extent for a grid `total` pixels long on this axis, excluding the gap.
    pub fn pixel_value(self, total: u32) -> u32 {
        if self.is_percentage {
            (self.value / 100.0 * f64::from(total)).floor() as u32
        } else {
            self.value as u32
        }
    }
}

/// Column widths and row heights of a [`Grid`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    /// One entry per column.
    pub column_widths: Vec<GridCellSize>,
    /// One entry per row.
    pub row_heights: Vec<GridCellSize>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Track {
    extent: u32,
    stride: u32,
}

impl Track {
    fn resolve(cell: GridCellSize, total: u32) -> Self {
        let extent = cell.pixel_value(total);
        Self {
            extent,
            stride: extent.saturating_add(cell.gap),
        }
    }
}

/// A rectangular matrix of children in fixed or percentage tracks.
///
/// The grid takes the size its parent dictates (the minimum constraints) and never grows to
/// fit content. Each child is pinned to its cell, centered when it reports a smaller size, and
/// hard-pasted clipped to the grid.
pub struct Grid {
    core: NodeCore,
    children: Vec<Vec<Node>>,
    spec: GridSpec,
    columns: Vec<Track>,
    rows: Vec<Track>,
}

impl Grid {
    /// Build a grid, checking that `children` is rectangular and matches `spec`.
    pub fn new(children: Vec<Vec<Node>>, spec: GridSpec) -> LayoutResult<Self> {
        if let Some(first) = children.first() {
            let cols = first.len();
            if let Some(row) = children.iter().position(|r| r.len() != cols) {
                return Err(LayoutError::shape_mismatch(format!(
                    "row {row} has {} cells, expected {cols}",
                    children[row].len()
                )));
            }
            if spec.row_heights.len() != children.len() {
                return Err(LayoutError::shape_mismatch(format!(
                    "{} row heights for {} rows",
                    spec.row_heights.len(),
                    children.len()
                )));
            }
            if spec.column_widths.len() != cols {
                return Err(LayoutError::shape_mismatch(format!(
                    "{} column widths for {cols} columns",
                    spec.column_widths.len()
                )));
            }
        }
        Ok(Self {
            core: NodeCore::new(None),
            children,
            spec,
            columns: Vec::new(),
            rows: Vec::new(),
        })
    }

    /// Set an explicit duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.core.set_duration(Some(duration));
        self
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (
            self.children.len(),
            self.children.first().map_or(0, Vec::len),
        )
    }
}

impl LayoutNode for Grid {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Grid"
    }

    fn duration(&self) -> Option<f64> {
        self.core
            .duration()
            .or_else(|| longest_duration(self.children.iter().flatten()))
    }

    fn visit_children(&self, f: &mut dyn FnMut(&dyn LayoutNode)) {
        for child in self.children.iter().flatten() {
            f(child.as_ref());
        }
    }

    fn visit_children_mut(&mut self, f: &mut dyn FnMut(&mut dyn LayoutNode)) {
        for child in self.children.iter_mut().flatten() {
            f(child.as_mut());
        }
    }

    #[tracing::instrument(level = "trace", skip(self), fields(shape = ?self.shape()))]
    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        let size = constraints.constrain(constraints.min_size());
        self.columns = self
            .spec
            .column_widths
            .iter()
            .map(|&c| Track::resolve(c, size.width))
            .collect();
        self.rows = self
            .spec
            .row_heights
            .iter()
            .map(|&r| Track::resolve(r, size.height))
            .collect();

        for (row, cells) in self.rows.iter().zip(&mut self.children) {
            for (col, child) in self.columns.iter().zip(cells) {
                child.resolve_size(Constraints::tight(Size::new(col.extent, row.extent)))?;
            }
        }
        Ok(size)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let mut canvas = Raster::transparent(self.size());
        let mut y = 0i64;
        for (row, cells) in self.rows.iter().zip(&mut self.children) {
            let mut x = 0i64;
            for (col, child) in self.columns.iter().zip(cells) {
                let frame = child.frame(t)?;
                let dx = (i64::from(col.stride) - i64::from(frame.width)).div_euclid(2);
                let dy = (i64::from(row.stride) - i64::from(frame.height)).div_euclid(2);
                paste(&mut canvas, &frame, ((x + dx).max(0), (y + dy).max(0)));
                x += i64::from(col.stride);
            }
            y += i64::from(row.stride);
        }
        Ok(Arc::new(canvas))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
