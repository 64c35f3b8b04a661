use std::fmt;

use crate::foundation::bound::Bound;
use crate::foundation::core::Size;

/// The min/max pixel box a node's resolved size must satisfy.
///
/// Invariant: `min <= max` on both axes. [`Constraints::merge`] preserves it; a node whose
/// resolved size falls outside its constraints is a layout bug, not a runtime error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Constraints {
    /// Smallest allowed width.
    pub min_width: u32,
    /// Smallest allowed height.
    pub min_height: u32,
    /// Largest allowed width.
    pub max_width: Bound,
    /// Largest allowed height.
    pub max_height: Bound,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl Constraints {
    /// No lower bound and no upper bound.
    pub const UNBOUNDED: Constraints = Constraints {
        min_width: 0,
        min_height: 0,
        max_width: Bound::Unbounded,
        max_height: Bound::Unbounded,
    };

    /// Build from all four components.
    pub const fn new(min_width: u32, min_height: u32, max_width: Bound, max_height: Bound) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    /// Exactly `size` on both axes.
    pub const fn tight(size: Size) -> Self {
        Self::new(
            size.width,
            size.height,
            Bound::Finite(size.width),
            Bound::Finite(size.height),
        )
    }

    /// Zero minimum with the given maximums.
    pub const fn loose(max_width: Bound, max_height: Bound) -> Self {
        Self::new(0, 0, max_width, max_height)
    }

    /// Same maximums, minimums dropped to zero.
    pub const fn loosen(self) -> Self {
        Self::loose(self.max_width, self.max_height)
    }

    /// The smallest allowed box.
    pub const fn min_size(self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Combine two constraint sets: the larger minimums and the smaller maximums.
    ///
    /// The merged maximum never falls below the merged minimum, so the result is always
    /// consistent even when the inputs disagree. `Unbounded` only shrinks against a finite
    /// partner.
    pub fn merge(self, other: Constraints) -> Constraints {
        let min_width = self.min_width.max(other.min_width);
        let min_height = self.min_height.max(other.min_height);
        Constraints {
            min_width,
            min_height,
            max_width: self.max_width.min(other.max_width).max(Bound::Finite(min_width)),
            max_height: self
                .max_height
                .min(other.max_height)
                .max(Bound::Finite(min_height)),
        }
    }

    /// Shrink both axes by fixed insets (saturating at zero).
    pub fn deflate(self, horizontal: u32, vertical: u32) -> Constraints {
        Constraints {
            min_width: self.min_width.saturating_sub(horizontal),
            min_height: self.min_height.saturating_sub(vertical),
            max_width: self.max_width.saturating_sub(horizontal),
            max_height: self.max_height.saturating_sub(vertical),
        }
    }

    /// Clamp `size` into these constraints.
    pub fn constrain(self, size: Size) -> Size {
        Size::new(
            self.max_width.clamp_extent(size.width.max(self.min_width)),
            self.max_height.clamp_extent(size.height.max(self.min_height)),
        )
    }

    /// `true` when `size` lies within these constraints on both axes.
    pub fn is_satisfied_by(self, size: Size) -> bool {
        size.width >= self.min_width
            && size.height >= self.min_height
            && self.max_width >= size.width
            && self.max_height >= size.height
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}x{}|{}x{}]",
            self.min_width, self.min_height, self.max_width, self.max_height
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/constraints.rs"]
mod tests;
