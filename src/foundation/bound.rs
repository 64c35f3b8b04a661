use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use crate::foundation::error::{LayoutError, LayoutResult};

/// Upper limit along one layout axis.
///
/// `Unbounded` compares greater than every finite value and equal only to itself. Arithmetic is
/// restricted: anything that would need a negative or undefined result is either
/// absent from the API (`u32 - Unbounded`) or returns an error.
#[derive(Clone, Copy, Debug, Hash, serde::Serialize, serde::Deserialize)]
pub enum Bound {
    /// A finite pixel extent.
    Finite(u32),
    /// No limit.
    Unbounded,
}

impl Bound {
    /// Shorthand for [`Bound::Finite`].
    pub const fn px(v: u32) -> Self {
        Self::Finite(v)
    }

    /// `true` for [`Bound::Unbounded`].
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// `true` for [`Bound::Finite`].
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The finite value, if any.
    pub const fn finite(self) -> Option<u32> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Unbounded => None,
        }
    }

    /// The finite value, or `fallback` when unbounded.
    pub const fn finite_or(self, fallback: u32) -> u32 {
        match self {
            Self::Finite(v) => v,
            Self::Unbounded => fallback,
        }
    }

    /// Clamp a concrete extent so it does not exceed this bound.
    pub fn clamp_extent(self, v: u32) -> u32 {
        match self {
            Self::Finite(max) => v.min(max),
            Self::Unbounded => v,
        }
    }

    /// Subtract a finite amount, saturating at zero. Unbounded stays unbounded.
    pub fn saturating_sub(self, rhs: u32) -> Self {
        match self {
            Self::Finite(v) => Self::Finite(v.saturating_sub(rhs)),
            Self::Unbounded => Self::Unbounded,
        }
    }

    /// Scale by a non-negative factor, flooring finite results.
    ///
    /// `Unbounded * 0` is undefined and negative factors are not supported.
    pub fn checked_mul(self, factor: f64) -> LayoutResult<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(LayoutError::validation(format!(
                "bound can only be scaled by a finite non-negative factor, got {factor}"
            )));
        }
        match self {
            Self::Finite(v) => Ok(Self::Finite(saturate_u32((f64::from(v) * factor).floor()))),
            Self::Unbounded if factor == 0.0 => Err(LayoutError::validation(
                "unbounded * 0 is undefined",
            )),
            Self::Unbounded => Ok(Self::Unbounded),
        }
    }

    /// Integer division by a positive divisor.
    pub fn checked_div(self, rhs: u32) -> LayoutResult<Self> {
        if rhs == 0 {
            return Err(LayoutError::validation("bound division by zero"));
        }
        match self {
            Self::Finite(v) => Ok(Self::Finite(v / rhs)),
            Self::Unbounded => Ok(Self::Unbounded),
        }
    }
}

fn saturate_u32(v: f64) -> u32 {
    if v <= 0.0 {
        0
    } else if v >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        v as u32
    }
}

impl From<u32> for Bound {
    fn from(v: u32) -> Self {
        Self::Finite(v)
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a == b,
            (Self::Unbounded, Self::Unbounded) => true,
            _ => false,
        }
    }
}

impl Eq for Bound {}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.cmp(b),
            (Self::Finite(_), Self::Unbounded) => Ordering::Less,
            (Self::Unbounded, Self::Finite(_)) => Ordering::Greater,
            (Self::Unbounded, Self::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u32> for Bound {
    fn eq(&self, other: &u32) -> bool {
        *self == Self::Finite(*other)
    }
}

impl PartialOrd<u32> for Bound {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        Some(self.cmp(&Self::Finite(*other)))
    }
}

impl Add<u32> for Bound {
    type Output = Bound;

    fn add(self, rhs: u32) -> Bound {
        match self {
            Self::Finite(v) => Self::Finite(v.saturating_add(rhs)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl Add for Bound {
    type Output = Bound;

    fn add(self, rhs: Bound) -> Bound {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.saturating_add(b)),
            _ => Self::Unbounded,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/bound.rs"]
mod tests;
