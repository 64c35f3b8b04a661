use kurbo::{CubicBez, ParamCurve};

use crate::foundation::error::{LayoutError, LayoutResult};

const BISECT_TOLERANCE: f64 = 0.001;
const BISECT_MAX_ITERATIONS: usize = 64;

/// A cubic Bézier easing curve from `(0, 0)` to `(1, 1)` with two inner control points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    /// First control point, x.
    pub x1: f64,
    /// First control point, y.
    pub y1: f64,
    /// Second control point, x.
    pub x2: f64,
    /// Second control point, y.
    pub y2: f64,
}

impl CubicBezier {
    /// Build a curve from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn bez(self) -> CubicBez {
        CubicBez::new((0.0, 0.0), (self.x1, self.y1), (self.x2, self.y2), (1.0, 1.0))
    }

    /// Eased value for `t` in `[0, 1]`.
    ///
    /// Bisects the Bézier parameter until the x component is within 0.001 of `t`, then returns
    /// the y component clamped to `[0, 1]`.
    pub fn transform(self, t: f64) -> f64 {
        let bez = self.bez();
        let (mut start, mut end) = (0.0f64, 1.0f64);
        let mut point = bez.eval(0.5);
        for _ in 0..BISECT_MAX_ITERATIONS {
            let mid = (start + end) / 2.0;
            point = bez.eval(mid);
            if (t - point.x).abs() < BISECT_TOLERANCE {
                break;
            }
            if point.x < t {
                start = mid;
            } else {
                end = mid;
            }
        }
        point.y.clamp(0.0, 1.0)
    }
}

/// Maps normalized animation progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Curve {
    /// Identity.
    #[default]
    Linear,
    /// `0` until `begin`, `inner` remapped over `[begin, end]`, then `1`.
    Interval {
        /// Window start in normalized time.
        begin: f64,
        /// Window end in normalized time; must differ from `begin`.
        end: f64,
        /// Curve applied inside the window.
        inner: Box<Curve>,
    },
    /// Cubic Bézier easing.
    Cubic(CubicBezier),
}

impl Curve {
    /// Delay/compress `inner` into the `[begin, end]` window.
    ///
    /// A six second animation with `Curve::interval(0.5, 1.0, ..)` plays as a three second
    /// animation starting three seconds in.
    pub fn interval(begin: f64, end: f64, inner: Curve) -> Self {
        Self::Interval {
            begin,
            end,
            inner: Box::new(inner),
        }
    }

    /// Eased progress for `t`; the input is clamped to `[0, 1]` first.
    pub fn progress(&self, t: f64) -> LayoutResult<f64> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.transform(t)
    }

    fn transform(&self, t: f64) -> LayoutResult<f64> {
        match self {
            Self::Linear => Ok(t),
            Self::Interval { begin, end, inner } => {
                if end == begin {
                    return Err(LayoutError::invalid_curve_window(format!(
                        "interval window [{begin}, {end}] has zero width"
                    )));
                }
                inner.transform(((t - begin) / (end - begin)).clamp(0.0, 1.0))
            }
            Self::Cubic(c) => Ok(c.transform(t)),
        }
    }
}

impl From<CubicBezier> for Curve {
    fn from(c: CubicBezier) -> Self {
        Self::Cubic(c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
