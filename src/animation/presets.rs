//! Named easing curves (standard motion-design control points, after Penner and Material).

use crate::animation::curve::{CubicBezier, Curve};

/// Namespace for the preset easing curves.
pub struct Curves;

macro_rules! cubic_presets {
    ($( $(#[$doc:meta])* $name:ident = $key:literal => ($x1:expr, $y1:expr, $x2:expr, $y2:expr); )*) => {
        impl Curves {
            $(
                $(#[$doc])*
                pub const $name: Curve = Curve::Cubic(CubicBezier::new($x1, $y1, $x2, $y2));
            )*

            /// Every cubic preset with its kebab-case name.
            pub const ALL: &'static [(&'static str, CubicBezier)] = &[
                $( ($key, CubicBezier::new($x1, $y1, $x2, $y2)), )*
            ];
        }
    };
}

impl Curves {
    /// Identity curve.
    pub const LINEAR: Curve = Curve::Linear;

    /// Look up a preset by kebab-case name (`"ease-in-out"`, `"linear"`, ...).
    pub fn by_name(name: &str) -> Option<Curve> {
        if name == "linear" {
            return Some(Curve::Linear);
        }
        Self::ALL
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, c)| Curve::Cubic(*c))
    }
}

cubic_presets! {
    /// Speeds up quickly and ends slowly.
    EASE = "ease" => (0.25, 0.1, 0.25, 1.0);
    /// Starts slowly and ends quickly.
    EASE_IN = "ease-in" => (0.42, 0.0, 1.0, 1.0);
    /// Starts slowly and ends linearly.
    EASE_IN_TO_LINEAR = "ease-in-to-linear" => (0.67, 0.03, 0.65, 0.09);
    /// Sinusoidal ease-in.
    EASE_IN_SINE = "ease-in-sine" => (0.47, 0.0, 0.745, 0.715);
    /// Quadratic ease-in.
    EASE_IN_QUAD = "ease-in-quad" => (0.55, 0.085, 0.68, 0.53);
    /// Cubic ease-in.
    EASE_IN_CUBIC = "ease-in-cubic" => (0.55, 0.055, 0.675, 0.19);
    /// Quartic ease-in.
    EASE_IN_QUART = "ease-in-quart" => (0.895, 0.03, 0.685, 0.22);
    /// Quintic ease-in.
    EASE_IN_QUINT = "ease-in-quint" => (0.755, 0.05, 0.855, 0.06);
    /// Exponential ease-in.
    EASE_IN_EXPO = "ease-in-expo" => (0.95, 0.05, 0.795, 0.035);
    /// Circular ease-in.
    EASE_IN_CIRC = "ease-in-circ" => (0.6, 0.04, 0.98, 0.335);
    /// Ease-in that first pulls back below zero (clamped).
    EASE_IN_BACK = "ease-in-back" => (0.6, -0.28, 0.735, 0.045);
    /// Starts quickly and ends slowly.
    EASE_OUT = "ease-out" => (0.0, 0.0, 0.58, 1.0);
    /// Starts linearly and ends slowly.
    LINEAR_TO_EASE_OUT = "linear-to-ease-out" => (0.35, 0.91, 0.33, 0.97);
    /// Sinusoidal ease-out.
    EASE_OUT_SINE = "ease-out-sine" => (0.39, 0.575, 0.565, 1.0);
    /// Quadratic ease-out.
    EASE_OUT_QUAD = "ease-out-quad" => (0.25, 0.46, 0.45, 0.94);
    /// Cubic ease-out.
    EASE_OUT_CUBIC = "ease-out-cubic" => (0.215, 0.61, 0.355, 1.0);
    /// Quartic ease-out.
    EASE_OUT_QUART = "ease-out-quart" => (0.165, 0.84, 0.44, 1.0);
    /// Quintic ease-out.
    EASE_OUT_QUINT = "ease-out-quint" => (0.23, 1.0, 0.32, 1.0);
    /// Exponential ease-out.
    EASE_OUT_EXPO = "ease-out-expo" => (0.19, 1.0, 0.22, 1.0);
    /// Circular ease-out.
    EASE_OUT_CIRC = "ease-out-circ" => (0.075, 0.82, 0.165, 1.0);
    /// Ease-out that overshoots past one (clamped).
    EASE_OUT_BACK = "ease-out-back" => (0.175, 0.885, 0.32, 1.275);
    /// Slow start, fast middle, slow end.
    EASE_IN_OUT = "ease-in-out" => (0.42, 0.0, 0.58, 1.0);
    /// Sinusoidal ease-in-out.
    EASE_IN_OUT_SINE = "ease-in-out-sine" => (0.445, 0.05, 0.55, 0.95);
    /// Quadratic ease-in-out.
    EASE_IN_OUT_QUAD = "ease-in-out-quad" => (0.455, 0.03, 0.515, 0.955);
    /// Cubic ease-in-out.
    EASE_IN_OUT_CUBIC = "ease-in-out-cubic" => (0.645, 0.045, 0.355, 1.0);
    /// Quartic ease-in-out.
    EASE_IN_OUT_QUART = "ease-in-out-quart" => (0.77, 0.0, 0.175, 1.0);
    /// Quintic ease-in-out.
    EASE_IN_OUT_QUINT = "ease-in-out-quint" => (0.86, 0.0, 0.07, 1.0);
    /// Exponential ease-in-out.
    EASE_IN_OUT_EXPO = "ease-in-out-expo" => (1.0, 0.0, 0.0, 1.0);
    /// Circular ease-in-out.
    EASE_IN_OUT_CIRC = "ease-in-out-circ" => (0.785, 0.135, 0.15, 0.86);
    /// Ease-in-out with undershoot and overshoot (clamped).
    EASE_IN_OUT_BACK = "ease-in-out-back" => (0.68, -0.55, 0.265, 1.55);
    /// Material "standard" curve.
    FAST_OUT_SLOW_IN = "fast-out-slow-in" => (0.4, 0.0, 0.2, 1.0);
    /// Fast start and end, slow middle.
    SLOW_MIDDLE = "slow-middle" => (0.15, 0.85, 0.85, 0.15);
}
