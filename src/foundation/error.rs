/// Convenience result type used across the layout engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Error taxonomy for tree construction, size resolution and rendering.
///
/// All variants are fatal for the call that produced them; nothing is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// A grid child matrix is not rectangular, or its row/column specs disagree with it.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Flexible space was requested along an axis without a finite maximum.
    #[error("unsatisfiable constraint: {0}")]
    UnsatisfiableConstraint(String),

    /// An interval curve whose window has zero width.
    #[error("invalid curve window: {0}")]
    InvalidCurveWindow(String),

    /// Invalid construction arguments or out-of-order session use.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from media sources or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::ShapeMismatch`] value.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }

    /// Build a [`LayoutError::UnsatisfiableConstraint`] value.
    pub fn unsatisfiable(msg: impl Into<String>) -> Self {
        Self::UnsatisfiableConstraint(msg.into())
    }

    /// Build a [`LayoutError::InvalidCurveWindow`] value.
    pub fn invalid_curve_window(msg: impl Into<String>) -> Self {
        Self::InvalidCurveWindow(msg.into())
    }

    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
