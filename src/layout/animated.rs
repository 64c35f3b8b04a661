//! Time-driven nodes: an [`Animation`] receives eased progress and the raw time for each frame.

use std::sync::Arc;

use crate::animation::curve::Curve;
use crate::foundation::core::Size;
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, Node, NodeCore};
use crate::layout::translate::{Offset, Translated};
use crate::render::raster::Raster;

/// What an [`Animated`] node does with its eased progress.
pub trait Animation {
    /// Short name used in layout reports.
    fn kind(&self) -> &'static str;

    /// Size the animated content.
    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size>;

    /// Render with `progress` in `[0, 1]` at node-local time `t`.
    fn animate(&mut self, progress: f64, t: f64) -> LayoutResult<Arc<Raster>>;

    /// Visit the nodes owned by the animation.
    fn visit_children(&self, _f: &mut dyn FnMut(&dyn LayoutNode)) {}

    /// Visit the nodes owned by the animation, mutably.
    fn visit_children_mut(&mut self, _f: &mut dyn FnMut(&mut dyn LayoutNode)) {}
}

/// A node with a fixed, finite duration whose frames are driven by a [`Curve`].
pub struct Animated<A> {
    core: NodeCore,
    curve: Curve,
    animation: A,
}

impl<A: Animation> Animated<A> {
    /// Run `animation` over `duration` seconds, eased by `curve`.
    pub fn with_animation(animation: A, duration: f64, curve: Curve) -> LayoutResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(LayoutError::validation(format!(
                "animation duration must be finite and positive, got {duration}"
            )));
        }
        Ok(Self {
            core: NodeCore::new(Some(duration)),
            curve,
            animation,
        })
    }

    /// The easing curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The animation driven by this node.
    pub fn animation(&self) -> &A {
        &self.animation
    }

    /// Eased progress at `t`, clamped to `[0, 1]`.
    pub fn progress_at(&self, t: f64) -> LayoutResult<f64> {
        let duration = self.core.duration().unwrap_or(1.0);
        Ok(self.curve.progress(t / duration)?.clamp(0.0, 1.0))
    }
}

impl<A: Animation> LayoutNode for Animated<A> {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        self.animation.kind()
    }

    fn visit_children(&self, f: &mut dyn FnMut(&dyn LayoutNode)) {
        self.animation.visit_children(f);
    }

    fn visit_children_mut(&mut self, f: &mut dyn FnMut(&mut dyn LayoutNode)) {
        self.animation.visit_children_mut(f);
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        self.animation.layout(constraints)
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let progress = self.progress_at(t)?;
        self.animation.animate(progress, t)
    }
}

/// Moves a child between two fractional offsets.
pub struct SlideAnimation {
    slider: Translated,
    start: Offset,
    end: Offset,
}

impl SlideAnimation {
    /// Offset applied at `progress`; exactly `end` once progress reaches one.
    pub fn offset_at(&self, progress: f64) -> Offset {
        if progress >= 1.0 {
            self.end
        } else {
            self.start.lerp(self.end, progress)
        }
    }
}

impl Animation for SlideAnimation {
    fn kind(&self) -> &'static str {
        "Slide"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        self.slider.resolve_size(constraints)
    }

    fn animate(&mut self, progress: f64, t: f64) -> LayoutResult<Arc<Raster>> {
        self.slider.set_offset(self.offset_at(progress));
        self.slider.paint(t)
    }

    fn visit_children(&self, f: &mut dyn FnMut(&dyn LayoutNode)) {
        f(&self.slider);
    }

    fn visit_children_mut(&mut self, f: &mut dyn FnMut(&mut dyn LayoutNode)) {
        f(&mut self.slider);
    }
}

/// Slides its child from `start` to `end`.
pub type Slide = Animated<SlideAnimation>;

impl Animated<SlideAnimation> {
    /// Slide `child` from `start` to `end` over `duration` seconds.
    pub fn new(
        child: Node,
        start: Offset,
        end: Offset,
        duration: f64,
        curve: Curve,
    ) -> LayoutResult<Self> {
        let animation = SlideAnimation {
            slider: Translated::new(start, child),
            start,
            end,
        };
        Self::with_animation(animation, duration, curve)
    }
}

/// Ramps the child's opacity between two factors.
pub struct FadeAnimation {
    child: Node,
    from: f64,
    to: f64,
}

impl FadeAnimation {
    /// Opacity factor at `progress`.
    pub fn opacity_at(&self, progress: f64) -> f64 {
        if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * progress
        }
    }
}

impl Animation for FadeAnimation {
    fn kind(&self) -> &'static str {
        "Fade"
    }

    fn layout(&mut self, constraints: Constraints) -> LayoutResult<Size> {
        self.child.resolve_size(constraints)
    }

    fn animate(&mut self, progress: f64, t: f64) -> LayoutResult<Arc<Raster>> {
        let frame = self.child.frame(t)?;
        let opacity = self.opacity_at(progress);
        if opacity >= 1.0 {
            return Ok(frame);
        }
        let mut faded = Raster::clone(&frame);
        faded.scale_alpha(opacity);
        Ok(Arc::new(faded))
    }

    fn visit_children(&self, f: &mut dyn FnMut(&dyn LayoutNode)) {
        f(self.child.as_ref());
    }

    fn visit_children_mut(&mut self, f: &mut dyn FnMut(&mut dyn LayoutNode)) {
        f(self.child.as_mut());
    }
}

/// Fades its child's alpha from one factor to another.
pub type Fade = Animated<FadeAnimation>;

impl Animated<FadeAnimation> {
    /// Fade `child` from opacity `from` to `to` (each clamped to `[0, 1]`) over `duration`.
    pub fn new(child: Node, from: f64, to: f64, duration: f64, curve: Curve) -> LayoutResult<Self> {
        let animation = FadeAnimation {
            child,
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
        };
        Self::with_animation(animation, duration, curve)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/animated.rs"]
mod tests;
