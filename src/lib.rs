//! Constraint-based layout and time-varying compositing for programmatic video.
//!
//! A layout tree is built from nodes that negotiate pixel sizes with their parents (min/max
//! [`Constraints`] down, sizes up) and render an RGBA [`Raster`] for any time `t`. The driver
//! surface is session-oriented:
//!
//! - Build a tree from the node kinds in this crate (or your own [`LayoutNode`]s)
//! - Create a [`RenderSession`] and [`resolve`](RenderSession::resolve) it for an output size
//! - Sample frames with [`RenderSession::render`], in any order
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod layout;
pub(crate) mod render;
pub(crate) mod session;

pub use crate::foundation::bound::Bound;
pub use crate::foundation::core::{Rgba8, Size, TRANSPARENT, Vec2};
pub use crate::foundation::error::{LayoutError, LayoutResult};

pub use crate::animation::curve::{CubicBezier, Curve};
pub use crate::animation::presets::Curves;

pub use crate::render::composite::{Position, over, paste, paste_over};
pub use crate::render::raster::Raster;

pub use crate::layout::align::{Aligned, Alignment, AxisAlignment};
pub use crate::layout::animated::{Animated, Animation, Fade, FadeAnimation, Slide, SlideAnimation};
pub use crate::layout::boxes::{BoxSize, ClipBox, ColorBox, ConstrainedBox, Empty, SizedBox};
pub use crate::layout::constraints::Constraints;
pub use crate::layout::delay::Delayed;
pub use crate::layout::flex::{Axis, Flex, FlexList};
pub use crate::layout::grid::{Grid, GridCellSize, GridSpec};
pub use crate::layout::media::{ImageSource, MediaClip, MediaSource};
pub use crate::layout::node::{
    LayoutNode, Node, NodeCore, NodeId, collapse_to_min, empty_frame, forward_frame,
    forward_layout, longest_duration,
};
pub use crate::layout::padding::{EdgeInsets, Padding};
pub use crate::layout::sequence::Sequence;
pub use crate::layout::stack::Stack;
pub use crate::layout::translate::{Offset, Translated};

pub use crate::session::render_session::{NodeReport, RenderSession, RenderSessionOpts};
pub use crate::session::tracer::{LayoutTracer, NoopTracer, TracingTracer};
