use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::LayoutResult;
use crate::layout::constraints::Constraints;
use crate::layout::node::{LayoutNode, NodeCore};
use crate::render::raster::Raster;

/// Pre-decoded, time-based media consumed by [`MediaClip`].
///
/// Decoding is the implementor's business; the layout engine only samples planes of the
/// declared size.
pub trait MediaSource {
    /// Length in seconds, or `None` for continuous media.
    fn duration(&self) -> Option<f64>;

    /// Intrinsic frame size.
    fn size(&self) -> Size;

    /// Packed RGB plane at `t`, `width * height * 3` bytes.
    fn sample_rgb(&mut self, t: f64) -> LayoutResult<Vec<u8>>;

    /// Single-channel alpha plane at `t`. `None` means fully opaque.
    fn sample_mask(&mut self, _t: f64) -> LayoutResult<Option<Vec<u8>>> {
        Ok(None)
    }
}

/// Leaf that shows a [`MediaSource`] at its intrinsic size, whatever the constraints.
pub struct MediaClip<S> {
    core: NodeCore,
    source: S,
}

impl<S: MediaSource> MediaClip<S> {
    /// Wrap `source`; the node lasts as long as the source.
    pub fn new(source: S) -> Self {
        Self {
            core: NodeCore::new(source.duration()),
            source,
        }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MediaSource> LayoutNode for MediaClip<S> {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut NodeCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "MediaClip"
    }

    fn layout(&mut self, _constraints: Constraints) -> LayoutResult<Size> {
        Ok(self.source.size())
    }

    fn paint(&mut self, t: f64) -> LayoutResult<Arc<Raster>> {
        let size = self.source.size();
        let rgb = self.source.sample_rgb(t)?;
        let mask = self.source.sample_mask(t)?;
        let raster = Raster::from_rgb_and_mask(size.width, size.height, &rgb, mask.as_deref())?;
        Ok(Arc::new(raster))
    }
}

/// A still image as media, with its alpha channel as the mask.
#[derive(Clone, Debug)]
pub struct ImageSource {
    image: image::RgbaImage,
    duration: Option<f64>,
}

impl ImageSource {
    /// Show `image` for as long as the parent needs.
    pub fn new(image: image::RgbaImage) -> Self {
        Self {
            image,
            duration: None,
        }
    }

    /// Decode an image file.
    pub fn open(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("decode image {}", path.display()))?
            .into_rgba8();
        Ok(Self::new(image))
    }

    /// Limit how long the image is shown.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl MediaSource for ImageSource {
    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    fn sample_rgb(&mut self, _t: f64) -> LayoutResult<Vec<u8>> {
        Ok(self
            .image
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect())
    }

    fn sample_mask(&mut self, _t: f64) -> LayoutResult<Option<Vec<u8>>> {
        Ok(Some(self.image.pixels().map(|p| p.0[3]).collect()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/media.rs"]
mod tests;
