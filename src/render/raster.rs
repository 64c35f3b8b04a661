use crate::foundation::core::{Rgba8, Size, TRANSPARENT};
use crate::foundation::error::{LayoutError, LayoutResult};
use crate::render::composite::paste;

/// A rendered node frame as straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl Raster {
    /// A fully transparent raster.
    pub fn transparent(size: Size) -> Self {
        Self::filled(size, TRANSPARENT)
    }

    /// A raster where every pixel is `color`.
    pub fn filled(size: Size, color: Rgba8) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: color.repeat(size.pixel_count()),
        }
    }

    /// Wrap existing RGBA8 bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> LayoutResult<Self> {
        let expected = Size::new(width, height).pixel_count() * 4;
        if data.len() != expected {
            return Err(LayoutError::validation(format!(
                "raster {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from an RGB plane plus an optional single-channel alpha plane (opaque when absent).
    pub fn from_rgb_and_mask(
        width: u32,
        height: u32,
        rgb: &[u8],
        mask: Option<&[u8]>,
    ) -> LayoutResult<Self> {
        let pixels = Size::new(width, height).pixel_count();
        if rgb.len() != pixels * 3 {
            return Err(LayoutError::validation(format!(
                "rgb plane for {width}x{height} expects {} bytes, got {}",
                pixels * 3,
                rgb.len()
            )));
        }
        if let Some(mask) = mask
            && mask.len() != pixels
        {
            return Err(LayoutError::validation(format!(
                "mask plane for {width}x{height} expects {pixels} bytes, got {}",
                mask.len()
            )));
        }

        let mut data = Vec::with_capacity(pixels * 4);
        for (i, px) in rgb.chunks_exact(3).enumerate() {
            data.extend_from_slice(px);
            data.push(mask.map_or(255, |m| m[i]));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixel dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| ((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// The pixel at `(x, y)`, if inside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.index(x, y)?;
        let d = &self.data;
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&color);
        }
    }

    /// `true` when every pixel has zero alpha.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Color planes with the alpha channel stripped (RGB8).
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size().pixel_count() * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }

    /// The alpha channel isolated as a single-channel plane.
    pub fn to_mask(&self) -> Vec<u8> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }

    /// Top-left crop to `size`, padding with transparent pixels where `self` is smaller.
    pub fn cropped(&self, size: Size) -> Raster {
        if size == self.size() {
            return self.clone();
        }
        let mut out = Raster::transparent(size);
        paste(&mut out, self, (0, 0));
        out
    }

    /// Translate by whole pixels; uncovered pixels become transparent.
    pub fn shifted(&self, dx: i64, dy: i64) -> Raster {
        if dx == 0 && dy == 0 {
            return self.clone();
        }
        let mut out = Raster::transparent(self.size());
        paste(&mut out, self, (dx, dy));
        out
    }

    /// Multiply every alpha value by `factor` (clamped to `[0, 1]`).
    pub fn scale_alpha(&mut self, factor: f64) {
        let factor = factor.clamp(0.0, 1.0);
        if factor >= 1.0 {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            px[3] = (f64::from(px[3]) * factor) as u8;
        }
    }

    /// Convert into an `image` buffer (e.g. for PNG output).
    pub fn into_rgba_image(self) -> LayoutResult<image::RgbaImage> {
        let (w, h) = (self.width, self.height);
        image::RgbaImage::from_raw(w, h, self.data).ok_or_else(|| {
            LayoutError::validation(format!("raster buffer does not match {w}x{h}"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
