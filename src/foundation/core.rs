pub use kurbo::Vec2;

/// Resolved pixel size of a node.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Build a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either extent is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(
            self.width.max(other.width),
            self.height.max(other.height),
        )
    }

    pub(crate) fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
pub type Rgba8 = [u8; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];
