//! Host-owned sprite records as seen by the overlay.
//!
//! The overlay only ever reads these. Field meanings follow the host's
//! animation records: a texture (absent while unloaded), raw pixel size,
//! on-screen rectangle and a handful of blending attributes.

use std::fmt;

/// Opaque handle to a texture owned by the host's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u64);

impl TextureId {
    /// Wrap the renderer's raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id as handed out by the renderer.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Raw pixel dimensions of a sprite's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Size from its dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Screen-space rectangle in host surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width, may be negative for mirrored sprites.
    pub width: i32,
    /// Height, may be negative for flipped sprites.
    pub height: i32,
}

impl ScreenRect {
    /// Rectangle from its origin and extent.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// How the host composites a sprite onto the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Alpha,
    /// Additive.
    Add,
    /// Subtractive.
    Sub,
    /// Multiplicative.
    Mul,
}

impl BlendMode {
    /// Short lowercase name shown in the detail view.
    pub fn label(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
        }
    }
}

/// 8-bit RGB color multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Identity multiplier.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One renderable entity's current visual state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpriteRecord {
    /// `None` while the image is not loaded or not visible.
    pub texture: Option<TextureId>,
    /// Size of the source image.
    pub pixel_size: PixelSize,
    /// Where the host drew the sprite last frame.
    pub screen_rect: ScreenRect,
    /// Display name.
    pub name: String,
    /// Image file the texture was loaded from.
    pub file_name: String,
    /// Mask image, if any.
    pub mask_file_name: Option<String>,
    /// Compositing mode.
    pub blend_mode: BlendMode,
    /// Color multiplier.
    pub color: Rgb,
    /// Facing, in the host's animation units.
    pub direction: i32,
    /// Enable-mode flag.
    pub visible: bool,
}

impl SpriteRecord {
    /// Sprite with a name and backing file, no texture, default attributes.
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            visible: true,
            ..Self::default()
        }
    }

    /// Attach a loaded texture of the given size.
    pub fn with_texture(mut self, texture: TextureId, pixel_size: PixelSize) -> Self {
        self.texture = Some(texture);
        self.pixel_size = pixel_size;
        self
    }

    /// Set the on-screen rectangle.
    pub fn with_screen_rect(mut self, rect: ScreenRect) -> Self {
        self.screen_rect = rect;
        self
    }

    /// Set the mask image name.
    pub fn with_mask(mut self, mask_file_name: impl Into<String>) -> Self {
        self.mask_file_name = Some(mask_file_name.into());
        self
    }

    /// Texture to draw, or `None` if the sprite is not renderable.
    ///
    /// A zero-sized image is treated the same as a missing texture.
    pub fn renderable_texture(&self) -> Option<TextureId> {
        self.texture.filter(|_| !self.pixel_size.is_empty())
    }
}
