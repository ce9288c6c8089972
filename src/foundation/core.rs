pub use kurbo::{Affine, BezPath, Cap, Join, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serialized as a `[r, g, b, a]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque 50% gray.
    pub const GRAY: Self = Self::opaque(128, 128, 128);
    /// Opaque 66% gray; fallback ring color when a meter has none.
    pub const LIGHT_GRAY: Self = Self::opaque(170, 170, 170);
    /// White with zero alpha; the fill used when an image symbol has no image.
    pub const TRANSPARENT_WHITE: Self = Self::new(255, 255, 255, 0);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `true` when the alpha channel is zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Font weight requested from the host text renderer.
pub enum FontWeight {
    /// Light system weight.
    Light,
    /// Regular system weight.
    #[default]
    Regular,
    /// Bold system weight.
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// System font request: point size plus weight. Rasterization is up to the host.
pub struct FontSpec {
    /// Point size.
    pub size_pt: f32,
    /// Weight.
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontSpec {
    /// Bold system font of `size_pt`.
    pub const fn bold(size_pt: f32) -> Self {
        Self {
            size_pt,
            weight: FontWeight::Bold,
        }
    }

    /// Light system font of `size_pt`.
    pub const fn light(size_pt: f32) -> Self {
        Self {
            size_pt,
            weight: FontWeight::Light,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
