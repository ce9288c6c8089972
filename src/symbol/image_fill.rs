use image::imageops::{self, FilterType};

use crate::{
    animation::window::AnimationWindow,
    foundation::core::{Point, Rect, Rgba8},
    symbol::path::{FillPaint, FillRule, SymbolImage, SymbolPath},
};

/// Largest fill, in pixels, for which the held image is resized.
///
/// Bigger rects fall back to a transparent fill instead of allocating the raster.
pub const MAX_FILL_PIXELS: u64 = 4096 * 4096;

/// Resizes a symbol image to the pixel size of the rectangle it fills.
///
/// Implementations are the crate's only contact with rasterization.
pub trait ImageResizer {
    fn resize(&self, image: &SymbolImage, width: u32, height: u32) -> SymbolImage;
}

/// [`ImageResizer`] backed by `image::imageops::resize` with a triangle filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangleResizer;

impl ImageResizer for TriangleResizer {
    fn resize(&self, image: &SymbolImage, width: u32, height: u32) -> SymbolImage {
        if image.width() == width && image.height() == height {
            return image.clone();
        }
        tracing::trace!(
            from_w = image.width(),
            from_h = image.height(),
            to_w = width,
            to_h = height,
            "resize symbol image"
        );
        SymbolImage::new(imageops::resize(
            image.as_rgba(),
            width,
            height,
            FilterType::Triangle,
        ))
    }
}

/// Symbol that fills its rectangle with an image once the window opens.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFill {
    image: Option<SymbolImage>,
    window: AnimationWindow,
}

impl ImageFill {
    /// Without an image the rectangle is filled with transparent white.
    pub fn new(image: Option<SymbolImage>) -> Self {
        Self {
            image,
            window: AnimationWindow::SYMBOL,
        }
    }

    pub fn with_window(self, window: AnimationWindow) -> Self {
        Self { window, ..self }
    }

    pub fn image(&self) -> Option<&SymbolImage> {
        self.image.as_ref()
    }

    pub fn window(&self) -> AnimationWindow {
        self.window
    }

    pub fn path(&self, rect: Rect, progress: f64) -> SymbolPath {
        self.path_with(rect, progress, &TriangleResizer)
    }

    /// Same as [`ImageFill::path`], resizing through `resizer`.
    pub fn path_with(&self, rect: Rect, progress: f64, resizer: &dyn ImageResizer) -> SymbolPath {
        if self.window.normalized_progress(progress) == 0.0 {
            return SymbolPath::new();
        }

        let (w, h) = pixel_size(rect);
        let (wf, hf) = (f64::from(w), f64::from(h));

        let mut path = SymbolPath::new();
        path.move_to(Point::ZERO);
        path.line_to(Point::new(wf, 0.0));
        path.line_to(Point::new(wf, hf));
        path.line_to(Point::new(0.0, hf));
        path.close_path();

        let pixels = u64::from(w) * u64::from(h);
        let paint = match &self.image {
            Some(_) if pixels > MAX_FILL_PIXELS => {
                tracing::debug!(w, h, "image fill too large, filling transparent");
                FillPaint::Solid(Rgba8::TRANSPARENT_WHITE)
            }
            Some(image) if pixels > 0 => FillPaint::Image(resizer.resize(image, w, h)),
            _ => FillPaint::Solid(Rgba8::TRANSPARENT_WHITE),
        };
        path.set_fill_rule(FillRule::NonZero);
        path.fill(paint);
        path
    }
}

/// Integer pixel extent of the fill, anchored at the origin.
///
/// The extent is `min + max` on each axis truncated toward zero, which equals
/// the rect size for origin-anchored rects.
pub fn pixel_size(rect: Rect) -> (u32, u32) {
    // `as` saturates: negatives and NaN become 0.
    let w = (rect.min_x() + rect.max_x()).trunc() as u32;
    let h = (rect.min_y() + rect.max_y()).trunc() as u32;
    (w, h)
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/image_fill.rs"]
mod tests;
