use std::path::Path;

use anyhow::Context;

use crate::{foundation::error::RingResult, symbol::path::SymbolImage};

/// Decode encoded image bytes (PNG, JPEG, ...) into a straight-alpha symbol image.
pub fn decode_image(bytes: &[u8]) -> RingResult<SymbolImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(SymbolImage::new(dyn_img.to_rgba8()))
}

/// Read and decode an image file.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_image(path: &Path) -> RingResult<SymbolImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read image {}", path.display()))?;
    let image = decode_image(&bytes)?;
    tracing::debug!(width = image.width(), height = image.height(), "loaded symbol image");
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
