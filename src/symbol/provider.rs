use crate::{
    foundation::core::Rect,
    symbol::{
        arrows,
        image_fill::{ImageFill, ImageResizer},
        path::SymbolPath,
        style::SymbolStyle,
    },
};

/// The symbol drawn next to a ring meter, with its immutable configuration.
///
/// Every variant answers the same question: which path should be drawn in
/// `rect` at global animation `progress`? Answers depend only on the
/// arguments and the held configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SymbolPathProvider {
    /// No symbol at all. Always empty, carries no style.
    #[default]
    Nil,
    /// Styled placeholder that never draws anything.
    Default(SymbolStyle),
    RightArrow(SymbolStyle),
    UpArrow(SymbolStyle),
    DoubleRightArrow(SymbolStyle),
    Image(ImageFill),
}

impl SymbolPathProvider {
    pub fn right_arrow() -> Self {
        Self::RightArrow(SymbolStyle::default())
    }

    pub fn up_arrow() -> Self {
        Self::UpArrow(SymbolStyle::default())
    }

    pub fn double_right_arrow() -> Self {
        Self::DoubleRightArrow(SymbolStyle::default())
    }

    pub fn image(fill: ImageFill) -> Self {
        Self::Image(fill)
    }

    /// Shared style of line-based variants; `None` for `Nil` and `Image`.
    pub fn style(&self) -> Option<&SymbolStyle> {
        match self {
            Self::Default(s)
            | Self::RightArrow(s)
            | Self::UpArrow(s)
            | Self::DoubleRightArrow(s) => Some(s),
            Self::Nil | Self::Image(_) => None,
        }
    }

    /// Path for the current frame.
    pub fn path(&self, rect: Rect, progress: f64) -> SymbolPath {
        match self {
            Self::Nil => SymbolPath::new(),
            Self::Default(style) => style.default_path(),
            Self::RightArrow(style) => arrows::right_arrow(style, rect, progress),
            Self::UpArrow(style) => arrows::up_arrow(style, rect, progress),
            Self::DoubleRightArrow(style) => arrows::double_right_arrow(style, rect, progress),
            Self::Image(fill) => fill.path(rect, progress),
        }
    }

    /// Like [`SymbolPathProvider::path`], with image resizing delegated to `resizer`.
    pub fn path_with(&self, rect: Rect, progress: f64, resizer: &dyn ImageResizer) -> SymbolPath {
        match self {
            Self::Image(fill) => fill.path_with(rect, progress, resizer),
            _ => self.path(rect, progress),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/provider.rs"]
mod tests;
