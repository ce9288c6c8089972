use std::path::{Path, PathBuf};

use crate::{
    animation::window::AnimationWindow,
    assets::decode::load_image,
    foundation::core::Rgba8,
    foundation::error::{RingError, RingResult},
    meter::model::{MeterStyle, RingGraph, RingMeter},
    symbol::{image_fill::ImageFill, provider::SymbolPathProvider, style::SymbolStyle},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Serializable description of a [`RingGraph`].
///
/// Image symbols reference files relative to the root passed to
/// [`RingGraphConfig::build`]; decoding happens there, once.
pub struct RingGraphConfig {
    /// Meters in display order. Must be non-empty to build.
    pub meters: Vec<MeterConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Serializable description of one [`RingMeter`].
pub struct MeterConfig {
    pub title: String,
    pub value: f64,
    pub max_value: f64,
    /// Ring colors as `[r, g, b, a]`; empty falls back to light gray.
    #[serde(default)]
    pub colors: Vec<Rgba8>,
    #[serde(default)]
    pub symbol: SymbolConfig,
    /// Overrides the symbol draw-in window.
    #[serde(default)]
    pub symbol_window: Option<AnimationWindow>,
    /// Overrides the preset picked from `symbol`.
    #[serde(default)]
    pub style: Option<MeterStyle>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Symbol variant selector.
pub enum SymbolConfig {
    #[default]
    None,
    Default,
    RightArrow,
    UpArrow,
    DoubleRightArrow,
    Image {
        /// Image path relative to the build root; absent means a transparent fill.
        #[serde(default)]
        source: Option<String>,
    },
}

impl RingGraphConfig {
    pub fn from_json(s: &str) -> RingResult<Self> {
        serde_json::from_str(s).map_err(|e| RingError::serde(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> RingResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RingError::serde(e.to_string()))
    }

    /// Resolve symbols, load images under `root`, and build the graph.
    #[tracing::instrument(skip(self, root), fields(meters = self.meters.len()))]
    pub fn build(&self, root: impl Into<PathBuf>) -> RingResult<RingGraph> {
        let root = root.into();
        let meters = self
            .meters
            .iter()
            .map(|m| m.build(&root))
            .collect::<RingResult<Vec<_>>>()?;
        RingGraph::new(meters)
            .ok_or_else(|| RingError::validation("ring graph requires at least one meter"))
    }
}

impl MeterConfig {
    fn build(&self, root: &Path) -> RingResult<RingMeter> {
        let window = match self.symbol_window {
            Some(w) => AnimationWindow::try_new(w.start(), w.end())?,
            None => AnimationWindow::SYMBOL,
        };
        let style = SymbolStyle::default().with_window(window);

        let symbol = match &self.symbol {
            SymbolConfig::None => SymbolPathProvider::Nil,
            SymbolConfig::Default => SymbolPathProvider::Default(style),
            SymbolConfig::RightArrow => SymbolPathProvider::RightArrow(style),
            SymbolConfig::UpArrow => SymbolPathProvider::UpArrow(style),
            SymbolConfig::DoubleRightArrow => SymbolPathProvider::DoubleRightArrow(style),
            SymbolConfig::Image { source } => {
                let image = match source {
                    Some(src) => {
                        let rel = normalize_rel_path(src)?;
                        Some(load_image(&root.join(Path::new(&rel)))?)
                    }
                    None => None,
                };
                SymbolPathProvider::Image(ImageFill::new(image).with_window(window))
            }
        };

        let colors = self.colors.clone();
        let meter = match symbol {
            SymbolPathProvider::Nil => {
                RingMeter::new(self.title.clone(), self.value, self.max_value, colors)
            }
            symbol => RingMeter::with_symbol(
                self.title.clone(),
                self.value,
                self.max_value,
                colors,
                symbol,
            ),
        };
        Ok(match self.style {
            Some(style) => meter.with_style(style),
            None => meter,
        })
    }
}

/// Normalize a relative asset path to forward slashes, rejecting escapes.
pub fn normalize_rel_path(source: &str) -> RingResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(RingError::validation("asset paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(RingError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(RingError::validation("asset path must contain a file name"));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/config/graph.rs"]
mod tests;
