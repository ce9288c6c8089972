use crate::{
    foundation::core::{FontSpec, Rect, Rgba8},
    foundation::math::clamp01,
    symbol::{path::SymbolPath, provider::SymbolPathProvider},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Colors and fonts of a meter's background and labels.
pub struct MeterStyle {
    /// Fill behind the ring.
    pub background_color: Rgba8,
    /// Color of the description (title) label.
    pub description_color: Rgba8,
    /// Color of the numeric counter label.
    pub title_color: Rgba8,
    /// Font of the numeric counter label.
    pub title_font: FontSpec,
    /// Font of the description label.
    pub description_font: FontSpec,
}

impl MeterStyle {
    /// Style used with a symbol: light labels on a white background.
    pub const SYMBOL: Self = Self {
        background_color: Rgba8::WHITE,
        description_color: Rgba8::WHITE,
        title_color: Rgba8::WHITE,
        title_font: FontSpec::bold(17.0),
        description_font: FontSpec::light(13.0),
    };

    /// Style used without a symbol: dark labels on a gray background.
    pub const PLAIN: Self = Self {
        background_color: Rgba8::GRAY,
        description_color: Rgba8::BLACK,
        title_color: Rgba8::BLACK,
        title_font: FontSpec::bold(17.0),
        description_font: FontSpec::light(13.0),
    };
}

/// One titled `value / max_value` indicator.
///
/// Immutable once built; the `with_*` methods return modified copies.
#[derive(Clone, Debug, PartialEq)]
pub struct RingMeter {
    title: String,
    value: f64,
    max_value: f64,
    colors: Vec<Rgba8>,
    symbol: SymbolPathProvider,
    normalized_value: f64,
    style: MeterStyle,
}

impl RingMeter {
    /// Meter without a symbol, using [`MeterStyle::PLAIN`].
    pub fn new(title: impl Into<String>, value: f64, max_value: f64, colors: Vec<Rgba8>) -> Self {
        Self::build(
            title.into(),
            value,
            max_value,
            colors,
            SymbolPathProvider::Nil,
            MeterStyle::PLAIN,
        )
    }

    /// Meter with an animated symbol, using [`MeterStyle::SYMBOL`].
    pub fn with_symbol(
        title: impl Into<String>,
        value: f64,
        max_value: f64,
        colors: Vec<Rgba8>,
        symbol: SymbolPathProvider,
    ) -> Self {
        Self::build(
            title.into(),
            value,
            max_value,
            colors,
            symbol,
            MeterStyle::SYMBOL,
        )
    }

    fn build(
        title: String,
        value: f64,
        max_value: f64,
        colors: Vec<Rgba8>,
        symbol: SymbolPathProvider,
        style: MeterStyle,
    ) -> Self {
        let colors = if colors.is_empty() {
            vec![Rgba8::LIGHT_GRAY]
        } else {
            colors
        };
        Self {
            title,
            value,
            max_value,
            colors,
            symbol,
            normalized_value: normalized_value(value, max_value),
            style,
        }
    }

    #[must_use]
    pub fn with_style(self, style: MeterStyle) -> Self {
        Self { style, ..self }
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Rgba8) -> Self {
        self.style.background_color = color;
        self
    }

    #[must_use]
    pub fn with_description_color(mut self, color: Rgba8) -> Self {
        self.style.description_color = color;
        self
    }

    #[must_use]
    pub fn with_title_color(mut self, color: Rgba8) -> Self {
        self.style.title_color = color;
        self
    }

    #[must_use]
    pub fn with_title_font(mut self, font: FontSpec) -> Self {
        self.style.title_font = font;
        self
    }

    #[must_use]
    pub fn with_description_font(mut self, font: FontSpec) -> Self {
        self.style.description_font = font;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Ring colors; never empty.
    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }

    pub fn symbol(&self) -> &SymbolPathProvider {
        &self.symbol
    }

    /// Filled fraction of the ring in `[0, 1]`.
    pub fn normalized_value(&self) -> f64 {
        self.normalized_value
    }

    pub fn style(&self) -> &MeterStyle {
        &self.style
    }

    /// Symbol geometry for one frame.
    pub fn symbol_path(&self, rect: Rect, progress: f64) -> SymbolPath {
        self.symbol.path(rect, progress)
    }
}

/// A full ring when `max_value` is zero or exceeded, otherwise the clamped ratio.
fn normalized_value(value: f64, max_value: f64) -> f64 {
    if max_value == 0.0 || value > max_value {
        return 1.0;
    }
    clamp01(value / max_value)
}

/// Non-empty, ordered set of meters shown together.
#[derive(Clone, Debug, PartialEq)]
pub struct RingGraph {
    meters: Vec<RingMeter>,
}

impl RingGraph {
    /// `None` when `meters` is empty.
    pub fn new(meters: Vec<RingMeter>) -> Option<Self> {
        if meters.is_empty() {
            tracing::debug!("refusing to build a ring graph without meters");
            return None;
        }
        Some(Self { meters })
    }

    pub fn single(meter: RingMeter) -> Self {
        Self {
            meters: vec![meter],
        }
    }

    pub fn meters(&self) -> &[RingMeter] {
        &self.meters
    }

    pub fn len(&self) -> usize {
        self.meters.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RingMeter> {
        self.meters.iter()
    }
}

impl<'a> IntoIterator for &'a RingGraph {
    type Item = &'a RingMeter;
    type IntoIter = std::slice::Iter<'a, RingMeter>;

    fn into_iter(self) -> Self::IntoIter {
        self.meters.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/meter/model.rs"]
mod tests;
