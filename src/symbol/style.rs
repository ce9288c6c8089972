use crate::{
    animation::window::AnimationWindow,
    symbol::path::{LineStyle, SymbolPath},
};

/// Configuration shared by every drawn symbol variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolStyle {
    /// Stroke used by line-based symbols.
    pub line: LineStyle,
    /// Inset reserved around symbols by the hosting view.
    pub margin: f64,
    /// Global progress range over which the symbol draws in.
    pub window: AnimationWindow,
}

impl Default for SymbolStyle {
    fn default() -> Self {
        Self {
            line: LineStyle::SYMBOL,
            margin: 2.0,
            window: AnimationWindow::SYMBOL,
        }
    }
}

impl SymbolStyle {
    pub fn with_window(self, window: AnimationWindow) -> Self {
        Self { window, ..self }
    }

    /// Empty path carrying this style's stroke; the "not yet visible" result.
    pub fn default_path(&self) -> SymbolPath {
        SymbolPath::stroked(self.line)
    }

    pub fn progress(&self, absolute: f64) -> f64 {
        self.window.normalized_progress(absolute)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/style.rs"]
mod tests;
