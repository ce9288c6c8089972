use std::sync::Arc;

use crate::foundation::core::{Affine, BezPath, Cap, Join, Point, Rgba8};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Immutable RGBA8 raster shared between a provider and the fills it emits.
pub struct SymbolImage {
    rgba: Arc<image::RgbaImage>,
}

impl SymbolImage {
    pub fn new(rgba: image::RgbaImage) -> Self {
        Self {
            rgba: Arc::new(rgba),
        }
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    /// Straight-alpha pixels, row-major.
    pub fn as_rgba(&self) -> &image::RgbaImage {
        &self.rgba
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Fill rule for [`PathCommand::Fill`].
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Clone, Debug, PartialEq)]
/// Paint requested for a fill.
pub enum FillPaint {
    /// Flat color.
    Solid(Rgba8),
    /// Image pattern, already sized to the filled rectangle.
    Image(SymbolImage),
}

#[derive(Clone, Debug, PartialEq)]
/// One replayable drawing command.
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    SetFillRule(FillRule),
    /// Fill the geometry accumulated so far.
    Fill(FillPaint),
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Stroke parameters for the line segments of a path.
pub struct LineStyle {
    pub width: f64,
    pub cap: Cap,
    pub join: Join,
}

impl LineStyle {
    /// Round caps and joins, width 3.
    pub const SYMBOL: Self = Self {
        width: 3.0,
        cap: Cap::Round,
        join: Join::Round,
    };

    pub fn to_stroke(self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.width)
            .with_caps(self.cap)
            .with_join(self.join)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Vector geometry produced by a symbol provider for one frame.
pub struct SymbolPath {
    commands: Vec<PathCommand>,
    line_style: Option<LineStyle>,
}

impl SymbolPath {
    /// Empty path with no line style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty path stroked with `style`.
    pub fn stroked(style: LineStyle) -> Self {
        Self {
            commands: Vec::new(),
            line_style: Some(style),
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    pub fn set_fill_rule(&mut self, rule: FillRule) {
        self.commands.push(PathCommand::SetFillRule(rule));
    }

    pub fn fill(&mut self, paint: FillPaint) {
        self.commands.push(PathCommand::Fill(paint));
    }

    /// Move to `from` and draw a single segment to `to`.
    pub fn segment(&mut self, from: Point, to: Point) {
        self.move_to(from);
        self.line_to(to);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn line_style(&self) -> Option<LineStyle> {
        self.line_style
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Points of every move/line command, in emission order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Paint of the last fill command, if any.
    pub fn fill_paint(&self) -> Option<&FillPaint> {
        self.commands.iter().rev().find_map(|c| match c {
            PathCommand::Fill(paint) => Some(paint),
            _ => None,
        })
    }

    /// Transform every point in place. Fill and style commands are untouched.
    pub fn apply_affine(&mut self, t: Affine) {
        for c in &mut self.commands {
            match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p = t * *p,
                PathCommand::ClosePath | PathCommand::SetFillRule(_) | PathCommand::Fill(_) => {}
            }
        }
    }

    #[must_use]
    pub fn transformed(mut self, t: Affine) -> Self {
        self.apply_affine(t);
        self
    }

    /// Geometry-only view as a `kurbo` path, for renderers that take one.
    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for c in &self.commands {
            match c {
                PathCommand::MoveTo(p) => out.move_to(*p),
                PathCommand::LineTo(p) => out.line_to(*p),
                PathCommand::ClosePath => out.close_path(),
                PathCommand::SetFillRule(_) | PathCommand::Fill(_) => {}
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/path.rs"]
mod tests;
