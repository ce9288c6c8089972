//! Line-based arrow symbols.
//!
//! All coordinates come straight from `rect`; nothing is cached between frames.

use std::f64::consts::FRAC_PI_2;

use crate::{
    animation::window::AnimationWindow,
    foundation::core::{Point, Rect},
    symbol::{path::SymbolPath, style::SymbolStyle},
    transform::affine::rotate_about,
};

/// Horizontal gap between the two chevrons of the double arrow.
pub const ARROW_SPACING: f64 = 6.0;

/// How long before the end of the symbol window the second chevron starts.
pub const DOUBLE_ARROW_HANDOFF: f64 = 0.1;

/// Right-pointing arrow: a shaft plus a two-stroke chevron head.
///
/// Returns the style's empty default path until the symbol window opens.
pub fn right_arrow(style: &SymbolStyle, rect: Rect, progress: f64) -> SymbolPath {
    let p = style.progress(progress);
    if p == 0.0 {
        return style.default_path();
    }

    let mid = rect.center();
    let shaft_start = Point::new(rect.max_x() * p, mid.y);
    let shaft_end = Point::new(rect.min_x(), mid.y);
    let apex = Point::new(mid.x + rect.max_x() * p / 2.0, mid.y);
    let wing_top = Point::new(mid.x, rect.min_y());
    let wing_bottom = Point::new(mid.x, rect.max_y());

    let mut path = style.default_path();
    path.segment(shaft_start, shaft_end);
    path.segment(apex, wing_top);
    path.segment(apex, wing_bottom);
    path.close_path();
    path
}

/// The right arrow turned a quarter turn counter-clockwise about the rect center.
pub fn up_arrow(style: &SymbolStyle, rect: Rect, progress: f64) -> SymbolPath {
    right_arrow(style, rect, progress).transformed(rotate_about(rect.center(), -FRAC_PI_2))
}

/// Split a symbol window into the sequential left/right chevron windows.
///
/// The handoff sits [`DOUBLE_ARROW_HANDOFF`] before the window end.
pub fn double_arrow_windows(window: AnimationWindow) -> (AnimationWindow, AnimationWindow) {
    let handoff = window.end() - DOUBLE_ARROW_HANDOFF;
    (
        AnimationWindow::from_bounds(window.start(), handoff),
        AnimationWindow::from_bounds(handoff, window.end()),
    )
}

/// Two chevrons sweeping in sequence: the left one travels to its rest
/// position, then the right one slides the last [`ARROW_SPACING`] units in.
pub fn double_right_arrow(style: &SymbolStyle, rect: Rect, progress: f64) -> SymbolPath {
    if style.progress(progress) == 0.0 {
        return style.default_path();
    }

    let (left_window, right_window) = double_arrow_windows(style.window);
    let left_progress = left_window.normalized_progress(progress);
    let right_progress = right_window.normalized_progress(progress);

    let mid = rect.center();
    let left_apex = Point::new((rect.max_x() - ARROW_SPACING) * left_progress, mid.y);

    let mut path = style.default_path();
    path.segment(left_apex, Point::new(rect.min_x(), mid.y));
    path.segment(left_apex, Point::new(mid.x - ARROW_SPACING, rect.min_y()));
    path.segment(left_apex, Point::new(mid.x - ARROW_SPACING, rect.max_y()));

    if right_progress > 0.0 {
        let delta = ARROW_SPACING * (1.0 - right_progress);
        let right_apex = Point::new(rect.max_x() - delta, mid.y);
        path.segment(right_apex, Point::new(mid.x - delta, rect.min_y()));
        path.segment(right_apex, Point::new(mid.x - delta, rect.max_y()));
    }

    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/symbol/arrows.rs"]
mod tests;
