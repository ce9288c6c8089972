//! ringmeter computes the animated parts of ring meter progress indicators.
//!
//! A ring meter shows a `value / max_value` pair as an arc, a small vector
//! symbol (arrow, double arrow, image) that draws in as the meter animates, and
//! a numeric label that fades and slides into place. This crate owns the
//! timing and geometry behind those overlays; drawing the arc, compositing, and
//! text rasterization belong to the host renderer.
//!
//! # Frame model
//!
//! A host clock supplies one global progress value in `[0, 1]` per frame.
//!
//! 1. **Timing**: each effect maps global progress through its own
//!    [`AnimationWindow`] (symbol draw-in `[0.3, 0.6]`, label fade `[0.3, 0.5]`,
//!    label slide `[0.4, 0.7]`).
//! 2. **Geometry**: a [`SymbolPathProvider`] turns `(rect, progress)` into a
//!    fresh [`SymbolPath`] of move/line/close/fill commands.
//! 3. **Labels**: [`ProgressText`] turns progress into label opacity and offset.
//!
//! Every step is a pure function of its inputs; nothing is carried between frames.
//!
//! ```
//! use ringmeter::{Rect, RingMeter, SymbolPathProvider};
//!
//! let meter = RingMeter::with_symbol("Steps", 7.0, 10.0, vec![], SymbolPathProvider::right_arrow());
//! let rect = Rect::new(0.0, 0.0, 24.0, 24.0);
//! assert!(meter.symbol_path(rect, 0.1).is_empty());
//! assert_eq!(meter.symbol_path(rect, 1.0).len(), 7);
//! ```
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod config;
mod foundation;
mod meter;
mod symbol;

/// Geometric post-transforms for symbol paths.
pub mod transform;

pub use animation::label::{LabelAnimation, LabelFrame};
pub use animation::window::AnimationWindow;
pub use assets::decode::{decode_image, load_image};
pub use config::graph::{MeterConfig, RingGraphConfig, SymbolConfig, normalize_rel_path};
pub use foundation::core::{
    Affine, BezPath, Cap, FontSpec, FontWeight, Join, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{RingError, RingResult};
pub use foundation::math::clamp01;
pub use meter::model::{MeterStyle, RingGraph, RingMeter};
pub use meter::text::{COUNTER_HEIGHT_RATIO, ProgressText, ProgressTextFrame, format_counter};
pub use symbol::arrows::{
    ARROW_SPACING, DOUBLE_ARROW_HANDOFF, double_arrow_windows, double_right_arrow, right_arrow,
    up_arrow,
};
pub use symbol::image_fill::{
    ImageFill, ImageResizer, MAX_FILL_PIXELS, TriangleResizer, pixel_size,
};
pub use symbol::path::{FillPaint, FillRule, LineStyle, PathCommand, SymbolImage, SymbolPath};
pub use symbol::provider::SymbolPathProvider;
pub use symbol::style::SymbolStyle;
