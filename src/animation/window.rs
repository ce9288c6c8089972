use crate::foundation::error::{RingError, RingResult};

/// Maps a global animation progress onto the local progress of one effect.
///
/// Every animated element (symbol draw-in, label fade, label slide) owns one
/// window. Progress before `start` reads as `0`, progress after `end` reads as
/// `1`, and progress inside the window is rescaled linearly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationWindow {
    start: f64,
    end: f64,
}

impl AnimationWindow {
    /// Window used by symbol providers unless overridden.
    pub const SYMBOL: Self = Self {
        start: 0.3,
        end: 0.6,
    };

    /// Build a window without validating its bounds.
    ///
    /// A degenerate window (`start >= end`) never advances: its normalized
    /// progress is always `0`. Use [`AnimationWindow::try_new`] to reject it.
    pub fn new(start: f64, end: f64) -> Self {
        if start >= end {
            tracing::debug!(start, end, "degenerate animation window never advances");
        }
        Self { start, end }
    }

    /// Build a window from bounds derived inside the crate.
    ///
    /// Same semantics as [`AnimationWindow::new`] but silent: derived windows
    /// are rebuilt every frame and may legitimately collapse.
    pub(crate) const fn from_bounds(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Build a window, rejecting non-finite bounds, bounds outside `[0, 1]`,
    /// and `start >= end`.
    pub fn try_new(start: f64, end: f64) -> RingResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RingError::validation("animation window bounds must be finite"));
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(RingError::validation(format!(
                "animation window [{start}, {end}] must lie within [0, 1]"
            )));
        }
        if start >= end {
            return Err(RingError::validation(format!(
                "animation window start ({start}) must be < end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(self) -> f64 {
        self.start
    }

    pub fn end(self) -> f64 {
        self.end
    }

    /// `true` while `progress` lies in the active half-open range `[start, end)`.
    pub fn contains(self, progress: f64) -> bool {
        self.start <= progress && progress < self.end
    }

    /// Local progress in `[0, 1]` for the global `absolute` progress.
    pub fn normalized_progress(self, absolute: f64) -> f64 {
        if self.end <= self.start || absolute.is_nan() || absolute <= self.start {
            return 0.0;
        }
        if absolute >= self.end {
            return 1.0;
        }
        (absolute - self.start) / (self.end - self.start)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;
