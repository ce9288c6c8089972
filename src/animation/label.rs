use crate::animation::window::AnimationWindow;

/// Label state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LabelFrame {
    /// Label opacity in `[0, 1]`.
    pub opacity: f64,
    /// Downward offset of the counter inside its host, in host units.
    pub offset_y: f64,
}

/// Fade and slide timing for the numeric counter label.
///
/// Both effects read the same global progress through independent windows:
/// the fade runs over `[0.3, 0.5]` and the slide over `[0.4, 0.7]`, so the
/// label is already fully visible while it is still settling into place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnimation {
    fade: AnimationWindow,
    slide: AnimationWindow,
}

impl Default for LabelAnimation {
    fn default() -> Self {
        Self {
            fade: AnimationWindow::new(0.3, 0.5),
            slide: AnimationWindow::new(0.4, 0.7),
        }
    }
}

impl LabelAnimation {
    pub fn new(fade: AnimationWindow, slide: AnimationWindow) -> Self {
        Self { fade, slide }
    }

    pub fn fade(&self) -> AnimationWindow {
        self.fade
    }

    pub fn slide(&self) -> AnimationWindow {
        self.slide
    }

    pub fn opacity(&self, progress: f64) -> f64 {
        self.fade.normalized_progress(progress)
    }

    /// Counter offset: the full `host_height` before the slide starts, `0` once it ends.
    pub fn offset(&self, progress: f64, host_height: f64) -> f64 {
        host_height * (1.0 - self.slide.normalized_progress(progress))
    }

    pub fn sample(&self, progress: f64, host_height: f64) -> LabelFrame {
        LabelFrame {
            opacity: self.opacity(progress),
            offset_y: self.offset(progress, host_height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/label.rs"]
mod tests;
