use crate::{
    animation::label::LabelAnimation,
    foundation::core::{FontSpec, Rect, Rgba8, Vec2},
    meter::model::RingMeter,
};

/// Share of the label frame given to the numeric counter; the rest holds the title.
pub const COUNTER_HEIGHT_RATIO: f64 = 0.7;

/// Label state for one frame, ready for the host view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTextFrame {
    /// Opacity of the whole label block.
    pub opacity: f64,
    /// Counter label rect inside the (clipping) counter host.
    pub counter_rect: Rect,
}

/// Counter plus description label pair shown inside a ring meter.
///
/// Layout and text are fixed at construction; [`ProgressText::frame_at`]
/// only applies the fade/slide timing.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressText {
    counter_host: Rect,
    description_rect: Rect,
    counter_text: String,
    description_text: String,
    counter_font: FontSpec,
    description_font: FontSpec,
    counter_color: Rgba8,
    description_color: Rgba8,
    animation: LabelAnimation,
}

impl ProgressText {
    /// Lay out labels for `meter` in a frame of `frame.size()`, origin at zero.
    pub fn new(frame: Rect, meter: &RingMeter) -> Self {
        let size = frame.size();
        let counter_height = size.height * COUNTER_HEIGHT_RATIO;
        let counter_host = Rect::new(0.0, 0.0, size.width, counter_height);
        let description_rect = Rect::new(0.0, counter_height, size.width, size.height);

        let style = meter.style();
        Self {
            counter_host,
            description_rect,
            counter_text: format_counter(meter.value()),
            description_text: meter.title().to_string(),
            counter_font: style.title_font,
            description_font: style.description_font,
            counter_color: style.title_color,
            description_color: style.description_color,
            animation: LabelAnimation::default(),
        }
    }

    #[must_use]
    pub fn with_animation(self, animation: LabelAnimation) -> Self {
        Self { animation, ..self }
    }

    /// Clipping rect hosting the counter label.
    pub fn counter_host(&self) -> Rect {
        self.counter_host
    }

    pub fn description_rect(&self) -> Rect {
        self.description_rect
    }

    pub fn counter_text(&self) -> &str {
        &self.counter_text
    }

    pub fn description_text(&self) -> &str {
        &self.description_text
    }

    pub fn counter_font(&self) -> FontSpec {
        self.counter_font
    }

    pub fn description_font(&self) -> FontSpec {
        self.description_font
    }

    pub fn counter_color(&self) -> Rgba8 {
        self.counter_color
    }

    pub fn description_color(&self) -> Rgba8 {
        self.description_color
    }

    pub fn frame_at(&self, progress: f64) -> ProgressTextFrame {
        let label = self
            .animation
            .sample(progress, self.counter_host.height());
        ProgressTextFrame {
            opacity: label.opacity,
            counter_rect: self.counter_host + Vec2::new(0.0, label.offset_y),
        }
    }
}

/// Whole values print without decimals, everything else with one.
pub fn format_counter(value: f64) -> String {
    // Adding zero folds -0.0 into 0.0 so it never prints as "-0".
    let value = value + 0.0;
    if value.is_finite() && value.floor() == value {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/meter/text.rs"]
mod tests;
