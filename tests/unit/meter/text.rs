use super::*;
use crate::{
    animation::window::AnimationWindow, meter::model::MeterStyle,
    symbol::provider::SymbolPathProvider,
};

fn meter(value: f64) -> RingMeter {
    RingMeter::with_symbol("Distance", value, 10.0, vec![], SymbolPathProvider::right_arrow())
}

#[test]
fn counter_formatting() {
    assert_eq!(format_counter(7.0), "7");
    assert_eq!(format_counter(120.0), "120");
    assert_eq!(format_counter(7.26), "7.3");
    assert_eq!(format_counter(0.5), "0.5");
    assert_eq!(format_counter(f64::INFINITY), "inf");
}

#[test]
fn negative_zero_counter_prints_plain_zero() {
    assert_eq!(format_counter(-0.0), "0");
    assert_eq!(format_counter(0.0 * -1.0), "0");
}

#[test]
fn layout_splits_frame_vertically() {
    let t = ProgressText::new(Rect::new(30.0, 40.0, 130.0, 90.0), &meter(3.0));
    assert_eq!(t.counter_host(), Rect::new(0.0, 0.0, 100.0, 35.0));
    assert_eq!(t.description_rect(), Rect::new(0.0, 35.0, 100.0, 50.0));
}

#[test]
fn text_and_style_come_from_meter() {
    let t = ProgressText::new(Rect::new(0.0, 0.0, 100.0, 50.0), &meter(3.5));
    assert_eq!(t.counter_text(), "3.5");
    assert_eq!(t.description_text(), "Distance");
    assert_eq!(t.counter_font(), MeterStyle::SYMBOL.title_font);
    assert_eq!(t.description_font(), MeterStyle::SYMBOL.description_font);
    assert_eq!(t.counter_color(), MeterStyle::SYMBOL.title_color);
    assert_eq!(t.description_color(), MeterStyle::SYMBOL.description_color);
}

#[test]
fn counter_slides_up_into_place() {
    let t = ProgressText::new(Rect::new(0.0, 0.0, 100.0, 50.0), &meter(3.0));

    let start = t.frame_at(0.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.counter_rect, Rect::new(0.0, 35.0, 100.0, 70.0));

    let end = t.frame_at(1.0);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.counter_rect, t.counter_host());
}

#[test]
fn custom_animation_is_applied() {
    let anim = LabelAnimation::new(AnimationWindow::new(0.0, 0.5), AnimationWindow::new(0.0, 0.5));
    let t = ProgressText::new(Rect::new(0.0, 0.0, 10.0, 10.0), &meter(1.0)).with_animation(anim);
    let f = t.frame_at(0.25);
    assert_eq!(f.opacity, 0.5);
    assert!((f.counter_rect.y0 - 3.5).abs() < 1e-9);
}
