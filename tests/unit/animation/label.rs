use super::*;

#[test]
fn hidden_and_fully_offset_before_any_window() {
    let a = LabelAnimation::default();
    let f = a.sample(0.1, 40.0);
    assert_eq!(f.opacity, 0.0);
    assert_eq!(f.offset_y, 40.0);
}

#[test]
fn fade_completes_before_slide() {
    let a = LabelAnimation::default();
    let f = a.sample(0.5, 40.0);
    assert_eq!(f.opacity, 1.0);
    // slide is a third of the way through [0.4, 0.7]
    assert!((f.offset_y - 40.0 * (1.0 - 1.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn settles_at_rest_after_slide_window() {
    let a = LabelAnimation::default();
    let f = a.sample(0.7, 40.0);
    assert_eq!(f.opacity, 1.0);
    assert_eq!(f.offset_y, 0.0);
}

#[test]
fn offset_scales_with_host_height() {
    let a = LabelAnimation::default();
    let p = 0.55;
    assert!((a.offset(p, 100.0) - 2.0 * a.offset(p, 50.0)).abs() < 1e-9);
}

#[test]
fn custom_windows_are_used() {
    let a = LabelAnimation::new(AnimationWindow::new(0.0, 0.1), AnimationWindow::new(0.0, 0.2));
    assert_eq!(a.opacity(0.05), 0.5);
    assert_eq!(a.offset(0.1, 10.0), 5.0);
    assert_eq!(a.fade(), AnimationWindow::new(0.0, 0.1));
    assert_eq!(a.slide().end(), 0.2);
}
