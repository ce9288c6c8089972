use super::*;

#[test]
fn default_style_values() {
    let s = SymbolStyle::default();
    assert_eq!(s.line, LineStyle::SYMBOL);
    assert_eq!(s.margin, 2.0);
    assert_eq!(s.window, AnimationWindow::SYMBOL);
}

#[test]
fn default_path_is_empty_but_styled() {
    let p = SymbolStyle::default().default_path();
    assert!(p.is_empty());
    assert_eq!(p.line_style(), Some(LineStyle::SYMBOL));
}

#[test]
fn with_window_overrides_progress_mapping() {
    let s = SymbolStyle::default().with_window(AnimationWindow::new(0.0, 0.5));
    assert_eq!(s.progress(0.25), 0.5);
    assert_eq!(s.margin, 2.0);
}
