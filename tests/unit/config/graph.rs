use super::*;

const JSON: &str = r#"{
    "meters": [
        {
            "title": "Steps",
            "value": 7500,
            "max_value": 10000,
            "colors": [[255, 0, 0, 255]],
            "symbol": { "kind": "right_arrow" }
        },
        {
            "title": "Floors",
            "value": 3,
            "max_value": 10,
            "symbol": { "kind": "double_right_arrow" },
            "symbol_window": { "start": 0.2, "end": 0.8 }
        },
        {
            "title": "Sleep",
            "value": 6.5,
            "max_value": 8
        }
    ]
}"#;

#[test]
fn parses_and_builds_meters_in_order() {
    let cfg = RingGraphConfig::from_json(JSON).unwrap();
    assert_eq!(cfg.meters.len(), 3);
    assert_eq!(cfg.meters[2].symbol, SymbolConfig::None);

    let graph = cfg.build(".").unwrap();
    let m = graph.meters();
    assert_eq!(m[0].title(), "Steps");
    assert_eq!(m[0].normalized_value(), 0.75);
    assert_eq!(m[0].colors(), &[Rgba8::opaque(255, 0, 0)]);
    assert_eq!(m[0].symbol(), &SymbolPathProvider::right_arrow());
    assert_eq!(*m[0].style(), MeterStyle::SYMBOL);

    let style = m[1].symbol().style().unwrap();
    assert_eq!(style.window, AnimationWindow::new(0.2, 0.8));

    assert_eq!(m[2].symbol(), &SymbolPathProvider::Nil);
    assert_eq!(*m[2].style(), MeterStyle::PLAIN);
    assert_eq!(m[2].colors(), &[Rgba8::LIGHT_GRAY]);
}

#[test]
fn empty_meter_list_fails_to_build() {
    let cfg = RingGraphConfig::from_json(r#"{"meters": []}"#).unwrap();
    let err = cfg.build(".").unwrap_err();
    assert!(matches!(err, RingError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RingGraphConfig::from_json(r#"{"meters": [{"title": 3}]}"#).unwrap_err();
    assert!(matches!(err, RingError::Serde(_)));
}

#[test]
fn inverted_symbol_window_is_rejected() {
    let cfg = RingGraphConfig::from_json(
        r#"{"meters": [{"title": "x", "value": 1, "max_value": 2,
            "symbol": {"kind": "up_arrow"},
            "symbol_window": {"start": 0.7, "end": 0.2}}]}"#,
    )
    .unwrap();
    assert!(matches!(cfg.build("."), Err(RingError::Validation(_))));
}

#[test]
fn image_without_source_fills_transparent() {
    let cfg = RingGraphConfig::from_json(
        r#"{"meters": [{"title": "x", "value": 1, "max_value": 2,
            "symbol": {"kind": "image"}}]}"#,
    )
    .unwrap();
    let graph = cfg.build(".").unwrap();
    match graph.meters()[0].symbol() {
        SymbolPathProvider::Image(fill) => assert!(fill.image().is_none()),
        other => panic!("expected image symbol, got {other:?}"),
    }
}

#[test]
fn escaping_image_source_is_rejected() {
    let cfg = RingGraphConfig::from_json(
        r#"{"meters": [{"title": "x", "value": 1, "max_value": 2,
            "symbol": {"kind": "image", "source": "../secret.png"}}]}"#,
    )
    .unwrap();
    assert!(matches!(cfg.build("."), Err(RingError::Validation(_))));
}

#[test]
fn style_override_wins_over_preset() {
    let mut cfg = RingGraphConfig::from_json(JSON).unwrap();
    cfg.meters[0].style = Some(MeterStyle::PLAIN);
    let graph = cfg.build(".").unwrap();
    assert_eq!(*graph.meters()[0].style(), MeterStyle::PLAIN);
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = RingGraphConfig::from_json(JSON).unwrap();
    let back = RingGraphConfig::from_json(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(normalize_rel_path("a/./b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("a/../b.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}
