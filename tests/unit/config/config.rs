use super::*;

#[test]
fn defaults_match_stock_asset() {
    let c = PlaceholderConfig::default();
    assert_eq!((c.width, c.height), (4096, 2048));
    assert_eq!(c.jpeg_quality, 85);
    assert_eq!(c.title, "AUSTIN SKYLINE");
    assert!(c.seed.is_none());
    c.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let c = PlaceholderConfig::from_json_str(r#"{ "width": 1024, "seed": 7 }"#).unwrap();
    assert_eq!(c.width, 1024);
    assert_eq!(c.height, 2048);
    assert_eq!(c.seed, Some(7));
    assert_eq!(c.subtitle, DEFAULT_SUBTITLE);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PlaceholderConfig::from_json_str(r#"{ "widht": 10 }"#).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn validate_checks_quality_and_canvas() {
    let c = PlaceholderConfig {
        jpeg_quality: 0,
        ..PlaceholderConfig::default()
    };
    assert!(c.validate().is_err());

    let c = PlaceholderConfig {
        height: 1,
        ..PlaceholderConfig::default()
    };
    assert!(c.validate().is_err());
}
