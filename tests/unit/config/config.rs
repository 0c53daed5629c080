use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = FlipbookConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, FlipbookConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn nested_overrides_keep_sibling_defaults() {
    let json = r#"{ "timing": { "face_swap_ms": 380 }, "preload": { "ahead": 8, "evict_distance": 12 } }"#;
    let cfg = FlipbookConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.timing.duration_ms, 900);
    assert_eq!(cfg.timing.face_swap_ms, 380);
    assert_eq!(cfg.preload.ahead, 8);
    assert_eq!(cfg.preload.behind, 2);
    cfg.validate().unwrap();
}

#[test]
fn unknown_keys_are_rejected() {
    let err = FlipbookConfig::from_reader(r#"{ "speed": 2 }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn validate_reports_thrashing_preload() {
    let json = r#"{ "preload": { "ahead": 6, "evict_distance": 4 } }"#;
    let cfg = FlipbookConfig::from_reader(json.as_bytes()).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = FlipbookConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, FlipbookError::Config(_)));
}

#[test]
fn serializes_back_to_equal_config() {
    let cfg = FlipbookConfig::default();
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(FlipbookConfig::from_reader(s.as_bytes()).unwrap(), cfg);
}
