use super::*;

#[test]
fn defaults_match_site_constants() {
    let t = FlipTiming::default();
    assert_eq!(t.duration_ms, 900);
    assert_eq!(t.face_swap_ms, 420);
    t.validate().unwrap();
}

#[test]
fn face_swap_lands_near_the_midpoint() {
    let default = FlipTiming::default().face_swap_fraction();
    let early = FlipTiming::default()
        .with_face_swap_ms(EARLY_FACE_SWAP_MS)
        .face_swap_fraction();
    assert!((0.42..=0.47).contains(&default), "{default}");
    assert!(early < default);
    assert!(early > 0.4);
}

#[test]
fn rejects_swap_outside_animation() {
    let t = FlipTiming::default();
    assert!(t.with_face_swap_ms(0).validate().is_err());
    assert!(t.with_face_swap_ms(900).validate().is_err());
    assert!(t.with_face_swap_ms(1200).validate().is_err());
}

#[test]
fn rejects_zero_duration() {
    let t = FlipTiming {
        duration_ms: 0,
        face_swap_ms: 0,
        ..FlipTiming::default()
    };
    let err = t.validate().unwrap_err();
    assert!(err.to_string().contains("config error:"));
    assert_eq!(t.face_swap_fraction(), 0.0);
}

#[test]
fn partial_json_fills_defaults() {
    let t: FlipTiming = serde_json::from_str(r#"{ "face_swap_ms": 380 }"#).unwrap();
    assert_eq!(t.duration_ms, 900);
    assert_eq!(t.face_swap_ms, 380);
}
