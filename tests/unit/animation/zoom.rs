use super::*;

#[test]
fn stock_ramp_endpoints() {
    assert_eq!(ken_burns_scale(0.0), 1.0);
    assert_eq!(ken_burns_scale(300.0), 1.1);
    assert_eq!(ken_burns_scale(10_000.0), 1.1);
}

#[test]
fn stock_ramp_is_linear_between() {
    assert!((ken_burns_scale(150.0) - 1.05).abs() < 1e-12);
    assert!((ken_burns_scale(30.0) - 1.01).abs() < 1e-12);
}

#[test]
fn negative_elapsed_holds_at_base() {
    assert_eq!(ken_burns_scale(-1.0), 1.0);
    assert_eq!(ken_burns_scale(-600.0), 1.0);
}

#[test]
fn scale_is_monotonic_in_elapsed_frames() {
    let mut prev = ken_burns_scale(-10.0);
    for f in -9..400 {
        let s = ken_burns_scale(f64::from(f));
        assert!(s >= prev, "scale decreased at {f}");
        prev = s;
    }
}

#[test]
fn elapsed_frames_from_scene_timestamp() {
    let fps = Fps::whole(30).unwrap();
    let elapsed = scene_elapsed_frames(FrameIndex(310), fps, 10.0);
    assert_eq!(elapsed, 10.0);
    assert!((ken_burns_scale(elapsed) - (1.0 + 0.1 * (10.0 / 300.0))).abs() < 1e-12);

    let elapsed = scene_elapsed_frames(FrameIndex(600), fps, 10.0);
    assert_eq!(elapsed, 300.0);
    assert_eq!(ken_burns_scale(elapsed), 1.1);
}

#[test]
fn custom_ramp_from_json_fills_defaults() {
    let kb: KenBurns = serde_json::from_str(r#"{ "to_scale": 1.25 }"#).unwrap();
    assert_eq!(kb.ramp_frames, 300.0);
    assert_eq!(kb.from_scale, 1.0);
    assert_eq!(kb.scale_at(300.0), 1.25);
}

#[test]
fn custom_ramp_is_linear_and_rejects_unknown_keys() {
    let kb: KenBurns =
        serde_json::from_str(r#"{ "ramp_frames": 100, "from_scale": 1.0, "to_scale": 1.2 }"#)
            .unwrap();
    assert!((kb.scale_at(25.0) - 1.05).abs() < 1e-12);
    assert!((kb.scale_at(50.0) - 1.1).abs() < 1e-12);

    assert!(serde_json::from_str::<KenBurns>(r#"{ "ease": "in_quad" }"#).is_err());
}
