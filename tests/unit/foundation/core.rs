use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn frames_to_secs_divides_by_rate() {
    let fps = Fps::whole(30).unwrap();
    assert_eq!(fps.frames_to_secs(0), 0.0);
    assert_eq!(fps.frames_to_secs(60), 2.0);
    assert!((fps.frames_to_secs(45) - 1.5).abs() < 1e-12);

    let ntsc = Fps::new(30000, 1001).unwrap();
    let secs = ntsc.frames_to_secs(123);
    assert!((ntsc.secs_to_frames(secs) - 123.0).abs() < 1e-9);
}

#[test]
fn frames_to_secs_is_monotonic() {
    let fps = Fps::new(24000, 1001).unwrap();
    let mut prev = fps.frames_to_secs(0);
    for f in 1..500 {
        let t = fps.frames_to_secs(f);
        assert!(t >= prev);
        prev = t;
    }
}

#[test]
fn scale_about_keeps_pivot_fixed() {
    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    let c = canvas.center();
    let a = scale_about(c, 1.1);
    let mapped = a * c;
    assert!((mapped.x - c.x).abs() < 1e-9);
    assert!((mapped.y - c.y).abs() < 1e-9);

    let corner = a * Point::ORIGIN;
    assert!((corner.x - (c.x - c.x * 1.1)).abs() < 1e-9);
}
