use super::*;

#[test]
fn linear_inside_range() {
    let v = interpolate(150.0, [0.0, 300.0], [1.0, 1.1], InterpolateOpts::default());
    assert!((v - 1.05).abs() < 1e-12);
}

#[test]
fn extend_continues_line_on_both_sides() {
    let opts = InterpolateOpts::default();
    assert!((interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], opts) + 1.0).abs() < 1e-12);
    assert!((interpolate(20.0, [0.0, 10.0], [0.0, 1.0], opts) - 2.0).abs() < 1e-12);
}

#[test]
fn clamp_is_per_side() {
    let right_only = InterpolateOpts {
        right: Extrapolate::Clamp,
        ..InterpolateOpts::default()
    };
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], right_only), 1.0);
    assert!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], right_only) < 0.0);

    let both = InterpolateOpts::clamped();
    assert_eq!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], both), 0.0);
    assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 1.0], both), 1.0);
}

#[test]
fn clamped_interior_stays_linear() {
    let opts = InterpolateOpts::clamped();
    assert!((interpolate(5.0, [0.0, 10.0], [0.0, 100.0], opts) - 50.0).abs() < 1e-9);
    assert!((interpolate(2.5, [0.0, 10.0], [0.0, 100.0], opts) - 25.0).abs() < 1e-9);
    assert_eq!(interpolate(10.0, [0.0, 10.0], [0.0, 100.0], opts), 100.0);
}

#[test]
fn zero_width_range_is_a_step() {
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(-1.0, [5.0, 5.0], [1.0, 2.0], opts), 1.0);
    assert_eq!(interpolate(5.0, [5.0, 5.0], [1.0, 2.0], opts), 2.0);
}

#[test]
fn decreasing_output_range() {
    let v = interpolate(2.5, [0.0, 10.0], [1.0, 0.0], InterpolateOpts::clamped());
    assert!((v - 0.75).abs() < 1e-12);
}
