#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Behaviour of [`interpolate`] outside its input range.
pub enum Extrapolate {
    /// Continue the linear mapping past the range edge.
    #[default]
    Extend,
    /// Hold the output value at the range edge.
    Clamp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Options for [`interpolate`].
pub struct InterpolateOpts {
    /// Extrapolation below `input_range[0]`.
    #[serde(default)]
    pub left: Extrapolate,
    /// Extrapolation above `input_range[1]`.
    #[serde(default)]
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Clamp on both sides, linear inside.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }
}

/// Map `input` from `input_range` onto `output_range`.
///
/// The mapping is linear. Outside the range each side either extends the straight line
/// through the endpoints or clamps to the endpoint.
/// A zero-width input range is a step at `input_range[0]`.
pub fn interpolate(
    input: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    opts: InterpolateOpts,
) -> f64 {
    let [in0, in1] = input_range;
    let [out0, out1] = output_range;

    let span = in1 - in0;
    if span == 0.0 {
        return if input < in0 { out0 } else { out1 };
    }

    let t = (input - in0) / span;
    let t = match (opts.left, opts.right) {
        (Extrapolate::Clamp, _) if t < 0.0 => 0.0,
        (_, Extrapolate::Clamp) if t > 1.0 => 1.0,
        _ => t,
    };

    out0 + (out1 - out0) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
