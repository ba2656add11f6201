//! Thumbnail scale interpolation keyed to the strip's scroll offset.

/// Scale applied to the thumbnail whose center matches the offset exactly.
pub const DEFAULT_PEAK_SCALE: f32 = 1.3;

/// Scale applied to every thumbnail one stride or more away.
pub const REST_SCALE: f32 = 1.0;

/// Three-point piecewise-linear curve: `REST_SCALE` one stride left of an
/// item, `peak` at the item, `REST_SCALE` one stride right, clamped outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCurve {
    peak: f32,
}

impl Default for ScaleCurve {
    fn default() -> Self {
        Self {
            peak: DEFAULT_PEAK_SCALE,
        }
    }
}

impl ScaleCurve {
    /// Peaks below `REST_SCALE` are raised to it.
    pub fn new(peak: f32) -> Self {
        Self {
            peak: peak.max(REST_SCALE),
        }
    }

    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// Scale of thumbnail `index` when the strip offset is `value`.
    pub fn scale_at(&self, index: usize, value: f32, stride: f32) -> f32 {
        let center = index as f32 * stride;
        let left = center - stride;
        let right = center + stride;
        interpolate(
            value,
            [left, center, right],
            [REST_SCALE, self.peak, REST_SCALE],
        )
    }
}

/// Piecewise-linear interpolation over ascending `input` stops with
/// clamping (no extrapolation) outside the first and last stop.
pub fn interpolate<const N: usize>(
    value: f32,
    input: [f32; N],
    output: [f32; N],
) -> f32 {
    if N == 0 {
        return 0.0;
    }
    if value.is_nan() || value <= input[0] {
        return output[0];
    }
    if value >= input[N - 1] {
        return output[N - 1];
    }
    for i in 1..N {
        if value <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= f32::EPSILON {
                return output[i];
            }
            let t = (value - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[N - 1]
}
