// File: crates/timechart-core/src/scale.rs
// Summary: Time (X) and Value (Y) pixel transforms over the normalized domain.

/// Horizontal scale mapping epoch milliseconds onto the padded drawable
/// width. Left edge = `start`, right edge = `stop`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub start: i64,
    pub span: i64,
    pub inner_width: f32,
}

impl TimeScale {
    pub fn new(left_px: f32, start: i64, stop: i64, inner_width: f32) -> Self {
        Self { left_px, start, span: (stop - start).max(1), inner_width }
    }

    #[inline]
    pub fn to_px(&self, t: i64) -> f32 {
        self.left_px + self.inner_width * ((t - self.start) as f64 / self.span as f64) as f32
    }
}

/// Vertical scale mapping values onto the drawable height, inverted so a
/// larger value sits nearer the top. `bottom_inset` is the outer bottom
/// padding plus the path clearance reserved for marker text.
/// Contract: `max_value > min_value` (the normalizer rejects the
/// degenerate range before a scale is ever built).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub surface_height: f32,
    pub bottom_inset: f32,
    pub min_value: i64,
    pub max_value: i64,
    pub inner_height: f32,
}

impl ValueScale {
    pub fn new(surface_height: f32, bottom_inset: f32, min_value: i64, max_value: i64, inner_height: f32) -> Self {
        Self { surface_height, bottom_inset, min_value, max_value, inner_height }
    }

    #[inline]
    pub fn to_px(&self, v: i64) -> f32 {
        let span = (self.max_value - self.min_value) as f64;
        self.surface_height
            - self.inner_height * ((v - self.min_value) as f64 / span) as f32
            - self.bottom_inset
    }
}
