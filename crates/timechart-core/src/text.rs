// File: crates/timechart-core/src/text.rs
// Summary: Host-supplied text measurement capability.

/// Measured extent of a rendered string.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Measurement of a string at a given text size. The host owns fonts and
/// shaping; the core only consumes widths and heights for layout.
pub trait TextMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextMetrics;
}
