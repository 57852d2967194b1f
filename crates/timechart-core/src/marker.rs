// File: crates/timechart-core/src/marker.rs
// Summary: Marker layout: the three value-axis labels and their backing rectangles.

use crate::config::ChartConfig;
use crate::geometry::RectF;
use crate::range::Frame;
use crate::text::TextMeasurer;

/// Left edge of the marker text column.
pub const MARKER_X: f32 = 10.0;

/// Representative string measured once per pass for the marker line height.
const HEIGHT_PROBE: &str = "0123456789";

#[derive(Clone, Debug, PartialEq)]
pub struct ValueMarker {
    pub x: f32,
    /// Text baseline.
    pub y: f32,
    pub text: String,
    /// Backing rectangle drawn beneath the text for legibility.
    pub backing: RectF,
}

/// Place the max / midpoint / min markers at their fixed vertical anchors.
pub fn markers(
    frame: &Frame,
    cfg: &ChartConfig,
    surface_height: f32,
    measurer: &dyn TextMeasurer,
) -> Vec<ValueMarker> {
    let text_size = cfg.style.marker_text_size;
    let line_height = measurer.measure(HEIGHT_PROBE, text_size).height;

    let anchors = [
        (
            cfg.path_padding_top + cfg.padding.top + 10.0 + line_height,
            frame.max_value,
        ),
        (
            (surface_height - cfg.path_padding_bottom - cfg.path_padding_top) / 2.0
                + cfg.path_padding_top
                + line_height / 2.0,
            (frame.max_value + frame.min_value) / 2,
        ),
        (
            surface_height - cfg.path_padding_bottom - cfg.padding.bottom - 10.0,
            frame.min_value,
        ),
    ];

    anchors
        .into_iter()
        .map(|(y, value)| {
            let text = (cfg.value_formatter)(value);
            let bounds = measurer.measure(&text, text_size);
            ValueMarker {
                x: MARKER_X,
                y,
                backing: RectF::from_ltrb(
                    MARKER_X - 4.0,
                    y - bounds.height - 4.0,
                    MARKER_X + bounds.width + 6.0,
                    y + 5.0,
                ),
                text,
            }
        })
        .collect()
}
