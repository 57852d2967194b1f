// File: crates/timechart-core/src/style.rs
// Summary: Style presets for chart rendering colors and text sizes.

use crate::types::Color;

/// Immutable style descriptors for one chart. Referenced read-only during a
/// pass; per-command paints are derived from these and interned into the
/// scene.
#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    pub name: &'static str,
    /// Fill of the alternating spacer bands.
    pub band_fill: Color,
    pub path_stroke: Color,
    pub path_width: f32,
    /// Accent fill for path vertices without a per-sample color.
    pub point_fill: Color,
    pub point_inset_fill: Color,
    /// How much smaller the inset circle is than its vertex circle.
    pub point_inset_delta: f32,
    pub legend_text: Color,
    pub legend_text_size: f32,
    pub marker_text: Color,
    pub marker_text_size: f32,
    pub marker_backing: Color,
}

impl ChartStyle {
    pub fn light() -> Self {
        Self {
            name: "light",
            band_fill: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            path_stroke: Color::from_argb(255, 0x00, 0x00, 0xff),
            path_width: 5.0,
            point_fill: Color::from_argb(255, 0x00, 0x00, 0xff),
            point_inset_fill: Color::from_argb(255, 0xff, 0xff, 0xff),
            point_inset_delta: 4.0,
            legend_text: Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_text_size: 35.0,
            marker_text: Color::from_argb(255, 0xff, 0xff, 0xff),
            marker_text_size: 30.0,
            marker_backing: Color::from_argb(255, 0x44, 0x44, 0x44),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            band_fill: Color::from_argb(255, 0x28, 0x28, 0x2d),
            path_stroke: Color::from_argb(255, 0x40, 0xa0, 0xff),
            path_width: 5.0,
            point_fill: Color::from_argb(255, 0x40, 0xa0, 0xff),
            point_inset_fill: Color::from_argb(255, 0x12, 0x12, 0x14),
            point_inset_delta: 4.0,
            legend_text: Color::from_argb(255, 0xeb, 0xeb, 0xf5),
            legend_text_size: 35.0,
            marker_text: Color::from_argb(255, 0xeb, 0xeb, 0xf5),
            marker_text_size: 30.0,
            marker_backing: Color::from_argb(255, 0x3c, 0x3c, 0x46),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::light()
    }
}

/// Return the built-in style presets.
pub fn presets() -> Vec<ChartStyle> {
    vec![ChartStyle::light(), ChartStyle::dark()]
}

/// Find a preset by its `name`, falling back to light.
pub fn find(name: &str) -> ChartStyle {
    for s in presets() {
        if s.name.eq_ignore_ascii_case(name) {
            return s;
        }
    }
    ChartStyle::light()
}
