// File: crates/timechart-core/src/config.rs
// Summary: Caller-owned chart configuration, read-only during a render pass.

use crate::style::ChartStyle;
use crate::types::Insets;

/// Configuration for one chart. Optional bounds override the values derived
/// from the sample set; everything else has defaults matching the stock
/// look.
#[derive(Clone, Copy, Debug)]
pub struct ChartConfig {
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    /// Epoch ms; `None` derives the window edge from the samples.
    pub time_start: Option<i64>,
    pub time_stop: Option<i64>,

    /// Outer paddings around the whole drawable.
    pub padding: Insets,
    /// Extra vertical clearance above the path, reserved for marker text.
    pub path_padding_top: f32,
    /// Extra vertical clearance below the path.
    pub path_padding_bottom: f32,

    /// Merge near-coincident points into averaged cluster vertices.
    pub averaging: bool,
    /// Formats the value-axis marker labels.
    pub value_formatter: fn(i64) -> String,
    pub style: ChartStyle,
}

fn format_plain(value: i64) -> String {
    value.to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_value: None,
            max_value: None,
            time_start: None,
            time_stop: None,
            padding: Insets::default(),
            path_padding_top: 20.0,
            path_padding_bottom: 40.0,
            averaging: true,
            value_formatter: format_plain,
            style: ChartStyle::default(),
        }
    }
}
