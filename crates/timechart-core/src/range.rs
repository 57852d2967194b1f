// File: crates/timechart-core/src/range.rs
// Summary: Range normalizer: resolve and snap the visible time window, filter samples, derive value bounds.

use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::interval::TickInterval;
use crate::types::{Sample, HOUR};

/// Normalized per-pass state derived from configuration plus samples.
/// Invariants: `start < stop`, both multiples of the spacer interval,
/// `max_value > min_value`, sample times inside `[start, stop]`.
#[derive(Clone, Debug)]
pub struct Frame {
    pub start: i64,
    pub stop: i64,
    pub interval: TickInterval,
    pub min_value: i64,
    pub max_value: i64,
    /// Filtered, time-sorted copy of the input samples.
    pub samples: Vec<Sample>,
}

pub fn normalize(samples: &[Sample], cfg: &ChartConfig) -> Result<Frame, RenderError> {
    let mut sorted: Vec<Sample> = samples.to_vec();
    sorted.sort_by_key(|s| s.time);

    let start = match cfg.time_start {
        Some(t) => t,
        None => sorted.first().map(|s| s.time).ok_or(RenderError::NoRenderableData)?,
    };
    let mut stop = match cfg.time_stop {
        Some(t) => t,
        None => sorted.last().map(|s| s.time).ok_or(RenderError::NoRenderableData)?,
    };
    // A zero-width domain cannot be mapped; force the bounds apart.
    if start == stop {
        stop = start + HOUR;
    }

    // Tier selection looks at the raw span; the snapped span is what the
    // spacer math divides afterwards.
    let interval = TickInterval::select(stop - start);
    let spacer = interval.spacer_ms();

    // Align the window outward onto spacer boundaries. An already-aligned
    // stop still moves up by one full spacer.
    let start = start - start % spacer;
    let stop = stop - stop % spacer + spacer;

    sorted.retain(|s| s.time >= start && s.time <= stop);

    // 10% headroom, computed in integers so the rounding is exact:
    // ceiling above the peak, truncation toward zero below a negative low.
    let max_value = match cfg.max_value {
        Some(v) => v,
        None => {
            let peak = sorted.iter().map(|s| s.value).max().ok_or(RenderError::NoRenderableData)?;
            (peak * 11 + 9).div_euclid(10)
        }
    };
    let min_value = match cfg.min_value {
        Some(v) => v,
        None => {
            let low = sorted.iter().map(|s| s.value).min().ok_or(RenderError::NoRenderableData)?;
            // Headroom below zero only when the data actually goes negative.
            if low < 0 { (low * 11) / 10 } else { 0 }
        }
    };
    if max_value == min_value {
        return Err(RenderError::DegenerateValueRange);
    }

    Ok(Frame { start, stop, interval, min_value, max_value, samples: sorted })
}
