// File: crates/timechart-core/src/interval.rs
// Summary: Interval policy: pick a spacer granularity and legend label format from a raw time span.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::types::{DAY, HOUR, TEN_MINUTES, WEEK};

/// Granularity tier of the time axis. Selection is by the smallest matching
/// threshold with inclusive upper bounds: a span of exactly one hour still
/// lands in the ten-minute tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickInterval {
    TenMinutes,
    Hour,
    Day,
    Week,
}

impl TickInterval {
    pub fn select(raw_ms: i64) -> Self {
        if raw_ms <= HOUR {
            TickInterval::TenMinutes
        } else if raw_ms <= DAY {
            TickInterval::Hour
        } else if raw_ms <= WEEK {
            TickInterval::Day
        } else {
            TickInterval::Week
        }
    }

    /// Width of one spacer slot in milliseconds.
    pub const fn spacer_ms(self) -> i64 {
        match self {
            TickInterval::TenMinutes => TEN_MINUTES,
            TickInterval::Hour => HOUR,
            TickInterval::Day => DAY,
            TickInterval::Week => WEEK,
        }
    }

    /// Format an epoch-ms timestamp as a legend label for this tier.
    /// Labels are rendered in UTC so the output is a pure function of the
    /// input timestamp.
    pub fn format_label(self, t: i64) -> String {
        let dt: DateTime<Utc> = DateTime::from_timestamp_millis(t).unwrap_or_default();
        match self {
            TickInterval::TenMinutes => dt.format("%H:%M").to_string(),
            TickInterval::Hour => format!("{} h", dt.hour()),
            TickInterval::Day => dt.format("%a").to_string(),
            TickInterval::Week => format!("{}. W", dt.iso_week().week()),
        }
    }
}
