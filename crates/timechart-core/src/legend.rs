// File: crates/timechart-core/src/legend.rs
// Summary: Legend layout: alternating spacer bands plus collision-avoiding time labels.

use crate::geometry::RectF;
use crate::range::Frame;
use crate::text::TextMeasurer;
use crate::types::Insets;

/// Horizontal margin added to a measured label before computing the step.
pub const LABEL_MARGIN: f32 = 20.0;
/// Label x offset into its spacer slot.
pub const LABEL_INSET: f32 = 10.0;
/// Label baseline lift above the bottom padding edge.
pub const BASELINE_LIFT: f32 = 10.0;

/// Spacer slot geometry: one slot per spacer interval across the window.
#[derive(Clone, Debug)]
pub struct SpacerLayout {
    pub amount: i64,
    pub width: f32,
    /// Shaded bands for the even-indexed slots (0, 2, 4, ...).
    pub bands: Vec<RectF>,
}

pub fn spacers(frame: &Frame, padding: &Insets, surface_height: f32, inner_width: f32) -> SpacerLayout {
    // The snapped window is an exact multiple of the spacer, so this is an
    // integer >= 1.
    let amount = (frame.stop - frame.start) / frame.interval.spacer_ms();
    let width = inner_width / amount as f32;

    let mut bands = Vec::with_capacity((amount as usize + 1) / 2);
    let mut n = 0i64;
    while n < amount {
        bands.push(RectF::from_ltrb(
            n as f32 * width + padding.left,
            padding.top,
            (n + 1) as f32 * width + padding.left,
            surface_height - padding.bottom,
        ));
        n += 2;
    }
    SpacerLayout { amount, width, bands }
}

/// One formatted time label at its baseline position.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct LegendLayout {
    /// Number of spacer slots skipped between consecutive labels.
    pub step: usize,
    /// Labels in emission order (walking slots right to left).
    pub labels: Vec<LegendLabel>,
}

pub fn labels(
    frame: &Frame,
    spacers: &SpacerLayout,
    padding: &Insets,
    surface_height: f32,
    text_size: f32,
    measurer: &dyn TextMeasurer,
) -> LegendLayout {
    let spacer = frame.interval.spacer_ms();
    let probe = measurer.measure(&frame.interval.format_label(frame.start), text_size);
    let step = (((probe.width + LABEL_MARGIN) / spacers.width).ceil() as usize).max(1);

    let y = surface_height - padding.bottom - BASELINE_LIFT;
    let mut labels = Vec::new();
    let mut n = spacers.amount - 1;
    while n >= 0 {
        // The last slot clips against the right edge once labels get wide
        // enough to need stepping.
        if !(step > 1 && n == spacers.amount - 1) {
            labels.push(LegendLabel {
                x: n as f32 * spacers.width + LABEL_INSET + padding.left,
                y,
                text: frame.interval.format_label(frame.start + n * spacer),
            });
        }
        n -= step as i64;
    }
    LegendLayout { step, labels }
}
