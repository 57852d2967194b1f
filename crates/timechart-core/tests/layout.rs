// File: crates/timechart-core/tests/layout.rs
// Purpose: Validate spacer band geometry, legend label density, and marker anchors.

use timechart_core::range::normalize;
use timechart_core::{legend, marker, ChartConfig, Frame, TextMeasurer, TextMetrics};

/// Fixed-advance measurer: width scales with character count only, height
/// with text size. Keeps the layout math exact in tests.
struct CharMeasurer {
    char_width: f32,
}

impl TextMeasurer for CharMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.char_width,
            height: size * 0.75,
        }
    }
}

const SURFACE_W: f32 = 560.0;
const SURFACE_H: f32 = 400.0;

fn forty_minute_frame(cfg: &ChartConfig) -> Frame {
    // Raw window [0, 40 min] snaps to [0, 50 min]: five 10-minute slots.
    normalize(&[], cfg).expect("normalize")
}

fn config() -> ChartConfig {
    ChartConfig {
        time_start: Some(0),
        time_stop: Some(2_400_000),
        min_value: Some(0),
        max_value: Some(100),
        ..ChartConfig::default()
    }
}

#[test]
fn even_slots_get_alternating_bands() {
    let cfg = config();
    let frame = forty_minute_frame(&cfg);
    let inner_width = SURFACE_W - cfg.padding.hsum();
    let sp = legend::spacers(&frame, &cfg.padding, SURFACE_H, inner_width);

    assert_eq!(sp.amount, 5);
    assert!((sp.width - 100.0).abs() < 1e-3);
    // Slots 0, 2, 4 are shaded.
    assert_eq!(sp.bands.len(), 3);
    let b = sp.bands[0];
    assert!((b.left - 30.0).abs() < 1e-3);
    assert!((b.top - 30.0).abs() < 1e-3);
    assert!((b.right - 130.0).abs() < 1e-3);
    assert!((b.bottom - 370.0).abs() < 1e-3);
    let b = sp.bands[2];
    assert!((b.left - 430.0).abs() < 1e-3);
    assert!((b.right - 530.0).abs() < 1e-3);
}

#[test]
fn narrow_labels_fill_every_slot_right_to_left() {
    let cfg = config();
    let frame = forty_minute_frame(&cfg);
    let inner_width = SURFACE_W - cfg.padding.hsum();
    let sp = legend::spacers(&frame, &cfg.padding, SURFACE_H, inner_width);

    // "00:00" is 5 chars * 10 px; (50 + 20) / 100 rounds up to step 1.
    let m = CharMeasurer { char_width: 10.0 };
    let layout = legend::labels(&frame, &sp, &cfg.padding, SURFACE_H, cfg.style.legend_text_size, &m);
    assert_eq!(layout.step, 1);

    let texts: Vec<&str> = layout.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["00:40", "00:30", "00:20", "00:10", "00:00"]);
    // x = slot * spacer_width + inset + left padding; constant baseline.
    assert!((layout.labels[0].x - 440.0).abs() < 1e-3);
    assert!((layout.labels[4].x - 40.0).abs() < 1e-3);
    for l in &layout.labels {
        assert!((l.y - 360.0).abs() < 1e-3);
    }
}

#[test]
fn wide_labels_step_over_slots_and_skip_the_last() {
    let cfg = config();
    let frame = forty_minute_frame(&cfg);
    let inner_width = SURFACE_W - cfg.padding.hsum();
    let sp = legend::spacers(&frame, &cfg.padding, SURFACE_H, inner_width);

    // 5 chars * 56 px = 280; (280 + 20) / 100 gives step 3, so the walk
    // visits slots 4 and 1 and slot 4 is dropped against the right edge.
    let m = CharMeasurer { char_width: 56.0 };
    let layout = legend::labels(&frame, &sp, &cfg.padding, SURFACE_H, cfg.style.legend_text_size, &m);
    assert_eq!(layout.step, 3);
    let texts: Vec<&str> = layout.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["00:10"]);
}

#[test]
fn legend_step_is_at_least_one_even_for_huge_labels() {
    let cfg = config();
    let frame = forty_minute_frame(&cfg);
    let inner_width = SURFACE_W - cfg.padding.hsum();
    let sp = legend::spacers(&frame, &cfg.padding, SURFACE_H, inner_width);

    let m = CharMeasurer { char_width: 10_000.0 };
    let layout = legend::labels(&frame, &sp, &cfg.padding, SURFACE_H, cfg.style.legend_text_size, &m);
    assert!(layout.step >= 1);
}

#[test]
fn markers_sit_at_fixed_anchors_top_mid_bottom() {
    let cfg = config();
    let frame = forty_minute_frame(&cfg);
    let m = CharMeasurer { char_width: 10.0 };
    let markers = marker::markers(&frame, &cfg, SURFACE_H, &m);

    assert_eq!(markers.len(), 3);
    let texts: Vec<&str> = markers.iter().map(|mk| mk.text.as_str()).collect();
    assert_eq!(texts, vec!["100", "50", "0"]);

    // Marker text size 30 measures 22.5 px tall.
    assert!((markers[0].y - 82.5).abs() < 1e-3);
    assert!((markers[1].y - 201.25).abs() < 1e-3);
    assert!((markers[2].y - 320.0).abs() < 1e-3);
    for mk in &markers {
        assert!((mk.x - 10.0).abs() < 1e-3);
    }
}

#[test]
fn marker_backing_wraps_the_measured_text() {
    let cfg = config();
    let frame = forty_minute_frame(&cfg);
    let m = CharMeasurer { char_width: 10.0 };
    let markers = marker::markers(&frame, &cfg, SURFACE_H, &m);

    // "100" is 30 px wide, 22.5 px tall, anchored at y = 82.5.
    let b = markers[0].backing;
    assert!((b.left - 6.0).abs() < 1e-3);
    assert!((b.top - 56.0).abs() < 1e-3);
    assert!((b.right - 46.0).abs() < 1e-3);
    assert!((b.bottom - 87.5).abs() < 1e-3);
}

#[test]
fn custom_value_formatter_reaches_marker_text() {
    fn kilo(v: i64) -> String {
        format!("{v} kW")
    }
    let cfg = ChartConfig { value_formatter: kilo, ..config() };
    let frame = forty_minute_frame(&cfg);
    let m = CharMeasurer { char_width: 10.0 };
    let markers = marker::markers(&frame, &cfg, SURFACE_H, &m);
    assert_eq!(markers[0].text, "100 kW");
}
