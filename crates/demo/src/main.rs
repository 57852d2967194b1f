// File: crates/demo/src/main.rs
// Summary: Demo renders generated sample data (one PNG per interval tier) or a time,value CSV.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use timechart_core::types::{DAY, HOUR, MINUTE, WEEK};
use timechart_core::{Color, Sample, TimeChart};
use timechart_render_skia::{render_to_png, RenderOptions};

// 2023-11-14T22:13:20Z; any fixed origin works, this keeps output stable.
const BASE_TIME: i64 = 1_700_000_000_000;

fn main() -> Result<()> {
    let opts = RenderOptions::default();

    if let Some(raw) = std::env::args().nth(1) {
        let path = Path::new(&raw);
        let samples = load_samples_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        println!("Loaded {} samples", samples.len());

        let chart = TimeChart::with_samples(samples);
        let out = out_name(path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart"));
        render_to_png(&chart, &opts, &out)?;
        println!("Wrote {}", out.display());
        return Ok(());
    }

    // No input file: render one chart per interval tier from generated data.
    let tiers = [
        ("half_hour", 30 * MINUTE, 2 * MINUTE),
        ("day", 18 * HOUR, 30 * MINUTE),
        ("week", 5 * DAY, 3 * HOUR),
        ("month", 5 * WEEK, 12 * HOUR),
    ];
    for (name, span, step) in tiers {
        let chart = TimeChart::with_samples(generate_samples(BASE_TIME, span, step));
        let out = out_name(name);
        render_to_png(&chart, &opts, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Deterministic waveform walk standing in for live measurements.
fn generate_samples(start: i64, span: i64, step: i64) -> Vec<Sample> {
    let mut samples = Vec::new();
    let mut value = 500i64;
    let mut t = start;
    let mut i = 0u32;
    while t < start + span {
        samples.push(Sample::new(t, value));
        value += ((i as f64 * 0.7).sin() * 75.0) as i64 + 25;
        t += step;
        i += 1;
    }
    samples
}

/// Produce output file name like target/out/<name>.png
fn out_name(name: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("{name}.png"))
}

/// Load a `time,value[,color]` CSV into samples. `time` is epoch ms,
/// `color` an optional rrggbb hex.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let time: i64 = rec
            .get(0)
            .context("missing time column")?
            .trim()
            .parse()
            .context("time must be epoch milliseconds")?;
        let value: i64 = rec
            .get(1)
            .context("missing value column")?
            .trim()
            .parse()
            .context("value must be an integer")?;
        let sample = match rec.get(2).map(str::trim).filter(|s| !s.is_empty()) {
            Some(hex) => Sample::with_color(time, value, parse_color(hex)?),
            None => Sample::new(time, value),
        };
        out.push(sample);
    }
    Ok(out)
}

fn parse_color(hex: &str) -> Result<Color> {
    let hex = hex.trim_start_matches('#');
    anyhow::ensure!(hex.len() == 6, "expected rrggbb color, got '{hex}'");
    let v = u32::from_str_radix(hex, 16).context("invalid hex color")?;
    Ok(Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
}
