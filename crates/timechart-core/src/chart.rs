// File: crates/timechart-core/src/chart.rs
// Summary: TimeChart struct and the render pipeline producing an ordered draw-command scene.

use crate::command::{DrawCommand, Paint, Scene};
use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::legend::{self, LegendLayout, SpacerLayout};
use crate::marker::{self, ValueMarker};
use crate::range;
use crate::scale::{TimeScale, ValueScale};
use crate::style::ChartStyle;
use crate::text::TextMeasurer;
use crate::types::{Sample, Vertex};
use crate::vertex;

/// A time-series line chart: samples plus configuration. Rendering is a
/// pure function of this state and the surface size; nothing is cached
/// between passes.
pub struct TimeChart {
    pub samples: Vec<Sample>,
    pub config: ChartConfig,
}

impl TimeChart {
    pub fn new() -> Self {
        Self { samples: Vec::new(), config: ChartConfig::default() }
    }

    pub fn with_samples(samples: Vec<Sample>) -> Self {
        Self { samples, config: ChartConfig::default() }
    }

    pub fn add_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Build the draw-command scene for a surface of `width` x `height`
    /// pixels. The caller supplies text measurement; painting the returned
    /// scene is the caller's business.
    ///
    /// Draw order: spacer bands, path + vertex circles, time legend, value
    /// markers. An established window with no samples is a legitimate empty
    /// chart (bands, legend and markers only); a failure emits nothing.
    pub fn render(
        &self,
        width: f32,
        height: f32,
        measurer: &dyn TextMeasurer,
    ) -> Result<Scene, RenderError> {
        let cfg = &self.config;
        let inner_width = width - cfg.padding.hsum();
        let inner_height =
            height - cfg.padding.vsum() - cfg.path_padding_top - cfg.path_padding_bottom;
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(RenderError::InvalidSurfaceSize { width, height });
        }

        let frame = range::normalize(&self.samples, cfg)?;

        let time_scale = TimeScale::new(cfg.padding.left, frame.start, frame.stop, inner_width);
        let value_scale = ValueScale::new(
            height,
            cfg.padding.bottom + cfg.path_padding_bottom,
            frame.min_value,
            frame.max_value,
            inner_height,
        );
        let vertices = vertex::reduce(
            &frame.samples,
            &time_scale,
            &value_scale,
            cfg.averaging,
            cfg.style.point_fill,
        );

        let spacers = legend::spacers(&frame, &cfg.padding, height, inner_width);
        let legend = legend::labels(
            &frame,
            &spacers,
            &cfg.padding,
            height,
            cfg.style.legend_text_size,
            measurer,
        );
        let markers = marker::markers(&frame, cfg, height, measurer);

        let mut scene = Scene::new();
        emit_spacers(&mut scene, &spacers, &cfg.style);
        emit_path(&mut scene, &vertices, &cfg.style);
        emit_legend(&mut scene, &legend, &cfg.style);
        emit_markers(&mut scene, &markers, &cfg.style);
        Ok(scene)
    }
}

impl Default for TimeChart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn emit_spacers(scene: &mut Scene, spacers: &SpacerLayout, style: &ChartStyle) {
    let fill = scene.intern(Paint::Fill { color: style.band_fill });
    for band in &spacers.bands {
        scene.push(DrawCommand::Rect { rect: *band, style: fill });
    }
}

fn emit_path(scene: &mut Scene, vertices: &[Vertex], style: &ChartStyle) {
    if vertices.is_empty() {
        return;
    }
    let stroke = scene.intern(Paint::Stroke { color: style.path_stroke, width: style.path_width });
    scene.push(DrawCommand::Polyline {
        points: vertices.iter().map(|v| (v.x, v.y)).collect(),
        style: stroke,
    });

    let inset = scene.intern(Paint::Fill { color: style.point_inset_fill });
    for v in vertices {
        let fill = scene.intern(Paint::Fill { color: v.color });
        scene.push(DrawCommand::Circle { cx: v.x, cy: v.y, radius: v.radius, style: fill });
        scene.push(DrawCommand::Circle {
            cx: v.x,
            cy: v.y,
            radius: v.radius - style.point_inset_delta,
            style: inset,
        });
    }
}

fn emit_legend(scene: &mut Scene, legend: &LegendLayout, style: &ChartStyle) {
    let text = scene.intern(Paint::Text { color: style.legend_text, size: style.legend_text_size });
    for label in &legend.labels {
        scene.push(DrawCommand::Text {
            x: label.x,
            y: label.y,
            content: label.text.clone(),
            style: text,
        });
    }
}

fn emit_markers(scene: &mut Scene, markers: &[ValueMarker], style: &ChartStyle) {
    let backing = scene.intern(Paint::Fill { color: style.marker_backing });
    let text = scene.intern(Paint::Text { color: style.marker_text, size: style.marker_text_size });
    for m in markers {
        scene.push(DrawCommand::Rect { rect: m.backing, style: backing });
        scene.push(DrawCommand::Text { x: m.x, y: m.y, content: m.text.clone(), style: text });
    }
}
