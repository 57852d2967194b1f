// File: crates/timechart-render-skia/src/lib.rs
// Summary: Skia backend: text measurement, scene painting onto canvases, and PNG rendering.

use anyhow::Result;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use timechart_core::{Color, DrawCommand, Paint, Scene, TextMeasurer, TextMetrics, TimeChart};

/// Text shaper backed by Skia textlayout; doubles as the core's
/// text-measurement capability.
pub struct SkiaTextMeasurer {
    fonts: FontCollection,
}

impl SkiaTextMeasurer {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        // Scene text positions are baselines; Paragraph draws from its
        // top-left, so lift by a glyph-height approximation.
        p.paint(canvas, (x, y - size * 0.8));
    }
}

impl Default for SkiaTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for SkiaTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        TextMetrics { width: p.longest_line(), height: p.height() }
    }
}

/// Surface options for offscreen rendering.
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            background: skia::Color::from_argb(255, 250, 250, 252),
        }
    }
}

/// Replay a scene's commands onto a canvas in order, resolving each style
/// id to a fresh Skia paint.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, shaper: &SkiaTextMeasurer) {
    for command in &scene.commands {
        match command {
            DrawCommand::Rect { rect, style } => {
                if let Paint::Fill { color } = scene.style(*style) {
                    canvas.draw_rect(
                        skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom),
                        &fill_paint(color),
                    );
                }
            }
            DrawCommand::Polyline { points, style } => {
                if points.is_empty() {
                    continue;
                }
                if let Paint::Stroke { color, width } = scene.style(*style) {
                    let mut path = skia::Path::new();
                    path.move_to(points[0]);
                    for &p in points.iter().skip(1) {
                        path.line_to(p);
                    }
                    canvas.draw_path(&path, &stroke_paint(color, width));
                }
            }
            DrawCommand::Circle { cx, cy, radius, style } => {
                if let Paint::Fill { color } = scene.style(*style) {
                    canvas.draw_circle((*cx, *cy), *radius, &fill_paint(color));
                }
            }
            DrawCommand::Text { x, y, content, style } => {
                if let Paint::Text { color, size } = scene.style(*style) {
                    shaper.draw_left(canvas, content, *x, *y, size, to_skia(color));
                }
            }
        }
    }
}

/// Render a chart to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(chart: &TimeChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let shaper = SkiaTextMeasurer::new();
    let scene = chart.render(opts.width as f32, opts.height as f32, &shaper)?;

    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);
    paint_scene(canvas, &scene, &shaper);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render a chart to a PNG at `output_png_path`.
pub fn render_to_png(
    chart: &TimeChart,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_color(to_skia(color));
    paint
}
