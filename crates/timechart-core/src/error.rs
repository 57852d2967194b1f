// File: crates/timechart-core/src/error.rs
// Summary: Typed render failures; a failed pass emits no commands at all.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RenderError {
    /// No samples inside the visible window and the value bounds were not
    /// supplied explicitly, so no vertical mapping can be derived.
    #[error("no renderable data: empty sample window and no explicit value bounds")]
    NoRenderableData,

    /// Effective max equals effective min; the vertical mapping would
    /// divide by zero.
    #[error("degenerate value range: max == min")]
    DegenerateValueRange,

    /// The surface minus paddings leaves no drawable area.
    #[error("invalid surface size: {width}x{height} leaves no drawable area")]
    InvalidSurfaceSize { width: f32, height: f32 },
}
