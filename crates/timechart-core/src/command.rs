// File: crates/timechart-core/src/command.rs
// Summary: Scene model: ordered draw commands referencing interned, immutable paints.

use crate::geometry::RectF;
use crate::types::Color;

/// Index into a scene's paint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleId(pub u16);

/// Resolved, immutable paint descriptor. Commands never share a mutated
/// paint; a differently-colored circle gets its own entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill { color: Color },
    Stroke { color: Color, width: f32 },
    Text { color: Color, size: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: RectF, style: StyleId },
    Polyline { points: Vec<(f32, f32)>, style: StyleId },
    Circle { cx: f32, cy: f32, radius: f32, style: StyleId },
    Text { x: f32, y: f32, content: String, style: StyleId },
}

/// The full output of one render pass: commands in draw order plus the
/// paint table their style ids index into.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub styles: Vec<Paint>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of an equal existing paint, or append a new one.
    /// The table stays small (a handful of paints per pass), so a linear
    /// scan is fine.
    pub fn intern(&mut self, paint: Paint) -> StyleId {
        if let Some(i) = self.styles.iter().position(|p| *p == paint) {
            return StyleId(i as u16);
        }
        self.styles.push(paint);
        StyleId((self.styles.len() - 1) as u16)
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Resolve a style id produced by this scene.
    pub fn style(&self, id: StyleId) -> Paint {
        self.styles[id.0 as usize]
    }
}
