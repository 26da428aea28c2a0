//! Drawing surface abstraction.

use kurbo::BezPath;
use peniko::Color;
use roughboard_core::RenderResult;

/// A 2D raster target the renderer paints onto.
pub trait Surface {
    /// Wipe the whole surface and fill it with `background`.
    fn clear(&mut self, background: Color) -> RenderResult<()>;

    /// Stroke a path.
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) -> RenderResult<()>;
}

/// A paint call captured by [`RecordingSurface`].
#[derive(Debug, Clone)]
pub enum PaintCommand {
    Clear(Color),
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
    },
}

/// In-memory surface that records paint calls instead of rasterizing.
///
/// Each `clear` discards what was recorded before it, mirroring what a real
/// canvas keeps after a repaint.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<PaintCommand>,
    clears: usize,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last clear, including that clear.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Paths stroked since the last clear.
    pub fn strokes(&self) -> impl Iterator<Item = &BezPath> {
        self.commands.iter().filter_map(|command| match command {
            PaintCommand::Stroke { path, .. } => Some(path),
            PaintCommand::Clear(_) => None,
        })
    }

    /// Total number of clears, i.e. full repaints.
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, background: Color) -> RenderResult<()> {
        self.commands.clear();
        self.commands.push(PaintCommand::Clear(background));
        self.clears += 1;
        Ok(())
    }

    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) -> RenderResult<()> {
        self.commands.push(PaintCommand::Stroke {
            path: path.clone(),
            color,
            width,
        });
        Ok(())
    }
}
