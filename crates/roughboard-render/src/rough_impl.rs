//! roughr-based renderer implementation.

use crate::options::RenderOptions;
use crate::sketch::Sketch;
use crate::surface::Surface;
use kurbo::Point;
use roughboard_core::{RenderError, RenderResult, Renderer, ShapeKind};
use roughr::core::{Options, OptionsBuilder};
use roughr::generator::Generator;

/// Renderer that sketches shapes the way rough.js does and paints them onto
/// a [`Surface`].
pub struct RoughRenderer<S> {
    generator: Generator,
    /// Base roughr options; the per-shape seed is filled in on each generate.
    options: Options,
    render_options: RenderOptions,
    surface: S,
}

impl<S: Surface> RoughRenderer<S> {
    /// Create a renderer drawing onto `surface`.
    pub fn new(surface: S, render_options: RenderOptions) -> RenderResult<Self> {
        if !render_options.roughness.is_finite() || render_options.roughness < 0.0 {
            return Err(RenderError::Options(format!(
                "roughness must be a non-negative number, got {}",
                render_options.roughness
            )));
        }
        if !render_options.stroke_width.is_finite() || render_options.stroke_width <= 0.0 {
            return Err(RenderError::Options(format!(
                "stroke width must be positive, got {}",
                render_options.stroke_width
            )));
        }

        let options = OptionsBuilder::default()
            .roughness(render_options.roughness)
            .stroke_width(render_options.stroke_width as f32)
            .build()
            .map_err(|e| RenderError::Options(e.to_string()))?;

        Ok(Self {
            generator: Generator::default(),
            options,
            render_options,
            surface,
        })
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: Surface> Renderer for RoughRenderer<S> {
    type Drawable = Sketch;

    fn generate(&self, kind: ShapeKind, start: Point, end: Point, seed: u64) -> Sketch {
        let mut options = self.options.clone();
        options.seed = Some(seed);
        let options = Some(options);

        let drawable = match kind {
            ShapeKind::Line => self.generator.line(start.x, start.y, end.x, end.y, &options),
            ShapeKind::Rectangle => self.generator.rectangle(
                start.x,
                start.y,
                end.x - start.x,
                end.y - start.y,
                &options,
            ),
        };
        Sketch::from_drawable(&drawable)
    }

    fn repaint(&mut self, drawables: &[&Sketch]) -> RenderResult<()> {
        let RenderOptions {
            stroke_color,
            stroke_width,
            background,
            ..
        } = self.render_options;

        self.surface.clear(background)?;
        for sketch in drawables {
            for path in sketch.paths() {
                self.surface.stroke(path, stroke_color, stroke_width)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintCommand, RecordingSurface};
    use kurbo::Shape as KurboShape;
    use roughboard_core::{ShapeId, ToolKind, Whiteboard};

    fn renderer() -> RoughRenderer<RecordingSurface> {
        RoughRenderer::new(RecordingSurface::new(), RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_rejects_bad_options() {
        let negative = RenderOptions::default().with_roughness(-1.0);
        assert!(matches!(
            RoughRenderer::new(RecordingSurface::new(), negative),
            Err(RenderError::Options(_))
        ));
        let zero_width = RenderOptions::default().with_stroke_width(0.0);
        assert!(RoughRenderer::new(RecordingSurface::new(), zero_width).is_err());
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let renderer = renderer();
        let a = renderer.generate(ShapeKind::Line, Point::new(10.0, 10.0), Point::new(90.0, 40.0), 42);
        let b = renderer.generate(ShapeKind::Line, Point::new(10.0, 10.0), Point::new(90.0, 40.0), 42);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_sketch_stays_near_geometry() {
        let renderer = renderer();
        let sketch = renderer.generate(
            ShapeKind::Rectangle,
            Point::new(100.0, 100.0),
            Point::new(200.0, 150.0),
            7,
        );
        for path in sketch.paths() {
            let bbox = path.bounding_box();
            assert!(bbox.x0 > 80.0 && bbox.x1 < 220.0, "{bbox:?}");
            assert!(bbox.y0 > 80.0 && bbox.y1 < 170.0, "{bbox:?}");
        }
    }

    #[test]
    fn test_clean_line_follows_segment() {
        let renderer = RoughRenderer::new(
            RecordingSurface::new(),
            RenderOptions::default().with_roughness(0.0),
        )
        .unwrap();
        let sketch = renderer.generate(ShapeKind::Line, Point::new(0.0, 0.0), Point::new(100.0, 0.0), 3);
        for path in sketch.paths() {
            let bbox = path.bounding_box();
            assert!(bbox.y0.abs() < 1.0 && bbox.y1.abs() < 1.0, "{bbox:?}");
        }
    }

    #[test]
    fn test_repaint_clears_then_strokes_in_order() {
        let mut renderer = renderer();
        let first = renderer.generate(ShapeKind::Line, Point::new(0.0, 0.0), Point::new(50.0, 0.0), 1);
        let second = renderer.generate(ShapeKind::Rectangle, Point::new(0.0, 0.0), Point::new(20.0, 20.0), 2);
        renderer.repaint(&[&first, &second]).unwrap();

        let commands = renderer.surface().commands();
        assert!(matches!(commands.first(), Some(PaintCommand::Clear(_))));
        let stroked: Vec<_> = renderer.surface().strokes().cloned().collect();
        let expected: Vec<_> = first.paths().iter().chain(second.paths()).cloned().collect();
        assert_eq!(stroked, expected);

        renderer.repaint(&[&second]).unwrap();
        assert_eq!(renderer.surface().clear_count(), 2);
        assert_eq!(renderer.surface().strokes().count(), second.paths().len());
    }

    #[test]
    fn test_repaint_uses_configured_style() {
        let options = RenderOptions::default()
            .with_stroke_width(3.0)
            .with_stroke_color(peniko::Color::from_rgba8(200, 0, 0, 255));
        let mut renderer = RoughRenderer::new(RecordingSurface::new(), options).unwrap();
        let sketch = renderer.generate(ShapeKind::Line, Point::ZERO, Point::new(10.0, 10.0), 5);
        renderer.repaint(&[&sketch]).unwrap();

        for command in renderer.surface().commands() {
            if let PaintCommand::Stroke { color, width, .. } = command {
                let rgba = color.to_rgba8();
                assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (200, 0, 0, 255));
                assert!((width - 3.0).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_whiteboard_repaints_through_surface() {
        let mut board = Whiteboard::new(renderer()).with_tool(ToolKind::Rectangle);
        board.pointer_down(Point::new(10.0, 10.0)).unwrap();
        board.pointer_move(Point::new(60.0, 40.0)).unwrap();
        board.pointer_up();

        let shape = board.shape(ShapeId(0)).unwrap();
        let stroked: Vec<_> = board.renderer().surface().strokes().cloned().collect();
        assert_eq!(stroked, shape.drawable().paths().to_vec());
        assert_eq!(board.renderer().surface().clear_count(), 2);
    }

    #[test]
    fn test_moved_shape_keeps_its_sketch_pattern() {
        let mut board = Whiteboard::new(renderer()).with_tool(ToolKind::Line);
        board.pointer_down(Point::new(0.0, 0.0)).unwrap();
        board.pointer_move(Point::new(40.0, 30.0)).unwrap();
        board.pointer_up();
        let before = board.shape(ShapeId(0)).unwrap().drawable().clone();

        board.set_tool(ToolKind::Selection);
        board.pointer_down(Point::new(20.0, 15.0)).unwrap();
        board.pointer_move(Point::new(0.0, 0.0)).unwrap();

        // Same geometry and seed as before the move: identical sketch.
        assert_eq!(board.shape(ShapeId(0)).unwrap().drawable(), &before);
    }
}
