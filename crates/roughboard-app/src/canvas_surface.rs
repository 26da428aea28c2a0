//! HTML canvas surface.

use peniko::Color;

/// CSS `rgba()` string for a color.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!(
        "rgba({}, {}, {}, {})",
        rgba.r,
        rgba.g,
        rgba.b,
        f64::from(rgba.a) / 255.0
    )
}

#[cfg(target_arch = "wasm32")]
pub use self::web_canvas::CanvasSurface;

#[cfg(target_arch = "wasm32")]
mod web_canvas {
    use super::css_color;
    use kurbo::{BezPath, PathEl};
    use peniko::Color;
    use roughboard_core::RenderResult;
    use roughboard_render::Surface;
    use web_sys::CanvasRenderingContext2d;

    /// [`Surface`] backed by a 2D canvas context.
    pub struct CanvasSurface {
        context: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl CanvasSurface {
        /// Wrap a context whose canvas is `width` x `height` pixels.
        pub fn new(context: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
            Self {
                context,
                width,
                height,
            }
        }
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, background: Color) -> RenderResult<()> {
            self.context.clear_rect(0.0, 0.0, self.width, self.height);
            self.context.set_fill_style_str(&css_color(background));
            self.context.fill_rect(0.0, 0.0, self.width, self.height);
            Ok(())
        }

        fn stroke(&mut self, path: &BezPath, color: Color, width: f64) -> RenderResult<()> {
            let ctx = &self.context;
            ctx.begin_path();
            for el in path.elements() {
                match *el {
                    PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
                    PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
                    PathEl::QuadTo(p1, p2) => ctx.quadratic_curve_to(p1.x, p1.y, p2.x, p2.y),
                    PathEl::CurveTo(p1, p2, p3) => {
                        ctx.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y)
                    }
                    PathEl::ClosePath => ctx.close_path(),
                }
            }
            ctx.set_stroke_style_str(&css_color(color));
            ctx.set_line_width(width);
            ctx.stroke();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(Color::from_rgba8(0, 0, 0, 255)), "rgba(0, 0, 0, 1)");
        assert_eq!(css_color(Color::from_rgba8(255, 128, 0, 0)), "rgba(255, 128, 0, 0)");
    }
}
