//! Render configuration.

use peniko::Color;

/// Look of the rendered sketches.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// roughr roughness: 0 = clean lines, higher = sketchier.
    pub roughness: f32,
    /// Stroke width in canvas pixels.
    pub stroke_width: f64,
    /// Stroke color.
    pub stroke_color: Color,
    /// Color the surface is cleared to before each repaint.
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            stroke_width: 1.0,
            stroke_color: Color::from_rgba8(0, 0, 0, 255),
            background: Color::from_rgba8(255, 255, 255, 255),
        }
    }
}

impl RenderOptions {
    /// Set the roughness.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Set the stroke color.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}
