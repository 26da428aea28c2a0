//! Application configuration.

use log::{debug, warn};
use roughboard_core::ToolKind;
use roughboard_render::RenderOptions;

/// Id of the canvas element the board draws on.
pub const DEFAULT_CANVAS_ID: &str = "roughboard-canvas";

/// Startup configuration for the browser shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Id of the canvas element; created if the page has none.
    pub canvas_id: String,
    /// Tool selected at startup.
    pub initial_tool: ToolKind,
    /// Sketch appearance.
    pub render: RenderOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            initial_tool: ToolKind::default(),
            render: RenderOptions::default(),
        }
    }
}

impl AppConfig {
    /// Apply overrides from a URL query string or hash fragment.
    ///
    /// Supports `?tool=rectangle&roughness=2&stroke=3&canvas=board`.
    /// Malformed values are logged and skipped.
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.trim_start_matches(|c| c == '?' || c == '#');

        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "tool" => match value.parse::<ToolKind>() {
                    Ok(tool) => self.initial_tool = tool,
                    Err(e) => warn!("Ignoring tool={value}: {e}"),
                },
                "roughness" => match value.parse::<f32>() {
                    Ok(roughness) if roughness.is_finite() && roughness >= 0.0 => {
                        self.render.roughness = roughness;
                    }
                    _ => warn!("Ignoring roughness={value}"),
                },
                "stroke" => match value.parse::<f64>() {
                    Ok(width) if width.is_finite() && width > 0.0 => {
                        self.render.stroke_width = width;
                    }
                    _ => warn!("Ignoring stroke={value}"),
                },
                "canvas" => self.canvas_id = value.to_string(),
                _ => debug!("Unknown parameter {key}"),
            }
        }

        self
    }
}
