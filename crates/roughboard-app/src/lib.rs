//! Roughboard Application
//!
//! Browser shell: a full-window canvas, a tool picker and pointer wiring
//! around a [`roughboard_core::Whiteboard`].

mod canvas_surface;
mod config;
mod toolbar;

pub use canvas_surface::css_color;
pub use config::{AppConfig, DEFAULT_CANVAS_ID};
pub use toolbar::{TOOL_GROUP, radio_id, tool_for_radio};

#[cfg(target_arch = "wasm32")]
pub use canvas_surface::CanvasSurface;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
