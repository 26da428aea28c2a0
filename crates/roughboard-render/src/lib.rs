//! Roughboard Render Library
//!
//! Sketch-style renderer for Roughboard. Shapes are turned into rough,
//! hand-drawn looking paths with roughr and painted onto any [`Surface`].

mod options;
mod rough_impl;
mod sketch;
mod surface;

pub use options::RenderOptions;
pub use rough_impl::RoughRenderer;
pub use sketch::Sketch;
pub use surface::{PaintCommand, RecordingSurface, Surface};
