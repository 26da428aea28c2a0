//! Renderer trait abstraction.

use crate::shapes::ShapeKind;
use kurbo::Point;
use std::fmt::Debug;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid render options: {0}")]
    Options(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Collaborator that turns shape geometry into something paintable.
///
/// `generate` is called every time a shape's geometry changes and its output
/// is stored alongside the shape. `repaint` receives every drawable in store
/// order after each store mutation and must redraw the surface from scratch,
/// so later drawables end up on top.
pub trait Renderer {
    /// Opaque render descriptor kept on each shape.
    type Drawable: Clone + Debug + PartialEq;

    /// Build the descriptor for a shape. Must be deterministic for a given seed.
    fn generate(&self, kind: ShapeKind, start: Point, end: Point, seed: u64) -> Self::Drawable;

    /// Clear the surface and paint all drawables in order.
    fn repaint(&mut self, drawables: &[&Self::Drawable]) -> RenderResult<()>;
}
