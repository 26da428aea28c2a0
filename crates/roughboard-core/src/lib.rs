//! Roughboard Core Library
//!
//! Platform-agnostic shape model, hit testing and interaction state for the
//! Roughboard whiteboard. Rendering is delegated to a [`Renderer`].

pub mod input;
pub mod renderer;
pub mod shapes;
pub mod store;
pub mod tools;
pub mod whiteboard;

pub use input::PointerEvent;
pub use renderer::{RenderError, RenderResult, Renderer};
pub use shapes::{LINE_HIT_TOLERANCE, Shape, ShapeId, ShapeKind};
pub use store::ShapeStore;
pub use tools::{Action, ToolKind};
pub use whiteboard::Whiteboard;
