//! Whiteboard session: shape store, active tool and the pointer state machine.

use crate::input::PointerEvent;
use crate::renderer::{RenderResult, Renderer};
use crate::shapes::{Shape, ShapeId};
use crate::store::ShapeStore;
use crate::tools::{Action, ToolKind};
use kurbo::Point;
use log::{debug, trace};

/// A drawing session.
///
/// Pointer presses start a new shape (drawing tools) or pick one to move
/// (selection tool); moves reshape or translate it; releases go back to idle.
/// Every change to the store is followed by a full repaint.
#[derive(Debug)]
pub struct Whiteboard<R: Renderer> {
    store: ShapeStore<R::Drawable>,
    tool: ToolKind,
    action: Action<R::Drawable>,
    renderer: R,
}

impl<R: Renderer> Whiteboard<R> {
    /// Create an empty board with the default tool.
    pub fn new(renderer: R) -> Self {
        Self {
            store: ShapeStore::new(),
            tool: ToolKind::default(),
            action: Action::Idle,
            renderer,
        }
    }

    /// Set the initial tool.
    pub fn with_tool(mut self, tool: ToolKind) -> Self {
        self.tool = tool;
        self
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn action(&self) -> &Action<R::Drawable> {
        &self.action
    }

    pub fn shapes(&self) -> &ShapeStore<R::Drawable> {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Switch tools. Any interaction in progress is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) {
        debug!("Tool: {} -> {}", self.tool, tool);
        self.tool = tool;
        self.action = Action::Idle;
    }

    /// Dispatch a pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> RenderResult<()> {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { .. } => {
                self.pointer_up();
                Ok(())
            }
        }
    }

    /// Pointer pressed.
    ///
    /// A press always starts a fresh interaction, so a release lost outside
    /// the canvas cannot leave the board stuck mid-drag.
    pub fn pointer_down(&mut self, point: Point) -> RenderResult<()> {
        match self.tool.shape_kind() {
            Some(kind) => {
                let id = self.store.next_id();
                let shape = ShapeStore::create(&self.renderer, id, point, point, kind);
                self.store.put(shape);
                debug!("Drawing {kind:?} {id} from ({}, {})", point.x, point.y);
                self.action = Action::Drawing { id };
                self.repaint()
            }
            None => {
                self.action = match self.store.locate(point) {
                    Some(shape) => {
                        debug!("Picked {:?} {} at ({}, {})", shape.kind(), shape.id(), point.x, point.y);
                        Action::Moving {
                            selected: shape.clone(),
                        }
                    }
                    None => Action::Idle,
                };
                Ok(())
            }
        }
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, point: Point) -> RenderResult<()> {
        let (id, kind, start, end) = match &self.action {
            Action::Idle => return Ok(()),
            Action::Drawing { id } => {
                let Some(shape) = self.store.get(*id) else {
                    return Ok(());
                };
                (*id, shape.kind(), shape.start(), point)
            }
            Action::Moving { selected } => {
                // Anchor follows the pointer; size comes from the snapshot
                (selected.id(), selected.kind(), point, point + selected.size())
            }
        };
        if self.store.update(&self.renderer, id, start, end, kind) {
            self.repaint()
        } else {
            Ok(())
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        if !self.action.is_idle() {
            trace!("Interaction finished");
        }
        self.action = Action::Idle;
    }

    /// Clear the surface and paint every shape in creation order.
    pub fn repaint(&mut self) -> RenderResult<()> {
        let drawables = self.store.drawables();
        self.renderer.repaint(&drawables)
    }

    /// Shape under the point, by the same rule the selection tool uses.
    pub fn shape_at(&self, point: Point) -> Option<&Shape<R::Drawable>> {
        self.store.locate(point)
    }

    /// Get a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape<R::Drawable>> {
        self.store.get(id)
    }
}
