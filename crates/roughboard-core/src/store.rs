//! Ordered shape storage keyed by creation index.

use crate::renderer::Renderer;
use crate::shapes::{Shape, ShapeId, ShapeKind, generate_seed};
use kurbo::Point;
use log::{trace, warn};

/// Arena of shapes where a shape's id is its slot.
///
/// Shapes are appended in creation order and replaced in place; nothing is
/// ever removed, so ids stay stable and iteration order is creation order.
#[derive(Debug, Clone)]
pub struct ShapeStore<D> {
    shapes: Vec<Shape<D>>,
}

impl<D> Default for ShapeStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ShapeStore<D> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Id the next appended shape will get.
    pub fn next_id(&self) -> ShapeId {
        ShapeId(self.shapes.len())
    }

    /// Build a new shape with a fresh seed. Does not insert it.
    pub fn create<R>(renderer: &R, id: ShapeId, start: Point, end: Point, kind: ShapeKind) -> Shape<D>
    where
        R: Renderer<Drawable = D> + ?Sized,
    {
        Shape::new(renderer, id, kind, start, end, generate_seed())
    }

    /// Put a shape into the slot named by its id.
    ///
    /// An id equal to [`next_id`](Self::next_id) appends; an existing id is
    /// replaced without shifting its neighbours. Anything further out is
    /// ignored and reported with `false`.
    pub fn put(&mut self, shape: Shape<D>) -> bool {
        let index = shape.id().index();
        if index < self.shapes.len() {
            self.shapes[index] = shape;
            true
        } else if index == self.shapes.len() {
            self.shapes.push(shape);
            true
        } else {
            warn!(
                "Ignoring shape {} past the end of a store of {}",
                shape.id(),
                self.shapes.len()
            );
            false
        }
    }

    /// Regenerate the shape at `id` with new geometry and store it.
    ///
    /// The existing seed is kept so identical geometry yields an identical
    /// drawable. Returns `false` when `id` is past the append position.
    pub fn update<R>(&mut self, renderer: &R, id: ShapeId, start: Point, end: Point, kind: ShapeKind) -> bool
    where
        R: Renderer<Drawable = D> + ?Sized,
    {
        let index = id.index();
        if index > self.shapes.len() {
            warn!("Cannot update shape {id}: store holds {}", self.shapes.len());
            return false;
        }
        let seed = self
            .shapes
            .get(index)
            .map(Shape::seed)
            .unwrap_or_else(generate_seed);
        trace!("Updating {kind:?} {id}: {start:?} -> {end:?}");
        self.put(Shape::new(renderer, id, kind, start, end, seed))
    }

    /// Get a shape by id.
    pub fn get(&self, id: ShapeId) -> Option<&Shape<D>> {
        self.shapes.get(id.index())
    }

    /// First shape, in creation order, that contains the point.
    ///
    /// Earlier shapes win even though later ones are painted over them.
    pub fn locate(&self, point: Point) -> Option<&Shape<D>> {
        self.shapes.iter().find(|shape| shape.hit_test(point))
    }

    /// Shapes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape<D>> {
        self.shapes.iter()
    }

    /// Drawables in creation order (paint order).
    pub fn drawables(&self) -> Vec<&D> {
        self.shapes.iter().map(Shape::drawable).collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
