//! Shape definitions for the whiteboard.

use crate::renderer::Renderer;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the band around a line segment that still counts as a hit.
pub const LINE_HIT_TOLERANCE: f64 = 1.0;

/// Position of a shape in the store. Doubles as its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub usize);

impl ShapeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kinds of shape the board can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rectangle,
}

/// Generate a seed for the sketchy effect of a new shape.
/// Counter mixed with splitmix64 so it works the same on native and WASM.
pub(crate) fn generate_seed() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static SEED_COUNTER: AtomicU64 = AtomicU64::new(1);

    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut x = counter.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    // roughr treats a zero seed as "pick one at random"
    x.max(1)
}

/// A line or rectangle together with its render descriptor.
///
/// `start` is the anchor set when the shape is created; `end` is the point
/// that follows the pointer. Fields are read-only: geometry only changes by
/// building a new shape through [`Shape::new`], which regenerates the
/// drawable, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<D> {
    id: ShapeId,
    kind: ShapeKind,
    start: Point,
    end: Point,
    seed: u64,
    drawable: D,
}

impl<D> Shape<D> {
    /// Build a shape and ask the renderer for its drawable.
    pub fn new<R>(renderer: &R, id: ShapeId, kind: ShapeKind, start: Point, end: Point, seed: u64) -> Self
    where
        R: Renderer<Drawable = D> + ?Sized,
    {
        Self {
            id,
            kind,
            start,
            end,
            seed,
            drawable: renderer.generate(kind, start, end, seed),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Anchor point (`x1`, `y1`).
    pub fn start(&self) -> Point {
        self.start
    }

    /// Free point (`x2`, `y2`).
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn drawable(&self) -> &D {
        &self.drawable
    }

    /// Signed extent from anchor to free point.
    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    /// Normalized bounding box.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Check whether a point lies on (line) or inside (rectangle) this shape.
    pub fn hit_test(&self, point: Point) -> bool {
        match self.kind {
            ShapeKind::Rectangle => {
                // Inclusive on every edge, unlike kurbo's half-open Rect::contains
                let bounds = self.bounds();
                point.x >= bounds.x0
                    && point.x <= bounds.x1
                    && point.y >= bounds.y0
                    && point.y <= bounds.y1
            }
            ShapeKind::Line => {
                // A point on the segment makes the triangle a-c-b degenerate
                let offset = self.start.distance(self.end)
                    - (self.start.distance(point) + self.end.distance(point));
                offset.abs() < LINE_HIT_TOLERANCE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{EchoDrawable, EchoRenderer};

    fn shape(kind: ShapeKind, x1: f64, y1: f64, x2: f64, y2: f64) -> Shape<EchoDrawable> {
        Shape::new(
            &EchoRenderer::default(),
            ShapeId(0),
            kind,
            Point::new(x1, y1),
            Point::new(x2, y2),
            7,
        )
    }

    #[test]
    fn test_drawable_matches_geometry() {
        let line = shape(ShapeKind::Line, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            *line.drawable(),
            (ShapeKind::Line, Point::new(1.0, 2.0), Point::new(3.0, 4.0), 7)
        );
    }

    #[test]
    fn test_rectangle_contains_anchor_corner() {
        let rect = shape(ShapeKind::Rectangle, 10.0, 20.0, 60.0, 50.0);
        assert!(rect.hit_test(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_rectangle_contains_interior_and_far_corner() {
        // Taking the max edges with `min` would collapse the box onto its
        // top-left corner. Interior and far-corner hits pin the real bounds.
        let rect = shape(ShapeKind::Rectangle, 10.0, 20.0, 60.0, 50.0);
        assert!(rect.hit_test(Point::new(35.0, 35.0)));
        assert!(rect.hit_test(Point::new(60.0, 50.0)));
    }

    #[test]
    fn test_rectangle_drawn_backwards() {
        let rect = shape(ShapeKind::Rectangle, 60.0, 50.0, 10.0, 20.0);
        assert!(rect.hit_test(Point::new(10.0, 20.0)));
        assert!(rect.hit_test(Point::new(35.0, 35.0)));
        assert!(rect.hit_test(Point::new(60.0, 50.0)));
    }

    #[test]
    fn test_rectangle_rejects_outside_points() {
        let rect = shape(ShapeKind::Rectangle, 10.0, 20.0, 60.0, 50.0);
        assert!(!rect.hit_test(Point::new(9.9, 35.0)));
        assert!(!rect.hit_test(Point::new(60.1, 35.0)));
        assert!(!rect.hit_test(Point::new(35.0, 19.9)));
        assert!(!rect.hit_test(Point::new(35.0, 50.1)));
    }

    #[test]
    fn test_line_contains_points_along_segment() {
        let line = shape(ShapeKind::Line, 0.0, 0.0, 100.0, 50.0);
        for step in 0..=10 {
            let t = step as f64 / 10.0;
            assert!(line.hit_test(Point::new(100.0 * t, 50.0 * t)), "t = {t}");
        }
    }

    #[test]
    fn test_line_uses_true_distance() {
        // A distance that adds the y coordinates instead of subtracting them
        // misses this midpoint; the Euclidean one hits it.
        let line = shape(ShapeKind::Line, 10.0, 40.0, 50.0, 80.0);
        assert!(line.hit_test(Point::new(30.0, 60.0)));
    }

    #[test]
    fn test_line_rejects_distant_points() {
        let line = shape(ShapeKind::Line, 0.0, 0.0, 100.0, 0.0);
        assert!(!line.hit_test(Point::new(50.0, 20.0)));
        assert!(!line.hit_test(Point::new(50.0, -20.0)));
        assert!(!line.hit_test(Point::new(150.0, 0.0)));
    }

    #[test]
    fn test_zero_length_line_hits_its_point() {
        let dot = shape(ShapeKind::Line, 5.0, 5.0, 5.0, 5.0);
        assert!(dot.hit_test(Point::new(5.0, 5.0)));
        assert!(!dot.hit_test(Point::new(7.0, 5.0)));
    }

    #[test]
    fn test_size_and_bounds() {
        let rect = shape(ShapeKind::Rectangle, 20.0, 10.0, 0.0, 0.0);
        let size = rect.size();
        assert!((size.x + 20.0).abs() < f64::EPSILON);
        assert!((size.y + 10.0).abs() < f64::EPSILON);
        let bounds = rect.bounds();
        assert!(bounds.x0.abs() < f64::EPSILON);
        assert!((bounds.x1 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seeds_are_distinct_and_nonzero() {
        let a = generate_seed();
        let b = generate_seed();
        assert_ne!(a, b);
        assert_ne!(a, 0);
        assert_ne!(b, 0);
    }
}
