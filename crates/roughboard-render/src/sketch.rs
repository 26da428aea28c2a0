//! Render descriptor produced for each shape.

use kurbo::{BezPath, Point};
use roughr::core::{Drawable, OpSet, OpType};

/// Paths making up one rough shape, ready to be stroked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sketch {
    paths: Vec<BezPath>,
}

impl Sketch {
    /// Convert a roughr drawable into kurbo paths, one per op set.
    pub fn from_drawable(drawable: &Drawable<f64>) -> Self {
        Self {
            paths: drawable.sets.iter().map(op_set_to_path).collect(),
        }
    }

    pub fn paths(&self) -> &[BezPath] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.iter().all(|path| path.elements().is_empty())
    }
}

fn op_set_to_path(op_set: &OpSet<f64>) -> BezPath {
    let mut path = BezPath::new();
    for op in &op_set.ops {
        let d = &op.data;
        match op.op {
            OpType::Move if d.len() >= 2 => path.move_to(Point::new(d[0], d[1])),
            OpType::LineTo if d.len() >= 2 => path.line_to(Point::new(d[0], d[1])),
            OpType::BCurveTo if d.len() >= 6 => path.curve_to(
                Point::new(d[0], d[1]),
                Point::new(d[2], d[3]),
                Point::new(d[4], d[5]),
            ),
            _ => log::trace!("Skipping op with {} values", d.len()),
        }
    }
    path
}
