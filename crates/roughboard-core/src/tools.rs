//! Tool system for the whiteboard.

use crate::shapes::{Shape, ShapeId, ShapeKind};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Selection,
}

impl ToolKind {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Line, ToolKind::Rectangle, ToolKind::Selection];

    /// Shape drawn by this tool, if it draws at all.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Selection => None,
        }
    }

    /// Stable lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Selection => "selection",
        }
    }

    /// Display label for toolbars.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Selection => "Selection",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = serde::de::value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

/// Current interaction phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<D> {
    /// Waiting for a pointer press.
    Idle,
    /// Dragging out the free point of a freshly created shape.
    Drawing { id: ShapeId },
    /// Dragging an existing shape.
    Moving {
        /// Snapshot taken when the shape was picked. Its id locates the live
        /// entry; its geometry fixes the size kept during the move.
        selected: Shape<D>,
    },
}

impl<D> Default for Action<D> {
    fn default() -> Self {
        Action::Idle
    }
}

impl<D> Action<D> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Action::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Action::Drawing { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Action::Moving { .. })
    }

    /// Snapshot of the shape being moved.
    pub fn selected(&self) -> Option<&Shape<D>> {
        match self {
            Action::Moving { selected } => Some(selected),
            _ => None,
        }
    }
}
