use serde::{Deserialize, Serialize};

use crate::render::NodeId;

/// Pointer event kinds a host forwards from the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEventKind {
    /// Pointer moved; coordinates are in chart (view box) space.
    Move { x: f64, y: f64 },
    /// Pointer left the target node.
    Out,
    Click,
}

/// One pointer event delivered to a node the engine listens on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneEvent {
    pub target: NodeId,
    pub kind: PointerEventKind,
}

impl SceneEvent {
    #[must_use]
    pub fn pointer_move(target: NodeId, x: f64, y: f64) -> Self {
        Self {
            target,
            kind: PointerEventKind::Move { x, y },
        }
    }

    #[must_use]
    pub fn pointer_out(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerEventKind::Out,
        }
    }

    #[must_use]
    pub fn click(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerEventKind::Click,
        }
    }
}

/// What an event target resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitTarget {
    /// Any node inside the column group of category `index`.
    ColumnGroup(usize),
    /// Legend row of series `index`.
    LegendRow(usize),
}

/// Pointer position and hovered category, present while over a column group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub category_index: usize,
}

/// Engine-owned pointer state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    hover: Option<HoverState>,
}

impl InteractionState {
    #[must_use]
    pub fn hover(self) -> Option<HoverState> {
        self.hover
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, category_index: usize) {
        self.hover = Some(HoverState {
            pointer_x: x,
            pointer_y: y,
            category_index,
        });
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = None;
    }
}
