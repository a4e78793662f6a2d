use serde::{Deserialize, Serialize};

use crate::core::Boundary;
use crate::error::ChartResult;
use crate::render::Attributes;

/// Opaque handle to one node owned by a scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Group,
    Rect,
    Line,
    Text,
    /// One line inside a `Text` node.
    TextSpan,
    ClipPath,
}

/// Named animation request applied to a subset of attributes.
///
/// Starting a transition on a node that is still animating retargets it;
/// the engine never queues or cancels animations itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub name: &'static str,
    pub duration_ms: u64,
    /// Detach the node once the animation completes.
    pub remove_on_end: bool,
}

impl Transition {
    #[must_use]
    pub const fn new(name: &'static str, duration_ms: u64) -> Self {
        Self {
            name,
            duration_ms,
            remove_on_end: false,
        }
    }

    #[must_use]
    pub const fn then_remove(mut self) -> Self {
        self.remove_on_end = true;
        self
    }
}

/// Pointer interest registered on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerListener {
    Click,
    /// Pointer move and pointer out.
    Hover,
}

/// Retained drawing capability the chart engine paints into.
///
/// Implementations own node storage, painting and animation. The engine only
/// issues structural edits, attribute targets and measurements.
pub trait SceneGraph {
    /// Sets the logical coordinate system of the root container.
    fn set_view_box(&mut self, view_box: Boundary);

    /// Appends a new node under `parent` (or at the root).
    fn create(&mut self, parent: Option<NodeId>, kind: NodeKind) -> ChartResult<NodeId>;

    /// Applies attributes immediately.
    fn set_attributes(&mut self, node: NodeId, attributes: &Attributes) -> ChartResult<()>;

    /// Animates `node` from its current attributes towards `target`.
    fn transition(
        &mut self,
        node: NodeId,
        transition: Transition,
        target: &Attributes,
    ) -> ChartResult<()>;

    /// Detaches `node` and its descendants. Unknown nodes are ignored.
    fn remove(&mut self, node: NodeId);

    fn set_visible(&mut self, node: NodeId, visible: bool) -> ChartResult<()>;

    /// Bounding box of `node` in its local coordinates: descendant
    /// translations apply, the node's own translation does not.
    fn measure(&self, node: NodeId) -> ChartResult<Boundary>;

    fn listen(&mut self, node: NodeId, listener: PointerListener) -> ChartResult<()>;

    /// Drops every listener on `node`.
    fn unlisten(&mut self, node: NodeId);
}
