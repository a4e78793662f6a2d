use indexmap::IndexMap;
use serde::Serialize;

use crate::core::Boundary;
use crate::error::{ChartError, ChartResult};
use crate::render::text_metrics::{ASCENT_RATIO, estimate_text_width};
use crate::render::{
    Attributes, NodeId, NodeKind, PointerListener, SceneGraph, TextAnchor, Transition,
};

const DEFAULT_FONT_SIZE_PX: f64 = 10.0;

/// One live node held by [`RecordingScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub attributes: Attributes,
    pub visible: bool,
    pub listeners: Vec<PointerListener>,
}

/// Edit issued against a [`RecordingScene`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOperation {
    Create {
        node: NodeId,
        kind: NodeKind,
    },
    SetAttributes {
        node: NodeId,
    },
    Transition {
        node: NodeId,
        name: &'static str,
        duration_ms: u64,
        remove_on_end: bool,
        target: Attributes,
    },
    Remove {
        node: NodeId,
    },
    SetVisible {
        node: NodeId,
        visible: bool,
    },
    Listen {
        node: NodeId,
        listener: PointerListener,
    },
    Unlisten {
        node: NodeId,
    },
}

/// Serializable tree view of a scene, independent of node ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub view_box: Option<Boundary>,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub visible: bool,
    pub children: Vec<NodeSnapshot>,
}

/// Headless scene graph used by tests and hosts without a painter.
///
/// Transitions jump straight to their end state and are logged, text is
/// measured with a deterministic width estimate.
#[derive(Debug, Default)]
pub struct RecordingScene {
    view_box: Option<Boundary>,
    nodes: IndexMap<NodeId, RecordedNode>,
    roots: Vec<NodeId>,
    next_id: u64,
    operations: Vec<SceneOperation>,
    fail_measurements: bool,
}

impl RecordingScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view_box(&self) -> Option<Boundary> {
        self.view_box
    }

    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&RecordedNode> {
        self.nodes.get(&node)
    }

    #[must_use]
    pub fn attributes(&self, node: NodeId) -> Option<&Attributes> {
        self.nodes.get(&node).map(|recorded| &recorded.attributes)
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Live nodes carrying `class`, in creation order.
    #[must_use]
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.attributes.class.as_deref() == Some(class))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Live node carrying element id `id`.
    #[must_use]
    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.attributes.id.as_deref() == Some(id))
            .map(|(node_id, _)| *node_id)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map_or(&[], |recorded| recorded.children.as_slice())
    }

    #[must_use]
    pub fn operations(&self) -> &[SceneOperation] {
        &self.operations
    }

    pub fn clear_operations(&mut self) {
        self.operations.clear();
    }

    /// Makes every subsequent `measure` call fail, as a detached host would.
    pub fn set_fail_measurements(&mut self, fail: bool) {
        self.fail_measurements = fail;
    }

    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            view_box: self.view_box,
            nodes: self
                .roots
                .iter()
                .filter_map(|root| self.snapshot_node(*root))
                .collect(),
        }
    }

    fn snapshot_node(&self, node: NodeId) -> Option<NodeSnapshot> {
        let recorded = self.nodes.get(&node)?;
        Some(NodeSnapshot {
            kind: recorded.kind,
            attributes: recorded.attributes.clone(),
            visible: recorded.visible,
            children: recorded
                .children
                .iter()
                .filter_map(|child| self.snapshot_node(*child))
                .collect(),
        })
    }

    fn node_mut(&mut self, node: NodeId) -> ChartResult<&mut RecordedNode> {
        self.nodes
            .get_mut(&node)
            .ok_or(ChartError::UnknownNode(node))
    }

    fn detach(&mut self, node: NodeId) {
        let Some(recorded) = self.nodes.shift_remove(&node) else {
            return;
        };
        for child in recorded.children {
            self.detach(child);
        }
    }

    fn inherited_text_style(&self, node: &RecordedNode) -> (f64, TextAnchor) {
        let parent = node.parent.and_then(|parent| self.nodes.get(&parent));
        let font_size = node
            .attributes
            .font_size
            .or_else(|| parent.and_then(|p| p.attributes.font_size))
            .unwrap_or(DEFAULT_FONT_SIZE_PX);
        let anchor = node
            .attributes
            .text_anchor
            .or_else(|| parent.and_then(|p| p.attributes.text_anchor))
            .unwrap_or(TextAnchor::Start);
        (font_size, anchor)
    }

    fn text_box(&self, node: &RecordedNode) -> Option<Boundary> {
        let text = node.attributes.text.as_deref()?;
        let (font_size, anchor) = self.inherited_text_style(node);
        let width = estimate_text_width(text, font_size);
        let x = node.attributes.x.unwrap_or(0.0);
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - width * 0.5,
            TextAnchor::End => x - width,
        };
        let baseline = node.attributes.y.unwrap_or(0.0);
        Some(Boundary::new(
            left,
            baseline - font_size * ASCENT_RATIO,
            width,
            font_size,
        ))
    }

    /// Box of `node` in its parent's coordinates, `None` when it draws nothing.
    fn placed_box(&self, node: NodeId) -> Option<Boundary> {
        let recorded = self.nodes.get(&node)?;
        if !recorded.visible || recorded.kind == NodeKind::ClipPath {
            return None;
        }
        let local = self.local_box(recorded)?;
        let (dx, dy) = recorded.attributes.translate.unwrap_or((0.0, 0.0));
        Some(local.translate(dx, dy))
    }

    fn children_box(&self, node: &RecordedNode) -> Option<Boundary> {
        Boundary::union_all(
            node.children
                .iter()
                .filter_map(|child| self.placed_box(*child)),
        )
    }

    fn local_box(&self, node: &RecordedNode) -> Option<Boundary> {
        let attrs = &node.attributes;
        match node.kind {
            NodeKind::Rect => Some(Boundary::new(
                attrs.x.unwrap_or(0.0),
                attrs.y.unwrap_or(0.0),
                attrs.width.unwrap_or(0.0),
                attrs.height.unwrap_or(0.0),
            )),
            NodeKind::Line => {
                let (x1, y1) = (attrs.x.unwrap_or(0.0), attrs.y.unwrap_or(0.0));
                let (x2, y2) = (attrs.x2.unwrap_or(x1), attrs.y2.unwrap_or(y1));
                Some(Boundary::new(
                    x1.min(x2),
                    y1.min(y2),
                    (x2 - x1).abs(),
                    (y2 - y1).abs(),
                ))
            }
            NodeKind::TextSpan => self.text_box(node),
            NodeKind::Text => self.children_box(node).or_else(|| self.text_box(node)),
            NodeKind::Group | NodeKind::ClipPath => self.children_box(node),
        }
    }
}

impl SceneGraph for RecordingScene {
    fn set_view_box(&mut self, view_box: Boundary) {
        self.view_box = Some(view_box);
    }

    fn create(&mut self, parent: Option<NodeId>, kind: NodeKind) -> ChartResult<NodeId> {
        let node = NodeId(self.next_id);
        match parent {
            Some(parent) => self.node_mut(parent)?.children.push(node),
            None => self.roots.push(node),
        }
        self.next_id += 1;
        self.nodes.insert(
            node,
            RecordedNode {
                kind,
                parent,
                children: Vec::new(),
                attributes: Attributes::default(),
                visible: true,
                listeners: Vec::new(),
            },
        );
        self.operations.push(SceneOperation::Create { node, kind });
        Ok(node)
    }

    fn set_attributes(&mut self, node: NodeId, attributes: &Attributes) -> ChartResult<()> {
        self.node_mut(node)?.attributes.merge(attributes);
        self.operations.push(SceneOperation::SetAttributes { node });
        Ok(())
    }

    fn transition(
        &mut self,
        node: NodeId,
        transition: Transition,
        target: &Attributes,
    ) -> ChartResult<()> {
        self.node_mut(node)?.attributes.merge(target);
        self.operations.push(SceneOperation::Transition {
            node,
            name: transition.name,
            duration_ms: transition.duration_ms,
            remove_on_end: transition.remove_on_end,
            target: target.clone(),
        });
        if transition.remove_on_end {
            self.remove(node);
        }
        Ok(())
    }

    fn remove(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(&node).map(|recorded| recorded.parent) else {
            return;
        };
        match parent.and_then(|parent| self.nodes.get_mut(&parent)) {
            Some(parent) => parent.children.retain(|child| *child != node),
            None => self.roots.retain(|root| *root != node),
        }
        self.detach(node);
        self.operations.push(SceneOperation::Remove { node });
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> ChartResult<()> {
        self.node_mut(node)?.visible = visible;
        self.operations
            .push(SceneOperation::SetVisible { node, visible });
        Ok(())
    }

    fn measure(&self, node: NodeId) -> ChartResult<Boundary> {
        if self.fail_measurements {
            return Err(ChartError::Measurement(format!(
                "node {node:?} is not attached to a rendered document"
            )));
        }
        let recorded = self.nodes.get(&node).ok_or(ChartError::UnknownNode(node))?;
        Ok(self.local_box(recorded).unwrap_or_else(Boundary::empty))
    }

    fn listen(&mut self, node: NodeId, listener: PointerListener) -> ChartResult<()> {
        let recorded = self.node_mut(node)?;
        if !recorded.listeners.contains(&listener) {
            recorded.listeners.push(listener);
        }
        self.operations
            .push(SceneOperation::Listen { node, listener });
        Ok(())
    }

    fn unlisten(&mut self, node: NodeId) {
        if let Some(recorded) = self.nodes.get_mut(&node) {
            recorded.listeners.clear();
            self.operations.push(SceneOperation::Unlisten { node });
        }
    }
}
