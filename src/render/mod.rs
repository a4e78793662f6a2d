mod keyed_join;
mod primitives;
mod recording_scene;
mod scene;
mod text_metrics;

pub use keyed_join::{JoinDiff, KeyedJoin};
pub use primitives::{Attributes, Color, TextAnchor};
pub use recording_scene::{
    NodeSnapshot, RecordedNode, RecordingScene, SceneOperation, SceneSnapshot,
};
pub use scene::{NodeId, NodeKind, PointerListener, SceneGraph, Transition};
pub use text_metrics::{ASCENT_RATIO, estimate_text_width};
