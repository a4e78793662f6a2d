use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Boundary, ChartLayout, ScaleState};
use crate::interaction::HitTarget;
use crate::render::{NodeId, SceneGraph, Transition};

use super::scene_nodes::{SceneJoins, SceneScaffold};
use super::{ChartEngineConfig, ChartModel, ColorResolver, TooltipPlacement};

/// Engine lifecycle; there is no path back from `Disposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineLifecycle {
    Ready,
    Disposed,
}

/// Grouped column chart bound to one scene graph.
///
/// `ChartEngine` owns chart state, derives scales, reconciles scene nodes and
/// routes pointer events forwarded by the host.
pub struct ChartEngine<S: SceneGraph> {
    pub(super) scene: S,
    pub(super) config: ChartEngineConfig,
    pub(super) layout: ChartLayout,
    pub(super) colors: Box<dyn ColorResolver>,
    pub(super) model: ChartModel,
    pub(super) scales: ScaleState,
    pub(super) scaffold: SceneScaffold,
    pub(super) joins: SceneJoins,
    pub(super) hit_targets: HashMap<NodeId, HitTarget>,
    pub(super) legend_panel: Option<Boundary>,
    pub(super) tooltip_placement: Option<TooltipPlacement>,
    pub(super) lifecycle: EngineLifecycle,
    pub(super) chart_id: u64,
}

impl<S: SceneGraph> ChartEngine<S> {
    /// Detaches listeners and removes every node this engine created.
    ///
    /// Idempotent; later mutations are ignored.
    pub fn dispose(&mut self) {
        if self.lifecycle == EngineLifecycle::Disposed {
            return;
        }

        self.scene.unlisten(self.scaffold.columns);
        for (_, row) in self.joins.legend_rows.iter() {
            self.scene.unlisten(row);
        }
        self.scene.remove(self.scaffold.root);

        self.joins = SceneJoins::default();
        self.hit_targets.clear();
        self.model.interaction.on_pointer_leave();
        self.legend_panel = None;
        self.tooltip_placement = None;
        self.lifecycle = EngineLifecycle::Disposed;
        debug!(chart_id = self.chart_id, "disposed column chart");
    }

    #[must_use]
    pub fn into_scene(self) -> S {
        self.scene
    }

    pub(super) fn transition(&self, name: &'static str) -> Transition {
        Transition::new(name, self.config.transition_duration_ms)
    }

    pub(super) fn is_ready(&self) -> bool {
        self.lifecycle == EngineLifecycle::Ready
    }
}
