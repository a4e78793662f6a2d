use crate::core::{Boundary, ChartData, ChartLayout, InactiveSeries, ScaleState, Series};
use crate::interaction::HoverState;
use crate::render::{NodeId, SceneGraph};

use super::{ChartEngine, ChartEngineConfig, EngineLifecycle, TooltipPlacement};

impl<S: SceneGraph> ChartEngine<S> {
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable scene access for hosts that drive painting or inspection.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn scales(&self) -> ScaleState {
        self.scales
    }

    #[must_use]
    pub fn lifecycle(&self) -> EngineLifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lifecycle == EngineLifecycle::Disposed
    }

    /// Process-unique id used in logs and clip-path ids.
    #[must_use]
    pub fn chart_id(&self) -> u64 {
        self.chart_id
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.model.series()
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.model.categories()
    }

    /// Grouped records, one per category.
    #[must_use]
    pub fn data(&self) -> &[ChartData] {
        self.model.data()
    }

    /// Current `(from, to)` category labels.
    #[must_use]
    pub fn visible_range(&self) -> (&str, &str) {
        (&self.model.range.0, &self.model.range.1)
    }

    #[must_use]
    pub fn inactive_series(&self) -> &InactiveSeries {
        self.model.inactive()
    }

    #[must_use]
    pub fn is_series_active(&self, series_index: usize) -> bool {
        self.model.inactive.is_active(series_index)
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverState> {
        self.model.interaction.hover()
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.scales.value.domain()
    }

    #[must_use]
    pub fn category_domain(&self) -> (f64, f64) {
        self.scales.category.domain()
    }

    /// Left edge of the group for category `index`, in chart pixels.
    #[must_use]
    pub fn map_category(&self, index: usize) -> f64 {
        self.scales.category.position(index)
    }

    #[must_use]
    pub fn map_value(&self, value: f64) -> f64 {
        self.scales.value.map(value)
    }

    /// Bounds of the legend panel after the last successful layout pass.
    #[must_use]
    pub fn legend_panel(&self) -> Option<Boundary> {
        self.legend_panel
    }

    /// Where the tooltip was placed for the current hover, if shown.
    #[must_use]
    pub fn tooltip_placement(&self) -> Option<TooltipPlacement> {
        self.tooltip_placement
    }

    /// Node hosts forward column hover events from.
    #[must_use]
    pub fn columns_node(&self) -> NodeId {
        self.scaffold.columns
    }

    #[must_use]
    pub fn column_group_node(&self, category_index: usize) -> Option<NodeId> {
        self.joins.column_groups.get(category_index)
    }

    #[must_use]
    pub fn column_node(&self, category_index: usize, series_index: usize) -> Option<NodeId> {
        self.joins
            .column_nodes
            .get(&category_index)
            .and_then(|nodes| nodes.bars.get(series_index))
    }

    #[must_use]
    pub fn column_area_node(&self, category_index: usize) -> Option<NodeId> {
        self.joins
            .column_nodes
            .get(&category_index)
            .and_then(|nodes| nodes.hit_area)
    }

    #[must_use]
    pub fn legend_row_node(&self, series_index: usize) -> Option<NodeId> {
        self.joins.legend_rows.get(series_index)
    }

    #[must_use]
    pub fn tooltip_node(&self) -> Option<NodeId> {
        self.scaffold.tooltip.map(|nodes| nodes.root)
    }
}
