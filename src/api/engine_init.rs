use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::core::{ChartLayout, ScaleInputs, ScaleState};
use crate::error::ChartResult;
use crate::render::{PointerListener, SceneGraph};

use super::scene_nodes::{SceneJoins, SceneScaffold};
use super::validation::validate_engine_config;
use super::{
    ChartEngine, ChartEngineConfig, ChartInput, ChartModel, ColorResolver, ColorTable,
    EngineLifecycle,
};
use super::color_resolver::default_palette;

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

impl<S: SceneGraph> ChartEngine<S> {
    /// Creates an engine that colors series from [`default_palette`] in
    /// input order. Names introduced later by `replace_data` get the table
    /// fallback; inject a resolver to control them.
    pub fn new(scene: S, input: ChartInput, config: ChartEngineConfig) -> ChartResult<Self> {
        let colors = ColorTable::from_palette(
            input.series.iter().map(|series| series.name.as_str()),
            &default_palette(),
        );
        Self::with_color_resolver(scene, input, config, colors)
    }

    /// Creates an engine, builds its scene scaffold, performs the first
    /// render and attaches pointer listeners.
    pub fn with_color_resolver(
        mut scene: S,
        input: ChartInput,
        config: ChartEngineConfig,
        colors: impl ColorResolver + 'static,
    ) -> ChartResult<Self> {
        let config = validate_engine_config(config)?;
        let layout = ChartLayout::resolve(config.container, config.margins)?;
        let model = ChartModel::from_input(input, config.series_length_policy)?;
        let scales = ScaleState::compute(ScaleInputs {
            series: &model.series,
            inactive: &model.inactive,
            window: model.window,
            layout,
            continuous_category_axis: config.capabilities.continuous_category_axis,
            band_padding: config.band_padding,
        })?;

        let chart_id = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        scene.set_view_box(layout.container);
        let scaffold = SceneScaffold::build(&mut scene, &config, layout, chart_id)?;

        let mut engine = Self {
            scene,
            config,
            layout,
            colors: Box::new(colors),
            model,
            scales,
            scaffold,
            joins: SceneJoins::default(),
            hit_targets: HashMap::new(),
            legend_panel: None,
            tooltip_placement: None,
            lifecycle: EngineLifecycle::Ready,
            chart_id,
        };

        engine.refresh(None)?;
        engine
            .scene
            .listen(engine.scaffold.columns, PointerListener::Hover)?;

        debug!(
            chart_id,
            series = engine.model.series.len(),
            categories = engine.model.categories.len(),
            "constructed column chart"
        );
        Ok(engine)
    }
}
