mod axis_render_builder;
mod axis_ticks;
mod chart_model;
mod color_resolver;
mod column_render_builder;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod legend_layout;
mod scale_coordinator;
mod scene_nodes;
mod tooltip_positioner;
mod validation;

use chart_model::ChartModel;
pub use color_resolver::{ColorResolver, ColorTable, default_palette};
pub use column_render_builder::ColumnGeometry;
pub use engine::{ChartEngine, EngineLifecycle};
pub use engine_config::{
    AxisStyle, ChartCapabilities, ChartEngineConfig, ChartInput, LegendStyle, TooltipStyle,
};
pub use legend_layout::legend_panel_bounds;
pub use tooltip_positioner::{TooltipPlacement, place_tooltip};
