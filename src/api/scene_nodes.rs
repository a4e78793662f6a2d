use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::core::ChartLayout;
use crate::error::ChartResult;
use crate::render::{Attributes, Color, KeyedJoin, NodeId, NodeKind, SceneGraph, TextAnchor};

use super::ChartEngineConfig;

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisNodes {
    pub(super) group: NodeId,
    pub(super) domain: NodeId,
    /// End ticks drawn on the value axis only.
    pub(super) outer_ticks: Option<(NodeId, NodeId)>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct TooltipNodes {
    pub(super) root: NodeId,
    pub(super) panel: NodeId,
    pub(super) content: NodeId,
    pub(super) labels: NodeId,
    pub(super) values: NodeId,
}

/// Static nodes created once per engine, in paint order.
#[derive(Debug, Clone, Copy)]
pub(super) struct SceneScaffold {
    pub(super) root: NodeId,
    pub(super) x_axis: AxisNodes,
    pub(super) y_axis: AxisNodes,
    pub(super) columns: NodeId,
    pub(super) legend_panel: NodeId,
    pub(super) legend_items: NodeId,
    pub(super) tooltip: Option<TooltipNodes>,
}

impl SceneScaffold {
    pub(super) fn build<S: SceneGraph>(
        scene: &mut S,
        config: &ChartEngineConfig,
        layout: ChartLayout,
        chart_id: u64,
    ) -> ChartResult<Self> {
        let plot = layout.plot;
        let root = scene.create(None, NodeKind::Group)?;
        scene.set_attributes(root, &Attributes::new().with_class("column-chart"))?;

        let x_axis = build_axis(scene, root, "x-axis", false)?;
        let y_axis = build_axis(scene, root, "y-axis", true)?;

        let clip = scene.create(Some(root), NodeKind::ClipPath)?;
        scene.set_attributes(
            clip,
            &Attributes::new().with_id(format!("column-chart-{chart_id}-clip")),
        )?;
        let clip_rect = scene.create(Some(clip), NodeKind::Rect)?;
        scene.set_attributes(
            clip_rect,
            &Attributes::new()
                .with_position(plot.x, plot.y)
                .with_size(plot.width, plot.height),
        )?;

        let columns = scene.create(Some(root), NodeKind::Group)?;
        scene.set_attributes(
            columns,
            &Attributes::new().with_class("columns").with_clip_path(clip),
        )?;

        let legend = scene.create(Some(root), NodeKind::Group)?;
        scene.set_attributes(legend, &Attributes::new().with_class("legend"))?;
        let legend_panel = scene.create(Some(legend), NodeKind::Rect)?;
        scene.set_attributes(
            legend_panel,
            &Attributes::new()
                .with_class("legend-panel")
                .with_fill(config.legend.panel_fill)
                .with_stroke(config.legend.panel_stroke, config.legend.panel_stroke_width_px),
        )?;
        let legend_items = scene.create(Some(legend), NodeKind::Group)?;
        scene.set_attributes(legend_items, &Attributes::new().with_class("legend-items"))?;

        let tooltip = if config.capabilities.tooltip {
            Some(build_tooltip(scene, root, config)?)
        } else {
            None
        };

        Ok(Self {
            root,
            x_axis,
            y_axis,
            columns,
            legend_panel,
            legend_items,
            tooltip,
        })
    }
}

fn build_axis<S: SceneGraph>(
    scene: &mut S,
    root: NodeId,
    class: &str,
    with_outer_ticks: bool,
) -> ChartResult<AxisNodes> {
    let group = scene.create(Some(root), NodeKind::Group)?;
    scene.set_attributes(group, &Attributes::new().with_class(class))?;
    let domain = scene.create(Some(group), NodeKind::Line)?;
    scene.set_attributes(domain, &Attributes::new().with_class("domain"))?;

    let outer_ticks = if with_outer_ticks {
        let mut outer = [NodeId(0); 2];
        for slot in &mut outer {
            *slot = scene.create(Some(group), NodeKind::Line)?;
            scene.set_attributes(*slot, &Attributes::new().with_class("outer-tick"))?;
        }
        Some((outer[0], outer[1]))
    } else {
        None
    };

    Ok(AxisNodes {
        group,
        domain,
        outer_ticks,
    })
}

fn build_tooltip<S: SceneGraph>(
    scene: &mut S,
    root: NodeId,
    config: &ChartEngineConfig,
) -> ChartResult<TooltipNodes> {
    let style = config.tooltip;
    let tooltip_root = scene.create(Some(root), NodeKind::Group)?;
    scene.set_attributes(tooltip_root, &Attributes::new().with_class("tooltip"))?;
    scene.set_visible(tooltip_root, false)?;

    let panel = scene.create(Some(tooltip_root), NodeKind::Rect)?;
    scene.set_attributes(
        panel,
        &Attributes::new()
            .with_class("tooltip-panel")
            .with_fill(style.fill)
            .with_stroke(style.stroke, 0.5),
    )?;

    let content = scene.create(Some(tooltip_root), NodeKind::Group)?;
    scene.set_attributes(content, &Attributes::new().with_class("tooltip-content"))?;

    let labels = scene.create(Some(content), NodeKind::Text)?;
    scene.set_attributes(
        labels,
        &Attributes::new()
            .with_class("tooltip-labels")
            .with_font(style.font_size_px, TextAnchor::Start)
            .with_fill(Color::BLACK),
    )?;
    let values = scene.create(Some(content), NodeKind::Text)?;
    scene.set_attributes(
        values,
        &Attributes::new()
            .with_class("tooltip-values")
            .with_font(style.font_size_px, TextAnchor::End)
            .with_fill(Color::BLACK),
    )?;

    Ok(TooltipNodes {
        root: tooltip_root,
        panel,
        content,
        labels,
        values,
    })
}

/// Nodes owned by one column group besides the group itself.
#[derive(Debug, Clone, Default)]
pub(super) struct ColumnGroupNodes {
    pub(super) hit_area: Option<NodeId>,
    pub(super) bars: KeyedJoin<usize>,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct LegendRowNodes {
    pub(super) swatch: NodeId,
    pub(super) label: NodeId,
}

/// Data-bound node sets reconciled on every render pass.
#[derive(Debug, Clone, Default)]
pub(super) struct SceneJoins {
    pub(super) column_groups: KeyedJoin<usize>,
    pub(super) column_nodes: HashMap<usize, ColumnGroupNodes>,
    pub(super) legend_rows: KeyedJoin<usize>,
    pub(super) legend_parts: HashMap<usize, LegendRowNodes>,
    pub(super) category_ticks: KeyedJoin<usize>,
    pub(super) value_ticks: KeyedJoin<OrderedFloat<f64>>,
    /// Tick group to its label node.
    pub(super) tick_labels: HashMap<NodeId, NodeId>,
    pub(super) tooltip_labels: KeyedJoin<usize>,
    pub(super) tooltip_values: KeyedJoin<usize>,
}
