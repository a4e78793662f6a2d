use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::Boundary;
use crate::error::ChartResult;
use crate::render::{Attributes, JoinDiff, KeyedJoin, NodeId, NodeKind, SceneGraph};

use super::scene_nodes::TooltipNodes;
use super::{ChartEngine, TooltipStyle};

type TooltipLines = SmallVec<[String; 8]>;

/// Resolved tooltip position for the current hover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    /// Translate applied to the tooltip root.
    pub x: f64,
    pub y: f64,
    /// Measured content box in tooltip-local coordinates.
    pub content: Boundary,
}

/// Places a tooltip of `content` size next to `pointer`, kept inside `plot`
/// horizontally.
///
/// The tooltip starts at the pointer and is shifted left when it would
/// overflow the plot's right edge; the left edge wins when the content is
/// wider than the plot. Vertically it sits `pointer_gap_px` above the pointer
/// and drops below the plot top when it would rise past it.
#[must_use]
pub fn place_tooltip(
    content: Boundary,
    pointer: (f64, f64),
    plot: Boundary,
    style: &TooltipStyle,
) -> (f64, f64) {
    let mut x = pointer.0;
    if plot.x2() < x + content.width {
        x = plot.x2() - content.width;
    }
    if x < plot.x1() {
        x = plot.x1();
    }

    let mut y = pointer.1 - content.height - style.pointer_gap_px;
    if y < plot.y1() {
        y = plot.y1() + content.height + style.top_fallback_offset_px;
    }
    (x, y)
}

impl<S: SceneGraph> ChartEngine<S> {
    /// Rebuilds tooltip lines for the hovered category and repositions it,
    /// or hides it when nothing is hovered.
    pub(super) fn update_tooltip(&mut self) -> ChartResult<()> {
        let Some(nodes) = self.scaffold.tooltip else {
            return Ok(());
        };
        let hovered = self.model.interaction.hover().and_then(|hover| {
            self.model
                .data
                .get(hover.category_index)
                .map(|record| (hover, record))
        });
        let Some((hover, record)) = hovered else {
            self.tooltip_placement = None;
            return self.scene.set_visible(nodes.root, false);
        };

        let (labels, values): (TooltipLines, TooltipLines) = record
            .data
            .iter()
            .filter(|entry| self.model.inactive.is_active(entry.series_index))
            .map(|entry| (entry.name.clone(), entry.value.to_string()))
            .unzip();

        let style = self.config.tooltip;
        sync_text_spans(
            &mut self.scene,
            &mut self.joins.tooltip_labels,
            nodes.labels,
            &labels,
            style.line_height_px,
        )?;
        sync_text_spans(
            &mut self.scene,
            &mut self.joins.tooltip_values,
            nodes.values,
            &values,
            style.line_height_px,
        )?;
        self.scene.set_visible(nodes.root, true)?;

        let content = match self.layout_tooltip_content(nodes, style.padding_px) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    chart_id = self.chart_id,
                    error = %err,
                    "tooltip measurement failed, hiding tooltip"
                );
                self.tooltip_placement = None;
                return self.scene.set_visible(nodes.root, false);
            }
        };

        let (x, y) = place_tooltip(
            content,
            (hover.pointer_x, hover.pointer_y),
            self.layout.plot,
            &style,
        );
        self.scene
            .set_attributes(nodes.root, &Attributes::new().with_translate(x, y))?;
        self.tooltip_placement = Some(TooltipPlacement { x, y, content });
        Ok(())
    }

    /// Puts the values column beside the labels and sizes the panel around
    /// both, returning the measured content box.
    fn layout_tooltip_content(
        &mut self,
        nodes: TooltipNodes,
        padding: f64,
    ) -> ChartResult<Boundary> {
        let labels_box = self.scene.measure(nodes.labels)?;
        let values_box = self.scene.measure(nodes.values)?;
        self.scene.set_attributes(
            nodes.values,
            &Attributes::new()
                .with_translate(labels_box.width + values_box.width + padding, 0.0),
        )?;

        let content = self.scene.measure(nodes.content)?;
        let panel = content.outset(padding);
        self.scene.set_attributes(
            nodes.panel,
            &Attributes::new()
                .with_position(0.0, 0.0)
                .with_size(panel.width, panel.height)
                .with_translate(panel.x, panel.y),
        )?;
        Ok(content)
    }
}

/// One `TextSpan` per line under `parent`, stacked `line_height` apart.
fn sync_text_spans<S: SceneGraph>(
    scene: &mut S,
    join: &mut KeyedJoin<usize>,
    parent: NodeId,
    lines: &[String],
    line_height: f64,
) -> ChartResult<()> {
    let keys: Vec<usize> = (0..lines.len()).collect();
    for diff in join.diff(&keys) {
        match diff {
            JoinDiff::Exit(line, span) => {
                join.unbind(line);
                scene.remove(span);
            }
            JoinDiff::Enter(line) => {
                let span = scene.create(Some(parent), NodeKind::TextSpan)?;
                join.bind(line, span);
            }
            JoinDiff::Update(..) => {}
        }
    }

    for (line, text) in lines.iter().enumerate() {
        if let Some(span) = join.get(line) {
            scene.set_attributes(
                span,
                &Attributes::new()
                    .with_position(0.0, line as f64 * line_height)
                    .with_text(text.as_str()),
            )?;
        }
    }
    Ok(())
}
