use tracing::warn;

use crate::core::Boundary;
use crate::error::ChartResult;
use crate::interaction::HitTarget;
use crate::render::{
    Attributes, Color, JoinDiff, NodeKind, PointerListener, SceneGraph, TextAnchor,
};

use super::ChartEngine;
use super::scene_nodes::LegendRowNodes;

/// Centers a legend of `content` size horizontally in `container`, starting
/// at `top`, and returns the padded panel bounds.
#[must_use]
pub fn legend_panel_bounds(container: Boundary, top: f64, content: Boundary, padding: f64) -> Boundary {
    Boundary::new(
        container.x + container.width / 2.0 - content.width / 2.0,
        top,
        content.width + padding * 2.0,
        content.height + padding * 2.0,
    )
}

impl<S: SceneGraph> ChartEngine<S> {
    pub(super) fn update_legend(&mut self) -> ChartResult<()> {
        let style = self.config.legend;
        let rows: Vec<(usize, String, Color)> = self
            .model
            .series
            .iter()
            .enumerate()
            .map(|(index, serie)| {
                let color = if self.model.inactive.is_active(index) {
                    self.colors.resolve(&serie.name)
                } else {
                    style.inactive_color
                };
                (index, serie.name.clone(), color)
            })
            .collect();
        let keys: Vec<usize> = rows.iter().map(|(index, _, _)| *index).collect();

        for diff in self.joins.legend_rows.diff(&keys) {
            match diff {
                JoinDiff::Exit(index, row) => {
                    self.joins.legend_rows.unbind(index);
                    self.hit_targets.remove(&row);
                    if let Some(parts) = self.joins.legend_parts.remove(&index) {
                        self.hit_targets.remove(&parts.swatch);
                        self.hit_targets.remove(&parts.label);
                    }
                    self.scene.unlisten(row);
                    self.scene.remove(row);
                }
                JoinDiff::Enter(index) => self.enter_legend_row(index)?,
                JoinDiff::Update(..) => {}
            }
        }

        for (index, name, color) in rows {
            let (Some(row), Some(parts)) = (
                self.joins.legend_rows.get(index),
                self.joins.legend_parts.get(&index).copied(),
            ) else {
                continue;
            };
            self.scene.set_attributes(
                row,
                &Attributes::new().with_translate(style.item_width_px * index as f64, 0.0),
            )?;
            self.scene
                .set_attributes(parts.swatch, &Attributes::new().with_fill(color))?;
            self.scene.set_attributes(
                parts.label,
                &Attributes::new().with_text(name).with_fill(color),
            )?;
        }

        self.layout_legend_panel()
    }

    fn enter_legend_row(&mut self, index: usize) -> ChartResult<()> {
        let style = self.config.legend;
        let row = self
            .scene
            .create(Some(self.scaffold.legend_items), NodeKind::Group)?;
        self.scene.set_attributes(
            row,
            &Attributes::new()
                .with_class("legend-row")
                .with_id(format!("legend-row-{index}"))
                .with_pointer_cursor(),
        )?;

        let swatch = self.scene.create(Some(row), NodeKind::Rect)?;
        self.scene.set_attributes(
            swatch,
            &Attributes::new()
                .with_class("legend-swatch")
                .with_position(0.0, 0.0)
                .with_size(style.swatch_size_px, style.swatch_size_px),
        )?;

        let label = self.scene.create(Some(row), NodeKind::Text)?;
        self.scene.set_attributes(
            label,
            &Attributes::new()
                .with_class("legend-label")
                .with_position(style.label_offset_px, style.swatch_size_px)
                .with_font(style.font_size_px, TextAnchor::Start),
        )?;

        self.scene.listen(row, PointerListener::Click)?;
        for node in [row, swatch, label] {
            self.hit_targets.insert(node, HitTarget::LegendRow(index));
        }
        self.joins.legend_rows.bind(index, row);
        self.joins
            .legend_parts
            .insert(index, LegendRowNodes { swatch, label });
        Ok(())
    }

    /// Measures the rendered rows and centers the padded panel beneath the
    /// category axis. A failed measurement keeps the previous placement.
    fn layout_legend_panel(&mut self) -> ChartResult<()> {
        let items = self.scaffold.legend_items;
        let content = match self.scene.measure(items) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    chart_id = self.chart_id,
                    error = %err,
                    "legend measurement failed, keeping previous legend placement"
                );
                return Ok(());
            }
        };

        let padding = self.config.legend.padding_px;
        let panel = legend_panel_bounds(
            self.layout.container,
            self.layout.legend_top,
            content,
            padding,
        );
        self.scene.set_attributes(
            self.scaffold.legend_panel,
            &Attributes::new()
                .with_position(panel.x, panel.y)
                .with_size(panel.width, panel.height),
        )?;
        self.scene.set_attributes(
            items,
            &Attributes::new().with_translate(
                panel.x + padding - content.x,
                panel.y + padding - content.y,
            ),
        )?;
        self.legend_panel = Some(panel);
        Ok(())
    }
}
