use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::interaction::HitTarget;
use crate::render::{Attributes, Color, JoinDiff, NodeId, NodeKind, SceneGraph, Transition};

use super::ChartEngine;
use super::scene_nodes::ColumnGroupNodes;

const COLUMN_TRANSITION: &str = "columns";

/// Resting geometry of one column in chart pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Column geometry relative to its group origin.
#[derive(Debug, Clone, Copy)]
struct ColumnTarget {
    offset_x: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl<S: SceneGraph> ChartEngine<S> {
    /// Width of one column; the group width split across active series.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        let active = self.model.inactive.active_count(self.model.series.len());
        if active == 0 {
            return 0.0;
        }
        self.scales.category.group_width() / active as f64
    }

    /// Where the column for `series_index` in `category_index` settles once
    /// transitions finish. Inactive series report a zero-size column.
    #[must_use]
    pub fn column_geometry(
        &self,
        category_index: usize,
        series_index: usize,
    ) -> Option<ColumnGeometry> {
        let entry = self.model.data.get(category_index)?.entry(series_index)?;
        let target = self.column_target(series_index, entry.value);
        Some(ColumnGeometry {
            x: self.scales.category.position(category_index) + target.offset_x,
            y: target.top,
            width: target.width,
            height: target.height,
        })
    }

    fn column_target(&self, series_index: usize, value: f64) -> ColumnTarget {
        let width = self.column_width();
        let baseline = self.scales.baseline();
        let offset_x = width * self.model.inactive.collapse_slot(series_index) as f64;
        if self.model.inactive.is_active(series_index) {
            let height = self.scales.column_height(value);
            ColumnTarget {
                offset_x,
                top: baseline - height,
                width,
                height,
            }
        } else {
            ColumnTarget {
                offset_x,
                top: baseline,
                width: 0.0,
                height: 0.0,
            }
        }
    }

    pub(super) fn update_columns(&mut self) -> ChartResult<()> {
        let transition = self.transition(COLUMN_TRANSITION);
        let keys: Vec<usize> = self.model.data.iter().map(|group| group.index).collect();

        for diff in self.joins.column_groups.diff(&keys) {
            match diff {
                JoinDiff::Exit(category, node) => {
                    self.exit_column_group(category, node, transition)?;
                }
                JoinDiff::Enter(category) => self.enter_column_group(category)?,
                JoinDiff::Update(category, node) => {
                    let x = self.scales.category.position(category);
                    self.scene.transition(
                        node,
                        transition,
                        &Attributes::new().with_translate(x, 0.0),
                    )?;
                }
            }
        }

        for category in keys {
            self.update_group_columns(category, transition)?;
        }
        Ok(())
    }

    fn enter_column_group(&mut self, category: usize) -> ChartResult<()> {
        let group = self.scene.create(Some(self.scaffold.columns), NodeKind::Group)?;
        self.scene.set_attributes(
            group,
            &Attributes::new()
                .with_class("column-group")
                .with_translate(self.scales.category.position(category), 0.0),
        )?;

        let hit_area = self.scene.create(Some(group), NodeKind::Rect)?;
        self.scene.set_attributes(
            hit_area,
            &Attributes::new()
                .with_class("column-area")
                .with_fill(Color::TRANSPARENT),
        )?;

        self.hit_targets
            .insert(group, HitTarget::ColumnGroup(category));
        self.hit_targets
            .insert(hit_area, HitTarget::ColumnGroup(category));
        self.joins.column_groups.bind(category, group);
        self.joins.column_nodes.insert(
            category,
            ColumnGroupNodes {
                hit_area: Some(hit_area),
                ..ColumnGroupNodes::default()
            },
        );
        Ok(())
    }

    fn exit_column_group(
        &mut self,
        category: usize,
        group: NodeId,
        transition: Transition,
    ) -> ChartResult<()> {
        self.joins.column_groups.unbind(category);
        self.hit_targets.remove(&group);

        let baseline = self.scales.baseline();
        if let Some(mut nodes) = self.joins.column_nodes.remove(&category) {
            if let Some(hit_area) = nodes.hit_area {
                self.hit_targets.remove(&hit_area);
            }
            for bar in nodes.bars.drain() {
                self.hit_targets.remove(&bar);
                self.scene.transition(
                    bar,
                    transition,
                    &Attributes::new().with_height(0.0).with_translate(0.0, baseline),
                )?;
            }
        }
        self.scene
            .transition(group, transition.then_remove(), &Attributes::new())
    }

    fn update_group_columns(&mut self, category: usize, transition: Transition) -> ChartResult<()> {
        let Some(group) = self.joins.column_groups.get(category) else {
            return Ok(());
        };
        let Some(record) = self.model.data.get(category) else {
            return Ok(());
        };
        let entries: Vec<(usize, f64, Color)> = record
            .data
            .iter()
            .map(|entry| {
                (
                    entry.series_index,
                    entry.value,
                    self.colors.resolve(&entry.name),
                )
            })
            .collect();

        let plot = self.layout.plot;
        let hit_width = self.scales.category.hit_width();
        let baseline = self.scales.baseline();
        let Some(nodes) = self.joins.column_nodes.get(&category) else {
            return Ok(());
        };
        if let Some(hit_area) = nodes.hit_area {
            self.scene.set_attributes(
                hit_area,
                &Attributes::new()
                    .with_translate(0.0, plot.y1())
                    .with_size(hit_width, plot.height),
            )?;
        }

        let keys: Vec<usize> = entries.iter().map(|(series, _, _)| *series).collect();
        let diffs = nodes.bars.diff(&keys);
        for diff in diffs {
            match diff {
                JoinDiff::Exit(series, bar) => {
                    self.unbind_bar(category, series);
                    self.hit_targets.remove(&bar);
                    let offset_x =
                        self.column_width() * self.model.inactive.collapse_slot(series) as f64;
                    self.scene.transition(
                        bar,
                        transition.then_remove(),
                        &Attributes::new()
                            .with_height(0.0)
                            .with_translate(offset_x, baseline),
                    )?;
                }
                JoinDiff::Enter(series) => {
                    let value = entries
                        .iter()
                        .find(|(index, _, _)| *index == series)
                        .map_or(0.0, |(_, value, _)| *value);
                    let target = self.column_target(series, value);
                    let bar = self.scene.create(Some(group), NodeKind::Rect)?;
                    self.scene.set_attributes(
                        bar,
                        &Attributes::new()
                            .with_class("column")
                            .with_position(0.0, 0.0)
                            .with_size(target.width, 0.0)
                            .with_translate(target.offset_x, baseline),
                    )?;
                    self.hit_targets
                        .insert(bar, HitTarget::ColumnGroup(category));
                    if let Some(nodes) = self.joins.column_nodes.get_mut(&category) {
                        nodes.bars.bind(series, bar);
                    }
                }
                JoinDiff::Update(..) => {}
            }
        }

        for (series, value, color) in entries {
            let Some(bar) = self.column_node(category, series) else {
                continue;
            };
            let target = self.column_target(series, value);
            self.scene.transition(
                bar,
                transition,
                &Attributes::new()
                    .with_fill(color)
                    .with_size(target.width, target.height)
                    .with_translate(target.offset_x, target.top),
            )?;
        }
        Ok(())
    }

    fn unbind_bar(&mut self, category: usize, series: usize) {
        if let Some(nodes) = self.joins.column_nodes.get_mut(&category) {
            nodes.bars.unbind(series);
        }
    }
}
