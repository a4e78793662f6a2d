use ordered_float::OrderedFloat;

use crate::core::ScaleState;
use crate::error::ChartResult;
use crate::render::{
    ASCENT_RATIO, Attributes, JoinDiff, NodeId, NodeKind, SceneGraph, TextAnchor, Transition,
};

use super::ChartEngine;
use super::axis_ticks::{category_ticks, format_value_tick, value_ticks};

const AXIS_TRANSITION: &str = "axis";
/// Vertical shift that centers value labels on their tick, in ems.
const VALUE_LABEL_CENTER_EM: f64 = 0.32;

/// Geometry of one tick group relative to its translate origin.
struct TickShape {
    line_end: (f64, f64),
    label_position: (f64, f64),
    anchor: TextAnchor,
}

impl<S: SceneGraph> ChartEngine<S> {
    pub(super) fn update_axes(&mut self, previous: Option<ScaleState>) -> ChartResult<()> {
        self.update_category_axis(previous)?;
        self.update_value_axis(previous)
    }

    fn update_category_axis(&mut self, previous: Option<ScaleState>) -> ChartResult<()> {
        let style = self.config.axis;
        let plot = self.layout.plot;
        let scale = self.scales.category;
        let axis = self.scaffold.x_axis;
        let transition = self.transition(AXIS_TRANSITION);

        self.scene.set_attributes(
            axis.group,
            &Attributes::new().with_translate(0.0, plot.y2()),
        )?;
        self.scene.set_attributes(
            axis.domain,
            &Attributes::new()
                .with_position(plot.x1(), 0.0)
                .with_end(plot.x2(), 0.0)
                .with_stroke(style.color, 1.0),
        )?;

        let ticks = category_ticks(
            scale,
            &self.model.categories,
            style.font_size_px,
            style.category_label_gap_px,
        );
        let keys: Vec<usize> = ticks.iter().map(|(index, _)| *index).collect();
        let shape = TickShape {
            line_end: (0.0, style.tick_size_px),
            label_position: (
                0.0,
                style.tick_size_px + style.tick_padding_px + style.font_size_px * ASCENT_RATIO,
            ),
            anchor: TextAnchor::Middle,
        };

        for diff in self.joins.category_ticks.diff(&keys) {
            match diff {
                JoinDiff::Exit(index, node) => {
                    self.joins.category_ticks.unbind(index);
                    self.exit_tick(node, (scale.tick_position(index), 0.0), transition)?;
                }
                JoinDiff::Enter(index) => {
                    let start_x = previous.map_or_else(
                        || scale.tick_position(index),
                        |p| p.category.tick_position(index),
                    );
                    let node = self.enter_tick(axis.group, (start_x, 0.0), &shape)?;
                    self.joins.category_ticks.bind(index, node);
                }
                JoinDiff::Update(..) => {}
            }
        }

        for (index, x) in ticks {
            let tick = self.joins.category_ticks.get(index);
            let label = self.model.categories[index].clone();
            self.settle_tick(tick, (x, 0.0), label, transition)?;
        }
        Ok(())
    }

    fn update_value_axis(&mut self, previous: Option<ScaleState>) -> ChartResult<()> {
        let style = self.config.axis;
        let plot = self.layout.plot;
        let scale = self.scales.value;
        let axis = self.scaffold.y_axis;
        let transition = self.transition(AXIS_TRANSITION);

        self.scene.set_attributes(
            axis.group,
            &Attributes::new().with_translate(plot.x1(), 0.0),
        )?;
        self.scene.set_attributes(
            axis.domain,
            &Attributes::new()
                .with_position(0.0, plot.y1())
                .with_end(0.0, plot.y2())
                .with_stroke(style.color, 1.0),
        )?;
        if let Some((top, bottom)) = axis.outer_ticks {
            for (node, y) in [(top, plot.y1()), (bottom, plot.y2())] {
                self.scene.set_attributes(
                    node,
                    &Attributes::new()
                        .with_position(-style.tick_size_px, y)
                        .with_end(0.0, y)
                        .with_stroke(style.color, 1.0),
                )?;
            }
        }

        let ticks = value_ticks(scale, style.value_tick_count);
        let step = scale.tick_step(style.value_tick_count);
        let keys: Vec<OrderedFloat<f64>> =
            ticks.iter().map(|(value, _)| OrderedFloat(*value)).collect();
        let shape = TickShape {
            line_end: (-style.tick_size_px, 0.0),
            label_position: (
                -(style.tick_size_px + style.tick_padding_px),
                style.font_size_px * VALUE_LABEL_CENTER_EM,
            ),
            anchor: TextAnchor::End,
        };

        for diff in self.joins.value_ticks.diff(&keys) {
            match diff {
                JoinDiff::Exit(value, node) => {
                    self.joins.value_ticks.unbind(value);
                    self.exit_tick(node, (0.0, scale.map(value.0)), transition)?;
                }
                JoinDiff::Enter(value) => {
                    let start_y =
                        previous.map_or_else(|| scale.map(value.0), |p| p.value.map(value.0));
                    let node = self.enter_tick(axis.group, (0.0, start_y), &shape)?;
                    self.joins.value_ticks.bind(value, node);
                }
                JoinDiff::Update(..) => {}
            }
        }

        for (value, y) in ticks {
            let tick = self.joins.value_ticks.get(OrderedFloat(value));
            self.settle_tick(tick, (0.0, y), format_value_tick(value, step), transition)?;
        }
        Ok(())
    }

    fn enter_tick(
        &mut self,
        axis_group: NodeId,
        origin: (f64, f64),
        shape: &TickShape,
    ) -> ChartResult<NodeId> {
        let style = self.config.axis;
        let tick = self.scene.create(Some(axis_group), NodeKind::Group)?;
        self.scene.set_attributes(
            tick,
            &Attributes::new()
                .with_class("tick")
                .with_translate(origin.0, origin.1)
                .with_opacity(0.0),
        )?;

        let line = self.scene.create(Some(tick), NodeKind::Line)?;
        self.scene.set_attributes(
            line,
            &Attributes::new()
                .with_position(0.0, 0.0)
                .with_end(shape.line_end.0, shape.line_end.1)
                .with_stroke(style.color, 1.0),
        )?;

        let label = self.scene.create(Some(tick), NodeKind::Text)?;
        self.scene.set_attributes(
            label,
            &Attributes::new()
                .with_position(shape.label_position.0, shape.label_position.1)
                .with_font(style.font_size_px, shape.anchor)
                .with_fill(style.color),
        )?;
        self.joins.tick_labels.insert(tick, label);
        Ok(tick)
    }

    fn settle_tick(
        &mut self,
        tick: Option<NodeId>,
        position: (f64, f64),
        label: String,
        transition: Transition,
    ) -> ChartResult<()> {
        let Some(tick) = tick else {
            return Ok(());
        };
        if let Some(label_node) = self.joins.tick_labels.get(&tick).copied() {
            self.scene
                .set_attributes(label_node, &Attributes::new().with_text(label))?;
        }
        self.scene.transition(
            tick,
            transition,
            &Attributes::new()
                .with_translate(position.0, position.1)
                .with_opacity(1.0),
        )
    }

    fn exit_tick(
        &mut self,
        tick: NodeId,
        position: (f64, f64),
        transition: Transition,
    ) -> ChartResult<()> {
        self.joins.tick_labels.remove(&tick);
        self.scene.transition(
            tick,
            transition.then_remove(),
            &Attributes::new()
                .with_translate(position.0, position.1)
                .with_opacity(0.0),
        )
    }
}
