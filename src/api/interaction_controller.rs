use tracing::{debug, trace};

use crate::core::CategoryWindow;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitTarget, PointerEventKind, SceneEvent};
use crate::render::SceneGraph;

use super::{ChartEngine, ChartInput, ChartModel};

impl<S: SceneGraph> ChartEngine<S> {
    /// Flips the active flag of one series and animates the chart to the
    /// new state.
    ///
    /// Toggling the same index twice restores the prior visual state.
    pub fn toggle_series(&mut self, series_index: usize) -> ChartResult<()> {
        if !self.is_ready() {
            trace!(chart_id = self.chart_id, series_index, "ignoring toggle on disposed chart");
            return Ok(());
        }
        let len = self.model.series.len();
        if series_index >= len {
            return Err(ChartError::SeriesIndexOutOfRange {
                index: series_index,
                len,
            });
        }

        let active = self.model.inactive.toggle(series_index);
        debug!(
            chart_id = self.chart_id,
            series_index,
            active,
            "toggled series"
        );
        self.rescale_and_refresh()
    }

    /// Narrows the visible category window to `from..=to`.
    ///
    /// Unknown or reversed boundaries leave the chart untouched.
    pub fn set_range(&mut self, from: &str, to: &str) -> ChartResult<()> {
        if !self.is_ready() {
            trace!(chart_id = self.chart_id, from, to, "ignoring range on disposed chart");
            return Ok(());
        }
        if !self.config.capabilities.zoom_range {
            return Err(ChartError::CapabilityDisabled("zoom_range"));
        }

        let window = CategoryWindow::resolve(&self.model.categories, (from, to))?;
        self.model.window = window;
        self.model.range = (from.to_owned(), to.to_owned());
        debug!(
            chart_id = self.chart_id,
            from,
            to,
            start = window.start(),
            end = window.end(),
            "set category range"
        );
        self.rescale_and_refresh()
    }

    /// Swaps in new series, categories and range, reconciling existing
    /// nodes by key. Toggles that still address a series are kept; hover
    /// is cleared.
    pub fn replace_data(&mut self, input: ChartInput) -> ChartResult<()> {
        if !self.is_ready() {
            trace!(chart_id = self.chart_id, "ignoring data on disposed chart");
            return Ok(());
        }

        let next = ChartModel::from_input(input, self.config.series_length_policy)?;
        self.model.replace_with(next);
        debug!(
            chart_id = self.chart_id,
            series = self.model.series.len(),
            categories = self.model.categories.len(),
            "replaced chart data"
        );
        self.rescale_and_refresh()
    }

    /// Routes one pointer event forwarded by the host.
    ///
    /// Clicks on a legend row toggle its series; pointer moves over a column
    /// group drive the tooltip; leaving the columns hides it. Anything else
    /// is ignored.
    pub fn dispatch_event(&mut self, event: SceneEvent) -> ChartResult<()> {
        if !self.is_ready() {
            return Ok(());
        }

        let target = self.hit_targets.get(&event.target).copied();
        match (event.kind, target) {
            (PointerEventKind::Click, Some(HitTarget::LegendRow(series_index))) => {
                self.toggle_series(series_index)
            }
            (PointerEventKind::Move { x, y }, Some(HitTarget::ColumnGroup(category_index))) => {
                if !self.config.capabilities.tooltip {
                    return Ok(());
                }
                self.model.interaction.on_pointer_move(x, y, category_index);
                self.update_tooltip()
            }
            (PointerEventKind::Out, Some(HitTarget::ColumnGroup(_))) => self.leave_columns(),
            (PointerEventKind::Out, None) if event.target == self.scaffold.columns => {
                self.leave_columns()
            }
            (kind, target) => {
                trace!(
                    chart_id = self.chart_id,
                    node = event.target.0,
                    ?kind,
                    ?target,
                    "ignoring pointer event"
                );
                Ok(())
            }
        }
    }

    fn leave_columns(&mut self) -> ChartResult<()> {
        if self.model.interaction.hover().is_none() {
            return Ok(());
        }
        self.model.interaction.on_pointer_leave();
        self.update_tooltip()
    }
}
