use tracing::trace;

use crate::core::{ScaleInputs, ScaleState};
use crate::error::ChartResult;
use crate::render::SceneGraph;

use super::ChartEngine;

impl<S: SceneGraph> ChartEngine<S> {
    /// Recomputes both scales from the model and returns the previous pair.
    pub(super) fn rescale(&mut self) -> ChartResult<ScaleState> {
        let next = ScaleState::compute(ScaleInputs {
            series: &self.model.series,
            inactive: &self.model.inactive,
            window: self.model.window,
            layout: self.layout,
            continuous_category_axis: self.config.capabilities.continuous_category_axis,
            band_padding: self.config.band_padding,
        })?;
        let previous = std::mem::replace(&mut self.scales, next);
        trace!(
            chart_id = self.chart_id,
            value_domain_max = next.value.domain().1,
            category_start = next.category.window().start(),
            category_end = next.category.window().end(),
            "rescaled column chart"
        );
        Ok(previous)
    }

    /// Reconciles every data-bound part of the scene against current state.
    ///
    /// `previous` scales seed entering axis ticks so they slide in from
    /// their old position.
    pub(super) fn refresh(&mut self, previous: Option<ScaleState>) -> ChartResult<()> {
        self.update_axes(previous)?;
        self.update_columns()?;
        self.update_legend()?;
        self.update_tooltip()
    }

    /// Rescales and refreshes in one step.
    pub(super) fn rescale_and_refresh(&mut self) -> ChartResult<()> {
        let previous = self.rescale()?;
        self.refresh(Some(previous))
    }
}
