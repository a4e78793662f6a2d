use ordered_float::OrderedFloat;

use crate::core::{
    CategoryScale, CategoryWindow, ChartLayout, InactiveSeries, LinearScale, Series,
};
use crate::error::ChartResult;

/// Headroom applied above the largest active value.
pub const VALUE_DOMAIN_HEADROOM: f64 = 1.05;

/// Largest value among active series, or `0.0` when none is active.
#[must_use]
pub fn active_value_max(series: &[Series], inactive: &InactiveSeries) -> f64 {
    series
        .iter()
        .enumerate()
        .filter(|(index, _)| inactive.is_active(*index))
        .flat_map(|(_, serie)| serie.data.iter().copied())
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |max| max.0)
}

/// Upper bound of the value domain: active max with headroom, saturating at
/// `f64::MAX` so finite inputs always give a finite domain.
#[must_use]
pub fn value_domain_max(series: &[Series], inactive: &InactiveSeries) -> f64 {
    (active_value_max(series, inactive) * VALUE_DOMAIN_HEADROOM).min(f64::MAX)
}

/// Derived mappings, recomputed in full after every state mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub category: CategoryScale,
    pub value: LinearScale,
}

/// Inputs for one rescale pass.
#[derive(Debug, Clone, Copy)]
pub struct ScaleInputs<'a> {
    pub series: &'a [Series],
    pub inactive: &'a InactiveSeries,
    pub window: CategoryWindow,
    pub layout: ChartLayout,
    pub continuous_category_axis: bool,
    pub band_padding: f64,
}

impl ScaleState {
    pub fn compute(inputs: ScaleInputs<'_>) -> ChartResult<Self> {
        let plot = inputs.layout.plot;
        let category = if inputs.continuous_category_axis {
            CategoryScale::continuous(inputs.window, (plot.x1(), plot.x2()))?
        } else {
            CategoryScale::banded(inputs.window, (plot.x1(), plot.x2()), inputs.band_padding)?
        };

        let value = LinearScale::new(
            (0.0, value_domain_max(inputs.series, inputs.inactive)),
            (plot.y2(), plot.y1()),
        )?;

        Ok(Self { category, value })
    }

    /// Pixel row of the zero baseline.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.value.map(0.0)
    }

    /// Column height for `value`; negative values collapse to the baseline.
    #[must_use]
    pub fn column_height(self, value: f64) -> f64 {
        (self.baseline() - self.value.map(value)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{active_value_max, value_domain_max};
    use crate::core::{InactiveSeries, Series};
    use approx::assert_relative_eq;

    #[test]
    fn inactive_series_do_not_contribute_to_domain() {
        let series = vec![
            Series::new("deaths", vec![1.0, 5.0, 2.0]),
            Series::new("serious", vec![3.0, 1.0, 4.0]),
        ];
        let mut inactive = InactiveSeries::new();
        assert_relative_eq!(value_domain_max(&series, &inactive), 5.25);

        inactive.toggle(0);
        assert_relative_eq!(value_domain_max(&series, &inactive), 4.2);
    }

    #[test]
    fn headroom_saturates_near_float_max() {
        let series = vec![Series::new("huge", vec![f64::MAX * 0.99])];
        let max = value_domain_max(&series, &InactiveSeries::new());
        assert!(max.is_finite());
        assert_eq!(max, f64::MAX);
    }

    #[test]
    fn all_inactive_yields_zero() {
        let series = vec![Series::new("a", vec![3.0])];
        let mut inactive = InactiveSeries::new();
        inactive.toggle(0);
        assert_eq!(active_value_max(&series, &inactive), 0.0);
    }
}
