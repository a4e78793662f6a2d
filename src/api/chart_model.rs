use crate::core::{
    CategoryWindow, ChartData, InactiveSeries, Series, SeriesLengthPolicy, default_categories,
    transform_series,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionState;

use super::ChartInput;

/// Mutable chart domain state: source series, grouped records, visible
/// window, active set and pointer state.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub(super) series: Vec<Series>,
    pub(super) categories: Vec<String>,
    pub(super) data: Vec<ChartData>,
    pub(super) window: CategoryWindow,
    pub(super) range: (String, String),
    pub(super) inactive: InactiveSeries,
    pub(super) interaction: InteractionState,
}

impl ChartModel {
    pub(super) fn from_input(input: ChartInput, policy: SeriesLengthPolicy) -> ChartResult<Self> {
        let ChartInput {
            series,
            categories,
            range,
        } = input;

        let categories = categories.unwrap_or_else(|| default_categories(&series));
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "chart requires at least one category".to_owned(),
            ));
        }

        let data = transform_series(&series, &categories, policy)?;
        let (window, range) = match range {
            Some((from, to)) => {
                let window = CategoryWindow::resolve(&categories, (from.as_str(), to.as_str()))?;
                (window, (from, to))
            }
            None => {
                let window = CategoryWindow::full(categories.len())?;
                let range = (
                    categories[window.start()].clone(),
                    categories[window.end()].clone(),
                );
                (window, range)
            }
        };

        Ok(Self {
            series,
            categories,
            data,
            window,
            range,
            inactive: InactiveSeries::new(),
            interaction: InteractionState::default(),
        })
    }

    /// Adopts a freshly built model while keeping toggles that still address
    /// an existing series.
    pub(super) fn replace_with(&mut self, mut next: Self) {
        let mut inactive = std::mem::take(&mut self.inactive);
        inactive.retain_below(next.series.len());
        next.inactive = inactive;
        *self = next;
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn data(&self) -> &[ChartData] {
        &self.data
    }

    #[must_use]
    pub fn inactive(&self) -> &InactiveSeries {
        &self.inactive
    }
}
