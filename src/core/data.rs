use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// One named sequence of values plotted in a single color across categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// One series value inside a category group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Position of the owning series in the source series list.
    pub series_index: usize,
    pub name: String,
    pub value: f64,
}

/// Category-indexed grouped record built by transposing all series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub category: String,
    pub index: usize,
    pub data: Vec<GroupEntry>,
}

impl ChartData {
    /// Entry for `series_index`, if that slot was populated.
    #[must_use]
    pub fn entry(&self, series_index: usize) -> Option<&GroupEntry> {
        self.data
            .iter()
            .find(|entry| entry.series_index == series_index)
    }
}

/// How series whose length differs from the category count are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesLengthPolicy {
    /// Report `SeriesLengthMismatch` for any short series.
    Reject,
    /// Fill missing slots with zero so every group has one entry per series.
    #[default]
    ZeroFill,
    /// Leave missing slots absent; they render as collapsed columns.
    Sparse,
}

/// Stringified zero-based indices, one per point of the first series.
#[must_use]
pub fn default_categories(series: &[Series]) -> Vec<String> {
    series
        .first()
        .map(|first| (0..first.data.len()).map(|index| index.to_string()).collect())
        .unwrap_or_default()
}

/// Transposes `series` into one grouped record per category, preserving
/// category order and series order inside each group.
pub fn transform_series(
    series: &[Series],
    categories: &[String],
    policy: SeriesLengthPolicy,
) -> ChartResult<Vec<ChartData>> {
    validate_series_values(series)?;

    let expected = categories.len();
    for serie in series {
        let actual = serie.data.len();
        if actual < expected && policy == SeriesLengthPolicy::Reject {
            return Err(ChartError::SeriesLengthMismatch {
                series: serie.name.clone(),
                expected,
                actual,
            });
        }
        if actual > expected {
            warn!(
                series = %serie.name,
                expected,
                actual,
                "dropping series points beyond the last category"
            );
        }
    }

    let grouped = categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let data = series
                .iter()
                .enumerate()
                .filter_map(|(series_index, serie)| {
                    let value = match serie.data.get(index) {
                        Some(value) => *value,
                        None if policy == SeriesLengthPolicy::ZeroFill => 0.0,
                        None => return None,
                    };
                    Some(GroupEntry {
                        series_index,
                        name: serie.name.clone(),
                        value,
                    })
                })
                .collect();
            ChartData {
                category: category.clone(),
                index,
                data,
            }
        })
        .collect();

    Ok(grouped)
}

fn validate_series_values(series: &[Series]) -> ChartResult<()> {
    for serie in series {
        if let Some(position) = serie.data.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has a non-finite value at index {position}",
                serie.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Series, SeriesLengthPolicy, default_categories, transform_series};

    #[test]
    fn default_categories_follow_first_series_length() {
        let series = vec![Series::new("a", vec![1.0, 2.0, 3.0])];
        assert_eq!(default_categories(&series), vec!["0", "1", "2"]);
        assert!(default_categories(&[]).is_empty());
    }

    #[test]
    fn sparse_policy_keeps_series_index_for_present_entries() {
        let series = vec![
            Series::new("short", vec![1.0]),
            Series::new("full", vec![2.0, 3.0]),
        ];
        let categories = vec!["a".to_owned(), "b".to_owned()];
        let grouped =
            transform_series(&series, &categories, SeriesLengthPolicy::Sparse).expect("grouped");

        assert_eq!(grouped[1].data.len(), 1);
        assert_eq!(grouped[1].data[0].series_index, 1);
        assert!(grouped[1].entry(0).is_none());
    }
}
