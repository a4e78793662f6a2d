use column_chart::core::{Series, SeriesLengthPolicy, default_categories, transform_series};
use column_chart::error::ChartError;

fn categories(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

#[test]
fn transposes_series_into_category_groups() {
    let series = vec![
        Series::new("deaths", vec![1.0, 5.0, 2.0]),
        Series::new("serious", vec![3.0, 1.0, 4.0]),
    ];
    let grouped = transform_series(
        &series,
        &categories(&["Jan", "Feb", "Mar"]),
        SeriesLengthPolicy::ZeroFill,
    )
    .expect("transform");

    assert_eq!(grouped.len(), 3);
    let feb = &grouped[1];
    assert_eq!(feb.category, "Feb");
    assert_eq!(feb.index, 1);
    let values: Vec<(&str, f64)> = feb
        .data
        .iter()
        .map(|entry| (entry.name.as_str(), entry.value))
        .collect();
    assert_eq!(values, vec![("deaths", 5.0), ("serious", 1.0)]);
}

#[test]
fn default_categories_are_stringified_indices() {
    let series = vec![Series::new("count", vec![4.0, 8.0, 15.0])];
    assert_eq!(default_categories(&series), vec!["0", "1", "2"]);
    assert!(default_categories(&[]).is_empty());
}

#[test]
fn short_series_are_zero_filled_by_default() {
    let series = vec![
        Series::new("deaths", vec![1.0, 2.0]),
        Series::new("serious", vec![3.0]),
    ];
    let grouped = transform_series(
        &series,
        &categories(&["a", "b"]),
        SeriesLengthPolicy::ZeroFill,
    )
    .expect("transform");

    let entry = grouped[1].entry(1).expect("zero-filled entry");
    assert_eq!(entry.value, 0.0);
    assert_eq!(entry.series_index, 1);
}

#[test]
fn sparse_policy_leaves_gaps() {
    let series = vec![
        Series::new("deaths", vec![1.0, 2.0]),
        Series::new("serious", vec![3.0]),
    ];
    let grouped = transform_series(&series, &categories(&["a", "b"]), SeriesLengthPolicy::Sparse)
        .expect("transform");

    assert_eq!(grouped[1].data.len(), 1);
    assert!(grouped[1].entry(1).is_none());
    assert_eq!(grouped[1].entry(0).map(|entry| entry.value), Some(2.0));
}

#[test]
fn reject_policy_reports_mismatch() {
    let series = vec![Series::new("serious", vec![3.0])];
    let result = transform_series(&series, &categories(&["a", "b"]), SeriesLengthPolicy::Reject);

    assert!(matches!(
        result,
        Err(ChartError::SeriesLengthMismatch { series, expected: 2, actual: 1 }) if series == "serious"
    ));
}

#[test]
fn extra_points_are_dropped() {
    let series = vec![Series::new("count", vec![1.0, 2.0, 3.0])];
    let grouped = transform_series(&series, &categories(&["a"]), SeriesLengthPolicy::Reject)
        .expect("transform");
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].data[0].value, 1.0);
}

#[test]
fn non_finite_values_are_rejected() {
    let series = vec![Series::new("count", vec![1.0, f64::INFINITY])];
    let result = transform_series(&series, &categories(&["a", "b"]), SeriesLengthPolicy::ZeroFill);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}
