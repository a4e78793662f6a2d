use approx::assert_relative_eq;
use column_chart::core::{
    Boundary, CategoryScale, CategoryWindow, ChartLayout, InactiveSeries,
    LayoutMargins, LinearScale, ScaleInputs, ScaleState, Series,
};

fn layout() -> ChartLayout {
    ChartLayout::resolve(
        Boundary::new(0.0, 0.0, 500.0, 500.0),
        LayoutMargins::default(),
    )
    .expect("valid layout")
}

#[test]
fn value_scale_maps_zero_to_plot_bottom() {
    let series = vec![Series::new("count", vec![2.0, 10.0])];
    let inactive = InactiveSeries::new();
    let scales = ScaleState::compute(ScaleInputs {
        series: &series,
        inactive: &inactive,
        window: CategoryWindow::full(2).expect("window"),
        layout: layout(),
        continuous_category_axis: true,
        band_padding: 0.05,
    })
    .expect("scales");

    assert_eq!(scales.baseline(), 430.0);
    assert_relative_eq!(scales.value.map(10.5), 20.0, epsilon = 1e-9);
    assert_relative_eq!(scales.column_height(10.5), 410.0, epsilon = 1e-9);
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((0.0, 5.25), (430.0, 20.0)).expect("valid scale");
    let original = 3.7;
    let px = scale.map(original);
    assert_relative_eq!(scale.invert(px), original, epsilon = 1e-9);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
}

#[test]
fn ticks_land_on_round_steps() {
    let scale = LinearScale::new((0.0, 4.2), (430.0, 20.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(4.0));
    assert_eq!(ticks.len(), 9);
    assert_relative_eq!(scale.tick_step(10), 0.5, epsilon = 1e-12);
}

#[test]
fn continuous_category_scale_spans_window() {
    let window = CategoryWindow::full(3).expect("window");
    let scale = CategoryScale::continuous(window, (60.0, 490.0)).expect("scale");

    assert_eq!(scale.position(0), 60.0);
    assert_eq!(scale.position(2), 490.0);
    assert_eq!(scale.group_width(), 215.0);
    assert_eq!(scale.hit_width(), scale.group_width());
}

#[test]
fn banded_category_ticks_sit_mid_band() {
    let categories: Vec<String> = ["a", "b"].iter().map(|c| (*c).to_owned()).collect();
    let window = CategoryWindow::resolve(&categories, ("a", "b")).expect("window");
    let scale = CategoryScale::banded(window, (0.0, 405.0), 0.05).expect("scale");

    assert_relative_eq!(
        scale.tick_position(1),
        scale.position(1) + scale.group_width() / 2.0,
        epsilon = 1e-9
    );
}
