use approx::assert_relative_eq;
use column_chart::api::{ChartCapabilities, ChartEngine, ChartEngineConfig, ChartInput};
use column_chart::core::Series;
use column_chart::error::ChartError;
use column_chart::interaction::SceneEvent;
use column_chart::render::{NodeKind, PointerListener, RecordingScene, estimate_text_width};

fn incidents_input() -> ChartInput {
    ChartInput::new(vec![
        Series::new("deaths", vec![1.0, 5.0, 2.0]),
        Series::new("serious", vec![3.0, 1.0, 4.0]),
    ])
    .with_categories(["Jan", "Feb", "Mar"])
}

fn build_engine(config: ChartEngineConfig) -> ChartEngine<RecordingScene> {
    ChartEngine::new(RecordingScene::new(), incidents_input(), config).expect("engine init")
}

fn tooltip_lines(engine: &ChartEngine<RecordingScene>, class: &str) -> Vec<String> {
    let scene = engine.scene();
    scene
        .nodes_with_class(class)
        .first()
        .map(|text| {
            scene
                .children(*text)
                .iter()
                .filter_map(|span| scene.attributes(*span)?.text.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn hovering_a_group_shows_active_values() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let group = engine.column_group_node(1).expect("Feb group");

    engine
        .dispatch_event(SceneEvent::pointer_move(group, 300.0, 200.0))
        .expect("hover");

    let hover = engine.hover().expect("hover state");
    assert_eq!(hover.category_index, 1);
    assert_eq!(tooltip_lines(&engine, "tooltip-labels"), vec!["deaths", "serious"]);
    assert_eq!(tooltip_lines(&engine, "tooltip-values"), vec!["5", "1"]);

    let tooltip = engine.tooltip_node().expect("tooltip node");
    assert!(engine.scene().node(tooltip).expect("tooltip").visible);

    let labels_width = estimate_text_width("serious", 10.0);
    let values_width = estimate_text_width("5", 10.0);
    let placement = engine.tooltip_placement().expect("placement");
    assert_relative_eq!(
        placement.content.width,
        labels_width + values_width + 4.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(placement.content.height, 20.0, epsilon = 1e-9);
    assert_relative_eq!(placement.x, 300.0, epsilon = 1e-9);
    assert_relative_eq!(placement.y, 200.0 - 20.0 - 5.0, epsilon = 1e-9);
}

#[test]
fn tooltip_is_clamped_to_plot_edges() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let area = engine.column_area_node(2).expect("Mar area");

    engine
        .dispatch_event(SceneEvent::pointer_move(area, 485.0, 30.0))
        .expect("hover near corner");

    let placement = engine.tooltip_placement().expect("placement");
    let plot = engine.layout().plot;
    assert_relative_eq!(
        placement.x,
        plot.x2() - placement.content.width,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        placement.y,
        plot.y1() + placement.content.height + 30.0,
        epsilon = 1e-9
    );
}

#[test]
fn pointer_out_hides_tooltip() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let bar = engine.column_node(0, 1).expect("column");
    engine
        .dispatch_event(SceneEvent::pointer_move(bar, 100.0, 300.0))
        .expect("hover");
    assert_eq!(engine.hover().map(|h| h.category_index), Some(0));

    engine
        .dispatch_event(SceneEvent::pointer_out(engine.columns_node()))
        .expect("leave");

    assert!(engine.hover().is_none());
    assert!(engine.tooltip_placement().is_none());
    let tooltip = engine.tooltip_node().expect("tooltip node");
    let recorded = engine.scene().node(tooltip).expect("tooltip still exists");
    assert!(!recorded.visible);
}

#[test]
fn toggle_while_hovered_refreshes_tooltip() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let group = engine.column_group_node(2).expect("Mar group");
    engine
        .dispatch_event(SceneEvent::pointer_move(group, 200.0, 300.0))
        .expect("hover");

    let legend_label = engine
        .scene()
        .nodes_with_class("legend-label")
        .first()
        .copied()
        .expect("legend label");
    engine
        .dispatch_event(SceneEvent::click(legend_label))
        .expect("legend click");

    assert!(!engine.is_series_active(0));
    assert_eq!(tooltip_lines(&engine, "tooltip-labels"), vec!["serious"]);
    assert_eq!(tooltip_lines(&engine, "tooltip-values"), vec!["4"]);
}

#[test]
fn legend_rows_listen_for_clicks_and_columns_for_hover() {
    let engine = build_engine(ChartEngineConfig::default());
    let scene = engine.scene();

    let row = engine.legend_row_node(1).expect("legend row");
    assert_eq!(
        scene.node(row).expect("row").listeners,
        vec![PointerListener::Click]
    );
    assert_eq!(
        scene.node(engine.columns_node()).expect("columns").listeners,
        vec![PointerListener::Hover]
    );
}

#[test]
fn clicks_outside_legend_are_ignored() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let group = engine.column_group_node(0).expect("group");

    engine
        .dispatch_event(SceneEvent::click(group))
        .expect("ignored click");

    assert!(engine.is_series_active(0));
    assert!(engine.is_series_active(1));
}

#[test]
fn disabled_tooltip_skips_scaffold_and_hover() {
    let config = ChartEngineConfig::default().with_capabilities(ChartCapabilities {
        tooltip: false,
        ..ChartCapabilities::default()
    });
    let mut engine = build_engine(config);
    assert!(engine.tooltip_node().is_none());
    assert!(engine.scene().nodes_with_class("tooltip").is_empty());

    let group = engine.column_group_node(1).expect("group");
    engine
        .dispatch_event(SceneEvent::pointer_move(group, 300.0, 200.0))
        .expect("ignored hover");
    assert!(engine.hover().is_none());
}

#[test]
fn disabled_zoom_rejects_range_changes() {
    let config = ChartEngineConfig::default().with_capabilities(ChartCapabilities {
        zoom_range: false,
        ..ChartCapabilities::default()
    });
    let mut engine = build_engine(config);

    let result = engine.set_range("Feb", "Mar");
    assert!(matches!(
        result,
        Err(ChartError::CapabilityDisabled("zoom_range"))
    ));
    assert_eq!(engine.category_domain(), (0.0, 2.0));
}

#[test]
fn tooltip_lines_are_text_spans() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let group = engine.column_group_node(0).expect("group");
    engine
        .dispatch_event(SceneEvent::pointer_move(group, 100.0, 300.0))
        .expect("hover");

    let scene = engine.scene();
    let labels = scene.nodes_with_class("tooltip-labels")[0];
    for span in scene.children(labels) {
        assert_eq!(scene.node(*span).expect("span").kind, NodeKind::TextSpan);
    }
}

#[test]
fn tooltip_measurement_failure_hides_tooltip_and_keeps_toggle() {
    let mut engine = build_engine(ChartEngineConfig::default());
    let group = engine.column_group_node(1).expect("Feb group");
    engine
        .dispatch_event(SceneEvent::pointer_move(group, 300.0, 200.0))
        .expect("hover");
    assert!(engine.tooltip_placement().is_some());

    engine.scene_mut().set_fail_measurements(true);
    engine
        .toggle_series(0)
        .expect("toggle succeeds while detached");

    assert!(!engine.is_series_active(0));
    assert_relative_eq!(engine.value_domain().1, 4.2, epsilon = 1e-9);
    assert!(engine.tooltip_placement().is_none());
    let tooltip = engine.tooltip_node().expect("tooltip node");
    assert!(!engine.scene().node(tooltip).expect("tooltip").visible);

    engine.scene_mut().set_fail_measurements(false);
    engine
        .dispatch_event(SceneEvent::pointer_move(group, 300.0, 200.0))
        .expect("hover after reattach");
    assert!(engine.tooltip_placement().is_some());
    assert!(engine.scene().node(tooltip).expect("tooltip").visible);
}
