use column_chart::api::{
    ChartCapabilities, ChartEngine, ChartEngineConfig, ChartInput, ColorResolver, ColorTable,
    LegendStyle,
};
use column_chart::core::{Boundary, Series, SeriesLengthPolicy};
use column_chart::error::ChartError;
use column_chart::render::{Color, RecordingScene};

fn sample_input() -> ChartInput {
    ChartInput::new(vec![Series::new("count", vec![1.0, 2.0])])
}

#[test]
fn defaults_match_the_reference_layout() {
    let config = ChartEngineConfig::default();
    assert_eq!(config.container, Boundary::new(0.0, 0.0, 500.0, 500.0));
    assert_eq!(config.transition_duration_ms, 750);
    assert_eq!(config.band_padding, 0.05);
    assert_eq!(config.series_length_policy, SeriesLengthPolicy::ZeroFill);
    assert_eq!(config.capabilities, ChartCapabilities::default());
    assert_eq!(config.legend.item_width_px, 80.0);
    assert_eq!(config.legend.padding_px, 5.0);
    assert_eq!(config.tooltip.padding_px, 4.0);
}

#[test]
fn config_json_round_trip() {
    let config = ChartEngineConfig::new(Boundary::new(0.0, 0.0, 800.0, 600.0))
        .with_transition_duration_ms(300)
        .with_band_padding(0.1);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn omitted_json_fields_take_defaults() {
    let parsed = ChartEngineConfig::from_json_str(r#"{ "transition_duration_ms": 0 }"#)
        .expect("parse partial config");
    assert_eq!(parsed.transition_duration_ms, 0);
    assert_eq!(parsed.container, ChartEngineConfig::default().container);
    assert!(parsed.capabilities.tooltip);
}

#[test]
fn malformed_json_is_invalid_data() {
    let result = ChartEngineConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn zero_sized_container_is_rejected() {
    let result = ChartEngine::new(
        RecordingScene::new(),
        sample_input(),
        ChartEngineConfig::new(Boundary::new(0.0, 0.0, 0.0, 500.0)),
    );
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn container_too_small_for_margins_is_rejected() {
    let result = ChartEngine::new(
        RecordingScene::new(),
        sample_input(),
        ChartEngineConfig::new(Boundary::new(0.0, 0.0, 50.0, 50.0)),
    );
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn out_of_range_band_padding_is_rejected() {
    let result = ChartEngine::new(
        RecordingScene::new(),
        sample_input(),
        ChartEngineConfig::default().with_band_padding(1.0),
    );
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn invalid_legend_style_is_rejected() {
    let result = ChartEngine::new(
        RecordingScene::new(),
        sample_input(),
        ChartEngineConfig::default().with_legend_style(LegendStyle {
            item_width_px: 0.0,
            ..LegendStyle::default()
        }),
    );
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn input_range_selects_initial_window() {
    let engine = ChartEngine::new(
        RecordingScene::new(),
        ChartInput::new(vec![Series::new("count", vec![1.0, 2.0, 3.0])])
            .with_categories(["a", "b", "c"])
            .with_range("b", "c"),
        ChartEngineConfig::default(),
    )
    .expect("engine init");
    assert_eq!(engine.category_domain(), (1.0, 2.0));
}

#[test]
fn input_deserializes_from_json() {
    let input: ChartInput = serde_json::from_str(
        r#"{ "series": [{ "name": "count", "data": [1.0, 2.0] }], "categories": ["x", "y"] }"#,
    )
    .expect("parse input");
    assert_eq!(input.categories, Some(vec!["x".to_owned(), "y".to_owned()]));
    assert!(input.range.is_none());
}

#[test]
fn color_table_falls_back_for_unknown_names() {
    let table = ColorTable::from_css_pairs([
        ("deaths", "#723e73"),
        ("serious", "#c04671"),
        ("wounded", "#f6674f"),
        ("reported", "#ffa600"),
    ])
    .expect("palette");

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.resolve("wounded"),
        Color::from_rgba8(0xf6, 0x67, 0x4f, 1.0)
    );
    assert_eq!(
        table.resolve("missing"),
        Color::from_rgba8(0x00, 0x3f, 0x5c, 1.0)
    );
}

#[test]
fn later_color_mapping_wins() {
    let table = ColorTable::default()
        .with_color("count", Color::BLACK)
        .with_color("count", Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(table.len(), 1);
    assert_eq!(table.resolve("count"), Color::rgb(0.0, 0.0, 1.0));
}

#[test]
fn invalid_css_color_is_rejected() {
    let result = ColorTable::from_css_pairs([("count", "not-a-color")]);
    assert!(result.is_err());
}

#[test]
fn palette_table_assigns_colors_in_order_and_cycles() {
    let palette = [Color::BLACK, Color::rgb(1.0, 0.0, 0.0)];
    let table = ColorTable::from_palette(["a", "b", "a", "c"], &palette);

    assert_eq!(table.len(), 3);
    assert_eq!(table.resolve("a"), palette[0]);
    assert_eq!(table.resolve("b"), palette[1]);
    assert_eq!(table.resolve("c"), palette[0]);
    assert_eq!(table.resolve("unknown"), table.fallback());
}
