use serde::{Deserialize, Serialize};

use crate::core::{Boundary, LayoutMargins, Series, SeriesLengthPolicy};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Feature switches that select one engine variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCapabilities {
    /// Linear category axis addressed by index; `false` uses padded bands.
    pub continuous_category_axis: bool,
    pub tooltip: bool,
    /// Allows `set_range` to narrow the visible category window.
    pub zoom_range: bool,
}

impl Default for ChartCapabilities {
    fn default() -> Self {
        Self {
            continuous_category_axis: true,
            tooltip: true,
            zoom_range: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub font_size_px: f64,
    /// Approximate number of value-axis ticks.
    pub value_tick_count: usize,
    /// Minimum horizontal gap between category labels.
    pub category_label_gap_px: f64,
    pub color: Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            font_size_px: 10.0,
            value_tick_count: 10,
            category_label_gap_px: 4.0,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendStyle {
    /// Fixed horizontal pitch between rows.
    pub item_width_px: f64,
    pub padding_px: f64,
    pub swatch_size_px: f64,
    pub label_offset_px: f64,
    pub font_size_px: f64,
    pub inactive_color: Color,
    pub panel_fill: Color,
    pub panel_stroke: Color,
    pub panel_stroke_width_px: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            item_width_px: 80.0,
            padding_px: 5.0,
            swatch_size_px: 10.0,
            label_offset_px: 15.0,
            font_size_px: 10.0,
            inactive_color: Color::from_rgba8(192, 192, 192, 1.0),
            panel_fill: Color::from_rgba8(255, 255, 255, 0.9),
            panel_stroke: Color::BLACK,
            panel_stroke_width_px: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub padding_px: f64,
    pub line_height_px: f64,
    pub font_size_px: f64,
    /// Gap between the pointer and the tooltip's bottom edge.
    pub pointer_gap_px: f64,
    /// Offset below the plot top used when the tooltip would rise above it.
    pub top_fallback_offset_px: f64,
    pub fill: Color,
    pub stroke: Color,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            padding_px: 4.0,
            line_height_px: 10.0,
            font_size_px: 10.0,
            pointer_gap_px: 5.0,
            top_fallback_offset_px: 30.0,
            fill: Color::from_rgba8(255, 255, 255, 0.9),
            stroke: Color::BLACK,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in config files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_container")]
    pub container: Boundary,
    #[serde(default)]
    pub margins: LayoutMargins,
    #[serde(default)]
    pub capabilities: ChartCapabilities,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    #[serde(default)]
    pub series_length_policy: SeriesLengthPolicy,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default)]
    pub axis: AxisStyle,
    #[serde(default)]
    pub legend: LegendStyle,
    #[serde(default)]
    pub tooltip: TooltipStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            margins: LayoutMargins::default(),
            capabilities: ChartCapabilities::default(),
            transition_duration_ms: default_transition_duration_ms(),
            series_length_policy: SeriesLengthPolicy::default(),
            band_padding: default_band_padding(),
            axis: AxisStyle::default(),
            legend: LegendStyle::default(),
            tooltip: TooltipStyle::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(container: Boundary) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: LayoutMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: ChartCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_series_length_policy(mut self, policy: SeriesLengthPolicy) -> Self {
        self.series_length_policy = policy;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    #[must_use]
    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis = style;
        self
    }

    #[must_use]
    pub fn with_legend_style(mut self, style: LegendStyle) -> Self {
        self.legend = style;
        self
    }

    #[must_use]
    pub fn with_tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.tooltip = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Data supplied by the owning host at construction or on replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub series: Vec<Series>,
    /// Defaults to `"0".."n-1"` over the first series.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Defaults to the first and last category.
    #[serde(default)]
    pub range: Option<(String, String)>,
}

impl ChartInput {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self {
            series,
            categories: None,
            range: None,
        }
    }

    #[must_use]
    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.range = Some((from.into(), to.into()));
        self
    }
}

fn default_container() -> Boundary {
    Boundary::new(0.0, 0.0, 500.0, 500.0)
}

fn default_transition_duration_ms() -> u64 {
    750
}

fn default_band_padding() -> f64 {
    0.05
}
