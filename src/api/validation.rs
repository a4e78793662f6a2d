use crate::core::ChartLayout;
use crate::error::{ChartError, ChartResult};

use super::{AxisStyle, ChartEngineConfig, LegendStyle, TooltipStyle};

pub(super) fn validate_engine_config(config: ChartEngineConfig) -> ChartResult<ChartEngineConfig> {
    ChartLayout::resolve(config.container, config.margins)?;

    if !config.band_padding.is_finite() || !(0.0..1.0).contains(&config.band_padding) {
        return Err(ChartError::InvalidData(
            "band padding must be finite and in [0, 1)".to_owned(),
        ));
    }

    validate_axis_style(config.axis)?;
    validate_legend_style(config.legend)?;
    validate_tooltip_style(config.tooltip)?;
    Ok(config)
}

pub(super) fn validate_axis_style(style: AxisStyle) -> ChartResult<AxisStyle> {
    ensure_non_negative("axis tick size", style.tick_size_px)?;
    ensure_non_negative("axis tick padding", style.tick_padding_px)?;
    ensure_non_negative("axis category label gap", style.category_label_gap_px)?;
    ensure_positive("axis font size", style.font_size_px)?;
    if style.value_tick_count == 0 {
        return Err(ChartError::InvalidData(
            "axis value tick count must be > 0".to_owned(),
        ));
    }
    style.color.validate()?;
    Ok(style)
}

pub(super) fn validate_legend_style(style: LegendStyle) -> ChartResult<LegendStyle> {
    ensure_positive("legend item width", style.item_width_px)?;
    ensure_non_negative("legend padding", style.padding_px)?;
    ensure_non_negative("legend swatch size", style.swatch_size_px)?;
    ensure_non_negative("legend label offset", style.label_offset_px)?;
    ensure_positive("legend font size", style.font_size_px)?;
    ensure_non_negative("legend panel stroke width", style.panel_stroke_width_px)?;
    style.inactive_color.validate()?;
    style.panel_fill.validate()?;
    style.panel_stroke.validate()?;
    Ok(style)
}

pub(super) fn validate_tooltip_style(style: TooltipStyle) -> ChartResult<TooltipStyle> {
    ensure_non_negative("tooltip padding", style.padding_px)?;
    ensure_positive("tooltip line height", style.line_height_px)?;
    ensure_positive("tooltip font size", style.font_size_px)?;
    ensure_non_negative("tooltip pointer gap", style.pointer_gap_px)?;
    ensure_non_negative("tooltip top fallback offset", style.top_fallback_offset_px)?;
    style.fill.validate()?;
    style.stroke.validate()?;
    Ok(style)
}

fn ensure_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!("{name} must be finite and > 0")));
    }
    Ok(())
}
