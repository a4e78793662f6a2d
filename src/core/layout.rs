use serde::{Deserialize, Serialize};

use crate::core::Boundary;
use crate::error::{ChartError, ChartResult};

/// Fixed margin allocations around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMargins {
    /// Horizontal space reserved left of the plot for the value axis.
    pub y_axis_width: f64,
    /// Vertical space reserved below the plot for the category axis.
    pub x_axis_height: f64,
    pub legend_height: f64,
    pub plot_top_padding: f64,
    pub plot_right_padding: f64,
    /// Gap between the category axis band and the legend band.
    pub legend_gap: f64,
    pub bottom_padding: f64,
}

impl Default for LayoutMargins {
    fn default() -> Self {
        Self {
            y_axis_width: 60.0,
            x_axis_height: 30.0,
            legend_height: 20.0,
            plot_top_padding: 20.0,
            plot_right_padding: 10.0,
            legend_gap: 20.0,
            bottom_padding: 20.0,
        }
    }
}

impl LayoutMargins {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("y_axis_width", self.y_axis_width),
            ("x_axis_height", self.x_axis_height),
            ("legend_height", self.legend_height),
            ("plot_top_padding", self.plot_top_padding),
            ("plot_right_padding", self.plot_right_padding),
            ("legend_gap", self.legend_gap),
            ("bottom_padding", self.bottom_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "layout margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Resolved regions of one chart container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub container: Boundary,
    pub plot: Boundary,
    /// Top edge of the legend band, directly beneath the category axis.
    pub legend_top: f64,
}

impl ChartLayout {
    pub fn resolve(container: Boundary, margins: LayoutMargins) -> ChartResult<Self> {
        let container = container.validate_area()?;
        let margins = margins.validate()?;

        let plot = Boundary::new(
            container.x + margins.y_axis_width,
            container.y + margins.plot_top_padding,
            container.width - margins.y_axis_width - margins.plot_right_padding,
            container.height
                - margins.x_axis_height
                - margins.legend_height
                - margins.legend_gap
                - margins.bottom_padding,
        );
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: plot.width,
                height: plot.height,
            });
        }

        Ok(Self {
            container,
            plot,
            legend_top: plot.y2() + margins.x_axis_height,
        })
    }
}
