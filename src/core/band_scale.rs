use crate::error::{ChartError, ChartResult};

/// Discrete mapping that splits a pixel range into equal bands.
///
/// Inner and outer padding share one ratio and bands are centered inside
/// the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    band_count: usize,
    range_start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(band_count: usize, range: (f64, f64), padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }

        let span = range.1 - range.0;
        let n = band_count as f64;
        let step = span / (n - padding + padding * 2.0).max(1.0);
        let range_start = range.0 + (span - step * (n - padding)) * 0.5;

        Ok(Self {
            band_count,
            range_start,
            step,
            bandwidth: step * (1.0 - padding),
        })
    }

    #[must_use]
    pub fn band_count(self) -> usize {
        self.band_count
    }

    /// Left edge of the band at `position` (may lie outside the range).
    #[must_use]
    pub fn position(self, position: f64) -> f64 {
        self.range_start + self.step * position
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.bandwidth
    }
}
