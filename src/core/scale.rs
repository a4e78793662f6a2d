use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// value axis maps larger values towards the top of the plot. A degenerate
/// domain (`start == end`) maps every input onto `range_start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        if self.is_degenerate() || self.range_start == self.range_end {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Evenly spaced "nice" values (1, 2 or 5 times a power of ten) inside
    /// the domain, targeting roughly `count` ticks.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        nice_ticks(start, stop, count)
    }

    /// Step between consecutive values of [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (start, stop) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        tick_increment(start, stop, count).map_or(0.0, TickIncrement::step)
    }
}

#[derive(Debug, Clone, Copy)]
enum TickIncrement {
    /// Ticks are `index * step`.
    Multiply(f64),
    /// Ticks are `index / divisor`; keeps sub-unit steps free of float drift.
    Divide(f64),
}

impl TickIncrement {
    fn step(self) -> f64 {
        match self {
            Self::Multiply(step) => step,
            Self::Divide(divisor) => 1.0 / divisor,
        }
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> Option<TickIncrement> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start >= stop {
        return None;
    }

    let raw_step = (stop - start) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    Some(if power < 0.0 {
        TickIncrement::Divide(10f64.powf(-power) / factor)
    } else {
        TickIncrement::Multiply(factor * 10f64.powf(power))
    })
}

fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop && start.is_finite() && count > 0 {
        return vec![start];
    }
    let Some(increment) = tick_increment(start, stop, count) else {
        return Vec::new();
    };

    let (first, last) = match increment {
        TickIncrement::Multiply(step) => ((start / step).ceil(), (stop / step).floor()),
        TickIncrement::Divide(divisor) => ((start * divisor).ceil(), (stop * divisor).floor()),
    };
    if last < first {
        return Vec::new();
    }

    let total = (last - first) as usize + 1;
    (0..total)
        .map(|offset| {
            let index = first + offset as f64;
            match increment {
                TickIncrement::Multiply(step) => index * step,
                TickIncrement::Divide(divisor) => index / divisor,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn ticks_use_nice_sub_unit_steps() {
        let scale = LinearScale::new((0.0, 5.25), (430.0, 20.0)).expect("valid scale");
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(5.0));
        assert_eq!(ticks.len(), 11);
        assert_eq!(scale.tick_step(10), 0.5);
    }

    #[test]
    fn ticks_use_nice_integer_steps() {
        let scale = LinearScale::new((0.0, 1050.0), (1.0, 0.0)).expect("valid scale");
        assert_eq!(
            scale.ticks(10),
            vec![0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0]
        );
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((0.0, 0.0), (430.0, 20.0)).expect("valid scale");
        assert_eq!(scale.map(12.0), 430.0);
        assert_eq!(scale.ticks(10), vec![0.0]);
    }
}
