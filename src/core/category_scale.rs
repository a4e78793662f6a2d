use crate::core::{BandScale, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Zero-based, inclusive index window of the visible categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWindow {
    start: usize,
    end: usize,
}

impl CategoryWindow {
    /// Window spanning every category.
    pub fn full(category_count: usize) -> ChartResult<Self> {
        if category_count == 0 {
            return Err(ChartError::InvalidData(
                "chart requires at least one category".to_owned(),
            ));
        }
        Ok(Self {
            start: 0,
            end: category_count - 1,
        })
    }

    /// Locates both range boundaries in `categories`.
    ///
    /// Unknown labels and reversed boundaries are caller errors.
    pub fn resolve(categories: &[String], range: (&str, &str)) -> ChartResult<Self> {
        let locate = |label: &str| {
            categories
                .iter()
                .position(|category| category == label)
                .ok_or_else(|| ChartError::UnknownCategory(label.to_owned()))
        };
        let start = locate(range.0)?;
        let end = locate(range.1)?;
        if start > end {
            return Err(ChartError::InvalidRange {
                from: range.0.to_owned(),
                to: range.1.to_owned(),
            });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(self) -> usize {
        self.end
    }

    /// Number of visible categories; at least one by construction.
    #[must_use]
    pub(crate) fn len(self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Category-index to pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryScale {
    /// Linear interpolation over category indices; groups start at their
    /// index position and out-of-window categories map outside the plot.
    Continuous {
        scale: LinearScale,
        window: CategoryWindow,
    },
    /// One padded band per visible category.
    Banded {
        scale: BandScale,
        window: CategoryWindow,
    },
}

impl CategoryScale {
    pub fn continuous(window: CategoryWindow, range: (f64, f64)) -> ChartResult<Self> {
        let start = window.start as f64;
        // A single visible category would collapse the domain; give it one
        // full step instead.
        let end = if window.start == window.end {
            start + 1.0
        } else {
            window.end as f64
        };
        Ok(Self::Continuous {
            scale: LinearScale::new((start, end), range)?,
            window,
        })
    }

    pub fn banded(window: CategoryWindow, range: (f64, f64), padding: f64) -> ChartResult<Self> {
        Ok(Self::Banded {
            scale: BandScale::new(window.len(), range, padding)?,
            window,
        })
    }

    #[must_use]
    pub fn window(self) -> CategoryWindow {
        match self {
            Self::Continuous { window, .. } | Self::Banded { window, .. } => window,
        }
    }

    /// Index domain backing the mapping.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        match self {
            Self::Continuous { scale, .. } => scale.domain(),
            Self::Banded { window, .. } => (window.start as f64, window.end as f64),
        }
    }

    /// Left edge of the group at category `index`.
    #[must_use]
    pub fn position(self, index: usize) -> f64 {
        match self {
            Self::Continuous { scale, .. } => scale.map(index as f64),
            Self::Banded { scale, window } => {
                scale.position(index as f64 - window.start as f64)
            }
        }
    }

    /// Horizontal space shared by the columns of one group.
    #[must_use]
    pub fn group_width(self) -> f64 {
        match self {
            Self::Continuous { scale, .. } => scale.map(1.0) - scale.map(0.0),
            Self::Banded { scale, .. } => scale.bandwidth(),
        }
    }

    /// Width of the transparent hover area behind each group.
    #[must_use]
    pub fn hit_width(self) -> f64 {
        match self {
            Self::Continuous { .. } => self.group_width(),
            Self::Banded { scale, .. } => scale.step(),
        }
    }

    /// Pixel position of the axis tick for category `index`.
    #[must_use]
    pub fn tick_position(self, index: usize) -> f64 {
        match self {
            Self::Continuous { .. } => self.position(index),
            Self::Banded { scale, .. } => self.position(index) + scale.bandwidth() * 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryScale, CategoryWindow};
    use crate::error::ChartError;

    fn categories() -> Vec<String> {
        ["Jan", "Feb", "Mar"].iter().map(|c| (*c).to_owned()).collect()
    }

    #[test]
    fn resolve_locates_both_boundaries() {
        let window = CategoryWindow::resolve(&categories(), ("Feb", "Mar")).expect("window");
        assert_eq!((window.start(), window.end()), (1, 2));
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn resolve_rejects_unknown_and_reversed_boundaries() {
        assert!(matches!(
            CategoryWindow::resolve(&categories(), ("Apr", "Mar")),
            Err(ChartError::UnknownCategory(label)) if label == "Apr"
        ));
        assert!(matches!(
            CategoryWindow::resolve(&categories(), ("Mar", "Jan")),
            Err(ChartError::InvalidRange { .. })
        ));
    }

    #[test]
    fn single_category_window_spans_one_step() {
        let window = CategoryWindow::resolve(&categories(), ("Feb", "Feb")).expect("window");
        let scale = CategoryScale::continuous(window, (60.0, 490.0)).expect("scale");
        assert_eq!(scale.position(1), 60.0);
        assert_eq!(scale.group_width(), 430.0);
    }
}
