use indexmap::IndexMap;

use crate::error::ChartResult;
use crate::render::Color;

/// Maps a series name to its display color.
///
/// Injected per engine so several charts can carry independent themes.
pub trait ColorResolver {
    fn resolve(&self, series_name: &str) -> Color;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Color,
{
    fn resolve(&self, series_name: &str) -> Color {
        self(series_name)
    }
}

/// Name-to-color table with a fallback for unknown names.
///
/// Inserting an existing name replaces its color (last mapping wins).
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    colors: IndexMap<String, Color>,
    fallback: Color,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(Color::from_rgba8(0x00, 0x3f, 0x5c, 1.0))
    }
}

/// Palette handed out in series order by [`ColorTable::from_palette`].
#[must_use]
pub fn default_palette() -> [Color; 5] {
    [
        Color::from_rgba8(0x72, 0x3e, 0x73, 1.0),
        Color::from_rgba8(0xc0, 0x46, 0x71, 1.0),
        Color::from_rgba8(0xf6, 0x67, 0x4f, 1.0),
        Color::from_rgba8(0xff, 0xa6, 0x00, 1.0),
        Color::from_rgba8(0x00, 0x3f, 0x5c, 1.0),
    ]
}

impl ColorTable {
    #[must_use]
    pub fn new(fallback: Color) -> Self {
        Self {
            colors: IndexMap::new(),
            fallback,
        }
    }

    /// Assigns `palette` to `names` in order, cycling when there are more
    /// names than colors. A name seen twice keeps its first color.
    #[must_use]
    pub fn from_palette<'a>(
        names: impl IntoIterator<Item = &'a str>,
        palette: &[Color],
    ) -> Self {
        let mut table = Self::default();
        if palette.is_empty() {
            return table;
        }
        for name in names {
            if !table.colors.contains_key(name) {
                let color = palette[table.colors.len() % palette.len()];
                table.insert(name, color);
            }
        }
        table
    }

    /// Builds a table from `(name, css color)` pairs.
    pub fn from_css_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> ChartResult<Self> {
        let mut table = Self::default();
        for (name, css) in pairs {
            table.insert(name, Color::parse(css)?);
        }
        Ok(table)
    }

    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.insert(name, color);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    #[must_use]
    pub fn fallback(&self) -> Color {
        self.fallback
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorResolver for ColorTable {
    fn resolve(&self, series_name: &str) -> Color {
        self.colors
            .get(series_name)
            .copied()
            .unwrap_or(self.fallback)
    }
}
