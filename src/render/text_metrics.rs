/// Deterministic, backend-independent text width estimate.
#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Fraction of the font size drawn above the baseline.
pub const ASCENT_RATIO: f64 = 0.8;
