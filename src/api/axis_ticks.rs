use crate::core::{CategoryScale, LinearScale};
use crate::render::estimate_text_width;

/// Keeps ticks at least `min_spacing_px` apart, scanning left to right and
/// preferring the last tick over its neighbor when both cannot fit.
pub(super) fn select_ticks_with_min_spacing<T: Copy>(
    mut ticks: Vec<(T, f64)>,
    min_spacing_px: f64,
) -> Vec<(T, f64)> {
    ticks.sort_by(|left, right| left.1.total_cmp(&right.1));
    if ticks.len() <= 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let mut selected: Vec<(T, f64)> = Vec::with_capacity(ticks.len());
    let mut last_px = f64::NEG_INFINITY;
    for tick in ticks.iter().copied() {
        if selected.is_empty() || tick.1 - last_px >= min_spacing_px {
            selected.push(tick);
            last_px = tick.1;
        }
    }

    let last_tick = ticks[ticks.len() - 1];
    let selected_len = selected.len();
    if (selected[selected_len - 1].1 - last_tick.1).abs() > 1e-9 {
        if selected_len == 1 {
            // On very narrow axes a single label is clearer than overlapping pairs.
            selected[0] = last_tick;
        } else if last_tick.1 - selected[selected_len - 2].1 >= min_spacing_px {
            selected[selected_len - 1] = last_tick;
        }
    }

    selected
}

/// Category ticks of the visible window, thinned so labels never overlap.
pub(super) fn category_ticks(
    scale: CategoryScale,
    categories: &[String],
    font_size_px: f64,
    label_gap_px: f64,
) -> Vec<(usize, f64)> {
    let window = scale.window();
    let candidates: Vec<(usize, f64)> = (window.start()..=window.end())
        .filter(|index| *index < categories.len())
        .map(|index| (index, scale.tick_position(index)))
        .collect();

    let widest_label = candidates
        .iter()
        .map(|(index, _)| estimate_text_width(&categories[*index], font_size_px))
        .fold(0.0_f64, f64::max);

    select_ticks_with_min_spacing(candidates, widest_label + label_gap_px)
}

/// Value ticks on round steps covering the current domain.
pub(super) fn value_ticks(scale: LinearScale, count: usize) -> Vec<(f64, f64)> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| (value, scale.map(value)))
        .collect()
}

/// Formats a value-axis label with the precision implied by the tick step
/// and comma-grouped thousands.
pub(super) fn format_value_tick(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let rendered = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 + 1);
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
