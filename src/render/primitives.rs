use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::NodeId;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let color = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_channels(body, true)
        } else if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_channels(body, false)
        } else {
            None
        };

        let color =
            color.ok_or_else(|| ChartError::InvalidData(format!("invalid color `{input}`")))?;
        color.validate()?;
        Ok(color)
    }

    /// Same color with a different opacity.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// CSS `rgba(r,g,b,a)` notation with 8-bit color channels.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            self.alpha
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgba8(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
            1.0,
        )),
        3 => {
            let doubled: Vec<u8> = hex
                .chars()
                .map(|digit| channel(&format!("{digit}{digit}")))
                .collect::<Option<_>>()?;
            Some(Color::from_rgba8(doubled[0], doubled[1], doubled[2], 1.0))
        }
        _ => None,
    }
}

fn parse_channels(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let red = parts[0].parse::<u8>().ok()?;
    let green = parts[1].parse::<u8>().ok()?;
    let blue = parts[2].parse::<u8>().ok()?;
    let alpha = if with_alpha {
        parts[3].parse::<f64>().ok()?
    } else {
        1.0
    };
    Some(Color::from_rgba8(red, green, blue, alpha))
}

/// Horizontal text alignment relative to the text's `x` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Sparse attribute set applied to one scene node.
///
/// `None` fields leave the node's current value untouched, so the same type
/// serves as an initial attribute set and as a transition target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub class: Option<String>,
    pub id: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub translate: Option<(f64, f64)>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
    pub text_anchor: Option<TextAnchor>,
    pub text: Option<String>,
    pub clip_path: Option<NodeId>,
    pub pointer_cursor: Option<bool>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_end(mut self, x2: f64, y2: f64) -> Self {
        self.x2 = Some(x2);
        self.y2 = Some(y2);
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_translate(mut self, dx: f64, dy: f64) -> Self {
        self.translate = Some((dx, dy));
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_font(mut self, font_size: f64, anchor: TextAnchor) -> Self {
        self.font_size = Some(font_size);
        self.text_anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_clip_path(mut self, clip: NodeId) -> Self {
        self.clip_path = Some(clip);
        self
    }

    #[must_use]
    pub fn with_pointer_cursor(mut self) -> Self {
        self.pointer_cursor = Some(true);
        self
    }

    /// Overlays every `Some` field of `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            };
        }
        overlay!(
            class,
            id,
            x,
            y,
            x2,
            y2,
            width,
            height,
            translate,
            fill,
            stroke,
            stroke_width,
            opacity,
            font_size,
            text_anchor,
            text,
            clip_path,
            pointer_cursor,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{Attributes, Color};

    #[test]
    fn parses_long_and_short_hex() {
        let long = Color::parse("#723e73").expect("long hex");
        assert_eq!(long.to_css(), "rgba(114,62,115,1)");
        let short = Color::parse("#fa0").expect("short hex");
        assert_eq!(short.to_css(), "rgba(255,170,0,1)");
    }

    #[test]
    fn rgba_input_keeps_channels_and_swaps_alpha() {
        let color = Color::parse("rgba(192,192,192,1)").expect("rgba");
        assert_eq!(color.with_alpha(0.5).to_css(), "rgba(192,192,192,0.5)");
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("rgba(1,2,3)").is_err());
        assert!(Color::parse("rgba(1,2,3,1.5)").is_err());
        assert!(Color::parse("teal").is_err());
    }

    #[test]
    fn merge_only_overrides_present_fields() {
        let mut base = Attributes::new().with_position(1.0, 2.0).with_width(3.0);
        base.merge(&Attributes::new().with_width(9.0));
        assert_eq!(base.x, Some(1.0));
        assert_eq!(base.width, Some(9.0));
    }
}
