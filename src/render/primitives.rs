use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

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

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#RRGGBB`, `#RRGGBBAA` or `rgba(r, g, b, a)` notation.
    pub fn parse(input: &str) -> DeckResult<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = input
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgba_function(body);
        }
        Err(DeckError::InvalidData(format!(
            "unsupported color notation: `{input}`"
        )))
    }

    pub fn validate(self) -> DeckResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DeckError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> DeckResult<Color> {
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DeckError::InvalidData(format!(
            "hex color must have 6 or 8 hex digits: `#{hex}`"
        )));
    }
    let channel = |offset: usize| -> DeckResult<u8> {
        u8::from_str_radix(&hex[offset..offset + 2], 16)
            .map_err(|e| DeckError::InvalidData(format!("invalid hex color `#{hex}`: {e}")))
    };
    let alpha = if hex.len() == 8 {
        f64::from(channel(6)?) / 255.0
    } else {
        1.0
    };
    Ok(Color::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
}

fn parse_rgba_function(body: &str) -> DeckResult<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [red, green, blue, alpha] = parts.as_slice() else {
        return Err(DeckError::InvalidData(format!(
            "rgba() expects four components: `rgba({body})`"
        )));
    };
    let byte = |raw: &str| -> DeckResult<u8> {
        raw.parse::<u8>()
            .map_err(|e| DeckError::InvalidData(format!("invalid rgba channel `{raw}`: {e}")))
    };
    let alpha = alpha
        .parse::<f64>()
        .map_err(|e| DeckError::InvalidData(format!("invalid rgba alpha `{alpha}`: {e}")))?;
    let color = Color::rgba8(byte(red)?, byte(green)?, byte(blue)?, alpha);
    color.validate()?;
    Ok(color)
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> DeckResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(DeckError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(DeckError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle with optional border, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> DeckResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(DeckError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(DeckError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(DeckError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(DeckError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Annular sector (doughnut slice). Angles are radians, clockwise in screen
/// space, with `0` pointing to 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl ArcPrimitive {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn validate(self) -> DeckResult<()> {
        let finite = [
            self.center_x,
            self.center_y,
            self.inner_radius,
            self.outer_radius,
            self.start_angle,
            self.end_angle,
            self.border_width,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !finite {
            return Err(DeckError::InvalidData(
                "arc geometry must be finite".to_owned(),
            ));
        }
        if self.inner_radius < 0.0 || self.outer_radius < self.inner_radius {
            return Err(DeckError::InvalidData(
                "arc radii must satisfy 0 <= inner <= outer".to_owned(),
            ));
        }
        if self.end_angle < self.start_angle {
            return Err(DeckError::InvalidData(
                "arc end angle must not precede start angle".to_owned(),
            ));
        }
        if self.border_width < 0.0 {
            return Err(DeckError::InvalidData(
                "arc border width must be >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub bold: bool,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            bold: false,
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.text.is_empty() {
            return Err(DeckError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(DeckError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(DeckError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use approx::assert_relative_eq;

    #[test]
    fn parses_hex_with_and_without_alpha() {
        let teal = Color::parse("#1FB8CD").expect("hex");
        assert_eq!(teal, Color::rgb8(0x1F, 0xB8, 0xCD));

        let faded = Color::parse("#1FB8CD80").expect("hex with alpha");
        assert_relative_eq!(faded.alpha, 128.0 / 255.0);
        assert_relative_eq!(faded.red, teal.red);
    }

    #[test]
    fn parses_rgba_function() {
        let color = Color::parse("rgba(19, 66, 82, 0.9)").expect("rgba");
        assert_eq!(color, Color::rgba8(19, 66, 82, 0.9));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#GGGGGG").is_err());
        assert!(Color::parse("rgba(1, 2, 3)").is_err());
        assert!(Color::parse("rgba(1, 2, 3, 1.5)").is_err());
        assert!(Color::parse("teal").is_err());
    }
}
