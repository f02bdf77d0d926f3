use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartDataset, ChartRecord};
use crate::error::{DeckError, DeckResult};
use crate::render::Color;

/// Pure formatter turning one record into display text.
pub type RecordFormatter = fn(&ChartRecord) -> String;

pub type Palette = SmallVec<[Color; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Parts of a whole, drawn as a doughnut.
    Doughnut,
    /// Magnitudes of discrete categories, drawn as vertical bars.
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    pub bold: bool,
    pub color: Color,
}

impl FontSpec {
    #[must_use]
    pub const fn new(size_px: f64, bold: bool, color: Color) -> Self {
        Self {
            size_px,
            bold,
            color,
        }
    }

    pub fn validate(self) -> DeckResult<()> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(DeckError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(12.0, false, Color::rgb8(0x13, 0x42, 0x52))
    }
}

/// Segment border color policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BorderColor {
    Uniform(Color),
    /// Each segment's palette color at the given alpha.
    PaletteAlpha(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentStyle {
    pub border_width: f64,
    pub border_color: BorderColor,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_color: BorderColor::Uniform(Color::WHITE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy)]
pub struct LegendConfig {
    pub display: bool,
    pub position: LegendPosition,
    pub padding: f64,
    pub font: FontSpec,
    /// Falls back to the record label when unset.
    pub label: Option<RecordFormatter>,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Top,
            padding: 10.0,
            font: FontSpec::default(),
            label: None,
        }
    }
}

impl LegendConfig {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            display: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TooltipConfig {
    pub background: Color,
    pub title_color: Color,
    pub body_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub label: RecordFormatter,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            background: Color::rgba(0.0, 0.0, 0.0, 0.8),
            title_color: Color::WHITE,
            body_color: Color::WHITE,
            border_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            border_width: 0.0,
            label: super::format::record_value_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub title: Option<String>,
    pub title_font: FontSpec,
    pub grid_display: bool,
    pub grid_color: Color,
    pub tick_color: Color,
    pub max_tick_rotation_deg: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            title: None,
            title_font: FontSpec::new(14.0, true, FontSpec::default().color),
            grid_display: true,
            grid_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
            tick_color: FontSpec::default().color,
            max_tick_rotation_deg: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesConfig {
    pub begin_at_zero: bool,
    pub x: AxisConfig,
    pub y: AxisConfig,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            x: AxisConfig::default(),
            y: AxisConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOutQuart,
    EaseOutBounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub easing: Easing,
    pub animate_rotate: bool,
    pub animate_scale: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: Easing::EaseOutQuart,
            animate_rotate: true,
            animate_scale: false,
        }
    }
}

/// Declarative chart description handed to a [`super::ChartBackend`].
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset: ChartDataset,
    pub series_label: Option<String>,
    pub palette: Palette,
    pub segment_style: SegmentStyle,
    /// Fraction of the outer radius left empty in a doughnut.
    pub cutout: f64,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
    pub axes: AxesConfig,
    pub animation: AnimationConfig,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, dataset: ChartDataset) -> Self {
        Self {
            kind,
            dataset,
            series_label: None,
            palette: SmallVec::from_slice(&[Color::rgb8(0x36, 0xA2, 0xEB)]),
            segment_style: SegmentStyle::default(),
            cutout: 0.5,
            legend: LegendConfig::default(),
            tooltip: TooltipConfig::default(),
            axes: AxesConfig::default(),
            animation: AnimationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_series_label(mut self, label: impl Into<String>) -> Self {
        self.series_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: &[Color]) -> Self {
        self.palette = SmallVec::from_slice(palette);
        self
    }

    #[must_use]
    pub fn with_segment_style(mut self, style: SegmentStyle) -> Self {
        self.segment_style = style;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: AxesConfig) -> Self {
        self.axes = axes;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Palette color for segment `index`; the palette repeats when shorter
    /// than the dataset.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    #[must_use]
    pub fn border_color_for(&self, index: usize) -> Color {
        match self.segment_style.border_color {
            BorderColor::Uniform(color) => color,
            BorderColor::PaletteAlpha(alpha) => self.color_for(index).with_alpha(alpha),
        }
    }

    #[must_use]
    pub fn legend_labels(&self) -> Vec<String> {
        self.dataset
            .records()
            .iter()
            .map(|record| match self.legend.label {
                Some(format) => format(record),
                None => record.label.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.dataset.get(index).map(self.tooltip.label)
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.palette.is_empty() {
            return Err(DeckError::InvalidData(
                "chart palette must not be empty".to_owned(),
            ));
        }
        for color in &self.palette {
            color.validate()?;
        }
        for index in 0..self.palette.len() {
            self.border_color_for(index).validate()?;
        }
        if !self.segment_style.border_width.is_finite() || self.segment_style.border_width < 0.0 {
            return Err(DeckError::InvalidData(
                "segment border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.cutout.is_finite() || !(0.0..1.0).contains(&self.cutout) {
            return Err(DeckError::InvalidData(
                "doughnut cutout must be in [0, 1)".to_owned(),
            ));
        }
        if !self.legend.padding.is_finite() || self.legend.padding < 0.0 {
            return Err(DeckError::InvalidData(
                "legend padding must be finite and >= 0".to_owned(),
            ));
        }
        self.legend.font.validate()?;
        self.axes.x.title_font.validate()?;
        self.axes.y.title_font.validate()?;
        for color in [
            self.tooltip.background,
            self.tooltip.title_color,
            self.tooltip.body_color,
            self.tooltip.border_color,
            self.axes.x.grid_color,
            self.axes.y.grid_color,
            self.axes.x.tick_color,
            self.axes.y.tick_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
