//! The two charts embedded in the default deck.

use indexmap::IndexMap;

use crate::core::{ChartTargetId, newspaper_circulation, social_media_users};
use crate::error::DeckResult;
use crate::render::Color;

use super::format::{millions_legend_label, readers_tooltip_label, users_tooltip_label};
use super::{
    AnimationConfig, AxesConfig, AxisConfig, BorderColor, ChartKind, ChartSpec, Easing, FontSpec,
    LegendConfig, LegendPosition, Palette, SegmentStyle, TooltipConfig,
};

pub const NEWSPAPER_CHART_TARGET: &str = "newspaperChart";
pub const SOCIAL_MEDIA_CHART_TARGET: &str = "socialMediaChart";

pub const DECK_PALETTE_HEX: [&str; 6] = [
    "#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F", "#DB4545",
];

const INK_HEX: &str = "#134252";
const TOOLTIP_BACKGROUND: &str = "rgba(19, 66, 82, 0.9)";
const GRID_COLOR: &str = "rgba(19, 66, 82, 0.1)";

/// The six deck colors in display order.
pub fn deck_palette() -> DeckResult<Palette> {
    DECK_PALETTE_HEX.iter().map(|hex| Color::parse(hex)).collect()
}

fn deck_tooltip(label: super::RecordFormatter, border_color: Color) -> DeckResult<TooltipConfig> {
    Ok(TooltipConfig {
        background: Color::parse(TOOLTIP_BACKGROUND)?,
        title_color: Color::WHITE,
        body_color: Color::WHITE,
        border_color,
        border_width: 2.0,
        label,
    })
}

/// Proportional-share chart of daily newspaper circulation.
pub fn newspaper_chart_spec() -> DeckResult<ChartSpec> {
    let palette = deck_palette()?;
    let ink = Color::parse(INK_HEX)?;
    let spec = ChartSpec::new(ChartKind::Doughnut, newspaper_circulation()?)
        .with_palette(&palette[..5])
        .with_segment_style(SegmentStyle {
            border_width: 3.0,
            border_color: BorderColor::Uniform(Color::WHITE),
        })
        .with_legend(LegendConfig {
            display: true,
            position: LegendPosition::Bottom,
            padding: 15.0,
            font: FontSpec::new(12.0, true, ink),
            label: Some(millions_legend_label),
        })
        .with_tooltip(deck_tooltip(readers_tooltip_label, palette[0])?)
        .with_animation(AnimationConfig {
            duration_ms: 1000,
            easing: Easing::EaseOutQuart,
            animate_rotate: true,
            animate_scale: true,
        });
    spec.validate()?;
    Ok(spec)
}

/// Categorical-bar chart of social media platform users.
pub fn social_media_chart_spec() -> DeckResult<ChartSpec> {
    let palette = deck_palette()?;
    let ink = Color::parse(INK_HEX)?;
    let grid_color = Color::parse(GRID_COLOR)?;
    let title_font = FontSpec::new(14.0, true, ink);
    let spec = ChartSpec::new(ChartKind::Bar, social_media_users()?)
        .with_series_label("Users (Millions)")
        .with_palette(&palette)
        .with_segment_style(SegmentStyle {
            border_width: 1.0,
            border_color: BorderColor::PaletteAlpha(128.0 / 255.0),
        })
        .with_legend(LegendConfig::hidden())
        .with_tooltip(deck_tooltip(users_tooltip_label, palette[0])?)
        .with_axes(AxesConfig {
            begin_at_zero: true,
            x: AxisConfig {
                title: Some("Social Media Platforms".to_owned()),
                title_font,
                grid_display: false,
                grid_color,
                tick_color: ink,
                max_tick_rotation_deg: 45.0,
            },
            y: AxisConfig {
                title: Some("Users (Millions)".to_owned()),
                title_font,
                grid_display: true,
                grid_color,
                tick_color: ink,
                max_tick_rotation_deg: 0.0,
            },
        })
        .with_animation(AnimationConfig {
            duration_ms: 1000,
            easing: Easing::EaseOutBounce,
            animate_rotate: false,
            animate_scale: false,
        });
    spec.validate()?;
    Ok(spec)
}

/// Chart specs of the default deck keyed by display target.
pub fn default_chart_specs() -> DeckResult<IndexMap<ChartTargetId, ChartSpec>> {
    let mut specs = IndexMap::new();
    specs.insert(
        ChartTargetId::new(NEWSPAPER_CHART_TARGET),
        newspaper_chart_spec()?,
    );
    specs.insert(
        ChartTargetId::new(SOCIAL_MEDIA_CHART_TARGET),
        social_media_chart_spec()?,
    );
    Ok(specs)
}
