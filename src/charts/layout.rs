//! Lays chart specs out into backend-agnostic render frames.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::Viewport;
use crate::error::{DeckError, DeckResult};
use crate::render::{
    ArcPrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartKind, ChartSpec, LegendPosition};

const DOUGHNUT_MARGIN_PX: f64 = 4.0;
const LEGEND_SWATCH_GAP_PX: f64 = 6.0;
const APPROX_GLYPH_WIDTH_RATIO: f64 = 0.6;
const BAR_BAND_FILL_RATIO: f64 = 0.72;
const Y_TICK_INTERVALS: u32 = 5;
const TICK_LABEL_GAP_PX: f64 = 6.0;
const PLOT_MARGIN_LEFT_PX: f64 = 56.0;
const PLOT_MARGIN_RIGHT_PX: f64 = 16.0;
const PLOT_MARGIN_TOP_PX: f64 = 28.0;
const PLOT_MARGIN_BOTTOM_PX: f64 = 52.0;

/// Builds the complete frame for `spec` in `viewport`.
pub fn build_chart_frame(spec: &ChartSpec, viewport: Viewport) -> DeckResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(DeckError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut frame = RenderFrame::new(viewport);
    let legend = layout_legend(spec, viewport);
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let (plot_top, plot_bottom) = match spec.legend.position {
        LegendPosition::Top => (legend.height, height),
        LegendPosition::Bottom => (0.0, height - legend.height),
    };
    if plot_bottom <= plot_top {
        return Err(DeckError::InvalidData(
            "legend leaves no room for the chart plot".to_owned(),
        ));
    }

    match spec.kind {
        ChartKind::Doughnut => {
            frame.arcs = doughnut_slices(spec, 0.0, plot_top, width, plot_bottom);
        }
        ChartKind::Bar => layout_bar_plot(spec, &mut frame, 0.0, plot_top, width, plot_bottom)?,
    }

    let legend_top = match spec.legend.position {
        LegendPosition::Top => 0.0,
        LegendPosition::Bottom => plot_bottom,
    };
    for item in legend.items {
        frame.rects.push(
            RectPrimitive::new(
                item.x,
                legend_top + item.y,
                item.swatch,
                item.swatch,
                spec.color_for(item.index),
            )
            .with_border(1.0, spec.border_color_for(item.index)),
        );
        frame.texts.push(
            TextPrimitive::new(
                item.text,
                item.x + item.swatch + LEGEND_SWATCH_GAP_PX,
                legend_top + item.y,
                spec.legend.font.size_px,
                spec.legend.font.color,
                TextHAlign::Left,
            )
            .bold(spec.legend.font.bold),
        );
    }

    frame.validate()?;
    Ok(frame)
}

/// Doughnut slices inside the given box, sweeping clockwise from 12 o'clock.
#[must_use]
pub fn doughnut_slices(
    spec: &ChartSpec,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
) -> Vec<ArcPrimitive> {
    let center_x = (left + right) * 0.5;
    let center_y = (top + bottom) * 0.5;
    let border = spec.segment_style.border_width;
    let outer_radius =
        ((right - left).min(bottom - top) * 0.5 - border - DOUGHNUT_MARGIN_PX).max(1.0);
    let inner_radius = outer_radius * spec.cutout;

    let total = spec.dataset.total();
    let start = -FRAC_PI_2;
    let mut cumulative = 0.0;
    spec.dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let start_angle = if total > 0.0 {
                start + cumulative / total * TAU
            } else {
                start
            };
            cumulative += record.value;
            let end_angle = if total > 0.0 {
                start + cumulative / total * TAU
            } else {
                start
            };
            ArcPrimitive {
                center_x,
                center_y,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                fill_color: spec.color_for(index),
                border_width: border,
                border_color: spec.border_color_for(index),
            }
        })
        .collect()
}

/// Value axis range and tick step for a bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueAxis {
    #[must_use]
    /// Tick values from `min` to `max`, snapped to the decimal precision of
    /// `step` so labels carry no float noise.
    pub fn ticks(self) -> Vec<f64> {
        let first = (self.min / self.step).round() as i64;
        let last = (self.max / self.step).round() as i64;
        let scale = 10f64.powi(step_decimals(self.step));
        (first..=last)
            .map(|i| (i as f64 * self.step * scale).round() / scale)
            .collect()
    }
}

/// Decimal places needed to print multiples of `step` exactly.
fn step_decimals(step: f64) -> i32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as i32
}

/// Rounds `raw` up to 1, 2, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[must_use]
pub fn value_axis(min_value: f64, max_value: f64, begin_at_zero: bool) -> ValueAxis {
    let low = if begin_at_zero { min_value.min(0.0) } else { min_value };
    let span = max_value - low;
    let step = nice_step(span / f64::from(Y_TICK_INTERVALS));
    let min = (low / step).floor() * step;
    let mut max = (max_value / step).ceil() * step;
    if max <= min {
        max = min + step;
    }
    ValueAxis { min, max, step }
}

fn layout_bar_plot(
    spec: &ChartSpec,
    frame: &mut RenderFrame,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
) -> DeckResult<()> {
    let plot_left = left + PLOT_MARGIN_LEFT_PX;
    let plot_right = right - PLOT_MARGIN_RIGHT_PX;
    let plot_top = top + PLOT_MARGIN_TOP_PX;
    let plot_bottom = bottom - PLOT_MARGIN_BOTTOM_PX;
    if plot_right <= plot_left || plot_bottom <= plot_top {
        return Err(DeckError::InvalidViewport {
            width: frame.viewport.width,
            height: frame.viewport.height,
        });
    }

    let records = spec.dataset.records();
    let min_value = records.iter().map(|r| r.value).fold(f64::INFINITY, f64::min);
    let axis = value_axis(min_value, spec.dataset.max_value(), spec.axes.begin_at_zero);
    let plot_height = plot_bottom - plot_top;
    let value_to_y =
        |value: f64| plot_bottom - (value - axis.min) / (axis.max - axis.min) * plot_height;

    let x_axis = &spec.axes.x;
    let y_axis = &spec.axes.y;
    let tick_font = spec.legend.font.size_px;

    for tick in axis.ticks() {
        let y = value_to_y(tick);
        if y_axis.grid_display {
            frame.lines.push(LinePrimitive::new(
                plot_left,
                y,
                plot_right,
                y,
                1.0,
                y_axis.grid_color,
            ));
        }
        frame.texts.push(TextPrimitive::new(
            super::format::format_value(tick),
            plot_left - TICK_LABEL_GAP_PX,
            y - tick_font * 0.5,
            tick_font,
            y_axis.tick_color,
            TextHAlign::Right,
        ));
    }

    frame.lines.push(LinePrimitive::new(
        plot_left,
        plot_top,
        plot_left,
        plot_bottom,
        1.0,
        y_axis.tick_color,
    ));
    frame.lines.push(LinePrimitive::new(
        plot_left,
        plot_bottom,
        plot_right,
        plot_bottom,
        1.0,
        x_axis.tick_color,
    ));

    let band = (plot_right - plot_left) / records.len() as f64;
    let bar_width = band * BAR_BAND_FILL_RATIO;
    for (index, record) in records.iter().enumerate() {
        let band_left = plot_left + band * index as f64;
        if x_axis.grid_display {
            frame.lines.push(LinePrimitive::new(
                band_left,
                plot_top,
                band_left,
                plot_bottom,
                1.0,
                x_axis.grid_color,
            ));
        }
        let y = value_to_y(record.value);
        frame.rects.push(
            RectPrimitive::new(
                band_left + (band - bar_width) * 0.5,
                y,
                bar_width,
                plot_bottom - y,
                spec.color_for(index),
            )
            .with_border(spec.segment_style.border_width, spec.border_color_for(index)),
        );
        frame.texts.push(TextPrimitive::new(
            record.label.clone(),
            band_left + band * 0.5,
            plot_bottom + TICK_LABEL_GAP_PX,
            tick_font,
            x_axis.tick_color,
            TextHAlign::Center,
        ));
    }

    if let Some(title) = &x_axis.title {
        frame.texts.push(
            TextPrimitive::new(
                title.clone(),
                (plot_left + plot_right) * 0.5,
                bottom - x_axis.title_font.size_px - TICK_LABEL_GAP_PX,
                x_axis.title_font.size_px,
                x_axis.title_font.color,
                TextHAlign::Center,
            )
            .bold(x_axis.title_font.bold),
        );
    }
    if let Some(title) = &y_axis.title {
        frame.texts.push(
            TextPrimitive::new(
                title.clone(),
                plot_left,
                top + TICK_LABEL_GAP_PX * 0.5,
                y_axis.title_font.size_px,
                y_axis.title_font.color,
                TextHAlign::Left,
            )
            .bold(y_axis.title_font.bold),
        );
    }

    Ok(())
}

struct LegendItem {
    index: usize,
    text: String,
    x: f64,
    y: f64,
    swatch: f64,
}

struct LegendLayout {
    height: f64,
    items: Vec<LegendItem>,
}

/// Flows legend entries into centered rows. Widths are estimated from the
/// glyph count since no text shaper is available at layout time.
fn layout_legend(spec: &ChartSpec, viewport: Viewport) -> LegendLayout {
    if !spec.legend.display {
        return LegendLayout {
            height: 0.0,
            items: Vec::new(),
        };
    }

    let font = spec.legend.font.size_px;
    let padding = spec.legend.padding;
    let swatch = font;
    let row_height = font + padding;
    let max_row_width = (f64::from(viewport.width) - 2.0 * padding).max(0.0);

    let mut rows: Vec<Vec<(usize, String, f64)>> = vec![Vec::new()];
    let mut row_width = 0.0;
    for (index, text) in spec.legend_labels().into_iter().enumerate() {
        let width = swatch
            + LEGEND_SWATCH_GAP_PX
            + text.chars().count() as f64 * font * APPROX_GLYPH_WIDTH_RATIO;
        let advance = if row_width > 0.0 { padding + width } else { width };
        if row_width > 0.0 && row_width + advance > max_row_width {
            rows.push(Vec::new());
            row_width = width;
        } else {
            row_width += advance;
        }
        if let Some(row) = rows.last_mut() {
            row.push((index, text, width));
        }
    }

    let viewport_width = f64::from(viewport.width);
    let mut items = Vec::with_capacity(spec.dataset.len());
    for (row_index, row) in rows.iter().enumerate() {
        let used: f64 = row.iter().map(|(_, _, w)| *w).sum::<f64>()
            + padding * row.len().saturating_sub(1) as f64;
        let mut x = ((viewport_width - used) * 0.5).max(0.0);
        let y = padding + row_index as f64 * row_height;
        for (index, text, width) in row {
            items.push(LegendItem {
                index: *index,
                text: text.clone(),
                x,
                y,
                swatch,
            });
            x += width + padding;
        }
    }

    LegendLayout {
        height: padding + rows.len() as f64 * row_height,
        items,
    }
}
