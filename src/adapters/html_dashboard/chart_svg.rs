//! SVG chart rendering for the dashboard.
//!
//! Hand-built SVG with fixed geometry constants. Each generator returns
//! an empty string when the series has nothing to draw; the caller
//! substitutes a "no data" placeholder instead.

use crate::domain::enrich::EnrichedBar;

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 280.0;
pub const PANEL_HEIGHT: f64 = 140.0;
pub const PADDING: f64 = 40.0;

// Up bars red, down bars blue.
const UP_COLOR: &str = "#d94545";
const DOWN_COLOR: &str = "#3b6fd4";

const MA_COLORS: [(&str, &str); 4] = [
    ("MA5", "#2ca02c"),
    ("MA20", "#d62728"),
    ("MA60", "#ff7f0e"),
    ("MA120", "#9467bd"),
];

struct Scale {
    min: f64,
    max: f64,
    plot_height: f64,
    top: f64,
}

impl Scale {
    fn new(min: f64, max: f64, top: f64, plot_height: f64) -> Self {
        Scale {
            min,
            max,
            plot_height,
            top,
        }
    }

    fn y(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return self.top + self.plot_height / 2.0;
        }
        self.top + self.plot_height - (value - self.min) / range * self.plot_height
    }
}

fn x_step(count: usize, plot_width: f64) -> f64 {
    if count == 0 {
        0.0
    } else {
        plot_width / count as f64
    }
}

fn x_center(i: usize, step: f64) -> f64 {
    PADDING + i as f64 * step + step / 2.0
}

fn polyline(points: &[(f64, f64)], color: &str, dashed: bool) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let coords: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect();
    let dash = if dashed {
        " stroke-dasharray=\"4 3\""
    } else {
        ""
    };
    format!(
        "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.2\"{}/>\n",
        coords.join(" "),
        color,
        dash
    )
}

/// Polyline over an optional per-bar column; gaps (warmup `None`s at the
/// front) simply shorten the line.
fn column_polyline(
    series: &[EnrichedBar],
    column: impl Fn(&EnrichedBar) -> Option<f64>,
    scale: &Scale,
    step: f64,
    color: &str,
    dashed: bool,
) -> String {
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, e)| column(e).map(|v| (x_center(i, step), scale.y(v))))
        .collect();
    polyline(&points, color, dashed)
}

fn svg_open(height: f64) -> String {
    format!(
        "<svg viewBox=\"0 0 {:.0} {:.0}\" width=\"{:.0}\" height=\"{:.0}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        CHART_WIDTH, height, CHART_WIDTH, height
    )
}

fn frame(height: f64) -> String {
    format!(
        "<rect x=\"{:.0}\" y=\"{:.0}\" width=\"{:.0}\" height=\"{:.0}\" fill=\"none\" stroke=\"#cccccc\"/>\n",
        PADDING,
        PADDING / 2.0,
        CHART_WIDTH - 2.0 * PADDING,
        height - PADDING
    )
}

/// Candlestick chart with optional moving-average and Bollinger
/// overlays. Overlay lines only cover bars where the column is defined.
pub fn candlestick_svg(series: &[EnrichedBar], show_ma: bool, show_bollinger: bool) -> String {
    if series.is_empty() {
        return String::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for e in series {
        min = min.min(e.bar.low);
        max = max.max(e.bar.high);
        if show_bollinger {
            if let Some(lower) = e.bb_lower {
                min = min.min(lower);
            }
            if let Some(upper) = e.bb_upper {
                max = max.max(upper);
            }
        }
    }

    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let plot_height = CHART_HEIGHT - PADDING;
    let scale = Scale::new(min, max, PADDING / 2.0, plot_height);
    let step = x_step(series.len(), plot_width);
    let body_width = (step * 0.6).max(1.0);

    let mut svg = svg_open(CHART_HEIGHT);
    svg.push_str(&frame(CHART_HEIGHT));

    for (i, e) in series.iter().enumerate() {
        let x = x_center(i, step);
        let color = if e.bar.is_bullish() {
            UP_COLOR
        } else {
            DOWN_COLOR
        };

        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\"/>\n",
            x,
            scale.y(e.bar.high),
            x,
            scale.y(e.bar.low),
            color
        ));

        let (top, bottom) = e.bar.body();
        let body_top = scale.y(top);
        let body_height = (scale.y(bottom) - body_top).max(1.0);
        svg.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
            x - body_width / 2.0,
            body_top,
            body_width,
            body_height,
            color
        ));
    }

    if show_ma {
        let columns: [fn(&EnrichedBar) -> Option<f64>; 4] =
            [|e| e.ma5, |e| e.ma20, |e| e.ma60, |e| e.ma120];
        for (column, (_, color)) in columns.iter().zip(MA_COLORS.iter()) {
            svg.push_str(&column_polyline(series, column, &scale, step, color, false));
        }
    }

    if show_bollinger {
        svg.push_str(&column_polyline(
            series,
            |e| e.bb_upper,
            &scale,
            step,
            "#888888",
            true,
        ));
        svg.push_str(&column_polyline(
            series,
            |e| e.bb_lower,
            &scale,
            step,
            "#888888",
            true,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Per-bar volume columns; bars where the close rose against the
/// previous bar are red, the rest blue. The first bar counts as up.
pub fn volume_svg(series: &[EnrichedBar]) -> String {
    if series.is_empty() {
        return String::new();
    }

    let max_volume = series.iter().map(|e| e.bar.volume).max().unwrap_or(0);
    if max_volume == 0 {
        return String::new();
    }

    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let plot_height = PANEL_HEIGHT - PADDING;
    let step = x_step(series.len(), plot_width);
    let bar_width = (step * 0.6).max(1.0);
    let base_y = PADDING / 2.0 + plot_height;

    let mut svg = svg_open(PANEL_HEIGHT);
    svg.push_str(&frame(PANEL_HEIGHT));

    let mut prev_close = None;
    for (i, e) in series.iter().enumerate() {
        let up = prev_close.map_or(true, |p| e.bar.close >= p);
        prev_close = Some(e.bar.close);

        let height = e.bar.volume as f64 / max_volume as f64 * plot_height;
        let color = if up { UP_COLOR } else { DOWN_COLOR };
        svg.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
            x_center(i, step) - bar_width / 2.0,
            base_y - height,
            bar_width,
            height.max(0.5),
            color
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// MACD line, signal line and the zero axis. Empty when the series has
/// no defined MACD values (fewer than two bars).
pub fn macd_svg(series: &[EnrichedBar]) -> String {
    let values: Vec<f64> = series
        .iter()
        .flat_map(|e| [e.macd, e.signal])
        .flatten()
        .collect();
    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let max = values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.0);

    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let plot_height = PANEL_HEIGHT - PADDING;
    let scale = Scale::new(min, max, PADDING / 2.0, plot_height);
    let step = x_step(series.len(), plot_width);

    let mut svg = svg_open(PANEL_HEIGHT);
    svg.push_str(&frame(PANEL_HEIGHT));

    let zero_y = scale.y(0.0);
    svg.push_str(&format!(
        "<line x1=\"{:.0}\" y1=\"{:.1}\" x2=\"{:.0}\" y2=\"{:.1}\" stroke=\"#aaaaaa\" stroke-dasharray=\"2 2\"/>\n",
        PADDING,
        zero_y,
        CHART_WIDTH - PADDING,
        zero_y
    ));

    svg.push_str(&column_polyline(
        series,
        |e| e.macd,
        &scale,
        step,
        DOWN_COLOR,
        false,
    ));
    svg.push_str(&column_polyline(
        series,
        |e| e.signal,
        &scale,
        step,
        "#ff7f0e",
        false,
    ));

    svg.push_str("</svg>\n");
    svg
}

/// RSI line on a fixed 0-100 scale with guide lines at 30 and 70.
pub fn rsi_svg(series: &[EnrichedBar]) -> String {
    if series.iter().all(|e| e.rsi14.is_none()) {
        return String::new();
    }

    let plot_width = CHART_WIDTH - 2.0 * PADDING;
    let plot_height = PANEL_HEIGHT - PADDING;
    let scale = Scale::new(0.0, 100.0, PADDING / 2.0, plot_height);
    let step = x_step(series.len(), plot_width);

    let mut svg = svg_open(PANEL_HEIGHT);
    svg.push_str(&frame(PANEL_HEIGHT));

    for guide in [30.0, 70.0] {
        let y = scale.y(guide);
        svg.push_str(&format!(
            "<line x1=\"{:.0}\" y1=\"{:.1}\" x2=\"{:.0}\" y2=\"{:.1}\" stroke=\"#aaaaaa\" stroke-dasharray=\"2 2\"/>\n",
            PADDING,
            y,
            CHART_WIDTH - PADDING,
            y
        ));
    }

    svg.push_str(&column_polyline(
        series,
        |e| e.rsi14,
        &scale,
        step,
        "#9467bd",
        false,
    ));

    svg.push_str("</svg>\n");
    svg
}
