//! Self-contained HTML dashboard renderer.
//!
//! Resolves `{{PLACEHOLDER}}` markers in a template (built-in default or
//! caller-supplied) with score card, SVG charts, tables and the news
//! list. An empty series renders a "no data" notice instead of charts;
//! any marker left unresolved is a render error rather than silently
//! leaking into the page.

pub mod chart_svg;
pub mod default_template;
pub mod tables;

use crate::domain::error::StockdashError;
use crate::ports::dashboard_port::{DashboardContext, DashboardPort};

const NO_DATA: &str = "<p class=\"muted\">no data</p>";

pub struct HtmlDashboard {
    template: Option<String>,
}

impl HtmlDashboard {
    pub fn new() -> Self {
        Self { template: None }
    }

    /// Use a caller-supplied template instead of the built-in one. It
    /// must carry the same placeholder set.
    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
        }
    }
}

impl Default for HtmlDashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn chart_or_no_data(svg: String) -> String {
    if svg.is_empty() {
        NO_DATA.to_string()
    } else {
        svg
    }
}

fn optional_section(enabled: bool, title: &str, svg: String) -> String {
    if !enabled {
        return String::new();
    }
    format!(
        "<section>\n<h2>{}</h2>\n{}\n</section>\n",
        title,
        chart_or_no_data(svg)
    )
}

/// Resolve every placeholder in `template` against the context.
pub fn resolve(template: &str, ctx: &DashboardContext) -> Result<String, StockdashError> {
    let show_ma = ctx.show_ma && ctx.chart.has_ma_overlays();

    let mut output = template
        .replace("{{TICKER}}", &tables::escape(ctx.ticker))
        .replace("{{CHART_LABEL}}", &ctx.chart.label())
        .replace(
            "{{GENERATED_AT}}",
            &ctx.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )
        .replace("{{SCORE}}", &ctx.score.score.to_string())
        .replace("{{GRADE}}", &ctx.score.grade.to_string())
        .replace("{{REASONS}}", &tables::render_reasons(ctx.score));

    output = output.replace(
        "{{PRICE_CHART}}",
        &chart_or_no_data(chart_svg::candlestick_svg(
            ctx.series,
            show_ma,
            ctx.show_bollinger,
        )),
    );

    output = output.replace(
        "{{VOLUME_SECTION}}",
        &optional_section(ctx.show_volume, "Volume", chart_svg::volume_svg(ctx.series)),
    );
    output = output.replace(
        "{{MACD_SECTION}}",
        &optional_section(ctx.show_macd, "MACD", chart_svg::macd_svg(ctx.series)),
    );
    output = output.replace(
        "{{RSI_SECTION}}",
        &optional_section(ctx.show_rsi, "RSI", chart_svg::rsi_svg(ctx.series)),
    );

    output = output.replace("{{INFO_TABLE}}", &tables::render_info_table(ctx.info));
    output = output.replace("{{BARS_TABLE}}", &tables::render_bars_table(ctx.series));
    output = output.replace("{{NEWS_LIST}}", &tables::render_news_list(ctx.news));

    if let Some(start) = output.find("{{") {
        let marker: String = output[start..].chars().take(24).collect();
        return Err(StockdashError::Render {
            reason: format!("unresolved template placeholder near '{marker}'"),
        });
    }

    Ok(output)
}

impl DashboardPort for HtmlDashboard {
    fn render(&self, ctx: &DashboardContext) -> Result<String, StockdashError> {
        let template = self
            .template
            .as_deref()
            .unwrap_or_else(|| default_template::template());
        resolve(template, ctx)
    }
}
