//! HTML fragment builders for the dashboard tables and lists.

use crate::domain::enrich::EnrichedBar;
use crate::domain::quote::{CompanyInfo, NewsItem};
use crate::domain::score::ScoreResult;

/// Bars shown in the recent-bars table.
pub const RECENT_BARS: usize = 10;

const DASH: &str = "&ndash;";

pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => DASH.to_string(),
    }
}

fn fmt_opt_u64(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => DASH.to_string(),
    }
}

/// Market cap in billions when large enough to be unreadable raw.
fn fmt_market_cap(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 1e9 => format!("{:.2}B", v / 1e9),
        Some(v) if v >= 1e6 => format!("{:.2}M", v / 1e6),
        Some(v) => format!("{:.0}", v),
        None => DASH.to_string(),
    }
}

pub fn render_reasons(score: &ScoreResult) -> String {
    if score.reasons.is_empty() {
        return "<li class=\"muted\">no signals</li>\n".to_string();
    }
    score
        .reasons
        .iter()
        .map(|r| format!("<li>{}</li>\n", escape(r)))
        .collect()
}

pub fn render_info_table(info: &CompanyInfo) -> String {
    let row = |label: &str, value: String| format!("<tr><th>{}</th><td>{}</td></tr>\n", label, value);

    let mut out = String::new();
    out.push_str(&row(
        "Name",
        info.name.as_deref().map(escape).unwrap_or_else(|| DASH.to_string()),
    ));
    out.push_str(&row(
        "Currency",
        info.currency
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| DASH.to_string()),
    ));
    out.push_str(&row("Current Price", fmt_opt(info.current_price)));
    out.push_str(&row("Previous Close", fmt_opt(info.previous_close)));
    out.push_str(&row(
        "Bid / Size",
        format!("{} / {}", fmt_opt(info.bid), fmt_opt_u64(info.bid_size)),
    ));
    out.push_str(&row(
        "Ask / Size",
        format!("{} / {}", fmt_opt(info.ask), fmt_opt_u64(info.ask_size)),
    ));
    out.push_str(&row("Market Cap", fmt_market_cap(info.market_cap)));
    out.push_str(&row("Trailing P/E", fmt_opt(info.trailing_pe)));
    out.push_str(&row("Price / Book", fmt_opt(info.price_to_book)));
    out.push_str(&row("52w High", fmt_opt(info.fifty_two_week_high)));
    out.push_str(&row("52w Low", fmt_opt(info.fifty_two_week_low)));
    out.push_str(&row(
        "Dividend Yield",
        match info.dividend_yield {
            Some(v) => format!("{:.2}%", v * 100.0),
            None => DASH.to_string(),
        },
    ));
    out
}

/// Rows for the last `RECENT_BARS` bars, newest first.
pub fn render_bars_table(series: &[EnrichedBar]) -> String {
    let mut out = String::new();
    for e in series.iter().rev().take(RECENT_BARS) {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>\n",
            e.bar.timestamp.format("%Y-%m-%d"),
            e.bar.open,
            e.bar.high,
            e.bar.low,
            e.bar.close,
            e.bar.volume,
            fmt_opt(e.rsi14),
        ));
    }
    if out.is_empty() {
        out.push_str("<tr><td colspan=\"7\">no data</td></tr>\n");
    }
    out
}

pub fn render_news_list(news: &[NewsItem]) -> String {
    if news.is_empty() {
        return "<li class=\"muted\">no recent headlines</li>\n".to_string();
    }
    news.iter()
        .map(|item| {
            format!(
                "<li><a href=\"{}\">{}</a> <span class=\"muted\">{}</span></li>\n",
                escape(&item.link),
                escape(&item.title),
                escape(&item.publisher),
            )
        })
        .collect()
}
