//! CLI definition and dispatch.
//!
//! Handlers return `Result<(), StockdashError>`; `run` prints errors to
//! stderr and maps them to process exit codes. Progress goes to stderr,
//! data to stdout so output can be piped cleanly.

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_market_data::CsvMarketData;
use crate::adapters::csv_portfolio_adapter::CsvPortfolioAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_dashboard::HtmlDashboard;
use crate::adapters::yahoo_adapter::{
    YahooAdapter, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::domain::chart::ChartType;
use crate::domain::enrich::{enrich, EnrichedBar};
use crate::domain::error::StockdashError;
use crate::domain::portfolio::PortfolioEntry;
use crate::domain::quote::CompanyInfo;
use crate::domain::scan;
use crate::domain::score::score_series;
use crate::domain::session::{AppState, SearchHistory};
use crate::domain::watchlist::parse_tickers;
use crate::ports::config_port::ConfigPort;
use crate::ports::dashboard_port::{DashboardContext, DashboardPort};
use crate::ports::market_data_port::MarketDataPort;
use crate::ports::portfolio_store::PortfolioStore;

pub const DEFAULT_CONFIG_FILE: &str = "stockdash.ini";

#[derive(Parser, Debug)]
#[command(name = "stockdash", about = "Personal stock dashboard")]
pub struct Cli {
    /// Config file (INI); defaults to stockdash.ini when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one ticker and write an HTML dashboard
    Analyze {
        ticker: String,
        /// Chart type: daily, weekly or monthly
        #[arg(long, default_value = "daily")]
        chart: String,
        /// Intraday bar size in minutes (1, 15, 30, 60, 90); overrides --chart
        #[arg(long)]
        minutes: Option<u32>,
        /// Overlay Bollinger bands on the price chart
        #[arg(long)]
        bollinger: bool,
        /// Render the MACD panel
        #[arg(long)]
        macd: bool,
        /// Render the RSI panel
        #[arg(long)]
        rsi: bool,
        /// Skip moving-average overlays
        #[arg(long)]
        no_ma: bool,
        /// Skip the volume panel
        #[arg(long)]
        no_volume: bool,
        /// Dashboard output path (default <TICKER>_dashboard.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read per-ticker OHLCV CSV files from this directory instead
        /// of the network
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Score a comma-separated ticker list and rank the results
    Scan {
        tickers: String,
        #[arg(long, default_value = "daily")]
        chart: String,
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Show only the top N results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print company metadata
    Info { ticker: String },
    /// Print recent headlines
    News {
        ticker: String,
        #[arg(long, default_value_t = 8)]
        limit: usize,
    },
    /// Manage the paper portfolio
    Portfolio {
        #[command(subcommand)]
        action: PortfolioAction,
    },
    /// Show or clear the ticker search history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum PortfolioAction {
    /// List all lots
    List,
    /// Add a lot
    Add {
        #[arg(long)]
        ticker: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        qty: u32,
        /// Purchase date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace fields of the lot at INDEX (as shown by list)
    Edit {
        index: usize,
        #[arg(long)]
        ticker: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        qty: Option<u32>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete the lot at INDEX
    Delete { index: usize },
    /// Write a dated CSV copy of the portfolio
    Export {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Replace the portfolio with the entries from FILE
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    Show,
    Clear,
}

/// Runtime settings resolved from the config file with built-in
/// fallbacks. CLI flags override these at the call sites.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub portfolio_file: PathBuf,
    pub history_file: PathBuf,
    pub output_dir: PathBuf,
}

pub fn build_settings(config: &dyn ConfigPort) -> Settings {
    Settings {
        base_url: config
            .get_string("data", "base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        user_agent: config
            .get_string("data", "user_agent")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        timeout_secs: config
            .get_int("data", "timeout_secs", DEFAULT_TIMEOUT_SECS as i64)
            .max(1) as u64,
        portfolio_file: PathBuf::from(
            config
                .get_string("portfolio", "file")
                .unwrap_or_else(|| "portfolio.csv".to_string()),
        ),
        history_file: PathBuf::from(
            config
                .get_string("session", "history_file")
                .unwrap_or_else(|| "search_history.txt".to_string()),
        ),
        output_dir: PathBuf::from(
            config
                .get_string("dashboard", "output_dir")
                .unwrap_or_else(|| ".".to_string()),
        ),
    }
}

/// Map `--chart`/`--minutes` to a chart type; minutes wins when given.
pub fn resolve_chart(chart: &str, minutes: Option<u32>) -> Result<ChartType, StockdashError> {
    match minutes {
        Some(m) => ChartType::intraday(m),
        None => ChartType::from_name(chart),
    }
}

pub fn default_output_path(ticker: &str, settings: &Settings) -> PathBuf {
    settings.output_dir.join(format!("{}_dashboard.html", ticker))
}

pub fn run(cli: Cli) -> ExitCode {
    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let settings = build_settings(&config);

    let mut state = match load_state(&settings) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let result = match cli.command {
        Command::Analyze {
            ticker,
            chart,
            minutes,
            bollinger,
            macd,
            rsi,
            no_ma,
            no_volume,
            output,
            data_dir,
        } => run_analyze(
            &settings,
            &mut state,
            AnalyzeArgs {
                ticker,
                chart,
                minutes,
                bollinger,
                macd,
                rsi,
                no_ma,
                no_volume,
                output,
                data_dir,
            },
        ),
        Command::Scan {
            tickers,
            chart,
            data_dir,
            limit,
        } => run_scan(&settings, &tickers, &chart, data_dir.as_deref(), limit),
        Command::Info { ticker } => run_info(&settings, &mut state, &ticker),
        Command::News { ticker, limit } => run_news(&settings, &mut state, &ticker, limit),
        Command::Portfolio { action } => run_portfolio(&settings, &mut state, action),
        Command::History { action } => run_history(&settings, &mut state, action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, StockdashError> {
    match path {
        Some(path) => {
            FileConfigAdapter::from_file(path).map_err(|e| StockdashError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        // the default config file is optional
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            FileConfigAdapter::from_file(DEFAULT_CONFIG_FILE).map_err(|e| {
                StockdashError::ConfigParse {
                    file: DEFAULT_CONFIG_FILE.to_string(),
                    reason: e.to_string(),
                }
            })
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

fn load_state(settings: &Settings) -> Result<AppState, StockdashError> {
    Ok(AppState {
        history: load_history(&settings.history_file)?,
        portfolio: Default::default(),
    })
}

fn load_history(path: &Path) -> Result<SearchHistory, StockdashError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(SearchHistory::from_lines(&text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SearchHistory::new()),
        Err(e) => Err(StockdashError::Store {
            reason: format!("cannot read {}: {}", path.display(), e),
        }),
    }
}

fn save_history(path: &Path, history: &SearchHistory) -> Result<(), StockdashError> {
    fs::write(path, history.to_lines()).map_err(|e| StockdashError::Store {
        reason: format!("cannot write {}: {}", path.display(), e),
    })
}

fn record_search(
    settings: &Settings,
    state: &mut AppState,
    ticker: &str,
) -> Result<(), StockdashError> {
    state.history.record(ticker);
    save_history(&settings.history_file, &state.history)
}

fn make_gateway(
    data_dir: Option<&Path>,
    settings: &Settings,
) -> Result<Box<dyn MarketDataPort>, StockdashError> {
    match data_dir {
        Some(dir) => Ok(Box::new(CsvMarketData::new(dir.to_path_buf()))),
        None => Ok(Box::new(YahooAdapter::new(
            &settings.base_url,
            &settings.user_agent,
            settings.timeout_secs,
        )?)),
    }
}

struct AnalyzeArgs {
    ticker: String,
    chart: String,
    minutes: Option<u32>,
    bollinger: bool,
    macd: bool,
    rsi: bool,
    no_ma: bool,
    no_volume: bool,
    output: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

/// Trailing slice of the enriched series inside the chart's display
/// window. Indicators are computed over the full fetch range first so
/// the visible bars carry fully warmed-up columns.
fn display_window(series: &[EnrichedBar], chart: ChartType) -> &[EnrichedBar] {
    let Some(last) = series.last() else {
        return series;
    };
    let cutoff = last.bar.timestamp - chart.display_window();
    let start = series.partition_point(|e| e.bar.timestamp < cutoff);
    &series[start..]
}

fn run_analyze(
    settings: &Settings,
    state: &mut AppState,
    args: AnalyzeArgs,
) -> Result<(), StockdashError> {
    let ticker = args.ticker.trim().to_uppercase();
    let chart = resolve_chart(&args.chart, args.minutes)?;
    let gateway = make_gateway(args.data_dir.as_deref(), settings)?;

    record_search(settings, state, &ticker)?;

    // Stage 1: price history
    eprintln!("[1/4] Fetching {} history for {}", chart.label(), ticker);
    let bars = match gateway.fetch_history(&ticker, chart) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("warning: {e}");
            Vec::new()
        }
    };
    if bars.is_empty() {
        println!("No data found for {}.", ticker);
        return Ok(());
    }

    // Stage 2: indicators and score
    eprintln!("[2/4] Computing indicators over {} bars", bars.len());
    let enriched = enrich(&bars);
    let score = score_series(&enriched);

    // Stage 3: metadata and news, both optional
    eprintln!("[3/4] Fetching company info and news");
    let info = gateway.fetch_info(&ticker).unwrap_or_else(|e| {
        eprintln!("warning: {e}");
        CompanyInfo::default()
    });
    let news = gateway.fetch_news(&ticker, 8).unwrap_or_else(|e| {
        eprintln!("warning: {e}");
        Vec::new()
    });

    // Stage 4: dashboard
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&ticker, settings));
    eprintln!("[4/4] Writing dashboard to {}", output.display());

    let ctx = DashboardContext {
        ticker: &ticker,
        chart,
        generated_at: Utc::now(),
        series: display_window(&enriched, chart),
        score: &score,
        info: &info,
        news: &news,
        show_ma: !args.no_ma,
        show_bollinger: args.bollinger,
        show_volume: !args.no_volume,
        show_macd: args.macd,
        show_rsi: args.rsi,
    };
    let html = HtmlDashboard::new().render(&ctx)?;
    fs::write(&output, html).map_err(|e| StockdashError::Render {
        reason: format!("cannot write {}: {}", output.display(), e),
    })?;

    println!("{} score: {} [{}]", ticker, score.score, score.grade);
    for reason in &score.reasons {
        println!("  - {reason}");
    }
    println!("Dashboard: {}", output.display());
    Ok(())
}

fn run_scan(
    settings: &Settings,
    tickers: &str,
    chart: &str,
    data_dir: Option<&Path>,
    limit: Option<usize>,
) -> Result<(), StockdashError> {
    let tickers = parse_tickers(tickers)?;
    let chart = resolve_chart(chart, None)?;
    let gateway = make_gateway(data_dir, settings)?;

    eprintln!("Scanning {} tickers...", tickers.len());
    let outcome = scan::run_scan(gateway.as_ref(), &tickers, chart);

    if outcome.ranked.is_empty() {
        println!("No tickers could be scored.");
    } else {
        println!("{:<5} {:<10} {:>5}  {:<5} {}", "rank", "ticker", "score", "grade", "signals");
        let shown = limit.unwrap_or(outcome.ranked.len());
        for (i, entry) in outcome.ranked.iter().take(shown).enumerate() {
            println!(
                "{:<5} {:<10} {:>5}  {:<5} {}",
                i + 1,
                entry.ticker,
                entry.result.score,
                entry.result.grade.to_string(),
                entry.result.reasons.first().map(String::as_str).unwrap_or("-"),
            );
        }
    }

    for skipped in &outcome.skipped {
        eprintln!("skipped {}: {}", skipped.ticker, skipped.reason);
    }
    Ok(())
}

fn print_info_row(label: &str, value: String) {
    println!("{:<16} {}", format!("{label}:"), value);
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn run_info(
    settings: &Settings,
    state: &mut AppState,
    ticker: &str,
) -> Result<(), StockdashError> {
    let ticker = ticker.trim().to_uppercase();
    let gateway = make_gateway(None, settings)?;
    let info = gateway.fetch_info(&ticker)?;

    record_search(settings, state, &ticker)?;

    if info.is_empty() {
        println!("No metadata found for {}.", ticker);
        return Ok(());
    }

    print_info_row("Name", info.name.unwrap_or_else(|| "-".to_string()));
    print_info_row("Currency", info.currency.unwrap_or_else(|| "-".to_string()));
    print_info_row("Price", fmt_opt(info.current_price));
    print_info_row("Prev close", fmt_opt(info.previous_close));
    print_info_row("Bid", fmt_opt(info.bid));
    print_info_row("Ask", fmt_opt(info.ask));
    print_info_row("Market cap", fmt_opt(info.market_cap));
    print_info_row("Trailing P/E", fmt_opt(info.trailing_pe));
    print_info_row("Price/book", fmt_opt(info.price_to_book));
    print_info_row("52w high", fmt_opt(info.fifty_two_week_high));
    print_info_row("52w low", fmt_opt(info.fifty_two_week_low));
    print_info_row(
        "Dividend yield",
        info.dividend_yield
            .map(|v| format!("{:.2}%", v * 100.0))
            .unwrap_or_else(|| "-".to_string()),
    );
    Ok(())
}

fn run_news(
    settings: &Settings,
    state: &mut AppState,
    ticker: &str,
    limit: usize,
) -> Result<(), StockdashError> {
    let ticker = ticker.trim().to_uppercase();
    let gateway = make_gateway(None, settings)?;
    let news = gateway.fetch_news(&ticker, limit)?;

    record_search(settings, state, &ticker)?;

    if news.is_empty() {
        println!("No recent headlines for {}.", ticker);
        return Ok(());
    }
    for item in &news {
        println!("- {} ({})", item.title, item.publisher);
        println!("  {}", item.link);
    }
    Ok(())
}

pub fn parse_entry_date(date: Option<&str>) -> Result<NaiveDate, StockdashError> {
    match date {
        Some(d) => {
            NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| StockdashError::InvalidArgument {
                reason: format!("invalid date '{d}' (expected YYYY-MM-DD)"),
            })
        }
        None => Ok(Local::now().date_naive()),
    }
}

fn run_portfolio(
    settings: &Settings,
    state: &mut AppState,
    action: PortfolioAction,
) -> Result<(), StockdashError> {
    let store = CsvPortfolioAdapter::new(settings.portfolio_file.clone());
    state.portfolio = store.load()?;

    match action {
        PortfolioAction::List => {
            if state.portfolio.is_empty() {
                println!("Portfolio is empty.");
                return Ok(());
            }
            println!(
                "{:<4} {:<10} {:>12} {:>6} {:<12} {:>12}",
                "#", "ticker", "buy price", "qty", "date", "cost"
            );
            for (i, entry) in state.portfolio.entries().iter().enumerate() {
                println!(
                    "{:<4} {:<10} {:>12.2} {:>6} {:<12} {:>12.2}",
                    i,
                    entry.ticker,
                    entry.buy_price,
                    entry.qty,
                    entry.date.format("%Y-%m-%d").to_string(),
                    entry.cost(),
                );
            }
            println!("total cost: {:.2}", state.portfolio.total_cost());
        }
        PortfolioAction::Add {
            ticker,
            price,
            qty,
            date,
        } => {
            let entry = PortfolioEntry {
                ticker: ticker.trim().to_uppercase(),
                buy_price: price,
                qty,
                date: parse_entry_date(date.as_deref())?,
            };
            println!("Added {} x{} at {:.2}", entry.ticker, entry.qty, entry.buy_price);
            state.portfolio.add(entry);
            store.save(&state.portfolio)?;
        }
        PortfolioAction::Edit {
            index,
            ticker,
            price,
            qty,
            date,
        } => {
            let existing = state
                .portfolio
                .entries()
                .get(index)
                .cloned()
                .ok_or_else(|| StockdashError::InvalidArgument {
                    reason: format!("no portfolio entry at index {index}"),
                })?;
            let entry = PortfolioEntry {
                ticker: ticker
                    .map(|t| t.trim().to_uppercase())
                    .unwrap_or(existing.ticker),
                buy_price: price.unwrap_or(existing.buy_price),
                qty: qty.unwrap_or(existing.qty),
                date: match date {
                    Some(d) => parse_entry_date(Some(&d))?,
                    None => existing.date,
                },
            };
            state.portfolio.edit(index, entry)?;
            store.save(&state.portfolio)?;
            println!("Updated entry {index}.");
        }
        PortfolioAction::Delete { index } => {
            let removed = state.portfolio.remove(index)?;
            store.save(&state.portfolio)?;
            println!("Removed {} x{}.", removed.ticker, removed.qty);
        }
        PortfolioAction::Export { dir } => {
            let dir = dir.unwrap_or_else(|| settings.output_dir.clone());
            let path = store.export_dated(&state.portfolio, &dir)?;
            println!("Exported to {}", path.display());
        }
        PortfolioAction::Import { file } => {
            // replace only on a clean parse; an error leaves the saved
            // portfolio untouched
            let imported = store.import(&file)?;
            state.portfolio = imported;
            store.save(&state.portfolio)?;
            println!("Imported {} entries.", state.portfolio.len());
        }
    }
    Ok(())
}

fn run_history(
    settings: &Settings,
    state: &mut AppState,
    action: HistoryAction,
) -> Result<(), StockdashError> {
    match action {
        HistoryAction::Show => {
            if state.history.is_empty() {
                println!("Search history is empty.");
            } else {
                for ticker in state.history.tickers() {
                    println!("{ticker}");
                }
            }
        }
        HistoryAction::Clear => {
            state.history.clear();
            save_history(&settings.history_file, &state.history)?;
            println!("Search history cleared.");
        }
    }
    Ok(())
}
