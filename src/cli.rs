//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvPriceAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{
    parse_date, validate_portfolio_config, validate_report_config,
};
use crate::domain::error::FolioError;
use crate::domain::holdings::{self, Holding};
use crate::domain::portfolio::Portfolio;
use crate::domain::stock::Stock;
use crate::ports::config_port::ConfigPort;
use crate::ports::price_port::PricePort;

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Portfolio profit and annualized return calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute profit and annualized return for a configured portfolio
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        prices: Option<PathBuf>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Validate a portfolio configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List symbols with price data
    ListSymbols {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        prices: Option<PathBuf>,
    },
    /// Show price data range for held symbol(s)
    Info {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        prices: Option<PathBuf>,
        #[arg(long)]
        symbol: Option<String>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report {
            config,
            prices,
            start,
            end,
        } => run_report(&config, prices.as_ref(), start.as_deref(), end.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::ListSymbols { config, prices } => {
            run_list_symbols(config.as_ref(), prices.as_ref())
        }
        Command::Info {
            config,
            prices,
            symbol,
        } => run_info(&config, prices.as_ref(), symbol.as_deref()),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = FolioError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Report period from CLI overrides, falling back to `[report]` config keys.
pub fn resolve_period(
    config: &dyn ConfigPort,
    start_override: Option<&str>,
    end_override: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), FolioError> {
    let start_str = match start_override {
        Some(s) => Some(s.to_string()),
        None => config.get_string("report", "start_date"),
    };
    let end_str = match end_override {
        Some(s) => Some(s.to_string()),
        None => config.get_string("report", "end_date"),
    };

    let start = parse_date(start_str.as_deref(), "start_date")?;
    let end = parse_date(end_str.as_deref(), "end_date")?;

    if start >= end {
        return Err(FolioError::ConfigInvalid {
            section: "report".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok((start, end))
}

/// Price file directory from the CLI override or the `[report] prices` key.
pub fn resolve_prices_dir(
    prices_override: Option<&PathBuf>,
    config: &dyn ConfigPort,
) -> Result<PathBuf, FolioError> {
    if let Some(dir) = prices_override {
        return Ok(dir.clone());
    }
    config
        .get_string("report", "prices")
        .map(PathBuf::from)
        .ok_or_else(|| FolioError::ConfigMissing {
            section: "report".to_string(),
            key: "prices".to_string(),
        })
}

fn run_report(
    config_path: &PathBuf,
    prices_override: Option<&PathBuf>,
    start_override: Option<&str>,
    end_override: Option<&str>,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_portfolio_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve period and holdings
    let (start, end) = match resolve_period(&adapter, start_override, end_override) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let holdings = match holdings::parse_holdings(&adapter) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Resolve price data directory
    let prices_dir = match resolve_prices_dir(prices_override, &adapter) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let price_port = CsvPriceAdapter::new(prices_dir);

    // Stages 4-5: Load prices and compute
    run_report_pipeline(&price_port, &holdings, start, end)
}

pub fn run_report_pipeline(
    price_port: &dyn PricePort,
    holdings: &[Holding],
    start: NaiveDate,
    end: NaiveDate,
) -> ExitCode {
    // Stage 4: Build the portfolio from price data
    eprintln!(
        "Loading prices for {} symbols, {} to {}",
        holdings.len(),
        start,
        end,
    );

    let mut portfolio = Portfolio::empty();
    for holding in holdings {
        let points = match price_port.fetch_prices(&holding.symbol, start, end) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };
        portfolio.add_holding(Stock::from_points(holding.symbol.clone(), points), holding.shares);
    }

    // Stage 5: Compute and print the report
    let start_value = match portfolio.value_at(start) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let end_value = match portfolio.value_at(end) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let profit = end_value - start_value;

    println!("=== Portfolio Report ===");
    println!("Period:            {} to {} ({} days)", start, end, (end - start).num_days());
    println!("Holdings:          {}", holdings.len());
    println!("Start Value:       {:.2}", start_value);
    println!("End Value:         {:.2}", end_value);
    println!("Profit:            {:+.2}", profit);
    if start_value != 0.0 {
        println!("Total Return:      {:.2}%", profit / start_value * 100.0);
    }

    match portfolio.annualized_return(start, end) {
        Ok(rate) => {
            println!("Annualized Return: {:.2}%", rate * 100.0);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_report_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_portfolio_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let holdings = match holdings::parse_holdings(&adapter) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nHoldings:");
    for holding in &holdings {
        eprintln!("  {}: {} shares", holding.symbol, holding.shares);
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}

fn run_list_symbols(config_path: Option<&PathBuf>, prices_override: Option<&PathBuf>) -> ExitCode {
    let prices_dir = match prices_override {
        Some(dir) => dir.clone(),
        None => {
            let config_path = match config_path {
                Some(p) => p,
                None => {
                    eprintln!("error: --prices or --config is required for list-symbols");
                    return ExitCode::from(1);
                }
            };
            let adapter = match load_config(config_path) {
                Ok(a) => a,
                Err(code) => return code,
            };
            match resolve_prices_dir(None, &adapter) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("error: {e}");
                    return (&e).into();
                }
            }
        }
    };

    let adapter = CsvPriceAdapter::new(prices_dir);
    let symbols = match adapter.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No price files found");
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(
    config_path: &PathBuf,
    prices_override: Option<&PathBuf>,
    symbol_override: Option<&str>,
) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let symbols: Vec<String> = match symbol_override {
        Some(s) => vec![s.to_uppercase()],
        None => match holdings::parse_holdings(&adapter) {
            Ok(h) => h.into_iter().map(|h| h.symbol).collect(),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    if symbols.is_empty() {
        eprintln!("error: no holdings configured");
        return ExitCode::from(2);
    }

    let prices_dir = match resolve_prices_dir(prices_override, &adapter) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let price_port = CsvPriceAdapter::new(prices_dir);
    for symbol in &symbols {
        match price_port.data_range(symbol) {
            Ok(Some((min_date, max_date, count))) => {
                println!("{}: {} rows, {} to {}", symbol, count, min_date, max_date);
            }
            Ok(None) => {
                eprintln!("{}: no data found", symbol);
            }
            Err(e) => {
                eprintln!("error querying {}: {}", symbol, e);
            }
        }
    }
    ExitCode::SUCCESS
}
