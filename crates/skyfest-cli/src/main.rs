// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use skyfest_core::{
    ContentCatalog, ContentType, Endpoint, FestivalCatalog, FlightPhase, FlightSegment,
    ResolverConfig, SelectionContext, ThemeEngine,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Festival catalog JSON (defaults to the bundled dataset)
    #[arg(long, env = "SKYFEST_FESTIVALS", global = true)]
    festivals: Option<PathBuf>,

    /// Content catalog JSON (defaults to the bundled dataset)
    #[arg(long, env = "SKYFEST_CONTENT", global = true)]
    content: Option<PathBuf>,

    /// Resolver config JSON
    #[arg(long, env = "SKYFEST_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Reject malformed dates instead of ignoring them
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selection {
    /// Departure city
    #[arg(long)]
    origin: Option<String>,
    /// Arrival city
    #[arg(long)]
    destination: Option<String>,
    /// Travel date (YYYY-MM-DD), repeatable
    #[arg(long = "date")]
    dates: Vec<String>,
    /// Theme color hint, e.g. "#0055A4"
    #[arg(long)]
    color: Option<String>,
    /// Festival name to prefer when it is a candidate
    #[arg(long)]
    pin: Option<String>,
}

impl Selection {
    fn context(&self) -> SelectionContext {
        let segment = (self.origin.is_some() || self.destination.is_some()).then(|| {
            FlightSegment {
                origin: self.origin.clone().map(Endpoint::city).unwrap_or_default(),
                destination: self
                    .destination
                    .clone()
                    .map(Endpoint::city)
                    .unwrap_or_default(),
            }
        });
        SelectionContext {
            segment,
            dates: self.dates.clone(),
            theme_color: self.color.clone(),
            pinned_festival: self.pin.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the festivals at either end of the segment
    Festivals {
        #[command(flatten)]
        selection: Selection,
    },
    /// Show the primary festival
    Primary {
        #[command(flatten)]
        selection: Selection,
    },
    /// Show a single card
    Card {
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        phase: FlightPhase,
        #[arg(long = "type")]
        kind: ContentType,
        /// Card position; negative or out-of-range prints null
        #[arg(long, allow_negative_numbers = true)]
        index: i64,
    },
    /// Show every card for a phase and content type
    Cards {
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        phase: FlightPhase,
        #[arg(long = "type")]
        kind: ContentType,
    },
    /// Show both card strips for a phase
    Deck {
        #[command(flatten)]
        selection: Selection,
        #[arg(long)]
        phase: FlightPhase,
    },
    /// Load and validate the catalogs
    CheckCatalogs,
}

#[derive(Serialize)]
struct CatalogSummary {
    festivals: usize,
    months: usize,
    festivals_with_content: usize,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn load_engine(cli: &Cli) -> Result<ThemeEngine> {
    let festivals = match &cli.festivals {
        Some(path) => FestivalCatalog::from_path(path)
            .with_context(|| format!("Failed to load festival catalog {:?}", path))?,
        None => FestivalCatalog::bundled(),
    };
    let content = match &cli.content {
        Some(path) => ContentCatalog::from_path(path)
            .with_context(|| format!("Failed to load content catalog {:?}", path))?,
        None => ContentCatalog::bundled(),
    };

    let config_path = cli.config.clone().unwrap_or_else(ResolverConfig::default_path);
    let mut config = ResolverConfig::load(&config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;
    if cli.strict {
        config.strict_dates = true;
    }
    log::info!(
        "Loaded {} festivals, strict_dates={}",
        festivals.len(),
        config.strict_dates
    );

    Ok(ThemeEngine::new(Arc::new(festivals), Arc::new(content)).with_config(config))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let engine = load_engine(&cli)?;

    match &cli.command {
        Commands::Festivals { selection } => {
            let ctx = checked(&engine, selection)?;
            print_json(&engine.resolve_for_segment(&ctx))?;
        }
        Commands::Primary { selection } => {
            let ctx = selection.context();
            print_json(&engine.select_primary_checked(&ctx)?)?;
        }
        Commands::Card {
            selection,
            phase,
            kind,
            index,
        } => {
            let ctx = checked(&engine, selection)?;
            let card = usize::try_from(*index)
                .ok()
                .and_then(|i| engine.card_content(&ctx, *phase, *kind, i));
            print_json(&card)?;
        }
        Commands::Cards {
            selection,
            phase,
            kind,
        } => {
            let ctx = checked(&engine, selection)?;
            print_json(engine.all_card_content(&ctx, *phase, *kind))?;
        }
        Commands::Deck { selection, phase } => {
            let ctx = checked(&engine, selection)?;
            print_json(&engine.card_deck(&ctx, *phase))?;
        }
        Commands::CheckCatalogs => {
            let summary = CatalogSummary {
                festivals: engine.festivals().len(),
                months: engine.festivals().months().count(),
                festivals_with_content: engine.content().festival_names().count(),
            };
            print_json(&summary)?;
        }
    }

    Ok(())
}

/// Builds the context, validating dates first when strict mode is on.
fn checked(engine: &ThemeEngine, selection: &Selection) -> Result<SelectionContext> {
    let ctx = selection.context();
    if engine.config().strict_dates {
        engine.validate_dates(&ctx.dates)?;
    }
    Ok(ctx)
}
