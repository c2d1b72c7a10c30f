use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::clock::{Clock, SystemClock};
use crate::formatter::{Locale, format_relative_time, timezone_views};
use crate::models::{CardConfig, CardOptions, Instant};
use crate::parsers::load_config;
use crate::tui::run_watch;
use crate::utils::detect_locale;

#[derive(Parser)]
#[command(name = "relative-time-card")]
#[command(version = "0.1.0")]
#[command(about = "Relative time labels with per-timezone detail", long_about = None)]
pub struct Cli {
    /// JSON card config (timezones, updateIntervalMs, openDelayMs, closeDelayMs, locale)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Locale for absolute dates, e.g. en-US or en-GB (default: from LC_ALL/LC_TIME/LANG)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the relative label for an instant
    Format {
        /// RFC 3339 timestamp, YYYY-MM-DD date, or epoch milliseconds
        #[arg(allow_hyphen_values = true)]
        instant: String,

        /// Reference time instead of the current time
        #[arg(long, allow_hyphen_values = true)]
        now: Option<String>,
    },
    /// Print the instant in each timezone plus the local zone
    Zones {
        #[arg(allow_hyphen_values = true)]
        instant: String,

        #[command(flatten)]
        zones: ZoneArgs,

        /// One screen-reader sentence per zone ("Time in UTC: ...") instead of columns
        #[arg(long)]
        aria: bool,
    },
    /// Show a live card that refreshes until you quit
    Watch {
        #[arg(allow_hyphen_values = true)]
        instant: String,

        #[command(flatten)]
        zones: ZoneArgs,

        /// Refresh period in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Hover/focus delay before timezones appear
        #[arg(long)]
        open_delay_ms: Option<u64>,

        /// Delay before timezones hide again
        #[arg(long)]
        close_delay_ms: Option<u64>,
    },
}

#[derive(Args)]
pub struct ZoneArgs {
    /// IANA timezone to show (repeatable); replaces the configured list
    #[arg(short = 'z', long = "timezone")]
    pub timezones: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Format { instant, now }) => {
            let options = resolve_options(&cli, |_| {})?;
            let instant = parse_instant(instant)?;
            let now = match now {
                Some(now) => parse_instant(now)?,
                None => SystemClock.now(),
            };
            println!("{}", format_relative_time(instant, now, options.locale));
        }
        Some(Commands::Zones { instant, zones, aria }) => {
            let options = resolve_options(&cli, |config| zones.apply(config))?;
            let instant = parse_instant(instant)?;
            show_zones(instant, &options, *aria);
        }
        Some(Commands::Watch { instant, zones, interval_ms, open_delay_ms, close_delay_ms }) => {
            let options = resolve_options(&cli, |config| {
                zones.apply(config);
                if let Some(ms) = interval_ms {
                    config.update_interval_ms = *ms;
                }
                if let Some(ms) = open_delay_ms {
                    config.open_delay_ms = *ms;
                }
                if let Some(ms) = close_delay_ms {
                    config.close_delay_ms = *ms;
                }
            })?;
            let instant = parse_instant(instant)?;
            run_watch(instant, options)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

impl ZoneArgs {
    fn apply(&self, config: &mut CardConfig) {
        if !self.timezones.is_empty() {
            config.timezones = self.timezones.clone();
        }
    }
}

fn parse_instant(raw: &str) -> Result<Instant> {
    raw.parse::<Instant>().with_context(|| format!("Could not read instant '{}'", raw))
}

/// Config file, then flag overrides, then validation
fn resolve_options(cli: &Cli, overrides: impl FnOnce(&mut CardConfig)) -> Result<CardOptions> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CardConfig::default(),
    };

    if let Some(locale) = &cli.locale {
        config.locale = Some(locale.clone());
    }
    overrides(&mut config);

    let fallback: Locale = detect_locale();
    config.resolve(fallback)
}

fn show_zones(instant: Instant, options: &CardOptions, aria: bool) {
    let views = timezone_views(instant, &options.timezones, options.locale);
    if aria {
        for view in views {
            println!("{}", view.aria_label());
        }
        return;
    }

    println!("{}", instant);
    for view in views {
        println!("  {:<8} {}  {}", view.name, view.date, view.time);
    }
}
