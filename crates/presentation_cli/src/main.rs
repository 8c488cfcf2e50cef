//! LibreOeffis CLI
//!
//! Command-line front-end for realtime stop monitors, the normalized
//! vehicle listing, the shared-line route lookup, and bike-share
//! availability.

#![allow(clippy::print_stdout)]

mod config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::{MobilityService, TransitService, format_vehicles};
use integration_wienerlinien::{FileRequestAudit, WienerLinienClient};
use integration_wienmobil::WienMobilClient;

use crate::config::AppConfig;

/// LibreOeffis CLI
#[derive(Parser)]
#[command(name = "libreoeffis-cli")]
#[command(version, about = "Wiener Linien realtime monitor CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "LIBREOEFFIS_CONFIG")]
    config: Option<PathBuf>,

    /// Append every performed API request to this log file
    #[arg(long)]
    request_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the formatted realtime departures for a stop
    Monitor {
        /// Stop id to query
        stop_id: String,
    },

    /// List the normalized vehicles currently serving a stop
    Vehicles {
        /// Stop id to query
        stop_id: String,
    },

    /// Find a line serving both of two stops
    Route {
        /// Stop id of the start stop
        start: String,

        /// Stop id of the destination stop
        dest: String,
    },

    /// List bike-share stations with live availability
    Bikes,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Monitor { stop_id } => {
            let service = transit_service(&config, cli.request_log)?;
            match service.realtime_text(&stop_id).await {
                Ok(text) => println!("{text}"),
                Err(e) => return fail(&e),
            }
        }

        Commands::Vehicles { stop_id } => {
            let service = transit_service(&config, cli.request_log)?;
            match service.vehicles(&stop_id).await {
                Ok(vehicles) => println!("{}", format_vehicles(&vehicles)),
                Err(e) => return fail(&e),
            }
        }

        Commands::Route { start, dest } => {
            let service = transit_service(&config, cli.request_log)?;
            match service.plan_route(&start, &dest).await {
                Ok(result) => println!("{}", result.format_summary()),
                Err(e) => return fail(&e),
            }
        }

        Commands::Bikes => {
            let client = WienMobilClient::new(&config.wienmobil)?;
            let service = MobilityService::new(Arc::new(client));
            println!("{}", service.stations_text().await);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Build the transit service, optionally wired to a request audit log
fn transit_service(
    config: &AppConfig,
    request_log: Option<PathBuf>,
) -> anyhow::Result<TransitService> {
    let mut client = WienerLinienClient::new(&config.wienerlinien)?;

    if let Some(path) = request_log {
        let audit = FileRequestAudit::create(path)?;
        client = client.with_audit(Arc::new(audit));
    }

    Ok(TransitService::new(Arc::new(client)))
}

/// Print a typed service error and signal failure to the shell
fn fail(error: &application::ApplicationError) -> anyhow::Result<ExitCode> {
    println!("Error: {error}");
    Ok(ExitCode::FAILURE)
}
