use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use award_compass::balances::{apply_balance_overrides, parse_balance_specs, BalanceSpec};
use award_compass::catalog::sweet_spots::{filter_sweet_spots, SpotSort};
use award_compass::catalog::{CabinClass, Catalog};
use award_compass::config::{Config, ConfigOverrides};
use award_compass::engine::matcher::award_opportunities;
use award_compass::engine::positioning::positioning_options;
use award_compass::engine::resolver::resolve_accessible_programs;
use award_compass::engine::summary::summarize;
use award_compass::engine::transitions::affordability_transitions;
use award_compass::engine::{
    available_destinations, AccessibleProgram, AwardOpportunity, OpportunitySummary,
    PositioningOption,
};
use award_compass::output::csv::{opportunities_to_csv, positioning_to_csv};
use award_compass::output::json::render_json;
use award_compass::output::table::{
    render_opportunities_table, render_positioning_table, render_programs_table,
    render_summary, render_sweet_spots_table,
};
use award_compass::server::run_server;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "award-compass",
    about = "Award redemption intelligence across loyalty programs"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Point balances as <program-id>=<points>, repeatable; overlays the
    /// configured balances.
    #[arg(short = 'p', long = "points", value_name = "PROGRAM=POINTS")]
    points: Vec<String>,
    /// Home airport code, e.g. BOS.
    #[arg(long)]
    home: Option<String>,
    /// Destination region or country free text, e.g. "Japan".
    #[arg(short, long)]
    destination: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Programs reachable from your balances, directly or by transfer.
    Programs,
    /// Sweet-spot awards you can afford or are saving toward.
    Opportunities,
    /// Top-line counts over your opportunities.
    Summary,
    /// Positioning flights to better-connected hubs.
    Positioning,
    /// Opportunities, positioning and summary in one pass.
    Explore,
    /// Destination regions your balances can reach, or a destination search.
    Destinations {
        #[arg(long)]
        query: Option<String>,
    },
    /// Browse the sweet-spot catalog.
    Catalog {
        #[arg(long)]
        cabin: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long, default_value = "value")]
        sort: String,
    },
    /// Recompute on an interval and report affordability changes.
    Watch {
        #[arg(long)]
        interval_secs: Option<u64>,
        #[arg(long, default_value_t = 1)]
        iterations: u32,
    },
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3001)]
        port: u16,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[derive(Debug, Serialize)]
struct ExploreReport {
    opportunities: Vec<AwardOpportunity>,
    positioning: Vec<PositioningOption>,
    summary: OpportunitySummary,
    available_destinations: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        home_airport: cli.home.clone(),
        destination: cli.destination.clone(),
    });

    if matches!(cli.command, Commands::Config { .. }) {
        return handle_config_command(&cli.command, &config, &config_path);
    }

    let catalog = Catalog::builtin();

    if let Commands::Serve { host, port } = &cli.command {
        let bind = format!("{host}:{port}");
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
        return run_server(config, catalog, addr).await;
    }

    let overrides = parse_balance_specs(&cli.points)?;
    let mut balances = config.point_balances();
    apply_balance_overrides(&mut balances, &overrides);

    let destination = effective_destination(&config);
    let home_airport = config.home_airport();

    match &cli.command {
        Commands::Programs => {
            let programs = resolve_accessible_programs(&catalog, &balances);
            print_programs(&programs, cli.output)?;
        }
        Commands::Opportunities => {
            let opportunities = award_opportunities(&catalog, &balances, destination.as_deref());
            print_opportunities(&opportunities, cli.output)?;
        }
        Commands::Summary => {
            let opportunities = award_opportunities(&catalog, &balances, destination.as_deref());
            let summary = summarize(&opportunities);
            print_summary(&summary, cli.output)?;
        }
        Commands::Positioning => {
            let destination = destination.ok_or_else(|| {
                anyhow!("--destination (or a configured default) is required for positioning")
            })?;
            if home_airport.is_empty() {
                return Err(anyhow!(
                    "--home (or [profile] home_airport) is required for positioning"
                ));
            }
            let opportunities = award_opportunities(&catalog, &balances, Some(&destination));
            let options =
                positioning_options(&catalog, &home_airport, &opportunities, &destination);
            print_positioning(&options, cli.output)?;
        }
        Commands::Explore => {
            let opportunities = award_opportunities(&catalog, &balances, destination.as_deref());
            let positioning = match destination.as_deref() {
                Some(dest) if !home_airport.is_empty() => {
                    positioning_options(&catalog, &home_airport, &opportunities, dest)
                }
                _ => Vec::new(),
            };
            let report = ExploreReport {
                summary: summarize(&opportunities),
                available_destinations: available_destinations(&catalog, &balances),
                opportunities,
                positioning,
            };
            print_explore(&report, cli.output)?;
        }
        Commands::Destinations { query } => match query {
            Some(query) => {
                let matches = catalog.search_destinations(query);
                match cli.output {
                    OutputFormat::Json => println!("{}", render_json(&matches)?),
                    _ => {
                        for result in &matches {
                            let Some(region) = catalog.region_by_id(&result.region_id) else {
                                continue;
                            };
                            println!("{} ({})", result.value, region.name);
                        }
                    }
                }
            }
            None => {
                let destinations = available_destinations(&catalog, &balances);
                match cli.output {
                    OutputFormat::Json => println!("{}", render_json(&destinations)?),
                    _ => {
                        for destination in &destinations {
                            println!("{destination}");
                        }
                    }
                }
            }
        },
        Commands::Catalog {
            cabin,
            region,
            sort,
        } => {
            let cabin = cabin.as_deref().map(CabinClass::from_str).transpose()?;
            let sort = SpotSort::from_str(sort)?;
            let spots = filter_sweet_spots(catalog.sweet_spots(), cabin, region.as_deref(), sort);
            print_sweet_spots(&spots, cli.output)?;
        }
        Commands::Watch {
            interval_secs,
            iterations,
        } => {
            run_watch_loop(
                &catalog,
                &config_path,
                &overrides,
                interval_secs.unwrap_or(config.watch.interval_secs),
                *iterations,
            )
            .await?;
        }
        Commands::Config { .. } => {}
        Commands::Serve { .. } => unreachable!("serve command handled before dispatch"),
    }

    Ok(())
}

fn handle_config_command(command: &Commands, config: &Config, config_path: &PathBuf) -> Result<()> {
    let Commands::Config { init, show } = command else {
        return Ok(());
    };
    if *init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if *show || !*init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

/// Destination filter for this invocation: the profile default (already
/// overlaid with --destination), empty meaning none.
fn effective_destination(config: &Config) -> Option<String> {
    let destination = config.profile.default_destination.trim();
    (!destination.is_empty()).then(|| destination.to_string())
}

/// Re-read balances from the config file on an interval and report
/// opportunities whose affordability flipped between rounds.
async fn run_watch_loop(
    catalog: &Catalog,
    config_path: &PathBuf,
    overrides: &[BalanceSpec],
    interval_secs: u64,
    iterations: u32,
) -> Result<()> {
    let interval = Duration::from_secs(interval_secs.max(1));
    let mut previous: Option<Vec<AwardOpportunity>> = None;

    let total_iterations = iterations.max(1);
    for i in 0..total_iterations {
        info!("watch iteration {}", i + 1);
        let config = Config::load(Some(config_path))?;
        let mut balances = config.point_balances();
        apply_balance_overrides(&mut balances, overrides);
        let destination = effective_destination(&config);

        let opportunities = award_opportunities(catalog, &balances, destination.as_deref());
        for event in affordability_transitions(previous.as_deref(), &opportunities) {
            println!("[{:?}] {} - {}", event.kind, event.title, event.detail);
        }
        previous = Some(opportunities);

        if i + 1 < total_iterations {
            tokio::time::sleep(interval).await;
        }
    }
    Ok(())
}

fn print_programs(programs: &[AccessibleProgram], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_programs_table(programs)),
        OutputFormat::Json => println!("{}", render_json(programs)?),
        OutputFormat::Csv => {
            warn!("CSV output for programs not implemented, using JSON");
            println!("{}", render_json(programs)?);
        }
    }
    Ok(())
}

fn print_opportunities(opportunities: &[AwardOpportunity], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_opportunities_table(opportunities)),
        OutputFormat::Json => println!("{}", render_json(opportunities)?),
        OutputFormat::Csv => println!("{}", opportunities_to_csv(opportunities)?),
    }
    Ok(())
}

fn print_positioning(options: &[PositioningOption], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_positioning_table(options)),
        OutputFormat::Json => println!("{}", render_json(options)?),
        OutputFormat::Csv => println!("{}", positioning_to_csv(options)?),
    }
    Ok(())
}

fn print_summary(summary: &OpportunitySummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_summary(summary)),
        OutputFormat::Json => println!("{}", render_json(summary)?),
        OutputFormat::Csv => {
            warn!("CSV output for summary not implemented, using JSON");
            println!("{}", render_json(summary)?);
        }
    }
    Ok(())
}

fn print_explore(report: &ExploreReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_summary(&report.summary));
            println!("{}", render_opportunities_table(&report.opportunities));
            if !report.positioning.is_empty() {
                println!("{}", render_positioning_table(&report.positioning));
            }
        }
        OutputFormat::Json => println!("{}", render_json(report)?),
        OutputFormat::Csv => {
            warn!("CSV output for explore not implemented, using JSON");
            println!("{}", render_json(report)?);
        }
    }
    Ok(())
}

fn print_sweet_spots(spots: &[award_compass::catalog::SweetSpot], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_sweet_spots_table(spots)),
        OutputFormat::Json => println!("{}", render_json(spots)?),
        OutputFormat::Csv => {
            warn!("CSV output for catalog not implemented, using JSON");
            println!("{}", render_json(spots)?);
        }
    }
    Ok(())
}
