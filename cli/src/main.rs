mod export;
mod history;
mod stats;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};
use tracing::{debug, info};
use triplog_core::time::{parse_selection, today};
use triplog_core::{
    day_trips, draft_from_args, month_trips, parse_human_date, AppConfig, DashboardUseCase,
    DateMode, FileTripRepository, Measure, Selection, TripError, TripRecord, TripService,
};

use crate::history::format_amount;

#[derive(Parser)]
#[command(name = "triplog")]
#[command(about = "A vehicle trip log with monthly stats and exports", long_about = None)]
struct Cli {
    /// Directory holding trips.json (overrides TRIPLOG_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Whose trips to read and write (overrides TRIPLOG_OWNER)
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Only accept real YYYY-MM-DD dates
    #[arg(long, global = true)]
    strict_dates: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log a trip (usage: add date:2025-05-14 from:Daegu to:Gumi fuel:10000 toll:2000 km:15 client visit)
    Add {
        /// key:value fields; remaining words become the purpose
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List trips grouped by month, with totals
    List {
        /// Only trips whose date starts with this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// Distance and route for one day (default: today)
    Day {
        date: Option<String>,
    },
    /// Monthly distance / fuel / toll chart
    Stats {
        /// Print a table instead of opening the chart
        #[arg(long)]
        plain: bool,
    },
    /// Write one month of trips to vehicle_log_<MONTH>.csv
    Export {
        /// YYYY-MM, a day inside the month, or month/lastmonth (default: this month)
        month: Option<String>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Open the Terminal User Interface
    Tui {
        /// Day to start on (default: today)
        date: Option<String>,
    },
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Km")]
    km: String,
    #[tabled(rename = "Fuel")]
    fuel: String,
    #[tabled(rename = "Toll")]
    toll: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // The TUIs own the terminal; keep log lines off it unless asked for
    let interactive = matches!(
        cli.command,
        None | Some(Commands::Tui { .. }) | Some(Commands::Stats { plain: false })
    );
    init_logging(if interactive { "off" } else { "warn,triplog=info,triplog_core=info" });

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(owner) = cli.owner {
        config.owner_id = owner;
    }
    if cli.strict_dates {
        config.policy.date_mode = DateMode::Strict;
    }
    debug!(?config, "configuration loaded");

    let repo = FileTripRepository::new(&config.data_dir)?;
    let service = TripService::new(repo, config.policy);
    let owner = config.owner_id.as_str();

    match cli.command {
        Some(Commands::Add { args }) => {
            if args.is_empty() {
                println!("Error: date:, from: and to: are required.");
                return Ok(());
            }

            let draft = match draft_from_args(&args) {
                Ok(draft) => draft,
                Err(e) => {
                    println!("Error: {}", e);
                    return Ok(());
                }
            };

            match service.add_trip(owner, draft) {
                Ok(created) => {
                    println!("Trip added: {} {} → {} (ID: {})", created.date, created.from, created.to, created.id);
                    if !created.purpose.is_empty() {
                        println!("  Purpose: {}", created.purpose);
                    }
                    println!(
                        "  Km: {}  Fuel: {}  Toll: {}",
                        created.distance_km, created.fuel_cost, created.toll_cost
                    );
                }
                Err(TripError::Rejected(reason)) => {
                    println!("Trip not added: {}", reason);
                }
                Err(TripError::Storage(e)) => return Err(e),
            }
        }
        Some(Commands::List { month }) => {
            let trips = service.list_trips(owner)?;
            match month {
                Some(month) => {
                    let selected: Vec<TripRecord> = month_trips(&trips, &month).into_iter().cloned().collect();
                    history::show_history(&selected);
                }
                None => history::show_history(&trips),
            }
        }
        Some(Commands::Day { date }) => {
            let day = match date {
                Some(d) => parse_human_date(&d)?,
                None => today(),
            };
            let dashboard = DashboardUseCase::new(service.repo(), owner).build(day)?;

            println!(
                "Date: {} / Distance: {}km",
                dashboard.selected_date,
                format_amount(dashboard.day_total)
            );
            for trip in day_trips(&dashboard.trips, &dashboard.selected_date) {
                println!("  {} → {} ({}km) {}", trip.from, trip.to, trip.distance_km, trip.purpose);
            }
            if !dashboard.route.is_empty() {
                println!("Route:");
                for point in &dashboard.route {
                    println!("  {:.2}, {:.2}", point.lat, point.lng);
                }
            }
        }
        Some(Commands::Stats { plain }) => {
            let dashboard = DashboardUseCase::new(service.repo(), owner).build(today())?;
            if plain {
                let chart = &dashboard.chart;
                let rows: Vec<MonthRow> = chart.labels.iter().enumerate().map(|(i, month)| MonthRow {
                    month: month.clone(),
                    km: format_amount(chart.value(Measure::Distance, i)),
                    fuel: format_amount(chart.value(Measure::Fuel, i)),
                    toll: format_amount(chart.value(Measure::Toll, i)),
                }).collect();
                let mut table = Table::new(rows);
                table.with(Style::modern());
                println!("{}", table);
                println!("Total: {}km", format_amount(dashboard.totals.distance_km));
            } else {
                stats::run(dashboard.chart, dashboard.totals)?;
            }
        }
        Some(Commands::Export { month, out }) => {
            let month = match month {
                Some(m) => parse_selection(&m, today())?.month(),
                None => Selection::Day(today()).month(),
            };
            let rows = DashboardUseCase::new(service.repo(), owner).export(&month)?;
            let path = export::export_month(&out, &month, &rows)?;
            info!(path = %path.display(), rows = rows.len() - 1, "export written");
            println!("Exported {} trips to {}", rows.len() - 1, path.display());
        }
        Some(Commands::Tui { date }) => {
            let day = match date {
                Some(d) => parse_human_date(&d)?,
                None => today(),
            };
            let owner = config.owner_id.clone();
            tui::run(service, owner, day)?;
        }
        None => {
            let owner = config.owner_id.clone();
            tui::run(service, owner, today())?;
        }
    }
    Ok(())
}

fn init_logging(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
