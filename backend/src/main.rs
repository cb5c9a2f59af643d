//! Shiptrack CLI - clean shipment exports and serve the KPI dashboard
//!
//! # Commands
//!
//! ```bash
//! shiptrack etl                         # supply_data.csv -> analytics_data.csv
//! shiptrack serve                       # Start dashboard API (port 3000)
//! shiptrack report --carrier Air        # Print the dashboard to the terminal
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shiptrack::config::{DEFAULT_PORT, OUTPUT_PATH};
use shiptrack::report::render;
use shiptrack::{
    build_dashboard, run_etl, DatasetCache, EtlConfig, FilterState, Selection, ServerConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shiptrack")]
#[command(about = "Supply chain shipment ETL and KPI dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the raw export and write the analytics file
    Etl,

    /// Start the dashboard HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory with the built frontend to serve at /
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the dashboard for one selection
    Report {
        /// Carrier to pin (default: All)
        #[arg(short, long)]
        carrier: Option<String>,

        /// Route to pin (default: All)
        #[arg(short, long)]
        route: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Etl => cmd_etl(),
        Commands::Serve { port, static_dir } => cmd_serve(port, static_dir).await,
        Commands::Report { carrier, route } => cmd_report(carrier, route),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_etl() -> Result<(), Box<dyn std::error::Error>> {
    let report = run_etl(&EtlConfig::default())?;

    println!();
    let mut preview = Vec::new();
    shiptrack::store::encode_records(&mut preview, &report.preview)?;
    print!("{}", String::from_utf8_lossy(&preview));

    Ok(())
}

async fn cmd_serve(
    port: u16,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        data_path: PathBuf::from(OUTPUT_PATH),
        port,
        static_dir,
    };
    shiptrack::server::start_server(config).await?;
    Ok(())
}

fn cmd_report(
    carrier: Option<String>,
    route: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache = DatasetCache::new(OUTPUT_PATH);
    let dataset = cache.get()?;

    let selection = FilterState::new(
        Selection::from_param(carrier.as_deref()),
        Selection::from_param(route.as_deref()),
    );
    selection.validate(dataset)?;

    print!("{}", render(&build_dashboard(dataset, &selection)));
    Ok(())
}
