//! Xanthus (v0.1)
//!
//! Command-line entry point for serving and inspecting a route table.
//!
//! ```text
//!     routes.toml ──▶ config ──▶ Router::from_config ──▶ HttpServer
//!                                       │
//!                         xanthus routes / xanthus match
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use xanthus::config::{load_config, AppConfig};
use xanthus::lifecycle::startup;
use xanthus::observability::logging;
use xanthus::{Request, Router};

#[derive(Parser)]
#[command(name = "xanthus")]
#[command(about = "Serve and inspect a regular-expression route table", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true, default_value = "xanthus.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the route table in match order
    Routes,
    /// Show which route a request would hit
    Match {
        /// HTTP verb (any case)
        method: String,
        /// Request path, optionally with a query string
        path: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => serve(config)?,
        Commands::Routes => {
            let router = Router::from_config(&config.routes)?;
            if router.is_empty() {
                println!("No routes defined.");
            }
            for route in router.routes() {
                println!("{route}");
            }
        }
        Commands::Match { method, path } => {
            let router = Router::from_config(&config.routes)?;
            let request = match path.split_once('?') {
                Some((path, query)) => Request::new(method, path).with_query_string(query),
                None => Request::new(method, path.as_str()),
            };
            let Some(route) = router.match_request(&request) else {
                println!("no route matches");
                return Ok(ExitCode::FAILURE);
            };
            println!("{route}");
            let params = route.params(request.path()).merge_query(request.query());
            for (name, value) in params.iter() {
                println!("  {name} = {value}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&config.observability)?;
    tracing::info!("xanthus v{} starting", env!("CARGO_PKG_VERSION"));

    let router = startup::build_router(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(startup::start(config, router))?;

    tracing::info!("Shutdown complete");
    Ok(())
}
