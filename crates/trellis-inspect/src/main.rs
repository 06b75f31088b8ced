//! trellis-inspect CLI
//!
//! Command-line tool for checking route files and explaining how requests
//! are routed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trellis_inspect::{explain_allowed, explain_match, list_routes, load_router};

/// Explain routing decisions for a trellis route file.
#[derive(Parser)]
#[command(name = "trellis-inspect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route file (JSON).
    #[arg(short, long, env = "TRELLIS_ROUTES", default_value = "routes.json")]
    routes: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in matching order.
    List,

    /// Resolve a request to a route, a 405 or a 404.
    Match {
        /// Request method, compared case-sensitively.
        method: String,

        /// Request path.
        path: String,

        /// Request host. Without it only host-agnostic routes are considered.
        #[arg(long)]
        host: Option<String>,
    },

    /// Show the methods registered for a path.
    Allowed {
        /// Request path.
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let router = load_router(&cli.routes)?;

    let output = match cli.command {
        Commands::List => list_routes(&router),
        Commands::Match { method, path, host } => {
            explain_match(&router, &method, host.as_deref(), &path)
        }
        Commands::Allowed { path } => explain_allowed(&router, &path),
    };
    print!("{output}");

    Ok(())
}
