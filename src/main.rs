use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{Config, Overrides, UserConfig};
use controller::{Controller, Query};
use package_graph::PackageTable;
use render::{renderer, OutputFormat};
use tracing::{debug, info};

mod config;
mod controller;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    ///path to the dpkg status file (default: /var/lib/dpkg/status)
    #[arg(short = 'f', long, env = "STATUS_GRAPH_FILE")]
    status_file: Option<PathBuf>,
    ///"json" or "text"
    #[arg(short = 'o', long, value_enum)]
    format: Option<OutputFormat>,
    ///JSON config file with statusPath, format and logLevel keys
    #[arg(short, long, env = "STATUS_GRAPH_CONFIG")]
    config: Option<PathBuf>,
    ///log level used when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every package in status file order
    List,
    /// Show one package with its dependencies and reverse dependencies
    Show { name: String },
    /// Print package, edge and dropped dependency counts
    Stats,
    /// Verify that every dependency has a matching reverse edge
    Check,
}

impl From<Command> for Query {
    fn from(command: Command) -> Self {
        match command {
            Command::List => Query::List,
            Command::Show { name } => Query::Show(name),
            Command::Stats => Query::Stats,
            Command::Check => Query::Check,
        }
    }
}

fn init_logging(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn load_table(config: &Config) -> anyhow::Result<PackageTable> {
    let path = config.canonical_status_path();
    info!("loading status file {}", path.display());

    let table = tokio::task::spawn_blocking(move || PackageTable::load(&path))
        .await
        .context("status loader task failed")??;
    Ok(table)
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let user_config = match args.config.as_deref() {
        Some(path) => UserConfig::read(path)?,
        None => UserConfig::default(),
    };
    let config = Config::resolve(
        Overrides {
            status_path: args.status_file,
            format: args.format,
            log_level: args.log_level,
        },
        user_config,
    );

    init_logging(&config.log_level);
    debug!("config {:?}", config);

    // no data is served unless the whole table loaded
    let table = Arc::new(load_table(&config).await?);

    let controller = Controller::new(table, renderer(config.format));
    let stdout = std::io::stdout();
    let status = controller.handle(&args.command.into(), &mut stdout.lock())?;
    Ok(status.into())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
