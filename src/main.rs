//! Shelfmark - run a command script against an in-memory library
//!
//! Reads a JSON array of commands, executes them in order against a fresh catalog
//! and writes one JSON response per line to stdout. Logs go to stderr.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shelfmark::{api, config::AppConfig, Library};

#[derive(Debug, Parser)]
#[command(name = "shelfmark", version, about = "In-memory library catalog and lending tracker")]
struct Args {
    /// Path to a JSON command script
    script: PathBuf,

    /// Pretty-print each response
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config);
    tracing::info!("Starting Shelfmark v{}", env!("CARGO_PKG_VERSION"));

    let commands = api::load_script(&args.script)
        .with_context(|| format!("failed to load script {}", args.script.display()))?;

    let mut library = Library::new(&config.catalog);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for command in commands {
        let response = api::dispatch(&mut library, command);
        if !response.ok {
            failures += 1;
        }
        let line = if args.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        writeln!(out, "{}", line)?;
    }

    tracing::info!(
        books = library.book_count(),
        users = library.user_count(),
        failures,
        "script complete"
    );
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfmark={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
