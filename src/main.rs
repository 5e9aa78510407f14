// SPDX-License-Identifier: GPL-3.0-only

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anywho::Error;
use clap::{Parser, Subcommand};

use crate::{
    config::StarryConfig,
    core::{
        api::StarryApi,
        query::{LookupOutcome, QueryHandler},
        sinks::TerminalRegions,
    },
};

mod app;
mod config;
mod core;
mod entities;
mod i18n;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "starrysearch", version, about = "Look up Pokémon on PokéApi")]
struct Cli {
    /// Config file to use instead of the one in the user's config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the search page (default)
    Serve {
        /// Address to listen on, overrides the config
        #[arg(long)]
        bind: Option<String>,
    },
    /// Look up one Pokémon by name or id and print its card
    Lookup { query: String },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    let config = StarryConfig::load(cli.config.as_deref())?;

    // Enable localizations to be applied.
    i18n::init(&i18n::requested_languages(config.language.as_deref()));

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let api = StarryApi::new(&config.api_base_url, config.request_timeout())?;
            let bind_address = bind.unwrap_or_else(|| config.bind_address.clone());

            app::serve(&bind_address, app::AppState::new(Arc::new(api))).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup { query } => {
            let api = StarryApi::new(&config.api_base_url, config.request_timeout())?;
            let terminal = Arc::new(TerminalRegions);
            let handler = QueryHandler::new(Arc::new(api), terminal.clone(), terminal);

            match handler.submit(&query).await {
                LookupOutcome::Rendered(_) => Ok(ExitCode::SUCCESS),
                LookupOutcome::Failed(_) | LookupOutcome::Superseded => Ok(ExitCode::FAILURE),
            }
        }
        Command::Config => {
            let path = cli
                .config
                .or_else(StarryConfig::config_path)
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| String::from("<defaults>"));

            println!("// {path}");
            println!("{}", config.to_ron()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging, `RUST_LOG` takes precedence over the default filter
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("starrysearch=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
