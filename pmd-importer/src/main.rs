//! PMD Importer Main Entry Point
//!
//! Runs a one-shot `convert` import from the command line or serves the
//! three-step import wizard over HTTP.

use clap::Parser;
use dotenv::dotenv;
use pmd_importer::cli::{Cli, Command};
use pmd_importer::convert::convert;
use pmd_importer::server::{create_app, run_server};
use pmd_importer::{AppConfig, Dependencies, ImportingError};
use std::env;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pmd_importer=info,pmd_importer_pipeline=info"));

    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "pmd-importer",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), ImportingError> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let dependencies = match Dependencies::new(config).await {
        Ok(dependencies) => dependencies,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match cli.command {
        Command::Convert { target } => {
            let field_set = target.field_set();
            info!(field_set = %field_set, "Starting conversion");
            let importer = dependencies.importer(field_set).await?;
            match convert(&importer, target.kind(), target.options().removetable).await {
                Ok(reports) => {
                    for report in reports {
                        info!("{report}");
                    }
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "Import failed");
                    Err(e)
                }
            }
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or(dependencies.config.wizard_addr);
            let app = create_app(Arc::new(dependencies.wizard()));
            run_server(app, addr)
                .await
                .map_err(|e| ImportingError::Server(e.to_string()))
        }
    }
}
