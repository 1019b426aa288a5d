//! clouddns-delete-records - bulk-delete one record type from a Cloud DNS domain
//!
//! Authenticates, finds the first domain whose name starts with `--prefix`,
//! deletes all its records of `--record-type` in one request and waits for
//! the provider job to finish.

mod logging;
mod output;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use clouddns_core::application::RecordCleanupService;
use clouddns_core::AppError;
use clouddns_infra_rackspace::RackspaceDnsClient;
use colored::Colorize;
use settings::{Cli, Settings};
use std::sync::Arc;
use tracing::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init()?;

    let settings = Settings::from_cli(Cli::parse())?;
    info!(
        version = VERSION,
        core_version = clouddns_core::VERSION,
        prefix = %settings.prefix,
        record_type = %settings.record_type,
        dry_run = settings.dry_run,
        "clouddns-delete-records starting"
    );

    let outcome = run(&settings).await;

    if let Err(e) = &outcome {
        error!(error = ?e, "Record cleanup failed");
        if let Some(AppError::DomainNotFound { prefix }) = e.downcast_ref::<AppError>() {
            eprintln!(
                "{} no domain starting with '{}'. Create it first or pass --prefix.",
                "hint:".yellow().bold(),
                prefix
            );
        }
    }

    outcome
}

/// The session lives inside this scope and is released on every exit path
async fn run(settings: &Settings) -> Result<()> {
    output::print_header();

    let client = RackspaceDnsClient::connect(&settings.rackspace)
        .await
        .map_err(AppError::from)
        .context("Failed to open a Cloud DNS session")?;
    let service = RecordCleanupService::new(Arc::new(client), settings.poll_policy);

    let domain = service.find_domain(&settings.prefix).await?;
    output::print_domain(&domain);

    if settings.dry_run {
        let records = service.list_records(&domain, settings.record_type).await?;
        output::print_dry_run(settings.record_type, &records);
        return Ok(());
    }

    let report = service
        .delete_records(&domain, settings.record_type)
        .await
        .with_context(|| format!("Failed to delete {} records on {}", settings.record_type, domain.name))?;
    output::print_report(&report);

    Ok(())
}
