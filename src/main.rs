// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pdb_audit::audit::run_audit;
use pdb_audit::config::Config;
use pdb_audit::kubernetes::connect;
use pdb_audit::report::write_report;
use pdb_audit::types::Category;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Whole cause chain on one line
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    info!("Starting PDB audit");

    let config = Config::from_env()?;

    let client = connect(&config).await.context("Failed to get kubeconfig")?;
    info!("Connected to Kubernetes cluster");

    let report = run_audit(&client).await.context("Audit failed")?;
    info!(
        "Audited {} deployments: good={} ha={} no_pdb={} misconfigured={}",
        report.total(),
        report.names(Category::Good).len(),
        report.names(Category::Ha).len(),
        report.names(Category::NoPdb).len(),
        report.names(Category::Misconfigured).len()
    );

    write_report(&config.output_dir, &report).context("Failed to write reports")?;

    Ok(())
}
