// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use the_meshwork::backends::local::LocalProcessorFactory;
use the_meshwork::config::consts::{
    DEFAULT_GRACE_PERIOD, DEFAULT_LIVENESS_INTERVAL, DEFAULT_READINESS_TIMEOUT,
};
use the_meshwork::config::Blueprint;
use the_meshwork::engine::{HealthReport, MeshBuilder};
use the_meshwork::version::BuildInfo;

/// Build a local processor mesh from a blueprint and run it.
#[derive(Parser, Debug)]
#[command(name = "meshwork")]
#[command(version, about, long_about = None)]
struct Args {
    /// Blueprint file (.yaml/.yml or .toml)
    #[arg(value_name = "BLUEPRINT")]
    blueprint: PathBuf,

    /// Validate the blueprint, print a summary and exit
    #[arg(long)]
    check: bool,

    /// Shut down after this many seconds instead of waiting for Ctrl-C
    #[arg(long, value_name = "SECS")]
    run_for: Option<u64>,

    /// Window within which an instance must have reported liveness
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_GRACE_PERIOD.as_secs())]
    grace_period: u64,

    /// Liveness tick of the built-in components
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_LIVENESS_INTERVAL.as_millis() as u64)]
    liveness_interval: u64,
}

fn print_summary(blueprint: &Blueprint) {
    println!("Instances ({}):", blueprint.instances().len());
    for instance in blueprint.instances() {
        println!("  {} : {}", instance.name, instance.type_name);
    }
    println!("Event relations ({}):", blueprint.event_edges().len());
    for edge in blueprint.event_edges() {
        println!("  {} -> {} [{}]", edge.from, edge.to, edge.event_type.as_str_name());
    }
    println!("Query relations ({}):", blueprint.query_edges().len());
    for edge in blueprint.query_edges() {
        println!("  {} -> {} [{}]", edge.from, edge.to, edge.query_type.as_str_name());
    }
}

async fn wait_for_stop(run_for: Option<u64>) -> Result<()> {
    match run_for {
        Some(secs) => {
            info!("Running for {}s", secs);
            tokio::time::sleep(Duration::from_secs(secs)).await;
        }
        None => {
            info!("Running until Ctrl-C");
            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for Ctrl-C")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("{}", BuildInfo::current());

    let blueprint = Blueprint::load(&args.blueprint)
        .with_context(|| format!("Failed to load blueprint {}", args.blueprint.display()))?;

    if args.check {
        print_summary(&blueprint);
        return Ok(());
    }

    let unknown: Vec<&str> = blueprint
        .instances()
        .iter()
        .map(|instance| instance.type_name.as_str())
        .filter(|type_name| !LocalProcessorFactory::is_type_available(type_name))
        .collect();
    if !unknown.is_empty() {
        bail!(
            "Blueprint uses types with no built-in constructor: {} (available: {})",
            unknown.join(", "),
            LocalProcessorFactory::list_available_types().join(", ")
        );
    }

    let mut mesh = MeshBuilder::new(blueprint);
    LocalProcessorFactory::register_builtins(
        &mut mesh,
        Duration::from_millis(args.liveness_interval),
    )?;

    let mut failed = false;
    let errors = mesh.run().await;
    for error in &errors {
        failed = true;
        warn!("{}", error);
    }

    if mesh.instance_count() > 0 {
        if !mesh.wait_until_ready(DEFAULT_READINESS_TIMEOUT).await {
            warn!("Not every instance became ready within {:?}", DEFAULT_READINESS_TIMEOUT);
        }
        let report = HealthReport::collect(&mesh, Duration::from_secs(args.grace_period));
        println!("{}", report.to_json()?);

        wait_for_stop(args.run_for).await?;
    }

    for error in mesh.shutdown().await {
        failed = true;
        warn!("{}", error);
    }

    if failed {
        bail!("Mesh reported errors; see log for details");
    }
    Ok(())
}
