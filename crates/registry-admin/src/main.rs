//! # Registry Admin
//!
//! Command-line front end over the shared listing, meant to run in CI so a
//! bad edit fails the pipeline instead of shipping.
//!
//! ## Commands
//!
//! - `registry-admin check` - rebuild the registry from the listing, re-run
//!   every rule, and sweep all extension-local mirrors for drift.
//! - `registry-admin export [path]` - validate, then write (or print) the
//!   machine-readable JSON table for downstream build tooling.
//!
//! Exit status is nonzero on any violation; the offending entry is named in
//! the error output.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bus_id::{BLOCK_COUNT, CUSTOM_RANGE};
use bus_registry::{export, local, Registry, GLOBAL_LISTING};

fn main() -> ExitCode {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to initialize logging");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("registry-admin: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("check") => check(),
        Some("export") => export_listing(args.get(1).map(String::as_str)),
        Some(other) => bail!("unknown command {other:?}; expected `check` or `export`"),
        None => bail!("usage: registry-admin <check | export [path]>"),
    }
}

/// Validate the global listing and every extension-local mirror.
fn check() -> Result<()> {
    info!("===========================================");
    info!("  Custom Bus ID Registry - listing check");
    info!(
        "  Custom range: {}-{}, {} blocks",
        CUSTOM_RANGE.start(),
        CUSTOM_RANGE.end(),
        BLOCK_COUNT
    );
    info!("===========================================");

    // Rebuild from the raw rows rather than using the cached global, so the
    // check exercises the full validation path.
    let registry = Registry::from_entries(GLOBAL_LISTING.to_vec())
        .context("global listing failed validation")?;

    for entry in registry.entries() {
        info!(
            "{:<24} {} (block {}, offset {})  {:?}  {}",
            entry.name,
            entry.id,
            entry.id.block().unwrap_or(0),
            entry.id.offset().unwrap_or(0),
            entry.status,
            entry.owner,
        );
    }

    for listing in local::all_local_listings() {
        listing
            .validate_against(&registry)
            .with_context(|| format!("local listing for {} drifted", listing.extension))?;
        info!(
            "local listing {}: {} entries consistent",
            listing.extension,
            listing.entries.len()
        );
    }

    info!("{} allocations, no collisions", registry.len());
    Ok(())
}

/// Validate, then emit the JSON export.
fn export_listing(path: Option<&str>) -> Result<()> {
    let registry = Registry::from_entries(GLOBAL_LISTING.to_vec())
        .context("global listing failed validation")?;

    match path {
        Some(path) => {
            export::write_json(&registry, Path::new(path))
                .with_context(|| format!("writing export to {path}"))?;
            info!("export written to {path}");
        }
        None => {
            let json = export::to_json(&registry).context("rendering export")?;
            println!("{json}");
        }
    }
    Ok(())
}
