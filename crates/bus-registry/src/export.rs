//! # Machine-Readable Export
//!
//! A JSON rendering of the validated listing for downstream build tooling:
//! an extension's CI can fetch the export and assert that every ID it uses
//! is listed, instead of trusting its author to have cross-checked.
//!
//! The export carries a schema version so consumers can detect shape
//! changes; the entry values themselves are covered by the stability
//! guarantee and never change.

use crate::allocation::AllocationStatus;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Version of the export document shape.
pub const EXPORT_SCHEMA_VERSION: u16 = 1;

/// Failures producing or writing the export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization failed.
    #[error("Export serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the export file failed.
    #[error("Export write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedListing {
    /// Shape version of this document.
    pub schema_version: u16,
    /// One row per listing entry, in listing order.
    pub entries: Vec<ExportedEntry>,
}

/// One listing row, with the block decomposition spelled out so consumers
/// need no arithmetic of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedEntry {
    pub name: String,
    pub value: u16,
    pub block: u16,
    pub offset: u16,
    pub owner: String,
    pub purpose: String,
    /// Consecutive IDs claimed starting at `value`.
    pub sub_channels: u16,
    pub status: AllocationStatus,
}

impl ExportedListing {
    /// Render a validated registry as an export document.
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        let entries = registry
            .entries()
            .iter()
            .map(|entry| ExportedEntry {
                name: entry.name.to_string(),
                value: entry.id.get(),
                // Registry entries are always custom-range.
                block: entry.id.block().unwrap_or(0),
                offset: entry.id.offset().unwrap_or(0),
                owner: entry.owner.to_string(),
                purpose: entry.purpose.to_string(),
                sub_channels: entry.span(),
                status: entry.status,
            })
            .collect();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            entries,
        }
    }
}

/// Serialize a validated registry to pretty JSON.
pub fn to_json(registry: &Registry) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportedListing::from_registry(registry))?)
}

/// Write the JSON export to `path`.
pub fn write_json(registry: &Registry, path: &Path) -> Result<(), ExportError> {
    fs::write(path, to_json(registry)?)?;
    Ok(())
}
