//! # Extension-Local Listings
//!
//! An extension may keep a private mirror of its own block - a local enum of
//! the sub-IDs it uses - so its source reads naturally without reaching into
//! the global listing. A local listing is strictly a view: it must never
//! introduce a value absent from, or different in, the global listing.
//!
//! Silent drift between the two is how collisions historically slipped
//! through (an extension picking a "spare" value locally and forgetting to
//! register it). [`LocalListing::validate_against`] makes that drift a hard
//! failure.

use crate::error::RegistryError;
use crate::ids;
use crate::registry::Registry;
use bus_id::BusId;
use tracing::debug;

/// A per-extension mirror of globally listed allocations.
#[derive(Debug, Clone)]
pub struct LocalListing {
    /// The extension this listing belongs to.
    pub extension: &'static str,
    /// (name, value) pairs the extension references locally.
    pub entries: Vec<(&'static str, BusId)>,
}

impl LocalListing {
    /// Create a local listing for `extension`.
    #[must_use]
    pub fn new(extension: &'static str, entries: Vec<(&'static str, BusId)>) -> Self {
        Self { extension, entries }
    }

    /// Check that every local pair appears in the global listing with the
    /// same name and value.
    ///
    /// Fails with [`RegistryError::LocalDrift`] naming the first divergent
    /// entry: either the name is absent globally, or the values disagree.
    pub fn validate_against(&self, global: &Registry) -> Result<(), RegistryError> {
        for (name, local_id) in &self.entries {
            match global.get(name) {
                Some(row) if row.id == *local_id => {}
                Some(row) => {
                    return Err(RegistryError::LocalDrift {
                        name: (*name).to_string(),
                        local: local_id.get(),
                        global: Some(row.id.get()),
                    });
                }
                None => {
                    return Err(RegistryError::LocalDrift {
                        name: (*name).to_string(),
                        local: local_id.get(),
                        global: None,
                    });
                }
            }
        }
        debug!(
            "[Local] {}: {} entries consistent with the global listing",
            self.extension,
            self.entries.len()
        );
        Ok(())
    }
}

/// The MState extension's local view of its block-1 allocation.
#[must_use]
pub fn mstate_local() -> LocalListing {
    LocalListing::new(
        "pxt-mstate",
        vec![("MSTATE_UPDATE", ids::MSTATE_UPDATE)],
    )
}

/// Every extension-local listing known to this repository, for tooling that
/// sweeps them all.
#[must_use]
pub fn all_local_listings() -> Vec<LocalListing> {
    vec![mstate_local()]
}
