//! # Registry - Validated View of the Listing
//!
//! Construction is validation: a [`Registry`] only exists if its entries
//! pass every listing rule, so holding one is proof the namespace is
//! collision-free. The global instance is built once from
//! [`crate::GLOBAL_LISTING`] and shared.

use crate::allocation::{Allocation, AllocationStatus, GLOBAL_LISTING};
use crate::error::RegistryError;
use bus_id::{BusId, BLOCK_SIZE};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    /// The validated global listing.
    static ref GLOBAL: Registry = Registry::from_entries(GLOBAL_LISTING.to_vec())
        .expect("GLOBAL_LISTING violates its own rules; fix the listing, not this code");
}

/// A validated set of allocations.
pub struct Registry {
    /// Entries in listing order.
    entries: Vec<Allocation>,
    /// Name -> index into `entries`.
    by_name: HashMap<&'static str, usize>,
}

impl Registry {
    /// The validated global listing.
    ///
    /// The compiled-in listing is additionally checked at build time by the
    /// `const` assertion in [`crate::ids`], so this cannot fail in a build
    /// that compiled.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Build a registry, enforcing every listing rule.
    ///
    /// Rules, in check order per entry:
    /// 1. symbolic names are unique;
    /// 2. values lie in the custom range [32768, 65535];
    /// 3. sub-channel runs fit inside their 1024-ID block;
    /// 4. no two entries claim overlapping values, with a dedicated
    ///    diagnostic when the prior claim is retired.
    pub fn from_entries(entries: Vec<Allocation>) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name, index).is_some() {
                return Err(RegistryError::DuplicateName {
                    name: entry.name.to_string(),
                });
            }

            if !entry.id.is_custom() {
                return Err(RegistryError::OutOfRange {
                    name: entry.name.to_string(),
                    value: entry.id.get(),
                });
            }

            // offset() is Some for every custom-range ID.
            let offset = entry.id.offset().unwrap_or(0);
            if u32::from(offset) + u32::from(entry.span()) > u32::from(BLOCK_SIZE) {
                return Err(RegistryError::SubChannelOverflow {
                    name: entry.name.to_string(),
                    offset,
                    sub_channels: entry.span(),
                });
            }
        }

        // Pairwise disjointness over claimed runs. Retired rows participate:
        // their values stay reserved forever.
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                let Some(value) = overlap(a, b) else {
                    continue;
                };
                let err = match (a.status, b.status) {
                    (AllocationStatus::Retired, AllocationStatus::Active) => {
                        RegistryError::RetiredValue {
                            name: b.name.to_string(),
                            value,
                            retired: a.name.to_string(),
                        }
                    }
                    (AllocationStatus::Active, AllocationStatus::Retired) => {
                        RegistryError::RetiredValue {
                            name: a.name.to_string(),
                            value,
                            retired: b.name.to_string(),
                        }
                    }
                    _ => RegistryError::Collision {
                        first: a.name.to_string(),
                        second: b.name.to_string(),
                        value,
                    },
                };
                return Err(err);
            }
        }

        debug!("[Registry] Validated {} allocations", entries.len());
        Ok(Self { entries, by_name })
    }

    /// Look up an allocation by symbolic name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Find the allocation whose claimed run contains `id`, if any.
    #[must_use]
    pub fn resolve(&self, id: BusId) -> Option<&Allocation> {
        self.entries.iter().find(|entry| entry.claims(id))
    }

    /// The extension owning `block`, if any active entry claims IDs in it.
    #[must_use]
    pub fn block_owner(&self, block: u16) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| {
                entry.status == AllocationStatus::Active && entry.id.block() == Some(block)
            })
            .map(|entry| entry.owner)
    }

    /// All entries, in listing order.
    #[must_use]
    pub fn entries(&self) -> &[Allocation] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First value claimed by both entries, if their runs overlap.
fn overlap(a: &Allocation, b: &Allocation) -> Option<u16> {
    let (a_start, b_start) = (u32::from(a.id.get()), u32::from(b.id.get()));
    let a_end = a_start + u32::from(a.span());
    let b_end = b_start + u32::from(b.span());
    if a_start < b_end && b_start < a_end {
        // Overlap start fits in u16 because both starts do.
        Some(a_start.max(b_start) as u16)
    } else {
        None
    }
}
