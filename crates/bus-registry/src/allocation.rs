//! # Allocation Entries
//!
//! One row per claimed ID in the shared listing. Rows are appended by hand
//! when an extension publishes a new event channel; after that they are
//! immutable facts. Removal never happens - a deprecated extension's rows
//! flip to [`AllocationStatus::Retired`] and keep their values blacklisted.

use crate::ids;
use bus_id::BusId;
use serde::{Deserialize, Serialize};

/// Lifecycle of a listing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    /// The owning extension is maintained; the channel is live.
    Active,
    /// The owning extension is deprecated. The value stays reserved so that
    /// still-deployed binaries compiled against it never cross-wire.
    Retired,
}

/// One claimed entry in the shared listing.
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    /// Symbolic name, matching the constant in [`crate::ids`].
    pub name: &'static str,
    /// The claimed Bus ID.
    pub id: BusId,
    /// The extension that owns this allocation.
    pub owner: &'static str,
    /// Human-readable purpose, for review.
    pub purpose: &'static str,
    /// Consecutive sub-channels claimed starting at `id`, when the entry
    /// reserves a run of IDs rather than a single one. `None` claims one.
    pub sub_channels: Option<u16>,
    /// Whether the owning extension is still maintained.
    pub status: AllocationStatus,
}

impl Allocation {
    /// Number of consecutive IDs this entry claims.
    #[must_use]
    pub fn span(&self) -> u16 {
        self.sub_channels.unwrap_or(1).max(1)
    }

    /// Whether `id` falls inside this entry's claimed run.
    #[must_use]
    pub fn claims(&self, id: BusId) -> bool {
        let start = self.id.get();
        id.get() >= start && u32::from(id.get()) < u32::from(start) + u32::from(self.span())
    }
}

/// The global listing. One row per published constant in [`crate::ids`].
///
/// Append-only: new rows go at the end of their owner's group, existing rows
/// never change value. Cross-check against the whole table before claiming
/// a new block or offset.
pub static GLOBAL_LISTING: &[Allocation] = &[
    Allocation {
        name: "S3LINK_UDK",
        id: ids::S3LINK_UDK,
        owner: "pxt-s3link-udk",
        purpose: "S3Link UDK event channel",
        sub_channels: None,
        status: AllocationStatus::Active,
    },
    Allocation {
        name: "MSTATE_UPDATE",
        id: ids::MSTATE_UPDATE,
        owner: "pxt-mstate",
        purpose: "MState state-machine update event channel",
        sub_channels: None,
        status: AllocationStatus::Active,
    },
    Allocation {
        name: "IDLETIMER_INTERVAL",
        id: ids::IDLETIMER_INTERVAL,
        owner: "pxt-idle-timer",
        purpose: "Idle-Timer interval event channel",
        sub_channels: None,
        status: AllocationStatus::Active,
    },
    Allocation {
        name: "IDLETIMER_TIMEOUT",
        id: ids::IDLETIMER_TIMEOUT,
        owner: "pxt-idle-timer",
        purpose: "Idle-Timer timeout event channel",
        sub_channels: None,
        status: AllocationStatus::Active,
    },
];
