//! # Bus Registry - The Shared Custom ID Listing
//!
//! To prevent Message Bus ID collisions between independently developed
//! extensions, custom IDs are registered and managed in this one
//! version-controlled listing. Extension authors claim a block, compute
//! their values as `32768 + block * 1024 + offset`, cross-check the listing,
//! and append an entry. There is no runtime negotiation; coordination happens
//! here, at review time.
//!
//! ## What lives where
//!
//! - [`ids`] - the published constants, one per allocation, value-stable
//!   forever. Extension code references these symbolically.
//! - [`GLOBAL_LISTING`] - the allocation rows behind the constants: owner,
//!   purpose, sub-channel claims, status.
//! - [`Registry`] - a validated view of the listing. Construction enforces
//!   what used to be a social contract:
//!   1. no two allocations share a value (or overlap sub-channel spans);
//!   2. every value lies in the custom range [32768, 65535];
//!   3. sub-channel claims fit inside their block;
//!   4. retired values are never reallocated.
//! - [`LocalListing`] - an extension's private mirror of its own block,
//!   checked for drift against the global listing.
//! - [`export`] - machine-readable JSON for downstream build tooling.
//!
//! ## Adding an allocation
//!
//! 1. Pick an unused block (see `Registry::global().block_owner(n)`).
//! 2. Declare the constant in [`ids`] with `BusId::custom(block, offset)`.
//! 3. Append the matching row to [`GLOBAL_LISTING`] with owner and purpose.
//! 4. `registry-admin check` (and the build itself) fails on any collision.
//!
//! Published values are immutable: changing one breaks every extension binary
//! already compiled against it. Deprecated extensions keep their rows with
//! [`AllocationStatus::Retired`]; the values stay blacklisted forever.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod allocation;
pub mod error;
pub mod export;
pub mod ids;
pub mod local;
pub mod registry;

// Re-export main types
pub use allocation::{Allocation, AllocationStatus, GLOBAL_LISTING};
pub use error::RegistryError;
pub use export::{ExportError, ExportedEntry, ExportedListing, EXPORT_SCHEMA_VERSION};
pub use local::LocalListing;
pub use registry::Registry;
