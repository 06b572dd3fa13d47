//! # Listing Errors
//!
//! Everything that can be wrong with a listing, as structured errors.
//! Historically these were caught (or missed) by eyeball during review;
//! [`crate::Registry`] turns each one into a hard failure with the entry
//! names attached, so a violation points at its own root cause.

use thiserror::Error;

/// A listing rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two entries claim the same value (or overlapping sub-channel runs).
    /// This is the silent cross-talk failure the listing exists to prevent.
    #[error("Value collision: {first} and {second} both claim Bus ID {value}")]
    Collision {
        first: String,
        second: String,
        value: u16,
    },

    /// An entry's value lies outside the custom range [32768, 65535].
    #[error("Out of range: {name} claims {value}, outside the custom range 32768-65535")]
    OutOfRange { name: String, value: u16 },

    /// Two entries share a symbolic name.
    #[error("Duplicate name: {name} appears more than once in the listing")]
    DuplicateName { name: String },

    /// An active entry claims a value a retired extension still holds.
    /// Retired values are never reallocated; deployed binaries may still
    /// listen on them.
    #[error("Retired value: {name} claims {value}, retired by {retired}")]
    RetiredValue {
        name: String,
        value: u16,
        retired: String,
    },

    /// A sub-channel run spills past the end of its 1024-ID block.
    #[error(
        "Sub-channel overflow: {name} at offset {offset} claims {sub_channels} sub-channels, \
         past the end of its block"
    )]
    SubChannelOverflow {
        name: String,
        offset: u16,
        sub_channels: u16,
    },

    /// An extension-local listing disagrees with the global listing.
    #[error(
        "Local listing drift: {name} is {local} locally, {} globally",
        .global.map_or_else(|| "absent".to_string(), |g| g.to_string())
    )]
    LocalDrift {
        name: String,
        local: u16,
        global: Option<u16>,
    },
}
