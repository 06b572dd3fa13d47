//! # Published Custom Bus IDs
//!
//! One constant per published allocation. These are the names extension code
//! links against; the raw values are frozen the moment they ship, because
//! deployed binaries carry them verbatim.
//!
//! A `const` assertion at the bottom re-checks pairwise uniqueness and range
//! containment on every build, so a bad edit here fails compilation instead
//! of silently cross-wiring two extensions in the field.

use bus_id::BusId;

/// S3Link UDK event channel.
/// (32768 + 1024 + 1 = 33793)
pub const S3LINK_UDK: BusId = BusId::custom(1, 1);

/// MState update event channel.
/// (32768 + 1024 + 5 = 33797)
pub const MSTATE_UPDATE: BusId = BusId::custom(1, 5);

/// Idle-Timer interval event channel.
/// (32768 + 1024 + 9 = 33801)
pub const IDLETIMER_INTERVAL: BusId = BusId::custom(1, 9);

/// Idle-Timer timeout event channel.
/// (32768 + 1024 + 10 = 33802)
pub const IDLETIMER_TIMEOUT: BusId = BusId::custom(1, 10);

/// Every published constant, for the build-time cross-check and the listing.
pub const PUBLISHED: &[(&str, BusId)] = &[
    ("S3LINK_UDK", S3LINK_UDK),
    ("MSTATE_UPDATE", MSTATE_UPDATE),
    ("IDLETIMER_INTERVAL", IDLETIMER_INTERVAL),
    ("IDLETIMER_TIMEOUT", IDLETIMER_TIMEOUT),
];

// Build-time invariant: all published IDs are custom-range and pairwise
// distinct. A violation is a compile error, not a field report.
const _: () = {
    let mut i = 0;
    while i < PUBLISHED.len() {
        assert!(PUBLISHED[i].1.is_custom(), "published ID in native range");
        let mut j = i + 1;
        while j < PUBLISHED.len() {
            assert!(
                PUBLISHED[i].1.get() != PUBLISHED[j].1.get(),
                "published ID collision"
            );
            j += 1;
        }
        i += 1;
    }
};
