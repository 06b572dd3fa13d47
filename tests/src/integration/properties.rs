//! # Listing Property Tests
//!
//! The identifier-space guarantees, checked end to end against the real
//! global listing:
//!
//! 1. **Uniqueness** - no two allocations share a value
//! 2. **Range containment** - every value in [32768, 65535]
//! 3. **Reserved-range non-encroachment** - nothing at or below 32767
//! 4. **Block consistency** - value = 32768 + 1024*block + offset, offset < 1024
//! 5. **Stability** - published values never move between versions
//! 6. (Cross-listing consistency lives in `tooling.rs`)

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bus_id::{BusId, BLOCK_SIZE, CUSTOM_ID_BASE, CUSTOM_RANGE};
    use bus_registry::{ids, Registry};

    // =========================================================================
    // PROPERTY 1: UNIQUENESS
    // =========================================================================

    #[test]
    fn test_published_constants_pairwise_distinct() {
        let mut seen = HashSet::new();
        for (name, id) in ids::PUBLISHED {
            assert!(
                seen.insert(id.get()),
                "{name} re-uses value {id} already claimed by another constant"
            );
        }
    }

    #[test]
    fn test_no_two_listing_entries_overlap() {
        let registry = Registry::global();
        let mut seen = HashSet::new();
        for entry in registry.entries() {
            for claimed in entry.id.get()..entry.id.get() + entry.span() {
                assert!(
                    seen.insert(claimed),
                    "{} overlaps another entry at {claimed}",
                    entry.name
                );
            }
        }
    }

    // =========================================================================
    // PROPERTIES 2 & 3: RANGE CONTAINMENT, NO NATIVE ENCROACHMENT
    // =========================================================================

    #[test]
    fn test_every_allocation_in_custom_range() {
        for entry in Registry::global().entries() {
            assert!(
                CUSTOM_RANGE.contains(&entry.id.get()),
                "{} claims {} outside the custom range",
                entry.name,
                entry.id
            );
            assert!(entry.id.is_custom());
            assert!(!entry.id.is_native());
        }
    }

    #[test]
    fn test_no_native_range_encroachment() {
        for entry in Registry::global().entries() {
            assert!(
                entry.id.get() > 32767,
                "{} sits in the range reserved for the host runtime",
                entry.name
            );
        }
    }

    // =========================================================================
    // PROPERTY 4: BLOCK CONSISTENCY
    // =========================================================================

    #[test]
    fn test_block_decomposition_recomposes() {
        for entry in Registry::global().entries() {
            let block = entry.id.block().expect("custom-range ID has a block");
            let offset = entry.id.offset().expect("custom-range ID has an offset");
            assert!(offset < BLOCK_SIZE);
            assert_eq!(
                entry.id.get(),
                CUSTOM_ID_BASE + block * BLOCK_SIZE + offset,
                "{} does not follow the block convention",
                entry.name
            );
        }
    }

    #[test]
    fn test_block_one_shared_header_scenario() {
        // The four published allocations: block 1, offsets {1, 5, 9, 10}.
        let a = BusId::custom(1, 1);
        let b = BusId::custom(1, 5);
        let c = BusId::custom(1, 9);
        let d = BusId::custom(1, 10);

        assert_eq!(a.get(), 33793);
        assert_eq!(b.get(), 33797);
        assert_eq!(c.get(), 33801);
        assert_eq!(d.get(), 33802);

        let values: HashSet<u16> = [a, b, c, d].iter().map(|id| id.get()).collect();
        assert_eq!(values.len(), 4, "the four IDs must be distinct");

        for id in [a, b, c, d] {
            assert!(CUSTOM_RANGE.contains(&id.get()));
            assert_eq!(id.block(), Some(1));
        }
        assert_eq!(
            [a.offset(), b.offset(), c.offset(), d.offset()],
            [Some(1), Some(5), Some(9), Some(10)]
        );
    }

    // =========================================================================
    // PROPERTY 5: STABILITY / REGRESSION
    // =========================================================================

    #[test]
    fn test_published_values_never_move() {
        // Compiled extensions in the field carry these raw values. Any
        // failure here is a compatibility break, not a test to update.
        assert_eq!(ids::S3LINK_UDK.get(), 33793);
        assert_eq!(ids::MSTATE_UPDATE.get(), 33797);
        assert_eq!(ids::IDLETIMER_INTERVAL.get(), 33801);
        assert_eq!(ids::IDLETIMER_TIMEOUT.get(), 33802);
    }

    #[test]
    fn test_published_names_stay_listed() {
        let registry = Registry::global();
        for name in [
            "S3LINK_UDK",
            "MSTATE_UPDATE",
            "IDLETIMER_INTERVAL",
            "IDLETIMER_TIMEOUT",
        ] {
            assert!(
                registry.get(name).is_some(),
                "{name} disappeared from the listing; retire entries, never remove them"
            );
        }
    }
}
