//! # Tooling Tests
//!
//! Property 6 (cross-listing consistency) plus the machine-readable export
//! that downstream build tooling consumes.

#[cfg(test)]
mod tests {
    use bus_id::BusId;
    use bus_registry::{
        export, local, LocalListing, Registry, RegistryError, EXPORT_SCHEMA_VERSION,
    };

    // =========================================================================
    // PROPERTY 6: CROSS-LISTING CONSISTENCY
    // =========================================================================

    #[test]
    fn test_local_listings_agree_with_global() {
        let registry = Registry::global();
        for listing in local::all_local_listings() {
            listing
                .validate_against(registry)
                .unwrap_or_else(|e| panic!("{} drifted: {e}", listing.extension));
        }
    }

    #[test]
    fn test_local_only_value_rejected() {
        // An extension inventing an ID locally without registering it is the
        // exact failure mode the listing exists to prevent.
        let rogue = LocalListing::new(
            "pxt-rogue",
            vec![("ROGUE_CHANNEL", BusId::custom(9, 0))],
        );
        let err = rogue.validate_against(Registry::global()).unwrap_err();
        assert!(matches!(err, RegistryError::LocalDrift { global: None, .. }));
    }

    // =========================================================================
    // JSON EXPORT
    // =========================================================================

    #[test]
    fn test_export_covers_whole_listing() {
        let registry = Registry::global();
        let json = export::to_json(registry).expect("export serializes");
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc["schema_version"], u64::from(EXPORT_SCHEMA_VERSION));
        assert_eq!(
            doc["entries"].as_array().unwrap().len(),
            registry.len()
        );
    }

    #[test]
    fn test_export_spells_out_fields() {
        // A downstream consumer should be able to assert against raw fields.
        let json = export::to_json(Registry::global()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        let idle_timeout = doc["entries"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["name"] == "IDLETIMER_TIMEOUT")
            .expect("IDLETIMER_TIMEOUT exported");

        assert_eq!(idle_timeout["value"], 33802);
        assert_eq!(idle_timeout["block"], 1);
        assert_eq!(idle_timeout["offset"], 10);
        assert_eq!(idle_timeout["owner"], "pxt-idle-timer");
        assert_eq!(idle_timeout["status"], "active");
    }
}
