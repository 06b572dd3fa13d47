//! # Custom Bus Registry Test Suite
//!
//! Unified test crate for the identifier-space properties the listing
//! guarantees:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── properties.rs   # Uniqueness, range, block, stability invariants
//!     └── tooling.rs      # Local-listing sweeps and the JSON export
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p registry-tests
//!
//! # By category
//! cargo test -p registry-tests integration::properties::
//! cargo test -p registry-tests integration::tooling::
//! ```

#![allow(unused_imports)]
