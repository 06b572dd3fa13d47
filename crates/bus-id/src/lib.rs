//! # Bus ID - Identifier Space Partition
//!
//! The 16-bit Message Bus ID space of the host embedded runtime, and the
//! convention that partitions it:
//!
//! ```text
//! 1 ────────────────── 32767 │ 32768 ────────────────── 65535
//!        native range        │        custom range
//!    (host runtime events)   │   (third-party extensions)
//! ```
//!
//! The custom range is further divided into 32 blocks of 1024 IDs each.
//! One block conventionally belongs to one extension, giving it room for
//! up to 1024 event sub-types without renegotiating:
//!
//! ```text
//! value = 32768 + block * 1024 + offset      (offset < 1024)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bus_id::BusId;
//!
//! // Block 1, offset 5 - a published allocation.
//! const UPDATE: BusId = BusId::custom(1, 5);
//! assert_eq!(UPDATE.get(), 33797);
//! assert_eq!(UPDATE.block(), Some(1));
//! assert_eq!(UPDATE.offset(), Some(5));
//! ```
//!
//! This crate is `const`-friendly by design: every published allocation is a
//! compile-time constant, and malformed block/offset pairs fail the build.

pub mod error;
pub mod id;

pub use error::IdRangeError;
pub use id::{
    BusId, BLOCK_COUNT, BLOCK_SIZE, BUS_ID_MAX, BUS_ID_MIN, CUSTOM_ID_BASE, CUSTOM_RANGE,
    NATIVE_RANGE,
};
