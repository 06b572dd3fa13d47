//! # The `BusId` type and partition constants
//!
//! A `BusId` is the 16-bit integer identifying which logical event channel a
//! Message Bus message belongs to. Extensions never construct these at
//! runtime; published allocations are `const` values built with
//! [`BusId::custom`], and tooling uses the fallible constructors.

use crate::error::IdRangeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Smallest valid Bus ID. Zero is not a listener ID on the host runtime.
pub const BUS_ID_MIN: u16 = 1;

/// Largest valid Bus ID.
pub const BUS_ID_MAX: u16 = 65535;

/// First ID of the custom range reserved for third-party extensions.
pub const CUSTOM_ID_BASE: u16 = 32768;

/// IDs owned by the host runtime for its built-in event sources.
pub const NATIVE_RANGE: RangeInclusive<u16> = BUS_ID_MIN..=(CUSTOM_ID_BASE - 1);

/// IDs governed by the shared listing, reserved for extensions.
pub const CUSTOM_RANGE: RangeInclusive<u16> = CUSTOM_ID_BASE..=BUS_ID_MAX;

/// IDs per extension block.
pub const BLOCK_SIZE: u16 = 1024;

/// Number of blocks tiling the custom range.
pub const BLOCK_COUNT: u16 = 32;

/// A Message Bus channel identifier.
///
/// Wraps the raw 16-bit ID so extension code references allocations
/// symbolically instead of hard-coding magic numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct BusId(u16);

impl BusId {
    /// Compose a custom-range ID from its block and offset.
    ///
    /// `value = 32768 + block * 1024 + offset`
    ///
    /// This is the constructor for published allocations. It is `const`, so
    /// an out-of-range `block` (>= 32) or `offset` (>= 1024) fails the build
    /// rather than producing a colliding or native-range value.
    #[must_use]
    pub const fn custom(block: u16, offset: u16) -> Self {
        assert!(block < BLOCK_COUNT, "block out of range (0..32)");
        assert!(offset < BLOCK_SIZE, "offset out of range (0..1024)");
        Self(CUSTOM_ID_BASE + block * BLOCK_SIZE + offset)
    }

    /// Runtime-checked variant of [`BusId::custom`] for listing tooling.
    pub fn try_custom(block: u16, offset: u16) -> Result<Self, IdRangeError> {
        if block >= BLOCK_COUNT {
            return Err(IdRangeError::BlockOutOfRange { block });
        }
        if offset >= BLOCK_SIZE {
            return Err(IdRangeError::OffsetOutOfRange { offset });
        }
        Ok(Self(CUSTOM_ID_BASE + block * BLOCK_SIZE + offset))
    }

    /// Interpret a raw value as a custom-range ID.
    ///
    /// Rejects native-range values; a custom extension must never claim an
    /// ID at or below 32767.
    pub fn try_custom_value(value: u16) -> Result<Self, IdRangeError> {
        if value == 0 {
            return Err(IdRangeError::ZeroId);
        }
        if value < CUSTOM_ID_BASE {
            return Err(IdRangeError::NativeRange { value });
        }
        Ok(Self(value))
    }

    /// Get the raw 16-bit value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether this ID falls in the custom (extension) range.
    #[must_use]
    pub const fn is_custom(self) -> bool {
        self.0 >= CUSTOM_ID_BASE
    }

    /// Whether this ID falls in the native (host runtime) range.
    #[must_use]
    pub const fn is_native(self) -> bool {
        self.0 < CUSTOM_ID_BASE
    }

    /// The block this ID belongs to, or `None` for native-range IDs.
    #[must_use]
    pub const fn block(self) -> Option<u16> {
        if self.is_custom() {
            Some((self.0 - CUSTOM_ID_BASE) / BLOCK_SIZE)
        } else {
            None
        }
    }

    /// The offset within its block, or `None` for native-range IDs.
    #[must_use]
    pub const fn offset(self) -> Option<u16> {
        if self.is_custom() {
            Some((self.0 - CUSTOM_ID_BASE) % BLOCK_SIZE)
        } else {
            None
        }
    }
}

impl TryFrom<u16> for BusId {
    type Error = IdRangeError;

    /// Accept any valid Bus ID, native or custom. Only zero is rejected.
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(IdRangeError::ZeroId);
        }
        Ok(Self(value))
    }
}

impl From<BusId> for u16 {
    fn from(id: BusId) -> Self {
        id.0
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
