//! # Range Errors
//!
//! Failures when interpreting raw numbers as Bus IDs.

use thiserror::Error;

/// A block, offset, or raw value falls outside the identifier space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdRangeError {
    /// Zero is not a listener ID on the host Message Bus.
    #[error("Bus ID 0 is not a valid listener ID")]
    ZeroId,

    /// Block number outside the 32 custom-range blocks.
    #[error("Block {block} out of range: custom range holds blocks 0..32")]
    BlockOutOfRange { block: u16 },

    /// Offset outside the 1024 IDs of a block.
    #[error("Offset {offset} out of range: a block holds offsets 0..1024")]
    OffsetOutOfRange { offset: u16 },

    /// Value inside the native range reserved for the host runtime.
    #[error("Value {value} is in the native range 1-32767 reserved for the host runtime")]
    NativeRange { value: u16 },
}
