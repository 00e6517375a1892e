//! Error types for reeprom-core

use thiserror::Error;

/// Core error type
///
/// Transfer failures carry the memory address and intended byte count so
/// a failed bulk operation can be diagnosed without re-running it.
#[derive(Debug, Error)]
pub enum Error {
    /// Chip did not acknowledge the device-select address
    #[error("device 0x{device:02X} did not acknowledge select")]
    DeviceSelect {
        /// Device-select address that went unanswered
        device: u8,
    },

    /// Write transaction transferred fewer bytes than requested
    #[error("short write at 0x{addr:04X}: transferred {actual} of {expected} bytes")]
    ShortWrite {
        /// Memory address of the failed transaction
        addr: u32,
        /// Bytes the transaction should have transferred
        expected: usize,
        /// Bytes actually transferred
        actual: usize,
    },

    /// Read transaction transferred fewer bytes than requested
    #[error("short read at 0x{addr:04X}: transferred {actual} of {expected} bytes")]
    ShortRead {
        /// Memory address of the failed transaction
        addr: u32,
        /// Bytes the transaction should have transferred
        expected: usize,
        /// Bytes actually transferred
        actual: usize,
    },

    /// Bus transaction failed outright
    #[error("transfer failed at 0x{addr:04X} ({len} bytes): {msg}")]
    Transfer {
        /// Memory address of the failed transaction
        addr: u32,
        /// Intended transaction length in bytes
        len: usize,
        /// Backend error description
        msg: String,
    },

    /// Requested range extends past the end of the chip
    #[error("range 0x{start:04X}+{len} exceeds chip capacity of {capacity} bytes")]
    AddressOutOfBounds {
        /// First address of the requested range
        start: u32,
        /// Length of the requested range
        len: u32,
        /// Chip capacity in bytes
        capacity: u32,
    },

    /// Chip name not present in the profile registry
    #[error("unknown chip \"{0}\"")]
    UnknownChip(String),

    /// Firmware image is larger than the target chip
    #[error("image size ({image} bytes) exceeds chip capacity ({capacity} bytes)")]
    CapacityExceeded {
        /// Image size in bytes
        image: usize,
        /// Chip capacity in bytes
        capacity: u32,
    },

    /// Raw bus transport error
    #[error("bus error: {0}")]
    Bus(String),
}

/// Result type alias using the core error type
pub type Result<T> = std::result::Result<T, Error>;
