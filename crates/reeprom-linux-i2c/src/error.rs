//! Error types for Linux i2c-dev operations

use thiserror::Error;

/// Linux i2c-dev specific errors
#[derive(Debug, Error)]
pub enum LinuxI2cError {
    /// Failed to open the bus device node
    #[error("Failed to open {path}: {source}")]
    OpenFailed {
        /// Device node path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The I2C_SLAVE ioctl was rejected
    #[error("Failed to select device 0x{device:02X}: {source}")]
    SelectFailed {
        /// Device-select address
        device: u8,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A read or write on the bus failed
    #[error("I2C transfer failed: {0}")]
    TransferFailed(#[source] std::io::Error),
}

/// Result type for Linux i2c-dev operations
pub type Result<T> = std::result::Result<T, LinuxI2cError>;
