//! reeprom-linux-i2c - Linux i2c-dev backend
//!
//! Implements the [`reeprom_core::I2cBus`] trait on top of the kernel's
//! `/dev/i2c-N` character devices: device selection via the `I2C_SLAVE`
//! ioctl, transfers via plain `read`/`write` on the file descriptor.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod device;
mod error;

pub use device::LinuxI2c;
pub use error::{LinuxI2cError, Result};
