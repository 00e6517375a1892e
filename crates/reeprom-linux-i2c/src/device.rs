//! Linux i2c-dev device implementation
//!
//! This module provides the `LinuxI2c` struct that implements the
//! `I2cBus` trait using Linux's i2c-dev interface.

use crate::error::{LinuxI2cError, Result};

use reeprom_core::error::{Error as CoreError, Result as CoreResult};
use reeprom_core::I2cBus;

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::os::unix::io::AsRawFd;

/// Linux i2c-dev ioctl constants
mod ioctl {
    use nix::ioctl_write_int_bad;

    /// I2C_SLAVE from linux/i2c-dev.h: bind the fd to a device address
    pub const I2C_SLAVE: libc::c_int = 0x0703;

    ioctl_write_int_bad!(i2c_slave, I2C_SLAVE);
}

/// Linux I2C bus handle using the i2c-dev interface
///
/// This struct implements the `I2cBus` trait for Linux systems using the
/// `/dev/i2c-N` device interface. The handle is exclusively owned; the
/// kernel serializes transactions per fd but nothing here arbitrates
/// between processes.
pub struct LinuxI2c {
    file: File,
    path: String,
}

impl LinuxI2c {
    /// Open bus number `bus` (maps to `/dev/i2c-<bus>`)
    pub fn open_bus(bus: u32) -> Result<Self> {
        Self::open_path(&format!("/dev/i2c-{}", bus))
    }

    /// Open a bus by device node path
    pub fn open_path(path: &str) -> Result<Self> {
        log::debug!("linux_i2c: Opening device {}", path);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| LinuxI2cError::OpenFailed {
                path: path.to_string(),
                source: e,
            })?;

        log::info!("linux_i2c: Opened {}", path);

        Ok(Self {
            file,
            path: path.to_string(),
        })
    }

    /// The device node path this handle was opened from
    pub fn path(&self) -> &str {
        &self.path
    }

    fn select(&mut self, device: u8) -> Result<()> {
        let fd = self.file.as_raw_fd();
        unsafe {
            ioctl::i2c_slave(fd, libc::c_int::from(device)).map_err(|e| {
                LinuxI2cError::SelectFailed {
                    device,
                    source: std::io::Error::from_raw_os_error(e as i32),
                }
            })?;
        }
        Ok(())
    }
}

impl I2cBus for LinuxI2c {
    fn set_device(&mut self, device_select: u8) -> CoreResult<()> {
        self.select(device_select)
            .map_err(|e| CoreError::Bus(e.to_string()))
    }

    fn write(&mut self, data: &[u8]) -> CoreResult<usize> {
        self.file
            .write(data)
            .map_err(|e| CoreError::Bus(LinuxI2cError::TransferFailed(e).to_string()))
    }

    fn read(&mut self, buf: &mut [u8]) -> CoreResult<usize> {
        self.file
            .read(buf)
            .map_err(|e| CoreError::Bus(LinuxI2cError::TransferFailed(e).to_string()))
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
