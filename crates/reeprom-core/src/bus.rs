//! Bus trait definition

use crate::error::Result;

/// An exclusively-owned I2C bus handle
///
/// Implementations provide raw byte-level transactions against whichever
/// device was last selected. The transfer engine owns all framing (address
/// bytes, page clipping) and timing; implementations only move bytes and
/// sleep when asked.
///
/// Transactions are strictly sequential: the engine never issues a new
/// transaction before the previous one has completed.
pub trait I2cBus {
    /// Select the device that subsequent transactions address
    ///
    /// Fails if the transport rejects the address. An absent device may
    /// only be detected later, when the first transfer is NACKed.
    fn set_device(&mut self, device_select: u8) -> Result<()>;

    /// Write `data` as one contiguous bus transaction
    ///
    /// Returns the number of bytes actually transferred.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read into `buf` as one contiguous bus transaction
    ///
    /// Returns the number of bytes actually transferred.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Block for at least `ms` milliseconds
    ///
    /// Used for the EEPROM write-cycle delay. Emulated buses may return
    /// immediately.
    fn delay_ms(&mut self, ms: u32);
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    fn set_device(&mut self, device_select: u8) -> Result<()> {
        (**self).set_device(device_select)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

impl<B: I2cBus + ?Sized> I2cBus for Box<B> {
    fn set_device(&mut self, device_select: u8) -> Result<()> {
        (**self).set_device(device_select)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
