//! Bulk operations over the full chip
//!
//! Thin specializations of the range engine: each pairs a chunk source or
//! sink with a full-capacity walk. Progress callbacks receive the
//! cumulative byte count and let the CLI drive its progress bars without
//! this crate knowing about terminals.

use crate::bus::I2cBus;
use crate::eeprom::Eeprom;
use crate::error::{Error, Result};

/// Erased-cell value for EEPROM technology
pub const ERASED_VALUE: u8 = 0xFF;

/// Read the full chip contents
pub fn read_image<B: I2cBus>(
    ee: &mut Eeprom<B>,
    progress: impl FnMut(usize),
) -> Result<Vec<u8>> {
    let mut image = vec![0u8; ee.capacity() as usize];
    ee.read_range(0, &mut image, progress)?;
    Ok(image)
}

/// Write a firmware image starting at address 0
///
/// Fails with [`Error::CapacityExceeded`] before any bus transaction when
/// the image is larger than the chip; a shorter image leaves the tail of
/// the chip untouched.
pub fn write_image<B: I2cBus>(
    ee: &mut Eeprom<B>,
    image: &[u8],
    progress: impl FnMut(usize),
) -> Result<()> {
    if image.len() > ee.capacity() as usize {
        return Err(Error::CapacityExceeded {
            image: image.len(),
            capacity: ee.capacity(),
        });
    }
    ee.write_range(0, image, progress)
}

/// Set every byte on the chip to the erased value (0xFF)
pub fn blank<B: I2cBus>(ee: &mut Eeprom<B>, progress: impl FnMut(usize)) -> Result<()> {
    let capacity = ee.capacity();
    ee.fill_range(0, capacity, |chunk| chunk.fill(ERASED_VALUE), progress)
}

/// Fill the whole chip with generated data
///
/// `generate` is called once per page chunk and must fill the slice it is
/// handed; the random command passes an RNG-backed closure.
pub fn fill_with<B: I2cBus>(
    ee: &mut Eeprom<B>,
    generate: impl FnMut(&mut [u8]),
    progress: impl FnMut(usize),
) -> Result<()> {
    let capacity = ee.capacity();
    ee.fill_range(0, capacity, generate, progress)
}
