//! Firmware load and save commands

use reeprom_core::{ops, Eeprom, I2cBus};
use std::fs;
use std::path::Path;

/// Write a firmware image file to the chip
///
/// The image size is validated against the chip capacity before any bus
/// transaction; a shorter image leaves the rest of the chip untouched.
pub fn run_write<B: I2cBus>(
    ee: &mut Eeprom<B>,
    input: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = fs::read(input)?;
    println!("Read {} bytes from {:?}", image.len(), input);

    let pb = super::transfer_bar(image.len() as u64, "Writing");
    ops::write_image(ee, &image, |done| pb.set_position(done as u64))?;
    pb.finish_and_clear();

    println!("Firmware written to EEPROM.");
    Ok(())
}

/// Save the full chip contents to a file
///
/// The output is raw binary, exactly capacity bytes long, regardless of
/// actual firmware content.
pub fn run_save<B: I2cBus>(
    ee: &mut Eeprom<B>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = super::transfer_bar(u64::from(ee.capacity()), "Reading");
    let image = ops::read_image(ee, |done| pb.set_position(done as u64))?;
    pb.finish_and_clear();

    fs::write(output, &image)?;
    println!("Firmware data saved to {:?}", output);
    Ok(())
}
