//! Random-fill and blank commands

use rand::RngCore;
use reeprom_core::{ops, Eeprom, I2cBus};

/// Fill the whole chip with pseudorandom bytes
///
/// No seed control; every run produces different content.
pub fn run_random<B: I2cBus>(ee: &mut Eeprom<B>) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::thread_rng();

    let pb = super::transfer_bar(u64::from(ee.capacity()), "Writing");
    ops::fill_with(
        ee,
        |chunk| rng.fill_bytes(chunk),
        |done| pb.set_position(done as u64),
    )?;
    pb.finish_and_clear();

    println!("Random data written to EEPROM.");
    Ok(())
}

/// Write the erased value (0xFF) to every byte
pub fn run_blank<B: I2cBus>(ee: &mut Eeprom<B>) -> Result<(), Box<dyn std::error::Error>> {
    let pb = super::transfer_bar(u64::from(ee.capacity()), "Blanking");
    ops::blank(ee, |done| pb.set_position(done as u64))?;
    pb.finish_and_clear();

    println!("EEPROM blanked (all bytes set to 0xFF).");
    Ok(())
}
