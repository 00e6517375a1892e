//! Device-select address scan
//!
//! Probes every assignable address with a one-byte read. A NACK here is
//! the expected steady state for an empty address, not an error, so probe
//! failures are swallowed and only responsive addresses are reported.

use crate::bus::I2cBus;

/// First assignable 7-bit device address
pub const SCAN_FIRST: u8 = 0x03;
/// Last assignable 7-bit device address
pub const SCAN_LAST: u8 = 0x77;

/// Enumerate responsive device-select addresses on the bus
pub fn scan_devices<B: I2cBus>(bus: &mut B) -> Vec<u8> {
    let mut found = Vec::new();
    let mut probe = [0u8; 1];

    for addr in SCAN_FIRST..=SCAN_LAST {
        if bus.set_device(addr).is_err() {
            continue;
        }
        match bus.read(&mut probe) {
            Ok(1) => {
                log::debug!("scan: device at 0x{:02X}", addr);
                found.push(addr);
            }
            _ => continue,
        }
    }

    found
}
