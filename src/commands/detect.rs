//! Device scan command

use reeprom_core::scan::scan_devices;
use reeprom_core::I2cBus;

/// Scan the bus and print every responsive device address
pub fn run<B: I2cBus>(bus: &mut B) {
    let found = scan_devices(bus);

    if found.is_empty() {
        println!("No I2C devices detected.");
        return;
    }

    println!("Detected I2C devices:");
    for addr in found {
        println!("0x{:02x}", addr);
    }
}
