//! reeprom-bus - Bus registry and initialization
//!
//! This crate handles opening a bus from its CLI spec string and hides
//! the concrete backend types behind `Box<dyn I2cBus>`.

#![warn(rust_2018_idioms)]

use reeprom_core::I2cBus;
use std::collections::HashMap;

/// Parsed bus parameters
pub struct BusParams {
    /// Bus backend name (canonical)
    pub name: String,
    /// Key-value parameters
    pub params: HashMap<String, String>,
}

/// Parse a bus spec string into name and parameters
///
/// Format: `name` or `name:key1=value1,key2=value2`. A bare number is
/// shorthand for the Linux i2c-dev bus of that index.
///
/// # Example
/// ```ignore
/// let params = parse_bus_params("dummy:chip=24C256")?;
/// assert_eq!(params.name, "dummy");
/// assert_eq!(params.params.get("chip"), Some(&"24C256".to_string()));
/// ```
pub fn parse_bus_params(s: &str) -> Result<BusParams, Box<dyn std::error::Error>> {
    // Bare bus number: "1" means linux:bus=1
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let mut params = HashMap::new();
        params.insert("bus".to_string(), s.to_string());
        return Ok(BusParams {
            name: "linux".to_string(),
            params,
        });
    }

    let (name, opts_str) = s.split_once(':').unwrap_or((s, ""));

    let mut params = HashMap::new();
    if !opts_str.is_empty() {
        for opt in opts_str.split(',') {
            if let Some((key, value)) = opt.split_once('=') {
                params.insert(key.to_string(), value.to_string());
            } else {
                return Err(
                    format!("Invalid parameter format: '{}' (expected key=value)", opt).into(),
                );
            }
        }
    }

    Ok(BusParams {
        name: name.to_string(),
        params,
    })
}

/// Open a bus from its CLI spec string
///
/// # Arguments
/// * `spec` - Bus specification (e.g. `"1"`, `"linux:dev=/dev/i2c-1"`,
///   or `"dummy:chip=24C256"`)
///
/// # Returns
/// A boxed [`I2cBus`] ready for exclusive use by one operation.
pub fn open_bus(spec: &str) -> Result<Box<dyn I2cBus>, Box<dyn std::error::Error>> {
    let params = parse_bus_params(spec)?;

    match params.name.as_str() {
        #[cfg(feature = "linux-i2c")]
        "linux" | "linux_i2c" | "i2cdev" => open_linux(&params),

        #[cfg(feature = "dummy")]
        "dummy" => open_dummy(&params),

        _ => Err(format!("Unknown bus: {}", params.name).into()),
    }
}

#[cfg(feature = "linux-i2c")]
fn open_linux(params: &BusParams) -> Result<Box<dyn I2cBus>, Box<dyn std::error::Error>> {
    use reeprom_linux_i2c::LinuxI2c;

    let bus = if let Some(dev) = params.params.get("dev") {
        LinuxI2c::open_path(dev)
    } else if let Some(num) = params.params.get("bus") {
        let num: u32 = num
            .parse()
            .map_err(|_| format!("Invalid bus number: {}", num))?;
        LinuxI2c::open_bus(num)
    } else {
        return Err("linux bus requires a number or dev=/dev/i2c-N".into());
    };

    let bus = bus.map_err(|e| {
        format!(
            "Failed to open I2C bus: {}\n\
             Make sure the device exists and you have read/write permissions.\n\
             You may need to: sudo usermod -aG i2c $USER",
            e
        )
    })?;

    Ok(Box::new(bus))
}

#[cfg(feature = "dummy")]
fn open_dummy(params: &BusParams) -> Result<Box<dyn I2cBus>, Box<dyn std::error::Error>> {
    use reeprom_dummy::DummyEeprom;

    let chip = params
        .params
        .get("chip")
        .map(String::as_str)
        .unwrap_or("24C256");
    let profile = reeprom_core::chip::find_profile(chip)?;

    let addr = match params.params.get("addr") {
        Some(s) => parse_hex_u8(s).map_err(|e| format!("Invalid addr value: {}", e))?,
        None => 0x50,
    };

    log::info!(
        "dummy: Emulating {} ({} bytes) at 0x{:02X}",
        profile.name,
        profile.capacity,
        addr
    );

    Ok(Box::new(DummyEeprom::new(profile, addr)))
}

#[cfg(feature = "dummy")]
fn parse_hex_u8(s: &str) -> Result<u8, std::num::ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else {
        s.parse()
    }
}

/// Information about a bus backend
pub struct BusInfo {
    /// Primary name (used for matching)
    pub name: &'static str,
    /// Alternative names/aliases
    pub aliases: &'static [&'static str],
    /// Short description
    pub description: &'static str,
}

/// Get information about all available bus backends (enabled at compile time)
#[allow(unused_mut, clippy::vec_init_then_push)]
pub fn available_buses() -> Vec<BusInfo> {
    let mut buses = Vec::new();

    #[cfg(feature = "linux-i2c")]
    buses.push(BusInfo {
        name: "linux",
        aliases: &["linux_i2c", "i2cdev"],
        description: "Linux I2C bus via i2c-dev (a bare number N means /dev/i2c-N)",
    });

    #[cfg(feature = "dummy")]
    buses.push(BusInfo {
        name: "dummy",
        aliases: &[],
        description: "In-memory EEPROM emulator for testing (chip=<name>,addr=<hex>)",
    });

    buses
}

/// Generate a short list of bus names for CLI help
pub fn bus_names_short() -> String {
    let buses = available_buses();
    if buses.is_empty() {
        return "none (recompile with features)".to_string();
    }
    let names: Vec<&str> = buses.iter().map(|b| b.name).collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_is_linux_shorthand() {
        let p = parse_bus_params("3").unwrap();
        assert_eq!(p.name, "linux");
        assert_eq!(p.params.get("bus").map(String::as_str), Some("3"));
    }

    #[test]
    fn name_with_options() {
        let p = parse_bus_params("dummy:chip=24C16,addr=0x51").unwrap();
        assert_eq!(p.name, "dummy");
        assert_eq!(p.params.get("chip").map(String::as_str), Some("24C16"));
        assert_eq!(p.params.get("addr").map(String::as_str), Some("0x51"));
    }

    #[test]
    fn malformed_option_is_rejected() {
        assert!(parse_bus_params("linux:busnodash").is_err());
    }
}
