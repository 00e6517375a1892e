//! Chip profiles for the 24Cxx EEPROM family
//!
//! Each profile pairs a chip's byte capacity with its write-page size.
//! The registry is fixed at compile time; lookup is by exact name.

use crate::error::{Error, Result};

/// Static description of one EEPROM chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipProfile {
    /// Chip name, e.g. "24C256"
    pub name: &'static str,
    /// Total capacity in bytes
    pub capacity: u32,
    /// Write-page size in bytes
    pub page_size: u32,
}

impl ChipProfile {
    /// Number of write pages on the chip
    pub const fn page_count(&self) -> u32 {
        self.capacity / self.page_size
    }
}

/// All known chip profiles
///
/// Capacities and page sizes follow the Microchip/ST 24Cxx datasheets:
/// the part number encodes the capacity in kilobits.
pub const PROFILES: &[ChipProfile] = &[
    ChipProfile { name: "24C01", capacity: 128, page_size: 8 },
    ChipProfile { name: "24C02", capacity: 256, page_size: 8 },
    ChipProfile { name: "24C04", capacity: 512, page_size: 16 },
    ChipProfile { name: "24C08", capacity: 1024, page_size: 16 },
    ChipProfile { name: "24C16", capacity: 2048, page_size: 16 },
    ChipProfile { name: "24C32", capacity: 4096, page_size: 32 },
    ChipProfile { name: "24C64", capacity: 8192, page_size: 32 },
    ChipProfile { name: "24C128", capacity: 16384, page_size: 64 },
    ChipProfile { name: "24C256", capacity: 32768, page_size: 64 },
    ChipProfile { name: "24C512", capacity: 65536, page_size: 128 },
    ChipProfile { name: "24C1024", capacity: 131072, page_size: 128 },
];

/// Look up a chip profile by exact name (case-sensitive)
pub fn find_profile(name: &str) -> Result<ChipProfile> {
    PROFILES
        .iter()
        .find(|p| p.name == name)
        .copied()
        .ok_or_else(|| Error::UnknownChip(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_invariants() {
        for p in PROFILES {
            assert!(p.capacity.is_power_of_two(), "{}: capacity", p.name);
            assert!(p.page_size.is_power_of_two(), "{}: page size", p.name);
            assert!(p.page_size <= p.capacity, "{}: page > capacity", p.name);
            assert_eq!(p.capacity % p.page_size, 0, "{}: not page-divisible", p.name);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(find_profile("24C16").unwrap().capacity, 2048);
        assert!(find_profile("24c16").is_err());
        assert!(find_profile("24C15").is_err());
    }

    #[test]
    fn unknown_chip_reports_name() {
        let err = find_profile("25Q128").unwrap_err();
        assert!(err.to_string().contains("25Q128"));
    }
}
