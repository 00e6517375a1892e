//! reeprom-dummy - In-memory EEPROM emulator for testing
//!
//! Emulates a 24Cxx chip behind the [`I2cBus`] trait: device-select
//! decoding (including the extra select addresses that single-byte parts
//! occupy), the internal address pointer, and page-wrap on writes. Useful
//! for testing and development without real hardware.

use reeprom_core::{Addressing, ChipProfile, Error, I2cBus, Result};

/// In-memory emulation of one EEPROM on an otherwise empty bus
pub struct DummyEeprom {
    profile: ChipProfile,
    base_addr: u8,
    addressing: Addressing,
    data: Vec<u8>,
    /// Currently selected block (single-byte parts span several select
    /// addresses), or None when the last select was NACKed
    selected_block: Option<u32>,
    /// Chip-internal address pointer
    pointer: u32,
    write_transactions: usize,
    read_transactions: usize,
    /// NACK the nth write transaction (1-based)
    fail_write_at: Option<usize>,
    /// Cut the nth read transaction (1-based) short by one byte
    fail_read_at: Option<usize>,
}

impl DummyEeprom {
    /// Create an emulated chip in the erased state (all 0xFF)
    pub fn new(profile: ChipProfile, base_addr: u8) -> Self {
        log::debug!(
            "dummy: {} ({} bytes) at 0x{:02X}",
            profile.name,
            profile.capacity,
            base_addr
        );
        Self {
            addressing: Addressing::for_capacity(profile.capacity),
            data: vec![0xFF; profile.capacity as usize],
            selected_block: None,
            pointer: 0,
            write_transactions: 0,
            read_transactions: 0,
            fail_write_at: None,
            fail_read_at: None,
            profile,
            base_addr,
        }
    }

    /// Create an emulated chip with pre-filled contents
    pub fn with_data(profile: ChipProfile, base_addr: u8, initial: &[u8]) -> Self {
        let mut chip = Self::new(profile, base_addr);
        let len = initial.len().min(chip.data.len());
        chip.data[..len].copy_from_slice(&initial[..len]);
        chip
    }

    /// The emulated memory contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the emulated memory contents
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Number of write transactions issued so far (including address-set
    /// writes)
    pub fn write_transactions(&self) -> usize {
        self.write_transactions
    }

    /// Number of read transactions issued so far
    pub fn read_transactions(&self) -> usize {
        self.read_transactions
    }

    /// Make the nth write transaction (1-based) fail with a NACK
    ///
    /// Nothing commits on the failing transaction; later transactions
    /// succeed again. Used to exercise abort-on-first-failure paths.
    pub fn fail_write_transaction(&mut self, n: usize) {
        self.fail_write_at = Some(n);
    }

    /// Make the nth read transaction (1-based) come up one byte short
    pub fn fail_read_transaction(&mut self, n: usize) {
        self.fail_read_at = Some(n);
    }

    /// Number of consecutive select addresses the chip occupies
    fn select_span(&self) -> u8 {
        match self.addressing {
            // One select address per 256-byte block
            Addressing::SingleByte => ((self.profile.capacity + 255) / 256).max(1) as u8,
            Addressing::DoubleByte => 1,
        }
    }

    /// Advance the pointer the way the chip does after a data write:
    /// wrapping within the current page
    fn advance_within_page(&mut self) {
        let page = self.profile.page_size;
        let page_base = self.pointer & !(page - 1);
        self.pointer = page_base + ((self.pointer - page_base + 1) % page);
    }
}

impl I2cBus for DummyEeprom {
    fn set_device(&mut self, device_select: u8) -> Result<()> {
        let span = self.select_span();
        if device_select >= self.base_addr && device_select < self.base_addr + span {
            self.selected_block = Some(u32::from(device_select - self.base_addr));
            Ok(())
        } else {
            self.selected_block = None;
            Err(Error::Bus(format!(
                "no device at 0x{:02X}",
                device_select
            )))
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let block = self
            .selected_block
            .ok_or_else(|| Error::Bus("write with no device selected".into()))?;

        self.write_transactions += 1;
        if self.fail_write_at == Some(self.write_transactions) {
            return Err(Error::Bus("device NACKed mid-transfer".into()));
        }

        let payload = match self.addressing {
            Addressing::SingleByte => {
                let Some((&addr_low, rest)) = data.split_first() else {
                    return Err(Error::Bus("empty write frame".into()));
                };
                self.pointer = ((block << 8) | u32::from(addr_low)) % self.profile.capacity;
                rest
            }
            Addressing::DoubleByte => {
                if data.len() < 2 {
                    return Err(Error::Bus("write frame shorter than address".into()));
                }
                self.pointer = ((u32::from(data[0]) << 8) | u32::from(data[1]))
                    % self.profile.capacity;
                &data[2..]
            }
        };

        // Data bytes commit at the pointer, which wraps within the page
        // like the real part does when a write overruns the page
        for &byte in payload {
            self.data[self.pointer as usize] = byte;
            self.advance_within_page();
        }

        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.selected_block.is_none() {
            return Err(Error::Bus("read with no device selected".into()));
        }

        self.read_transactions += 1;
        let len = match self.fail_read_at {
            Some(n) if n == self.read_transactions => buf.len().saturating_sub(1),
            _ => buf.len(),
        };

        // Sequential reads run the pointer across the whole array,
        // wrapping at the end
        for byte in buf[..len].iter_mut() {
            *byte = self.data[self.pointer as usize];
            self.pointer = (self.pointer + 1) % self.profile.capacity;
        }

        Ok(len)
    }

    fn delay_ms(&mut self, _ms: u32) {
        // Nothing to wait for in memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reeprom_core::{chip, ops, scan, Eeprom};

    const BASE: u8 = 0x50;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + 13) as u8).collect()
    }

    fn roundtrip(name: &str) {
        let profile = chip::find_profile(name).unwrap();
        let bus = DummyEeprom::new(profile, BASE);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let image = pattern(profile.capacity as usize);
        ops::write_image(&mut ee, &image, |_| {}).unwrap();
        let readback = ops::read_image(&mut ee, |_| {}).unwrap();
        assert_eq!(readback, image);
    }

    #[test]
    fn roundtrip_single_byte_addressing() {
        roundtrip("24C16");
    }

    #[test]
    fn roundtrip_double_byte_addressing() {
        roundtrip("24C256");
    }

    #[test]
    fn blank_is_idempotent() {
        let profile = chip::find_profile("24C04").unwrap();
        let bus = DummyEeprom::with_data(profile, BASE, &pattern(512));
        let mut ee = Eeprom::new(bus, BASE, profile);

        ops::blank(&mut ee, |_| {}).unwrap();
        let first = ops::read_image(&mut ee, |_| {}).unwrap();
        ops::blank(&mut ee, |_| {}).unwrap();
        let second = ops::read_image(&mut ee, |_| {}).unwrap();

        assert!(first.iter().all(|&b| b == ops::ERASED_VALUE));
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_image_rejected_before_any_bus_write() {
        let profile = chip::find_profile("24C02").unwrap();
        let bus = DummyEeprom::new(profile, BASE);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let image = vec![0u8; profile.capacity as usize + 1];
        let err = ops::write_image(&mut ee, &image, |_| {}).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { .. }));
        assert_eq!(ee.into_bus().write_transactions(), 0);
    }

    #[test]
    fn short_image_leaves_tail_untouched() {
        let profile = chip::find_profile("24C32").unwrap();
        let bus = DummyEeprom::new(profile, BASE);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let image = pattern(100);
        ops::write_image(&mut ee, &image, |_| {}).unwrap();

        let bus = ee.into_bus();
        assert_eq!(&bus.data()[..100], image.as_slice());
        assert!(bus.data()[100..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn misaligned_write_lands_at_the_right_addresses() {
        // 0x1F8 is 8 bytes before a 16-byte page boundary on a 24C16
        let profile = chip::find_profile("24C16").unwrap();
        let bus = DummyEeprom::new(profile, BASE);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let data = pattern(20);
        ee.write_range(0x1F8, &data, |_| {}).unwrap();

        let bus = ee.into_bus();
        assert_eq!(&bus.data()[0x1F8..0x1F8 + 20], data.as_slice());
        assert!(bus.data()[..0x1F8].iter().all(|&b| b == 0xFF));
        assert!(bus.data()[0x1F8 + 20..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn read_range_reports_out_of_bounds() {
        let profile = chip::find_profile("24C02").unwrap();
        let bus = DummyEeprom::new(profile, BASE);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let mut buf = vec![0u8; 32];
        let err = ee.read_range(0x1F0, &mut buf, |_| {}).unwrap_err();
        assert!(matches!(err, Error::AddressOutOfBounds { .. }));
    }

    #[test]
    fn read_page_positions_the_internal_pointer() {
        let profile = chip::find_profile("24C256").unwrap();
        let image = pattern(profile.capacity as usize);
        let bus = DummyEeprom::with_data(profile, BASE, &image);
        let mut ee = Eeprom::new(bus, BASE, profile);

        // Reads at arbitrary addresses must not depend on pointer state
        // left behind by earlier transactions
        let mut buf = [0u8; 16];
        ee.read_page(0x4000, &mut buf).unwrap();
        assert_eq!(&buf[..], &image[0x4000..0x4010]);
        ee.read_page(0x0008, &mut buf).unwrap();
        assert_eq!(&buf[..], &image[0x0008..0x0018]);
    }

    #[test]
    fn write_range_aborts_at_first_failing_chunk() {
        let profile = chip::find_profile("24C04").unwrap();
        let mut bus = DummyEeprom::new(profile, BASE);
        // 64 bytes over 16-byte pages is four chunks; NACK the third
        bus.fail_write_transaction(3);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let data = pattern(64);
        let err = ee.write_range(0, &data, |_| {}).unwrap_err();
        assert!(matches!(err, Error::Transfer { addr: 0x20, .. }));

        let bus = ee.into_bus();
        // The first two chunks committed, nothing after the failure
        assert_eq!(&bus.data()[..0x20], &data[..0x20]);
        assert!(bus.data()[0x20..].iter().all(|&b| b == 0xFF));
        assert_eq!(bus.write_transactions(), 3);
    }

    #[test]
    fn read_range_aborts_on_short_read() {
        let profile = chip::find_profile("24C04").unwrap();
        let image = pattern(512);
        let mut bus = DummyEeprom::with_data(profile, BASE, &image);
        bus.fail_read_transaction(3);
        let mut ee = Eeprom::new(bus, BASE, profile);

        let mut buf = vec![0u8; 64];
        let err = ee.read_range(0, &mut buf, |_| {}).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortRead { addr: 0x20, expected: 16, actual: 15 }
        ));
        // No further bus transactions past the failing chunk
        assert_eq!(ee.into_bus().read_transactions(), 3);
    }

    #[test]
    fn scan_sees_every_block_select_address() {
        // A 24C16 occupies eight consecutive select addresses
        let profile = chip::find_profile("24C16").unwrap();
        let mut bus = DummyEeprom::new(profile, BASE);
        let found = scan::scan_devices(&mut bus);
        assert_eq!(found, (0x50..0x58).collect::<Vec<u8>>());

        // A double-byte part answers only at its base address
        let profile = chip::find_profile("24C256").unwrap();
        let mut bus = DummyEeprom::new(profile, BASE);
        assert_eq!(scan::scan_devices(&mut bus), vec![0x50]);
    }
}
