//! Page transfer primitives and the range operation engine
//!
//! [`Eeprom`] binds a bus handle to a chip profile and its resolved
//! addressing scheme. `write_page`/`read_page` issue exactly one bus
//! transaction pair for a run of bytes that never crosses a page
//! boundary; the range methods walk an arbitrary span in page-sized
//! chunks and delegate each chunk to the primitives, strictly in address
//! order, aborting on the first failure.

use crate::addressing::Addressing;
use crate::bus::I2cBus;
use crate::chip::ChipProfile;
use crate::error::{Error, Result};

/// Largest page size across all known profiles, used to size the
/// stack-local chunk buffer
pub const MAX_PAGE_SIZE: usize = 128;

/// Minimum EEPROM write-cycle time in milliseconds
///
/// The chip will not acknowledge a new transaction until its internal
/// write cycle completes; issuing back-to-back writes without this delay
/// corrupts the write or returns stale data on the next read.
pub const WRITE_CYCLE_MS: u32 = 5;

/// One page-bounded unit of work produced by the range engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChunk {
    /// First memory address of the chunk
    pub addr: u32,
    /// Chunk length in bytes; never crosses a page boundary
    pub len: usize,
}

/// Iterator over the page-bounded chunks covering `[start, start + len)`
///
/// Chunks are contiguous, non-overlapping and strictly increasing. The
/// first chunk is short when `start` is not page-aligned; the last is
/// short when the range does not fill its final page.
pub fn page_chunks(start: u32, len: u32, page_size: u32) -> impl Iterator<Item = PageChunk> {
    debug_assert!(page_size.is_power_of_two());

    let end = start + len;
    let mut addr = start;
    core::iter::from_fn(move || {
        if addr >= end {
            return None;
        }
        let until_boundary = page_size - (addr % page_size);
        let chunk_len = until_boundary.min(end - addr);
        let chunk = PageChunk {
            addr,
            len: chunk_len as usize,
        };
        addr += chunk_len;
        Some(chunk)
    })
}

/// An EEPROM behind an exclusively-owned bus handle
pub struct Eeprom<B> {
    bus: B,
    base_addr: u8,
    profile: ChipProfile,
    addressing: Addressing,
}

impl<B: I2cBus> Eeprom<B> {
    /// Bind a bus to a chip at the given base device-select address
    pub fn new(bus: B, base_addr: u8, profile: ChipProfile) -> Self {
        let addressing = Addressing::for_capacity(profile.capacity);
        log::debug!(
            "{}: {} bytes, {}-byte pages, {:?} addressing at 0x{:02X}",
            profile.name,
            profile.capacity,
            profile.page_size,
            addressing,
            base_addr
        );
        Self {
            bus,
            base_addr,
            profile,
            addressing,
        }
    }

    /// The chip profile this handle was created with
    pub fn profile(&self) -> &ChipProfile {
        &self.profile
    }

    /// Chip capacity in bytes
    pub fn capacity(&self) -> u32 {
        self.profile.capacity
    }

    /// The resolved addressing scheme
    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// Release the bus handle
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Write one page-bounded run of bytes
    ///
    /// The caller guarantees `payload` fits the remainder of the page
    /// containing `addr` (the range engine clips before calling). The
    /// mandatory write-cycle delay is observed before returning, also on
    /// a short write, since the chip may have started committing.
    pub fn write_page(&mut self, addr: u32, payload: &[u8]) -> Result<()> {
        debug_assert!(payload.len() <= MAX_PAGE_SIZE);
        debug_assert!(
            addr % self.profile.page_size + payload.len() as u32 <= self.profile.page_size,
            "payload crosses a page boundary"
        );

        let select = self.addressing.device_select(self.base_addr, addr);
        let mut addr_buf = [0u8; 2];
        let addr_len = self.addressing.encode(addr, &mut addr_buf);

        let mut frame = [0u8; 2 + MAX_PAGE_SIZE];
        frame[..addr_len].copy_from_slice(&addr_buf[..addr_len]);
        frame[addr_len..addr_len + payload.len()].copy_from_slice(payload);
        let frame = &frame[..addr_len + payload.len()];

        self.bus
            .set_device(select)
            .map_err(|_| Error::DeviceSelect { device: select })?;

        let written = self.bus.write(frame).map_err(|e| Error::Transfer {
            addr,
            len: frame.len(),
            msg: e.to_string(),
        })?;

        if written != frame.len() {
            self.bus.delay_ms(WRITE_CYCLE_MS);
            return Err(Error::ShortWrite {
                addr,
                expected: frame.len(),
                actual: written,
            });
        }

        self.bus.delay_ms(WRITE_CYCLE_MS);
        Ok(())
    }

    /// Read one page-bounded run of bytes into `buf`
    ///
    /// Issues the mandatory two-phase sequence: an address-set write that
    /// positions the chip's internal read pointer, then a sequential read.
    /// A bare read would continue from wherever the pointer last was.
    pub fn read_page(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        let select = self.addressing.device_select(self.base_addr, addr);
        let mut addr_buf = [0u8; 2];
        let addr_len = self.addressing.encode(addr, &mut addr_buf);

        self.bus
            .set_device(select)
            .map_err(|_| Error::DeviceSelect { device: select })?;

        let written = self
            .bus
            .write(&addr_buf[..addr_len])
            .map_err(|e| Error::Transfer {
                addr,
                len: addr_len,
                msg: e.to_string(),
            })?;
        if written != addr_len {
            return Err(Error::ShortWrite {
                addr,
                expected: addr_len,
                actual: written,
            });
        }

        let read = self.bus.read(buf).map_err(|e| Error::Transfer {
            addr,
            len: buf.len(),
            msg: e.to_string(),
        })?;
        if read != buf.len() {
            return Err(Error::ShortRead {
                addr,
                expected: buf.len(),
                actual: read,
            });
        }

        Ok(())
    }

    fn check_bounds(&self, start: u32, len: u32) -> Result<()> {
        if u64::from(start) + u64::from(len) > u64::from(self.profile.capacity) {
            return Err(Error::AddressOutOfBounds {
                start,
                len,
                capacity: self.profile.capacity,
            });
        }
        Ok(())
    }

    /// Read `buf.len()` bytes starting at `start`
    ///
    /// `progress` is invoked after each chunk with the cumulative byte
    /// count transferred so far.
    pub fn read_range(
        &mut self,
        start: u32,
        buf: &mut [u8],
        mut progress: impl FnMut(usize),
    ) -> Result<()> {
        self.check_bounds(start, buf.len() as u32)?;

        let mut done = 0usize;
        for chunk in page_chunks(start, buf.len() as u32, self.profile.page_size) {
            self.read_page(chunk.addr, &mut buf[done..done + chunk.len])?;
            done += chunk.len;
            progress(done);
        }
        Ok(())
    }

    /// Write `data` starting at `start`
    ///
    /// On failure the already-written chunks are not rolled back; EEPROM
    /// writes are not transactional and a partial image is surfaced to
    /// the caller as the error.
    pub fn write_range(
        &mut self,
        start: u32,
        data: &[u8],
        mut progress: impl FnMut(usize),
    ) -> Result<()> {
        self.check_bounds(start, data.len() as u32)?;

        let mut done = 0usize;
        for chunk in page_chunks(start, data.len() as u32, self.profile.page_size) {
            self.write_page(chunk.addr, &data[done..done + chunk.len])?;
            done += chunk.len;
            progress(done);
        }
        Ok(())
    }

    /// Write `len` bytes starting at `start`, generating each chunk's
    /// payload with `fill`
    ///
    /// The chunk buffer is stack-local and reused across iterations, so
    /// arbitrarily large ranges need no per-chunk allocation.
    pub fn fill_range(
        &mut self,
        start: u32,
        len: u32,
        mut fill: impl FnMut(&mut [u8]),
        mut progress: impl FnMut(usize),
    ) -> Result<()> {
        self.check_bounds(start, len)?;

        let mut page_buf = [0u8; MAX_PAGE_SIZE];
        let mut done = 0usize;
        for chunk in page_chunks(start, len, self.profile.page_size) {
            let payload = &mut page_buf[..chunk.len];
            fill(payload);
            self.write_page(chunk.addr, payload)?;
            done += chunk.len;
            progress(done);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(start: u32, len: u32, page: u32) -> Vec<PageChunk> {
        page_chunks(start, len, page).collect()
    }

    #[test]
    fn clips_both_ends() {
        // 24C16 geometry: misaligned start 8 bytes before a 16-byte
        // boundary, 20 bytes total
        let chunks = collect(0x1F8, 20, 16);
        assert_eq!(
            chunks,
            vec![
                PageChunk { addr: 0x1F8, len: 8 },
                PageChunk { addr: 0x200, len: 12 },
            ]
        );
    }

    #[test]
    fn aligned_range_yields_full_pages() {
        let chunks = collect(0, 64, 16);
        assert_eq!(chunks.len(), 4);
        for (i, c) in chunks.iter().enumerate() {
            assert_eq!(c.addr, i as u32 * 16);
            assert_eq!(c.len, 16);
        }
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert!(collect(0x100, 0, 16).is_empty());
    }

    #[test]
    fn range_within_one_page() {
        assert_eq!(collect(0x103, 5, 16), vec![PageChunk { addr: 0x103, len: 5 }]);
    }

    #[test]
    fn chunks_are_contiguous_and_page_bounded() {
        for &(start, len, page) in &[
            (0u32, 128u32, 8u32),
            (3, 1000, 16),
            (127, 129, 64),
            (1, 2, 128),
            (15, 17, 16),
        ] {
            let chunks = collect(start, len, page);
            let mut expected_addr = start;
            let mut total = 0u32;
            for c in &chunks {
                assert_eq!(c.addr, expected_addr, "gap or overlap");
                assert!(c.len > 0);
                let offset = c.addr % page;
                assert!(
                    offset + c.len as u32 <= page,
                    "chunk at 0x{:X} crosses a page boundary",
                    c.addr
                );
                expected_addr += c.len as u32;
                total += c.len as u32;
            }
            assert_eq!(total, len, "chunks do not cover the range");
        }
    }
}
