//! Memory address encoding
//!
//! Small 24Cxx parts (up to 2 KiB, i.e. up to the 24C16) take a single
//! address byte on the wire and fold the upper address bits into the
//! low-order bits of the 7-bit device-select field. Larger parts keep the
//! device-select address untouched and send two address bytes, high byte
//! first. The variant is a pure function of the chip capacity and never
//! changes during a run.

/// How a memory address travels on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// One address byte; bits 8..=10 of the address go into the
    /// device-select byte (24C01 through 24C16)
    SingleByte,
    /// Two address bytes in the data stream, high byte first
    /// (24C32 and up)
    DoubleByte,
}

/// Capacity above which chips switch to two address bytes
const SINGLE_BYTE_MAX_CAPACITY: u32 = 2048;

impl Addressing {
    /// Resolve the addressing scheme for a chip of the given capacity
    pub const fn for_capacity(capacity: u32) -> Self {
        if capacity <= SINGLE_BYTE_MAX_CAPACITY {
            Self::SingleByte
        } else {
            Self::DoubleByte
        }
    }

    /// Compute the device-select address for a transaction at `addr`
    ///
    /// Single-byte parts steal up to 3 low bits of the select field for
    /// address bits 8..=10 (the documented 24C04/08/16 behavior).
    pub const fn device_select(self, base: u8, addr: u32) -> u8 {
        match self {
            Self::SingleByte => base | ((addr >> 8) & 0x07) as u8,
            Self::DoubleByte => base,
        }
    }

    /// Encode the in-stream address bytes into `buf`, returning the count
    pub fn encode(self, addr: u32, buf: &mut [u8; 2]) -> usize {
        match self {
            Self::SingleByte => {
                buf[0] = (addr & 0xFF) as u8;
                1
            }
            Self::DoubleByte => {
                buf[0] = (addr >> 8) as u8;
                buf[1] = (addr & 0xFF) as u8;
                2
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_threshold() {
        assert_eq!(Addressing::for_capacity(128), Addressing::SingleByte);
        assert_eq!(Addressing::for_capacity(2048), Addressing::SingleByte);
        assert_eq!(Addressing::for_capacity(4096), Addressing::DoubleByte);
        assert_eq!(Addressing::for_capacity(131072), Addressing::DoubleByte);
    }

    #[test]
    fn single_byte_folds_high_bits_into_select() {
        let a = Addressing::SingleByte;
        // 24C16 at 0x1F3: block 1, in-block offset 0xF3
        assert_eq!(a.device_select(0x50, 0x1F3), 0x51);
        let mut buf = [0u8; 2];
        assert_eq!(a.encode(0x1F3, &mut buf), 1);
        assert_eq!(buf[0], 0xF3);
        // Top block of a 24C16
        assert_eq!(a.device_select(0x50, 0x7FF), 0x57);
    }

    #[test]
    fn double_byte_leaves_select_untouched() {
        let a = Addressing::DoubleByte;
        assert_eq!(a.device_select(0x50, 0x1F3), 0x50);
        let mut buf = [0u8; 2];
        assert_eq!(a.encode(0x1234, &mut buf), 2);
        assert_eq!(buf, [0x12, 0x34]);
    }
}
