//! Hex-and-ASCII dump command

use reeprom_core::{ops, Eeprom, I2cBus};

/// Bytes per display row; independent of the chip's write-page size
const ROW_LEN: usize = 16;

/// Read the full chip and render it as hex and ASCII rows
pub fn run<B: I2cBus>(ee: &mut Eeprom<B>) -> Result<(), Box<dyn std::error::Error>> {
    let capacity = ee.capacity();

    let pb = super::transfer_bar(u64::from(capacity), "Reading");
    let image = ops::read_image(ee, |done| pb.set_position(done as u64))?;
    pb.finish_and_clear();

    println!("EEPROM DUMP 0x0 0x{:x}", capacity);
    println!("         00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F      ASCII DATA");

    for (row_index, row) in image.chunks(ROW_LEN).enumerate() {
        println!("{}", render_row((row_index * ROW_LEN) as u32, row));
    }

    Ok(())
}

/// Render one dump row: address, hex bytes, ASCII ('.' for non-printable)
fn render_row(addr: u32, row: &[u8]) -> String {
    let mut line = format!("0x{:04x} | ", addr);

    for byte in row {
        line.push_str(&format!("{:02x} ", byte));
    }

    line.push_str("| ");
    for &byte in row {
        if (0x20..0x7F).contains(&byte) {
            line.push(byte as char);
        } else {
            line.push('.');
        }
    }
    line.push_str(" |");

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_format() {
        let row: Vec<u8> = (0..16).map(|i| if i < 8 { i } else { b'A' + i - 8 }).collect();
        assert_eq!(
            render_row(0x1F0, &row),
            "0x01f0 | 00 01 02 03 04 05 06 07 41 42 43 44 45 46 47 48 | ........ABCDEFGH |"
        );
    }
}
