//! reeprom-core - Core transfer engine for I2C serial EEPROMs
//!
//! This crate implements the page-aware transfer engine for the 24Cxx
//! family of serial EEPROMs: chip profiles, address encoding, the page
//! read/write primitives and the range engine built on top of them.
//! Hardware access goes through the [`I2cBus`] trait, so the engine works
//! the same against a Linux i2c-dev node or an in-memory emulator.
//!
//! # Example
//!
//! ```ignore
//! use reeprom_core::{chip, Eeprom};
//!
//! fn dump_chip<B: reeprom_core::I2cBus>(bus: B) -> reeprom_core::Result<Vec<u8>> {
//!     let profile = chip::find_profile("24C256")?;
//!     let mut ee = Eeprom::new(bus, 0x50, profile);
//!     reeprom_core::ops::read_image(&mut ee, |_| {})
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod addressing;
pub mod bus;
pub mod chip;
pub mod eeprom;
pub mod error;
pub mod ops;
pub mod scan;

pub use addressing::Addressing;
pub use bus::I2cBus;
pub use chip::ChipProfile;
pub use eeprom::{page_chunks, Eeprom, PageChunk};
pub use error::{Error, Result};
