//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u8
fn parse_hex_u8(s: &str) -> Result<u8, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u8>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Generate dynamic help text for the bus argument
fn bus_help() -> String {
    format!("Bus to use [available: {}]", reeprom_bus::bus_names_short())
}

#[derive(Parser)]
#[command(name = "reeprom")]
#[command(author, version, about = "I2C serial EEPROM programmer", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Chip selection shared across transfer commands
#[derive(clap::Args, Debug, Clone)]
pub struct ChipArgs {
    /// Base device-select address (hex, e.g. 0x50)
    #[arg(short, long, value_parser = parse_hex_u8)]
    pub address: u8,

    /// Chip name, e.g. 24C256 (case-sensitive, see list-chips)
    #[arg(short, long)]
    pub chip: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the bus for responsive devices
    Detect {
        /// Bus to use
        #[arg(short, long, help = bus_help())]
        bus: String,
    },

    /// Read the EEPROM and display it as hex and ASCII
    Read {
        /// Bus to use
        #[arg(short, long, help = bus_help())]
        bus: String,

        #[command(flatten)]
        chip: ChipArgs,
    },

    /// Fill the EEPROM with pseudorandom data
    Random {
        /// Bus to use
        #[arg(short, long, help = bus_help())]
        bus: String,

        #[command(flatten)]
        chip: ChipArgs,
    },

    /// Blank the EEPROM (write 0xFF to every byte)
    Blank {
        /// Bus to use
        #[arg(short, long, help = bus_help())]
        bus: String,

        #[command(flatten)]
        chip: ChipArgs,
    },

    /// Write a firmware image from a file to the EEPROM
    WriteFirmware {
        /// Bus to use
        #[arg(short, long, help = bus_help())]
        bus: String,

        #[command(flatten)]
        chip: ChipArgs,

        /// Input file path
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Save the EEPROM contents to a file
    SaveFirmware {
        /// Bus to use
        #[arg(short, long, help = bus_help())]
        bus: String,

        #[command(flatten)]
        chip: ChipArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List supported chips
    ListChips,

    /// List available bus backends
    ListBuses,
}
