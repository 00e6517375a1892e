//! reeprom - An I2C serial EEPROM programmer
//!
//! Reads, writes, blanks and dumps 24Cxx-family EEPROMs over a Linux I2C
//! bus. All transfer logic lives in `reeprom-core`, behind an `I2cBus`
//! trait, so the same commands run against real hardware or the
//! in-memory emulator.

mod cli;
mod commands;

use clap::Parser;
use cli::{ChipArgs, Cli, Commands};
use reeprom_core::{chip, Eeprom, I2cBus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    match cli.command {
        Commands::Detect { bus } => {
            let mut bus = reeprom_bus::open_bus(&bus)?;
            commands::detect::run(&mut bus);
            Ok(())
        }
        Commands::Read { bus, chip } => {
            let mut ee = open_eeprom(&bus, &chip)?;
            commands::dump::run(&mut ee)
        }
        Commands::Random { bus, chip } => {
            let mut ee = open_eeprom(&bus, &chip)?;
            commands::fill::run_random(&mut ee)
        }
        Commands::Blank { bus, chip } => {
            let mut ee = open_eeprom(&bus, &chip)?;
            commands::fill::run_blank(&mut ee)
        }
        Commands::WriteFirmware { bus, chip, input } => {
            let mut ee = open_eeprom(&bus, &chip)?;
            commands::firmware::run_write(&mut ee, &input)
        }
        Commands::SaveFirmware { bus, chip, output } => {
            let mut ee = open_eeprom(&bus, &chip)?;
            commands::firmware::run_save(&mut ee, &output)
        }
        Commands::ListChips => {
            commands::list_chips();
            Ok(())
        }
        Commands::ListBuses => {
            commands::list_buses();
            Ok(())
        }
    }
}

/// Resolve the chip profile and open the bus
///
/// The chip name is validated first so a bad `--chip` fails before the
/// bus device is touched.
fn open_eeprom(
    bus_spec: &str,
    args: &ChipArgs,
) -> Result<Eeprom<Box<dyn I2cBus>>, Box<dyn std::error::Error>> {
    let profile = chip::find_profile(&args.chip)?;
    let bus = reeprom_bus::open_bus(bus_spec)?;
    Ok(Eeprom::new(bus, args.address, profile))
}
