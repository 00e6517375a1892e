//! Command implementations

pub mod detect;
pub mod dump;
pub mod fill;
pub mod firmware;

use indicatif::{ProgressBar, ProgressStyle};
use reeprom_core::{chip, Addressing};

/// Create a transfer progress bar with a phase message
pub fn transfer_bar(total: u64, phase: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{bytes}}/{{total_bytes}} ({{bytes_per_sec}}, {{eta}}) {}",
            phase
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// List all available bus backends
pub fn list_buses() {
    println!("Available buses:");
    for bus in reeprom_bus::available_buses() {
        if bus.aliases.is_empty() {
            println!("  {:<10} {}", bus.name, bus.description);
        } else {
            println!(
                "  {:<10} {} (aliases: {})",
                bus.name,
                bus.description,
                bus.aliases.join(", ")
            );
        }
    }
}

/// List all supported chip profiles
pub fn list_chips() {
    println!("Supported chips:");
    for p in chip::PROFILES {
        let addressing = match Addressing::for_capacity(p.capacity) {
            Addressing::SingleByte => "single-byte",
            Addressing::DoubleByte => "double-byte",
        };
        println!(
            "  {:<8} {:>7} bytes  {:>3}-byte pages  {} addressing",
            p.name, p.capacity, p.page_size, addressing
        );
    }
}
