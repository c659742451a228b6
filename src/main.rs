//! astro-craft - Scaffolding for Astro projects

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = astro_craft::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
