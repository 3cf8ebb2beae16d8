//! generate-placeholder - writes the placeholder extension icons into the
//! current directory

use std::path::Path;

use anyhow::Context;
use placeholder_icons::preflight::{self, exit_codes};
use placeholder_icons::{generate_all, logging, GeneratorConfig};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    if let Err(e) = preflight::ensure_png_support() {
        for line in e.guidance() {
            println!("{}", line);
        }
        return exit_codes::MISSING_DEPENDENCY;
    }

    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match generate() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit_codes::GENERATION_FAILED
        }
    }
}

fn generate() -> anyhow::Result<()> {
    let config = GeneratorConfig::default();
    // Relative to the working directory, so confirmations show bare file names
    generate_all(&config, Path::new("")).context("Failed to generate icons")?;

    println!("\nAll icons generated.");
    Ok(())
}
