//! Enigma CLI - rotor cipher machine on the command line
//!
//! Reads the machine settings from the environment (and `.env`), encrypts
//! the message given as arguments or on stdin, and prints the result.
//! Running the output back through the same settings decrypts it.

use enigma_cli::{config::Config, encrypt, read_input, render};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize structured logging
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Encryption failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> enigma_cli::Result<()> {
    let config = Config::from_env()?;
    log_startup_info(&config);

    let input = read_input(std::env::args().skip(1), std::io::stdin().lock())?;
    let report = encrypt(&config, &input)?;
    println!("{}", render(&report, config.output)?);
    Ok(())
}

/// Initialize tracing with environment-based log levels.
///
/// Logs go to stderr so stdout carries only the ciphertext.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("enigma_cli=info,enigma=info")),
        )
        .init();
}

/// Log the machine settings. The plugboard is logged only as a pair count.
fn log_startup_info(config: &Config) {
    info!(
        rotors = ?config.machine.rotors,
        reflector = %config.machine.reflector,
        positions = ?config.machine.positions,
        ring_settings = ?config.machine.ring_settings,
        plugboard_pairs = enigma_core::Plugboard::new(&config.machine.plugboard).pairs().len(),
        output = ?config.output,
        "Starting Enigma"
    );
}
