//! # Enigma CLI
//!
//! Command-line frontend for the rotor cipher simulator.
//!
//! ## Usage
//!
//! ```text
//! ENIGMA_ROTORS="I II III" ENIGMA_POSITIONS="A A A" enigma AAAAA
//! echo "HELLO WORLD" | ENIGMA_OUTPUT=json enigma
//! ```
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ENIGMA_ROTORS` | `I II III` | Rotor names, left to right |
//! | `ENIGMA_REFLECTOR` | `B` | Reflector name |
//! | `ENIGMA_POSITIONS` | `0 0 0` | Starting positions (numbers or letters) |
//! | `ENIGMA_RINGS` | `0 0 0` | Ring settings (numbers or letters) |
//! | `ENIGMA_PLUGBOARD` | empty | Plugboard pairs, e.g. `AB CD` |
//! | `ENIGMA_OUTPUT` | `text` | `text` or `json` |
//! | `RUST_LOG` | `enigma_cli=info` | Log filter (logs go to stderr) |

pub mod config;
pub mod error;
pub mod models;

pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use models::{Report, StateView};

use std::io::Read;

use enigma_core::{
    alphabet, is_known_reflector, is_known_rotor, EnigmaMachine, MachineConfig, Plugboard,
};
use tracing::{debug, trace, warn};

/// Build a machine, warning about settings the core silently replaces.
pub fn build_machine(config: &MachineConfig) -> Result<EnigmaMachine> {
    for name in &config.rotors {
        if !is_known_rotor(name) {
            warn!(rotor = %name, "Unknown rotor name, substituting identity rotor");
        }
    }
    if !config.reflector.is_empty() && !is_known_reflector(&config.reflector) {
        warn!(
            reflector = %config.reflector,
            "Unknown reflector name, substituting reversed-alphabet reflector"
        );
    }
    if !Plugboard::is_valid_spec(&config.plugboard) {
        warn!(
            plugboard = %config.plugboard,
            "Malformed plugboard specification discarded, running unplugged"
        );
    }

    let machine = EnigmaMachine::new(config)?;
    debug!(
        rotors = ?machine.rotor_names(),
        reflector = machine.reflector_name(),
        window = %machine.state().window(),
        "Machine ready"
    );
    Ok(machine)
}

/// Run `input` through a freshly configured machine.
pub fn encrypt(config: &Config, input: &str) -> Result<Report> {
    let mut machine = build_machine(&config.machine)?;
    let initial_state = machine.state();

    let mut letters = 0;
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        let encrypted = machine.encrypt_char(c);
        if alphabet::index_of(c).is_some() {
            letters += 1;
            trace!(
                input = %c,
                output = %encrypted,
                window = %machine.state().window(),
                "Key pressed"
            );
        }
        output.push(encrypted);
    }

    debug!(letters, window = %machine.state().window(), "Message processed");

    Ok(Report {
        input: input.to_string(),
        output,
        rotors: machine.rotor_names().to_vec(),
        reflector: machine.reflector_name(),
        plugboard: machine
            .plugboard()
            .pairs()
            .into_iter()
            .map(|(a, b)| format!("{}{}", a, b))
            .collect(),
        initial_state: initial_state.into(),
        final_state: machine.state().into(),
        letters,
    })
}

/// Render a report in the configured format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.output.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Message text: the arguments joined by spaces, or all of `stdin` if there
/// are none (a single trailing newline is dropped).
pub fn read_input<I, R>(args: I, mut stdin: R) -> Result<String>
where
    I: IntoIterator<Item = String>,
    R: Read,
{
    let args: Vec<String> = args.into_iter().collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
