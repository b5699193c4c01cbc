//! Configuration for the Enigma command-line tool.
//!
//! All configuration is loaded from environment variables (a `.env` file is
//! read first by `main`). Unset variables fall back to the default machine:
//! rotors I-II-III, reflector B, everything at A, no plugs.

use std::str::FromStr;

use enigma_core::MachineConfig;
use serde::Serialize;

use crate::error::{CliError, Result};

/// Rotor type names, left to right (whitespace or comma separated).
pub const ENV_ROTORS: &str = "ENIGMA_ROTORS";
/// Reflector name.
pub const ENV_REFLECTOR: &str = "ENIGMA_REFLECTOR";
/// Starting positions, numbers (0 = A) or letters.
pub const ENV_POSITIONS: &str = "ENIGMA_POSITIONS";
/// Ring settings, numbers (0 = A) or letters.
pub const ENV_RINGS: &str = "ENIGMA_RINGS";
/// Plugboard pairs, e.g. `AB CD EF`.
pub const ENV_PLUGBOARD: &str = "ENIGMA_PLUGBOARD";
/// Output format: `text` or `json`.
pub const ENV_OUTPUT: &str = "ENIGMA_OUTPUT";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Ciphertext only.
    #[default]
    Text,
    /// A JSON report including machine state.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig {
                key: ENV_OUTPUT,
                value: other.to_string(),
            }),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Machine settings handed to the core.
    pub machine: MachineConfig,

    /// Output format
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MachineConfig::default();

        let rotors = lookup(ENV_ROTORS)
            .map(|v| split_list(&v).map(str::to_string).collect())
            .unwrap_or(defaults.rotors);

        let reflector = lookup(ENV_REFLECTOR)
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.reflector);

        let positions = match lookup(ENV_POSITIONS) {
            Some(v) => parse_settings(ENV_POSITIONS, &v)?,
            None => defaults.positions,
        };

        let ring_settings = match lookup(ENV_RINGS) {
            Some(v) => parse_settings(ENV_RINGS, &v)?,
            None => defaults.ring_settings,
        };

        let plugboard = lookup(ENV_PLUGBOARD).unwrap_or(defaults.plugboard);

        let output = match lookup(ENV_OUTPUT) {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            machine: MachineConfig {
                rotors,
                reflector,
                positions,
                ring_settings,
                plugboard,
            },
            output,
        })
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty())
}

/// Parse positions or ring settings: `"0 4 21"`, `"A,E,V"` or a mix.
///
/// The number of entries is not checked here; the core rejects anything
/// other than three.
fn parse_settings(key: &'static str, value: &str) -> Result<Vec<i32>> {
    split_list(value)
        .map(|item| {
            parse_setting(item).ok_or_else(|| CliError::InvalidConfig {
                key,
                value: item.to_string(),
            })
        })
        .collect()
}

fn parse_setting(item: &str) -> Option<i32> {
    if let Ok(n) = item.parse::<i32>() {
        return Some(n);
    }
    let mut chars = item.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => enigma_core::alphabet::index_of(c).map(i32::from),
        _ => None,
    }
}
