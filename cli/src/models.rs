//! Output models for the Enigma CLI.
//!
//! Only used for the JSON report; text output prints the ciphertext alone.

use enigma_core::MachineState;
use serde::Serialize;

/// Rotor positions as numbers plus the letters shown in the windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateView {
    pub left: u8,
    pub middle: u8,
    pub right: u8,
    /// Window letters, e.g. `"ADU"`
    pub window: String,
}

impl From<MachineState> for StateView {
    fn from(state: MachineState) -> Self {
        Self {
            left: state.left,
            middle: state.middle,
            right: state.right,
            window: state.window(),
        }
    }
}

/// Result of running one message through the machine
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: String,
    pub output: String,
    /// Rotor names after catalog resolution (unknown names show as "Identity")
    pub rotors: Vec<&'static str>,
    pub reflector: &'static str,
    /// Plugboard pairs actually applied
    pub plugboard: Vec<String>,
    pub initial_state: StateView,
    pub final_state: StateView,
    /// Number of letters that stepped the rotors
    pub letters: usize,
}
