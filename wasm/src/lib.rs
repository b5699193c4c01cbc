//! WebAssembly bindings for the Enigma cipher engine.
//!
//! This crate exposes the machine to JavaScript for the browser simulator:
//! the virtual keyboard calls [`Enigma::encrypt_char`] per key press and
//! reads the rotor windows back through the position getters.
//!
//! Note: the simulated cipher offers no real security. It is exposed for
//! the educational demo only.

use wasm_bindgen::prelude::*;

use enigma_core::{plugboard, wiring, EnigmaMachine, MachineConfig, MachineState};

/// Convert a core error into a JavaScript exception.
fn js_error(e: enigma_core::Error) -> JsError {
    JsError::new(&e.to_string())
}

/// A machine instance owned by JavaScript.
#[wasm_bindgen]
pub struct Enigma {
    machine: EnigmaMachine,
}

#[wasm_bindgen]
impl Enigma {
    /// Create a machine.
    ///
    /// # Arguments
    /// * `rotors` - Three rotor names, left to right (e.g. `["I", "II", "III"]`)
    /// * `reflector` - Reflector name (`"B"` or `"C"`)
    /// * `positions` - Three starting positions, 0 = A
    /// * `ring_settings` - Three ring settings, 0 = A
    /// * `plugboard` - Letter pairs, e.g. `"AB CD"`
    ///
    /// # Returns
    /// The machine, or throws if any list does not have three entries.
    #[wasm_bindgen(constructor)]
    pub fn new(
        rotors: Vec<String>,
        reflector: String,
        positions: Vec<i32>,
        ring_settings: Vec<i32>,
        plugboard: String,
    ) -> Result<Enigma, JsError> {
        let config = MachineConfig {
            rotors,
            reflector,
            positions,
            ring_settings,
            plugboard,
        };
        let machine = EnigmaMachine::new(&config).map_err(js_error)?;
        Ok(Enigma { machine })
    }

    /// Encrypt a single key press. Throws unless `key` is exactly one character.
    #[wasm_bindgen(js_name = encryptChar)]
    pub fn encrypt_char(&mut self, key: &str) -> Result<String, JsError> {
        self.machine
            .encrypt_str_char(key)
            .map(String::from)
            .map_err(js_error)
    }

    /// Encrypt a whole message.
    #[wasm_bindgen(js_name = encryptMessage)]
    pub fn encrypt_message(&mut self, input: &str) -> String {
        self.machine.encrypt_message(input)
    }

    /// Left rotor position (0-25).
    #[wasm_bindgen(getter, js_name = leftPosition)]
    pub fn left_position(&self) -> u8 {
        self.machine.left_position()
    }

    /// Middle rotor position (0-25).
    #[wasm_bindgen(getter, js_name = middlePosition)]
    pub fn middle_position(&self) -> u8 {
        self.machine.middle_position()
    }

    /// Right rotor position (0-25).
    #[wasm_bindgen(getter, js_name = rightPosition)]
    pub fn right_position(&self) -> u8 {
        self.machine.right_position()
    }

    /// Rotor windows as letters, e.g. `"ADU"`.
    #[wasm_bindgen(getter)]
    pub fn window(&self) -> String {
        self.machine.state().window()
    }

    /// Move the rotors to recorded positions (used when replaying a history).
    #[wasm_bindgen(js_name = setPositions)]
    pub fn set_positions(&mut self, left: i32, middle: i32, right: i32) {
        self.machine.set_positions(left, middle, right);
    }

    /// Positions as `[left, middle, right]`.
    pub fn positions(&self) -> Vec<u8> {
        let MachineState {
            left,
            middle,
            right,
        } = self.machine.state();
        vec![left, middle, right]
    }
}

// === Catalog ===

/// Names of the rotors available in the catalog.
#[wasm_bindgen(js_name = rotorNames)]
pub fn rotor_names() -> Vec<String> {
    wiring::ROTOR_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Names of the reflectors available in the catalog.
#[wasm_bindgen(js_name = reflectorNames)]
pub fn reflector_names() -> Vec<String> {
    wiring::REFLECTOR_NAMES.iter().map(|s| s.to_string()).collect()
}

// === Plugboard helpers ===

/// Letters not yet used by a plugboard specification, as one string.
#[wasm_bindgen(js_name = unpluggedLetters)]
pub fn unplugged_letters(connections: &str) -> String {
    plugboard::unplugged(connections).into_iter().collect()
}

/// Whether a plugboard specification will be applied (rather than discarded).
#[wasm_bindgen(js_name = isValidPlugboard)]
pub fn is_valid_plugboard(connections: &str) -> bool {
    enigma_core::Plugboard::is_valid_spec(connections)
}

/// Get the library version.
#[wasm_bindgen(js_name = version)]
pub fn version() -> String {
    enigma_core::VERSION.to_string()
}
