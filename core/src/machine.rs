//! The cipher engine: three rotors, a reflector and a plugboard.
//!
//! # Signal path
//!
//! ```text
//! key → plugboard → right → middle → left → reflector
//!                                              │
//! lamp ← plugboard ← right ← middle ← left ←───┘
//! ```
//!
//! # Stepping
//!
//! Rotors step *before* each letter is enciphered. The middle rotor
//! double-steps: when it sits on its own notch it advances together with
//! the left rotor, independently of the right rotor.
//!
//! ```text
//! if middle at notch:  middle += 1, left += 1
//! elif right at notch: middle += 1
//! right += 1
//! ```
//!
//! Characters outside A..Z pass through untouched and do not step the rotors.
//!
//! Because the reflector is an involution, the machine is reciprocal:
//! feeding the ciphertext into a machine in the same starting state
//! returns the plaintext.

use crate::alphabet::{index_of, letter};
use crate::error::{Error, Result};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{reduce, Rotor};

/// Number of rotors in the machine.
pub const ROTOR_COUNT: usize = 3;

/// Construction parameters for an [`EnigmaMachine`].
///
/// List order is left, middle, right (the right rotor is the fast one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor type names, e.g. `["I", "II", "III"]`.
    pub rotors: Vec<String>,
    /// Reflector name, e.g. `"B"`.
    pub reflector: String,
    /// Starting positions, 0 = A.
    pub positions: Vec<i32>,
    /// Ring settings, 0 = A.
    pub ring_settings: Vec<i32>,
    /// Plugboard connections, e.g. `"AB CD EF"`.
    pub plugboard: String,
}

impl Default for MachineConfig {
    /// Rotors I-II-III, reflector B, everything at A, no plugs.
    fn default() -> Self {
        Self {
            rotors: vec!["I".into(), "II".into(), "III".into()],
            reflector: "B".into(),
            positions: vec![0; ROTOR_COUNT],
            ring_settings: vec![0; ROTOR_COUNT],
            plugboard: String::new(),
        }
    }
}

impl MachineConfig {
    /// Check the shape of the configuration without building anything.
    pub fn validate(&self) -> Result<()> {
        if self.rotors.len() != ROTOR_COUNT {
            return Err(Error::RotorCount {
                count: self.rotors.len(),
            });
        }
        if self.positions.len() != ROTOR_COUNT {
            return Err(Error::PositionCount {
                count: self.positions.len(),
            });
        }
        if self.ring_settings.len() != ROTOR_COUNT {
            return Err(Error::RingSettingCount {
                count: self.ring_settings.len(),
            });
        }
        if self.reflector.is_empty() {
            return Err(Error::MissingReflector);
        }
        Ok(())
    }
}

/// Snapshot of the three rotor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MachineState {
    /// Left (slow) rotor position.
    pub left: u8,
    /// Middle rotor position.
    pub middle: u8,
    /// Right (fast) rotor position.
    pub right: u8,
}

impl MachineState {
    /// Positions as an array, left to right.
    pub fn to_array(self) -> [u8; ROTOR_COUNT] {
        [self.left, self.middle, self.right]
    }

    /// Positions rendered as window letters, e.g. `"ADU"`.
    pub fn window(self) -> String {
        self.to_array().iter().map(|&p| letter(p)).collect()
    }
}

/// A configured rotor cipher machine.
///
/// The rotor positions are the only state that changes after construction.
/// Encryption methods take `&mut self`; independent machines share nothing.
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Build a machine, validating the configuration first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any of the lists does not have
    /// exactly three entries or the reflector name is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use enigma_core::{EnigmaMachine, MachineConfig};
    ///
    /// let mut machine = EnigmaMachine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.encrypt_message("AAAAA"), "BDZGO");
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            left: Rotor::create(
                &config.rotors[0],
                config.positions[0],
                config.ring_settings[0],
            ),
            middle: Rotor::create(
                &config.rotors[1],
                config.positions[1],
                config.ring_settings[1],
            ),
            right: Rotor::create(
                &config.rotors[2],
                config.positions[2],
                config.ring_settings[2],
            ),
            reflector: Reflector::create(&config.reflector),
            plugboard: Plugboard::new(&config.plugboard),
        })
    }

    /// Encrypt (or decrypt) one character.
    ///
    /// Letters are upper-cased, the rotors step, and the enciphered letter is
    /// returned. Anything else is returned as-is with no stepping.
    pub fn encrypt_char(&mut self, c: char) -> char {
        match index_of(c) {
            Some(index) => letter(self.encrypt(index)),
            None => c,
        }
    }

    /// Encrypt a string that must hold exactly one character.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for empty or multi-character input.
    pub fn encrypt_str_char(&mut self, input: &str) -> Result<char> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.encrypt_char(c)),
            _ => Err(Error::InvalidInput {
                len: input.chars().count(),
            }),
        }
    }

    /// Encrypt every character of `input` in order.
    pub fn encrypt_message(&mut self, input: &str) -> String {
        input.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Left rotor position.
    pub fn left_position(&self) -> u8 {
        self.left.position()
    }

    /// Middle rotor position.
    pub fn middle_position(&self) -> u8 {
        self.middle.position()
    }

    /// Right rotor position.
    pub fn right_position(&self) -> u8 {
        self.right.position()
    }

    /// Snapshot of all three positions.
    pub fn state(&self) -> MachineState {
        MachineState {
            left: self.left.position(),
            middle: self.middle.position(),
            right: self.right.position(),
        }
    }

    /// Move the rotors to a recorded state. Ring settings and wiring are kept.
    pub fn set_state(&mut self, state: MachineState) {
        self.left.set_position(state.left as i32);
        self.middle.set_position(state.middle as i32);
        self.right.set_position(state.right as i32);
    }

    /// Move the rotors to arbitrary positions, reduced mod 26.
    pub fn set_positions(&mut self, left: i32, middle: i32, right: i32) {
        self.set_state(MachineState {
            left: reduce(left),
            middle: reduce(middle),
            right: reduce(right),
        });
    }

    /// Resolved rotor names, left to right.
    pub fn rotor_names(&self) -> [&'static str; ROTOR_COUNT] {
        [self.left.name(), self.middle.name(), self.right.name()]
    }

    /// Resolved reflector name.
    pub fn reflector_name(&self) -> &'static str {
        self.reflector.name()
    }

    /// The plugboard in use.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    fn step(&mut self) {
        if self.middle.is_at_notch() {
            self.middle.turnover();
            self.left.turnover();
        } else if self.right.is_at_notch() {
            self.middle.turnover();
        }
        self.right.turnover();
    }

    fn encrypt(&mut self, c: u8) -> u8 {
        self.step();

        let mut x = self.plugboard.forward(c);

        x = self.right.forward(x);
        x = self.middle.forward(x);
        x = self.left.forward(x);

        x = self.reflector.forward(x);

        x = self.left.backward(x);
        x = self.middle.backward(x);
        x = self.right.backward(x);

        self.plugboard.forward(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        rotors: [&str; 3],
        positions: [i32; 3],
        rings: [i32; 3],
        plugs: &str,
    ) -> MachineConfig {
        MachineConfig {
            rotors: rotors.iter().map(|s| s.to_string()).collect(),
            reflector: "B".into(),
            positions: positions.to_vec(),
            ring_settings: rings.to_vec(),
            plugboard: plugs.into(),
        }
    }

    fn machine(cfg: &MachineConfig) -> EnigmaMachine {
        EnigmaMachine::new(cfg).unwrap()
    }

    #[test]
    fn known_answer_aaaaa() {
        let mut m = machine(&MachineConfig::default());
        assert_eq!(m.encrypt_message("AAAAA"), "BDZGO");
        assert_eq!(m.state(), MachineState { left: 0, middle: 0, right: 5 });
    }

    #[test]
    fn lowercase_input_gives_uppercase_output() {
        let mut m = machine(&MachineConfig::default());
        assert_eq!(m.encrypt_message("aaaaa"), "BDZGO");
    }

    #[test]
    fn passthrough_does_not_step() {
        let mut m = machine(&MachineConfig::default());
        let before = m.state();
        assert_eq!(m.encrypt_char(' '), ' ');
        assert_eq!(m.encrypt_char('7'), '7');
        assert_eq!(m.encrypt_char('ß'), 'ß');
        assert_eq!(m.state(), before);
    }

    #[test]
    fn passthrough_inside_message() {
        let mut m = machine(&MachineConfig::default());
        assert_eq!(m.encrypt_message("AA AAA"), "BD ZGO");
    }

    #[test]
    fn empty_message() {
        let mut m = machine(&MachineConfig::default());
        assert_eq!(m.encrypt_message(""), "");
        assert_eq!(m.state(), MachineState::default());
    }

    #[test]
    fn right_rotor_always_steps() {
        let mut m = machine(&MachineConfig::default());
        for expected in 1..=30u32 {
            m.encrypt_char('X');
            assert_eq!(m.right_position() as u32, expected % 26);
        }
    }

    #[test]
    fn right_notch_steps_middle() {
        // Rotor III notch at 21 (V).
        let mut m = machine(&config(["I", "II", "III"], [0, 0, 21], [0, 0, 0], ""));
        m.encrypt_char('A');
        assert_eq!(m.state(), MachineState { left: 0, middle: 1, right: 22 });
    }

    #[test]
    fn middle_at_notch_double_steps() {
        // Rotor II notch at 4 (E).
        let mut m = machine(&config(["I", "II", "III"], [0, 4, 0], [0, 0, 0], ""));
        m.encrypt_char('A');
        assert_eq!(m.state(), MachineState { left: 1, middle: 5, right: 1 });
    }

    #[test]
    fn classic_double_step_sequence() {
        // ADU -> ADV -> AEW -> BFX
        let mut m = machine(&config(["I", "II", "III"], [0, 3, 20], [0, 0, 0], ""));
        let windows: Vec<String> = (0..3)
            .map(|_| {
                m.encrypt_char('A');
                m.state().window()
            })
            .collect();
        assert_eq!(windows, vec!["ADV", "AEW", "BFX"]);
    }

    #[test]
    fn double_notch_rotor_drives_middle_twice() {
        let mut m = machine(&config(["I", "II", "VI"], [0, 0, 12], [0, 0, 0], ""));
        m.encrypt_char('A');
        assert_eq!(m.middle_position(), 1);

        m.set_positions(0, 0, 25);
        m.encrypt_char('A');
        assert_eq!(m.middle_position(), 1);
        assert_eq!(m.right_position(), 0);
    }

    #[test]
    fn reciprocity_with_plugs_and_rings() {
        let cfg = MachineConfig {
            rotors: vec!["IV".into(), "VII".into(), "II".into()],
            reflector: "C".into(),
            positions: vec![7, 24, 11],
            ring_settings: vec![3, 15, 22],
            plugboard: "AQ BW CE DR FT".into(),
        };
        let plaintext = "ATTACK AT DAWN, HOLD THE BRIDGE";
        let ciphertext = machine(&cfg).encrypt_message(plaintext);
        assert_ne!(ciphertext, plaintext);
        assert_eq!(machine(&cfg).encrypt_message(&ciphertext), plaintext);
    }

    #[test]
    fn letter_never_encrypts_to_itself() {
        let mut m = machine(&config(["V", "I", "III"], [2, 9, 17], [1, 1, 1], "MN"));
        for i in 0..500u32 {
            let c = letter((i % 26) as u8);
            assert_ne!(m.encrypt_char(c), c);
        }
    }

    #[test]
    fn empty_plugboard_matches_identity_fallback() {
        let plain = machine(&config(["I", "II", "III"], [5, 6, 7], [0, 0, 0], ""));
        let broken = machine(&config(["I", "II", "III"], [5, 6, 7], [0, 0, 0], "ABC"));
        assert!(broken.plugboard().is_identity());
        assert_eq!(
            plain.clone().encrypt_message("HELLOWORLD"),
            broken.clone().encrypt_message("HELLOWORLD")
        );
    }

    #[test]
    fn state_replay_reproduces_sequence() {
        let cfg = config(["III", "I", "VIII"], [1, 2, 3], [4, 5, 6], "PO ML");
        let mut sender = machine(&cfg);
        let records: Vec<(char, MachineState)> = "REPLAYME"
            .chars()
            .map(|c| {
                let state = sender.state();
                (sender.encrypt_char(c), state)
            })
            .collect();

        let mut receiver = machine(&cfg);
        // Replay out of order: each record carries its own state.
        for (encrypted, state) in records.iter().rev() {
            receiver.set_state(*state);
            let decrypted = receiver.encrypt_char(*encrypted);
            assert!(decrypted.is_ascii_uppercase());
        }
        let decrypted: String = records
            .iter()
            .map(|(encrypted, state)| {
                receiver.set_state(*state);
                receiver.encrypt_char(*encrypted)
            })
            .collect();
        assert_eq!(decrypted, "REPLAYME");
    }

    #[test]
    fn str_char_requires_one_character() {
        let mut m = machine(&MachineConfig::default());
        assert_eq!(m.encrypt_str_char("A"), Ok('B'));
        assert_eq!(m.encrypt_str_char(""), Err(Error::InvalidInput { len: 0 }));
        assert_eq!(m.encrypt_str_char("AB"), Err(Error::InvalidInput { len: 2 }));
        // Failed calls must not have stepped the machine.
        assert_eq!(m.right_position(), 1);
    }

    #[test]
    fn config_requires_three_of_each() {
        let mut cfg = MachineConfig::default();
        cfg.rotors.pop();
        assert_eq!(
            EnigmaMachine::new(&cfg).unwrap_err(),
            Error::RotorCount { count: 2 }
        );

        let mut cfg = MachineConfig::default();
        cfg.positions.push(0);
        assert_eq!(
            EnigmaMachine::new(&cfg).unwrap_err(),
            Error::PositionCount { count: 4 }
        );

        let mut cfg = MachineConfig::default();
        cfg.ring_settings.clear();
        assert_eq!(
            EnigmaMachine::new(&cfg).unwrap_err(),
            Error::RingSettingCount { count: 0 }
        );

        let mut cfg = MachineConfig::default();
        cfg.reflector.clear();
        assert_eq!(EnigmaMachine::new(&cfg).unwrap_err(), Error::MissingReflector);
    }

    #[test]
    fn unknown_names_resolve_to_fallbacks() {
        let mut cfg = MachineConfig::default();
        cfg.rotors[1] = "IX".into();
        cfg.reflector = "Z".into();
        let m = machine(&cfg);
        assert_eq!(m.rotor_names(), ["I", "Identity", "III"]);
        assert_eq!(m.reflector_name(), "Reversed");
    }

    #[test]
    fn positions_wrap_at_construction() {
        let m = machine(&config(["I", "II", "III"], [26, -1, 53], [0, 0, 0], ""));
        assert_eq!(m.state().to_array(), [0, 25, 1]);
    }

    #[test]
    fn machine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EnigmaMachine>();
    }

    #[test]
    fn independent_machines_do_not_interfere() {
        let mut a = machine(&MachineConfig::default());
        let mut b = machine(&MachineConfig::default());
        a.encrypt_message("SOMETHING LONG");
        assert_eq!(b.encrypt_message("AAAAA"), "BDZGO");
    }
}
