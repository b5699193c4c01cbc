//! Enigma Core - rotor cipher machine engine.
//!
//! This library simulates a three-rotor cipher machine:
//! - Rotor wirings I-VIII and reflectors B and C from the historical catalog
//! - Ring settings and rotor positions
//! - Plugboard pair swaps
//! - Rotor stepping including the middle-rotor double step
//!
//! # Properties
//!
//! - Reciprocal: the same starting state both encrypts and decrypts
//! - Deterministic: output depends only on configuration and input
//! - Non-letters pass through without advancing the rotors
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Access the network
//! - Perform file I/O
//! - Persist or serialize machine state
//! - Use global state (every machine owns its rotors)
//! - Provide real security (the cipher is historically broken)
//!
//! # Example: Encrypt and decrypt
//!
//! ```
//! use enigma_core::{EnigmaMachine, MachineConfig};
//!
//! let config = MachineConfig {
//!     rotors: vec!["II".into(), "IV".into(), "V".into()],
//!     reflector: "B".into(),
//!     positions: vec![1, 11, 0],
//!     ring_settings: vec![1, 20, 11],
//!     plugboard: "AV BS CG DL FU HZ IN KM OW RX".into(),
//! };
//!
//! let mut sender = EnigmaMachine::new(&config).unwrap();
//! let ciphertext = sender.encrypt_message("Meet at noon");
//!
//! let mut receiver = EnigmaMachine::new(&config).unwrap();
//! assert_eq!(receiver.encrypt_message(&ciphertext), "MEET AT NOON");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod wiring;

// Re-export main types at crate root
pub use error::{Error, Result};
pub use machine::{EnigmaMachine, MachineConfig, MachineState, ROTOR_COUNT};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{Notch, Rotor};
pub use wiring::{
    is_known_reflector, is_known_rotor, ReflectorSpec, RotorSpec, REFLECTOR_NAMES, ROTOR_NAMES,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
