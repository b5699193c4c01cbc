//! Catalog of historical rotor and reflector wirings.
//!
//! Pure data. Lookups are by name; unknown names fall back to an identity
//! rotor or a reversed-alphabet reflector rather than failing, so callers
//! that want to warn about typos should check [`is_known_rotor`] /
//! [`is_known_reflector`] first.

use crate::rotor::Notch;

/// Static description of a rotor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Catalog name, e.g. `"III"`.
    pub name: &'static str,
    /// Output letter for each input letter A..Z.
    pub wiring: &'static str,
    /// Position(s) at which this rotor drives its left neighbour.
    pub notch: Notch,
}

/// Static description of a reflector type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Catalog name, e.g. `"B"`.
    pub name: &'static str,
    /// Output letter for each input letter A..Z.
    pub wiring: &'static str,
}

/// Rotors I-VIII. VI, VII and VIII carry two notches.
pub static ROTORS: [RotorSpec; 8] = [
    RotorSpec {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notch: Notch::Single(16),
    },
    RotorSpec {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notch: Notch::Single(4),
    },
    RotorSpec {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notch: Notch::Single(21),
    },
    RotorSpec {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notch: Notch::Single(9),
    },
    RotorSpec {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notch: Notch::Single(25),
    },
    RotorSpec {
        name: "VI",
        wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
        notch: Notch::Double(12, 25),
    },
    RotorSpec {
        name: "VII",
        wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
        notch: Notch::Double(12, 25),
    },
    RotorSpec {
        name: "VIII",
        wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        notch: Notch::Double(12, 25),
    },
];

/// Substituted for any unrecognised rotor name.
pub static IDENTITY_ROTOR: RotorSpec = RotorSpec {
    name: "Identity",
    wiring: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    notch: Notch::Single(0),
};

/// Reflectors B and C.
pub static REFLECTORS: [ReflectorSpec; 2] = [
    ReflectorSpec {
        name: "B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorSpec {
        name: "C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
];

/// Substituted for any unrecognised reflector name.
pub static REVERSED_REFLECTOR: ReflectorSpec = ReflectorSpec {
    name: "Reversed",
    wiring: "ZYXWVUTSRQPONMLKJIHGFEDCBA",
};

/// Names of all catalog rotors, in catalog order.
pub const ROTOR_NAMES: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

/// Names of all catalog reflectors.
pub const REFLECTOR_NAMES: [&str; 2] = ["B", "C"];

/// Look up a rotor by exact name.
pub fn find_rotor(name: &str) -> Option<&'static RotorSpec> {
    ROTORS.iter().find(|spec| spec.name == name)
}

/// Look up a reflector by exact name.
pub fn find_reflector(name: &str) -> Option<&'static ReflectorSpec> {
    REFLECTORS.iter().find(|spec| spec.name == name)
}

/// Rotor for `name`, or [`IDENTITY_ROTOR`] if the name is unknown.
pub fn rotor(name: &str) -> &'static RotorSpec {
    find_rotor(name).unwrap_or(&IDENTITY_ROTOR)
}

/// Reflector for `name`, or [`REVERSED_REFLECTOR`] if the name is unknown.
pub fn reflector(name: &str) -> &'static ReflectorSpec {
    find_reflector(name).unwrap_or(&REVERSED_REFLECTOR)
}

/// Whether `name` is a catalog rotor (and will not fall back).
pub fn is_known_rotor(name: &str) -> bool {
    find_rotor(name).is_some()
}

/// Whether `name` is a catalog reflector (and will not fall back).
pub fn is_known_reflector(name: &str) -> bool {
    find_reflector(name).is_some()
}
