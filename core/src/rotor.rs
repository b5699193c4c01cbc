//! Rotating substitution wheel.
//!
//! A rotor carries its wiring in both directions, a mutable rotational
//! position and a fixed ring setting. The effective shift applied to the
//! wiring is `position - ring_setting`:
//!
//! ```text
//! out = wiring[(c + shift) mod 26] - shift  (mod 26)
//! ```
//!
//! The position only ever changes through [`Rotor::turnover`].

use crate::alphabet::{decode, invert, Permutation, SIZE};
use crate::wiring::{self, RotorSpec};

/// Position(s) at which a rotor causes its left neighbour to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notch {
    /// One notch offset.
    Single(u8),
    /// Two notch offsets (rotors VI-VIII).
    Double(u8, u8),
}

impl Notch {
    /// Whether `position` is one of this notch's offsets.
    #[inline]
    pub fn contains(self, position: u8) -> bool {
        match self {
            Notch::Single(n) => n == position,
            Notch::Double(a, b) => a == position || b == position,
        }
    }
}

/// A stateful rotor instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: &'static str,
    forward_wiring: Permutation,
    backward_wiring: Permutation,
    position: u8,
    ring_setting: u8,
    notch: Notch,
}

impl Rotor {
    /// Build a rotor from the catalog. Unknown names give the identity rotor.
    ///
    /// `position` and `ring_setting` are reduced mod 26, so negative values
    /// wrap around.
    pub fn create(name: &str, position: i32, ring_setting: i32) -> Self {
        Self::from_spec(wiring::rotor(name), position, ring_setting)
    }

    /// Build a rotor from an explicit catalog entry.
    pub fn from_spec(spec: &'static RotorSpec, position: i32, ring_setting: i32) -> Self {
        let forward_wiring = decode(spec.wiring);
        Self {
            name: spec.name,
            backward_wiring: invert(&forward_wiring),
            forward_wiring,
            position: reduce(position),
            ring_setting: reduce(ring_setting),
            notch: spec.notch,
        }
    }

    /// Catalog name (`"Identity"` for the fallback rotor).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current rotational position, 0..26.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting, 0..26.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Notch specification.
    pub fn notch(&self) -> Notch {
        self.notch
    }

    /// Pass a letter index through the rotor towards the reflector.
    #[inline]
    pub fn forward(&self, c: u8) -> u8 {
        self.encipher(c, &self.forward_wiring)
    }

    /// Pass a letter index back through the rotor, away from the reflector.
    #[inline]
    pub fn backward(&self, c: u8) -> u8 {
        self.encipher(c, &self.backward_wiring)
    }

    /// Whether the rotor sits at (one of) its notch position(s).
    #[inline]
    pub fn is_at_notch(&self) -> bool {
        self.notch.contains(self.position)
    }

    /// Advance one position.
    #[inline]
    pub fn turnover(&mut self) {
        self.position = (self.position + 1) % SIZE as u8;
    }

    /// Reposition the rotor, e.g. when restoring a recorded machine state.
    pub(crate) fn set_position(&mut self, position: i32) {
        self.position = reduce(position);
    }

    fn encipher(&self, c: u8, mapping: &Permutation) -> u8 {
        let n = SIZE as i32;
        let shift = self.position as i32 - self.ring_setting as i32;
        let index = (c as i32 + shift).rem_euclid(n) as usize;
        (mapping[index] as i32 - shift).rem_euclid(n) as u8
    }
}

/// Reduce an arbitrary integer to 0..26.
#[inline]
pub(crate) fn reduce(value: i32) -> u8 {
    value.rem_euclid(SIZE as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring::{ROTORS, ROTOR_NAMES};

    #[test]
    fn forward_at_origin_follows_wiring() {
        let rotor = Rotor::create("I", 0, 0);
        assert_eq!(rotor.forward(0), 4); // A -> E
        assert_eq!(rotor.backward(4), 0); // E -> A
    }

    #[test]
    fn position_shifts_wiring() {
        // Rotor I at B: A enters at contact B -> K, leaves as J.
        let rotor = Rotor::create("I", 1, 0);
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn equal_position_and_ring_cancel() {
        let plain = Rotor::create("III", 0, 0);
        let shifted = Rotor::create("III", 7, 7);
        for c in 0..SIZE as u8 {
            assert_eq!(plain.forward(c), shifted.forward(c));
            assert_eq!(plain.backward(c), shifted.backward(c));
        }
    }

    #[test]
    fn backward_inverts_forward_everywhere() {
        for name in ROTOR_NAMES {
            for position in 0..26 {
                for ring in 0..26 {
                    let rotor = Rotor::create(name, position, ring);
                    for c in 0..SIZE as u8 {
                        assert_eq!(rotor.backward(rotor.forward(c)), c);
                        assert_eq!(rotor.forward(rotor.backward(c)), c);
                    }
                }
            }
        }
    }

    #[test]
    fn turnover_wraps() {
        let mut rotor = Rotor::create("II", 25, 0);
        rotor.turnover();
        assert_eq!(rotor.position(), 0);
        rotor.turnover();
        assert_eq!(rotor.position(), 1);
    }

    #[test]
    fn single_notch_detection() {
        let mut rotor = Rotor::create("I", 15, 0);
        assert!(!rotor.is_at_notch());
        rotor.turnover();
        assert!(rotor.is_at_notch());
        rotor.turnover();
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn double_notch_detection() {
        for name in ["VI", "VII", "VIII"] {
            let hits: Vec<u8> = (0..26)
                .filter(|&p| Rotor::create(name, p, 0).is_at_notch())
                .map(|p| p as u8)
                .collect();
            assert_eq!(hits, vec![12, 25], "rotor {}", name);
        }
    }

    #[test]
    fn notch_ignores_ring_setting() {
        let rotor = Rotor::create("II", 4, 13);
        assert!(rotor.is_at_notch());
    }

    #[test]
    fn unknown_name_is_identity() {
        let rotor = Rotor::create("bogus", 0, 0);
        assert_eq!(rotor.name(), "Identity");
        assert_eq!(rotor.notch(), Notch::Single(0));
        for c in 0..SIZE as u8 {
            assert_eq!(rotor.forward(c), c);
        }
    }

    #[test]
    fn out_of_range_settings_wrap() {
        let rotor = Rotor::create("IV", 27, -1);
        assert_eq!(rotor.position(), 1);
        assert_eq!(rotor.ring_setting(), 25);
    }

    #[test]
    fn from_spec_keeps_name() {
        let rotor = Rotor::from_spec(&ROTORS[4], 0, 0);
        assert_eq!(rotor.name(), "V");
        assert_eq!(rotor.notch(), Notch::Single(25));
    }
}
