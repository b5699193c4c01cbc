//! Fixed reflecting wheel.
//!
//! Applied once per letter between the forward and backward rotor passes.
//! It never moves and is only used in the forward direction.

use crate::alphabet::{decode, Permutation, SIZE};
use crate::wiring::{self, ReflectorSpec};

/// A reflector instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: &'static str,
    wiring: Permutation,
}

impl Reflector {
    /// Build a reflector from the catalog. Unknown names give the reversed
    /// alphabet (A↔Z, B↔Y, ...).
    pub fn create(name: &str) -> Self {
        Self::from_spec(wiring::reflector(name))
    }

    /// Build a reflector from an explicit catalog entry.
    pub fn from_spec(spec: &'static ReflectorSpec) -> Self {
        Self {
            name: spec.name,
            wiring: decode(spec.wiring),
        }
    }

    /// Catalog name (`"Reversed"` for the fallback).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reflect a letter index. `c` must be below 26.
    #[inline]
    pub fn forward(&self, c: u8) -> u8 {
        debug_assert!((c as usize) < SIZE);
        self.wiring[c as usize]
    }
}
