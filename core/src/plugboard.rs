//! Plugboard: letter pair swaps applied before and after the rotors.
//!
//! Connections are written as letter pairs separated by any non-letter
//! characters, e.g. `"AB CD EF"` or `"ab,cd"`.
//!
//! # Validation
//!
//! Parsing is all-or-nothing. If any token is not exactly two letters, or
//! any letter appears in more than one position, the whole specification is
//! discarded and the board is left unplugged (identity). Every separator
//! counts, so doubled, leading or trailing separators yield an empty token
//! and reject the specification. This is not an error; use
//! [`Plugboard::is_identity`] to detect it.

use crate::alphabet::{index_of, letter, Permutation, IDENTITY, SIZE};

/// An involutive letter mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: Permutation,
}

impl Plugboard {
    /// Build a plugboard from a connection specification.
    pub fn new(connections: &str) -> Self {
        Self {
            wiring: decode(connections).unwrap_or(IDENTITY),
        }
    }

    /// A plugboard with no connections.
    pub fn unplugged() -> Self {
        Self { wiring: IDENTITY }
    }

    /// Swap a letter index with its partner (or return it unchanged).
    ///
    /// `c` must be below 26.
    #[inline]
    pub fn forward(&self, c: u8) -> u8 {
        debug_assert!((c as usize) < SIZE);
        self.wiring[c as usize]
    }

    /// Whether no letters are connected.
    pub fn is_identity(&self) -> bool {
        self.wiring == IDENTITY
    }

    /// Connected pairs, each listed once with the lower letter first.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.wiring
            .iter()
            .enumerate()
            .filter(|&(i, &o)| i < o as usize)
            .map(|(i, &o)| (letter(i as u8), letter(o)))
            .collect()
    }

    /// Whether `connections` parses into a valid set of pairs.
    pub fn is_valid_spec(connections: &str) -> bool {
        decode(connections).is_some()
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::unplugged()
    }
}

/// Letters left free by a connection specification, in alphabetical order.
///
/// Every two-letter token counts as occupying its letters, even when the
/// specification as a whole would be rejected. Frontends use this to show
/// which sockets are still available while the user is typing.
pub fn unplugged(connections: &str) -> Vec<char> {
    let mut free = [true; SIZE];
    for token in tokens(connections).filter(|token| !token.is_empty()) {
        if let Some((a, b)) = pair(token) {
            free[a as usize] = false;
            free[b as usize] = false;
        }
    }
    free.iter()
        .enumerate()
        .filter(|&(_, &is_free)| is_free)
        .map(|(i, _)| letter(i as u8))
        .collect()
}

/// Parse the full specification, or `None` if any part of it is malformed.
fn decode(connections: &str) -> Option<Permutation> {
    if connections.is_empty() {
        return Some(IDENTITY);
    }

    let mut mapping = IDENTITY;
    let mut plugged = [false; SIZE];

    for token in tokens(connections) {
        let (a, b) = pair(token)?;
        if a == b || plugged[a as usize] || plugged[b as usize] {
            return None;
        }
        plugged[a as usize] = true;
        plugged[b as usize] = true;
        mapping[a as usize] = b;
        mapping[b as usize] = a;
    }

    Some(mapping)
}

/// Split on every non-letter, keeping empty pieces.
fn tokens(connections: &str) -> impl Iterator<Item = &str> {
    connections.split(|c: char| !c.is_ascii_alphabetic())
}

/// Letter indices of a two-letter token.
fn pair(token: &str) -> Option<(u8, u8)> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => Some((index_of(a)?, index_of(b)?)),
        _ => None,
    }
}
