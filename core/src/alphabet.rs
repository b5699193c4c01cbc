//! The 26-letter alphabet and permutations over it.
//!
//! Letters A..Z are indexed 0..25. A [`Permutation`] stores at position `i`
//! the image of letter `i`.

/// Number of symbols in the alphabet.
pub const SIZE: usize = 26;

/// A mapping of the alphabet onto itself, indexed by letter.
pub type Permutation = [u8; SIZE];

/// The identity permutation (A→A, B→B, ...).
pub const IDENTITY: Permutation = identity();

const fn identity() -> Permutation {
    let mut table = [0u8; SIZE];
    let mut i = 0;
    while i < SIZE {
        table[i] = i as u8;
        i += 1;
    }
    table
}

/// Index of a letter, case-insensitive. `None` for anything outside A..Z.
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper as u8 - b'A')
    } else {
        None
    }
}

/// Upper-case letter for an index in 0..26.
#[inline]
pub fn letter(index: u8) -> char {
    debug_assert!((index as usize) < SIZE);
    (b'A' + index) as char
}

/// Decode a 26-letter wiring string such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
///
/// Wiring strings come from the static catalog and are upper-case ASCII.
pub(crate) fn decode(wiring: &str) -> Permutation {
    debug_assert_eq!(wiring.len(), SIZE);
    let mut table = IDENTITY;
    for (slot, byte) in table.iter_mut().zip(wiring.bytes()) {
        *slot = byte - b'A';
    }
    table
}

/// Compute the inverse permutation: `inverse[p[i]] == i`.
pub fn invert(permutation: &Permutation) -> Permutation {
    let mut inverse = [0u8; SIZE];
    for (i, &image) in permutation.iter().enumerate() {
        inverse[image as usize] = i as u8;
    }
    inverse
}

/// Whether every index appears exactly once as an image.
pub fn is_bijection(permutation: &Permutation) -> bool {
    let mut seen = [false; SIZE];
    for &image in permutation {
        match seen.get_mut(image as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Whether applying the permutation twice yields the identity.
pub fn is_involution(permutation: &Permutation) -> bool {
    permutation
        .iter()
        .enumerate()
        .all(|(i, &image)| permutation[image as usize] as usize == i)
}
