//! Built-in S-box registry.
//!
//! Adding an S-box is as easy as adding an entry to `CIPHERS`. Only square
//! S-boxes (input width equal to output width) are supported.

use crate::Error;

/// Truth table of a square S-box.
///
/// Entry `i` is the output word for input `i`; the table length is a power
/// of two and every entry fits in the word width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sbox {
    table: Vec<u8>,
}

impl Sbox {
    /// Validates and wraps a truth table.
    pub fn new(table: Vec<u8>) -> Result<Self, Error> {
        let len = table.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(Error::TableNotPowerOfTwo(len));
        }
        let bits = len.trailing_zeros() as usize;
        for (index, &value) in table.iter().enumerate() {
            if usize::from(value) >= len {
                return Err(Error::EntryOutOfRange { index, value, bits });
            }
        }
        Ok(Self { table })
    }

    /// Looks up a registered cipher's S-box by name.
    pub fn for_cipher(name: &str) -> Result<Self, Error> {
        let table = CIPHERS
            .iter()
            .find(|(cipher, _)| *cipher == name)
            .map(|(_, table)| table.to_vec())
            .ok_or_else(|| Error::UnknownCipher {
                name: name.to_string(),
                known: cipher_names().join(", "),
            })?;
        Self::new(table)
    }

    /// Word width `n` in bits; the table has `2^n` entries.
    pub fn word_bits(&self) -> usize {
        self.table.len().trailing_zeros() as usize
    }

    /// The raw truth table.
    pub fn table(&self) -> &[u8] {
        &self.table
    }
}

/// Names of all registered ciphers, sorted.
pub fn cipher_names() -> Vec<&'static str> {
    CIPHERS.iter().map(|(name, _)| *name).collect()
}

// Ketje and Keyak share the same S-box.
const KETJE: &[u8] = &[
    0, 5, 10, 11, 20, 17, 22, 23, 9, 12, 3, 2, 13, 8, 15, 14, 18, 21, 24, 27, 6, 1, 4, 7, 26, 29,
    16, 19, 30, 25, 28, 31,
];

/// Registered cipher S-boxes, sorted by name.
const CIPHERS: &[(&str, &[u8])] = &[
    (
        "ascon",
        &[
            4, 11, 31, 20, 26, 21, 9, 2, 27, 5, 8, 18, 29, 3, 6, 28, 30, 19, 7, 14, 0, 13, 17, 24,
            16, 12, 1, 25, 22, 10, 15, 23,
        ],
    ),
    ("ctc2", &[7, 6, 0, 4, 2, 5, 1, 3]),
    (
        "icepole",
        &[
            31, 5, 10, 11, 20, 17, 22, 23, 9, 12, 3, 2, 13, 8, 15, 14, 18, 21, 24, 27, 6, 1, 4, 7,
            26, 29, 16, 19, 30, 25, 28, 0,
        ],
    ),
    ("joltik", &[14, 4, 11, 2, 3, 8, 0, 9, 1, 10, 7, 15, 6, 12, 5, 13]),
    ("joltik_inv", &[6, 8, 3, 4, 1, 14, 12, 10, 5, 7, 9, 2, 13, 15, 0, 11]),
    ("ketje", KETJE),
    ("keyak", KETJE),
    ("lac", &[14, 9, 15, 0, 13, 4, 10, 11, 1, 2, 8, 3, 7, 6, 12, 5]),
    ("minalpher", &[11, 3, 4, 1, 2, 8, 12, 15, 5, 13, 14, 0, 6, 9, 10, 7]),
    ("present", &[12, 5, 6, 11, 9, 0, 10, 13, 3, 14, 15, 8, 4, 7, 1, 2]),
    (
        "primate",
        &[
            1, 0, 25, 26, 17, 29, 21, 27, 20, 5, 4, 23, 14, 18, 2, 28, 15, 8, 6, 3, 13, 7, 24, 16,
            30, 9, 31, 10, 22, 12, 11, 19,
        ],
    ),
    (
        "primate_inv",
        &[
            1, 0, 14, 19, 10, 9, 18, 21, 17, 25, 27, 30, 29, 20, 12, 16, 23, 4, 13, 31, 8, 6, 28,
            11, 22, 2, 3, 7, 15, 5, 24, 26,
        ],
    ),
    ("prost", &[0, 4, 8, 15, 1, 5, 14, 9, 2, 7, 10, 12, 11, 13, 6, 3]),
    ("rectangle", &[9, 4, 15, 10, 14, 1, 0, 6, 12, 7, 3, 8, 2, 11, 5, 13]),
    ("rectangle_inv", &[6, 5, 12, 10, 1, 14, 7, 9, 11, 0, 3, 13, 8, 15, 4, 2]),
];
