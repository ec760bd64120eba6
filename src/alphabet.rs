//! This module defines the cyclic symbol alphabet the machine operates on:
//! the blank symbol followed by the uppercase letters `A..=Z`, with
//! wraparound at both ends (the successor of `Z` is the blank, the
//! predecessor of the blank is `Z`).

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Number of symbols in the cyclic alphabet: the blank plus 26 letters
pub const ALPHABET_SIZE: i32 = 27;

/// Half the alphabet size, used for balanced modular reduction of distances
const HALF_ALPHABET: i32 = ALPHABET_SIZE / 2;

/// One symbol of the cyclic alphabet, stored as its index in `[0, 27)`.
/// Index 0 is the blank, indices `1..=26` are `A..=Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// The origin symbol of the alphabet, rendered as a space
    pub const BLANK: Symbol = Symbol(0);

    /// Maps a text character to its [Symbol], or `None` for characters
    /// outside the declared alphabet (space and `A`..=`Z`)
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            ' ' => Some(Symbol::BLANK),
            'A'..='Z' => Some(Symbol(c as u8 - b'A' + 1)),
            _ => None,
        }
    }

    /// Returns the alphabet index of the symbol
    pub fn index(self) -> u8 {
        self.0
    }

    /// Whether this is the blank symbol, the loop continuation sentinel
    pub fn is_blank(self) -> bool {
        self.0 == 0
    }

    /// Returns the next symbol in cyclic order (`Z` wraps to blank)
    pub fn next(self) -> Symbol {
        Symbol((self.0 + 1) % ALPHABET_SIZE as u8)
    }

    /// Returns the previous symbol in cyclic order (blank wraps to `Z`)
    pub fn prev(self) -> Symbol {
        Symbol((self.0 + ALPHABET_SIZE as u8 - 1) % ALPHABET_SIZE as u8)
    }

    /// Returns the text character for this symbol
    pub fn to_char(self) -> char {
        match self.0 {
            0 => ' ',
            i => (b'A' + i - 1) as char,
        }
    }

    /// Signed minimal number of unit steps turning `self` into `to`:
    /// positive counts successor steps, negative counts predecessor steps.
    /// Computed by balanced modular reduction; the alphabet size is odd so
    /// no pair of symbols is equidistant in both directions, and the
    /// reduction keeps the 13-step case positive.
    pub fn distance(self, to: Symbol) -> i32 {
        let diff = i32::from(to.0) - i32::from(self.0);
        (diff + HALF_ALPHABET).rem_euclid(ALPHABET_SIZE) - HALF_ALPHABET
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.to_char())
    }
}

/// Renders a sequence of symbols as text over the declared alphabet
pub fn decode(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.to_char()).collect()
}
