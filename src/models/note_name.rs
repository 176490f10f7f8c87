//! Letter names of the diatonic alphabet
//!
//! Letters are indexed from C (0) to B (6), matching the order in which
//! octaves are counted: the octave number changes between B and C.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpellError;

/// One of the seven letter names A..G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// All letters in index order, starting at C.
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Index of the letter, C = 0 .. B = 6.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter of the given index, taken modulo 7.
    pub fn from_index(i: i32) -> NoteName {
        NoteName::ALL[i.rem_euclid(7) as usize]
    }

    /// Letter reached after `steps` letter steps (negative steps go down).
    ///
    /// Wraps around: `B.shift(1) == C`, `C.shift(-1) == B`.
    pub fn shift(self, steps: i32) -> NoteName {
        NoteName::from_index(self as i32 + steps)
    }

    /// Pitch class of the natural note with this letter.
    ///
    /// C, D, E, F, G, A, B map to 0, 2, 4, 5, 7, 9, 11.
    pub fn pitch_class(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<NoteName> {
        match c.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for NoteName {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                NoteName::from_char(c).ok_or_else(|| SpellError::UnknownNoteName(s.to_string()))
            }
            _ => Err(SpellError::UnknownNoteName(s.to_string())),
        }
    }
}
