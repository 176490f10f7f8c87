//! The line of fifths and key signatures
//!
//! Spelled pitch classes are placed on a line of fifths indexed from -15
//! (Fbb) to 19 (B##), with C at 0. Going one step right moves the letter
//! up a fifth (four letter steps) and the pitch class up seven semitones.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Accidental, NoteName};

pub const MIN_FIFTH: i32 = -15;
pub const MAX_FIFTH: i32 = 19;

/// Letters in order of sharps.
pub const SHARP_ORDER: [NoteName; 7] = [
    NoteName::F,
    NoteName::C,
    NoteName::G,
    NoteName::D,
    NoteName::A,
    NoteName::E,
    NoteName::B,
];

fn check(i: i32) {
    assert!(
        (MIN_FIFTH..=MAX_FIFTH).contains(&i),
        "line of fifths index {} out of range",
        i
    );
}

/// Letter at position `i` of the line of fifths.
pub fn name(i: i32) -> NoteName {
    check(i);
    SHARP_ORDER[(i - MIN_FIFTH).rem_euclid(7) as usize]
}

/// Accidental at position `i` of the line of fifths.
pub fn accidental(i: i32) -> Accidental {
    check(i);
    // in range by construction: (i + 15) / 7 is 0..=4
    Accidental::ALL[((i - MIN_FIFTH) / 7) as usize]
}

pub fn pitch_class(i: i32) -> u8 {
    (7 * i).rem_euclid(12) as u8
}

/// Position of a spelled pitch class on the line of fifths.
pub fn index(name: NoteName, accidental: Accidental) -> i32 {
    let pos = SHARP_ORDER
        .iter()
        .position(|&n| n == name)
        .unwrap_or_default() as i32;
    (accidental.semitones() + 2) * 7 + pos + MIN_FIFTH
}

/// A key signature, counted in fifths: positive for sharps, negative for
/// flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeySignature(pub i32);

impl KeySignature {
    pub fn new(fifths: i32) -> KeySignature {
        KeySignature(fifths)
    }

    /// Key signature of a major (or harmonic minor) tonic pitch class,
    /// choosing the spelling with at most 6 sharps or 5 flats.
    pub fn from_pitch_class(pc: u8, major: bool) -> KeySignature {
        let c = pc as i32;
        let mut k = (if major { 7 * c } else { 7 * c - 3 }).rem_euclid(12);
        if k > 6 {
            k -= 12;
        }
        KeySignature(k)
    }

    pub fn fifths(&self) -> i32 {
        self.0
    }

    pub fn sharps(&self) -> u32 {
        self.0.max(0) as u32
    }

    pub fn flats(&self) -> u32 {
        (-self.0).max(0) as u32
    }

    /// Accidental the signature puts on `letter`.
    ///
    /// Beyond seven sharps or flats, letters get double accidentals in the
    /// same order.
    pub fn accidental(&self, letter: NoteName) -> Accidental {
        let pos = SHARP_ORDER
            .iter()
            .position(|&n| n == letter)
            .unwrap_or_default() as i32;
        let k = self.0;
        let offset = if k >= 0 {
            (k - pos + 6).div_euclid(7)
        } else {
            -((-k - (6 - pos) + 6).div_euclid(7))
        };
        Accidental::from_semitones(offset.clamp(-2, 2)).unwrap_or_default()
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "0"),
            k if k > 0 => write!(f, "{}#", k),
            k => write!(f, "{}b", -k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of_fifths_ends() {
        assert_eq!((name(-15), accidental(-15)), (NoteName::F, Accidental::DoubleFlat));
        assert_eq!((name(0), accidental(0)), (NoteName::C, Accidental::Natural));
        assert_eq!((name(-1), accidental(-1)), (NoteName::F, Accidental::Natural));
        assert_eq!((name(6), accidental(6)), (NoteName::F, Accidental::Sharp));
        assert_eq!((name(-7), accidental(-7)), (NoteName::C, Accidental::Flat));
        assert_eq!((name(19), accidental(19)), (NoteName::B, Accidental::DoubleSharp));
    }

    #[test]
    fn test_index_inverse() {
        for i in MIN_FIFTH..=MAX_FIFTH {
            assert_eq!(index(name(i), accidental(i)), i);
            let pc = (name(i).pitch_class() as i32 + accidental(i).semitones()).rem_euclid(12);
            assert_eq!(pitch_class(i) as i32, pc);
        }
    }

    #[test]
    #[should_panic]
    fn test_out_of_line() {
        name(20);
    }

    #[test]
    fn test_signature_accidentals() {
        let d_major = KeySignature(2);
        assert_eq!(d_major.accidental(NoteName::F), Accidental::Sharp);
        assert_eq!(d_major.accidental(NoteName::C), Accidental::Sharp);
        assert_eq!(d_major.accidental(NoteName::G), Accidental::Natural);

        let eb_major = KeySignature(-3);
        assert_eq!(eb_major.accidental(NoteName::B), Accidental::Flat);
        assert_eq!(eb_major.accidental(NoteName::E), Accidental::Flat);
        assert_eq!(eb_major.accidental(NoteName::A), Accidental::Flat);
        assert_eq!(eb_major.accidental(NoteName::D), Accidental::Natural);

        let cb_major = KeySignature(-7);
        for letter in NoteName::ALL {
            assert_eq!(cb_major.accidental(letter), Accidental::Flat);
        }

        let c_major = KeySignature(0);
        for letter in NoteName::ALL {
            assert_eq!(c_major.accidental(letter), Accidental::Natural);
        }
    }

    #[test]
    fn test_double_sharps_past_seven() {
        let k = KeySignature(8);
        assert_eq!(k.accidental(NoteName::F), Accidental::DoubleSharp);
        assert_eq!(k.accidental(NoteName::C), Accidental::Sharp);
    }

    #[test]
    fn test_from_pitch_class() {
        assert_eq!(KeySignature::from_pitch_class(0, true), KeySignature(0));
        assert_eq!(KeySignature::from_pitch_class(6, true), KeySignature(6));
        assert_eq!(KeySignature::from_pitch_class(1, true), KeySignature(-5));
        assert_eq!(KeySignature::from_pitch_class(9, false), KeySignature(0));
        assert_eq!(KeySignature::from_pitch_class(0, false), KeySignature(-3));
    }

    #[test]
    fn test_display() {
        assert_eq!(KeySignature(-3).to_string(), "3b");
        assert_eq!(KeySignature(2).to_string(), "2#");
        assert_eq!(KeySignature(0).to_string(), "0");
    }
}
