//! Tonalities: a key signature together with a mode
//!
//! The tonic sits on the line of fifths at the key signature plus an
//! offset that depends on the mode (3 for the minors, so that `-3` minor is
//! C minor, 2 for dorian, and so on).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::fifths::{self, KeySignature};
use crate::models::{Accidental, NoteName};
use crate::scale::{ModeName, Scale};

/// A tonality. The default value is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ton {
    fifths: i32,
    mode: ModeName,
}

impl Default for Ton {
    fn default() -> Self {
        Ton {
            fifths: 0,
            mode: ModeName::Undef,
        }
    }
}

impl Ton {
    /// Tonality with `fifths` in -7..=7 (negative for flats).
    ///
    /// Panics when the key signature is out of range for a defined mode.
    pub fn new(fifths: i32, mode: ModeName) -> Ton {
        if mode.is_undef() {
            return Ton::default();
        }
        assert!(
            (-7..=7).contains(&fifths),
            "key signature {} out of range",
            fifths
        );
        Ton { fifths, mode }
    }

    pub fn undef(&self) -> bool {
        self.mode.is_undef()
    }

    pub fn mode(&self) -> ModeName {
        self.mode
    }

    /// Key signature, in fifths.
    pub fn fifths(&self) -> i32 {
        self.fifths
    }

    pub fn key_signature(&self) -> KeySignature {
        KeySignature(self.fifths)
    }

    /// Position of the tonic on the line of fifths.
    pub fn tonic_fifth(&self) -> i32 {
        self.fifths + self.mode.tonic_offset()
    }

    /// Letter of the tonic.
    pub fn name(&self) -> NoteName {
        fifths::name(self.tonic_fifth())
    }

    /// Accidental of the tonic.
    pub fn accidental(&self) -> Accidental {
        fifths::accidental(self.tonic_fifth())
    }

    pub fn pitch_class(&self) -> u8 {
        fifths::pitch_class(self.tonic_fifth())
    }

    pub fn scale(&self) -> Scale {
        Scale::from_ton(self)
    }

    fn check_defined(&self) {
        assert!(!self.undef(), "accidental query on an undefined tonality");
    }

    /// Accidental of `letter` in the key signature.
    pub fn accid_key(&self, letter: NoteName) -> Accidental {
        self.check_defined();
        self.key_signature().accidental(letter)
    }

    /// Accidental of `letter` as a degree of the scale of this tonality.
    ///
    /// Differs from [`Ton::accid_key`] on altered degrees, such as the
    /// leading tone of harmonic minor. In modes that skip `letter`, the key
    /// signature accidental.
    pub fn accid_dia(&self, letter: NoteName) -> Accidental {
        self.check_defined();
        let scale = self.scale();
        match scale.find(letter) {
            Some(d) => scale.accidental(d),
            None => self.accid_key(letter),
        }
    }

    /// Every accidental `letter` takes in the scale, in degree order.
    ///
    /// Empty when the scale skips the letter; two entries for letters used
    /// twice (blues, symmetric and chromatic modes).
    pub fn accid_scale(&self, letter: NoteName) -> Vec<Accidental> {
        self.check_defined();
        self.scale()
            .degrees()
            .iter()
            .filter(|d| d.name == letter)
            .map(|d| d.accidental)
            .collect()
    }

    /// Whether the scale raises `letter` above the key signature, as the
    /// harmonic and melodic minors do.
    pub fn lead(&self, letter: NoteName) -> bool {
        matches!(self.mode, ModeName::Minor | ModeName::MinorMel)
            && self.accid_dia(letter) != self.accid_key(letter)
    }

    /// Distance on the line of fifths between a note and the key
    /// signature.
    pub fn dist(&self, name: NoteName, accidental: Accidental) -> u32 {
        (fifths::index(name, accidental) - self.fifths).unsigned_abs()
    }

    pub fn dist_fifths(&self, other: &Ton) -> u32 {
        (self.fifths - other.fifths).unsigned_abs()
    }

    /// Number of letters whose scale accidental differs between the two
    /// tonalities.
    pub fn dist_hamming(&self, other: &Ton) -> u32 {
        NoteName::ALL
            .iter()
            .filter(|&&n| self.accid_dia(n) != other.accid_dia(n))
            .count() as u32
    }

    /// Sum over letters of the semitone difference of the scale accidentals.
    pub fn dist_diatonic(&self, other: &Ton) -> u32 {
        NoteName::ALL
            .iter()
            .map(|&n| (self.accid_dia(n).semitones() - other.accid_dia(n).semitones()).unsigned_abs())
            .sum()
    }
}

impl From<&Scale> for Ton {
    /// Tonality of a diatonic scale; undefined for other modes.
    fn from(scale: &Scale) -> Ton {
        match scale.fifths() {
            Some(k) if (-7..=7).contains(&k) => Ton::new(k, scale.mode()),
            _ => Ton::default(),
        }
    }
}

impl PartialOrd for Ton {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ton {
    /// Mode first (in catalog order), then key signature.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.mode as u8, self.fifths).cmp(&(other.mode as u8, other.fifths))
    }
}

impl fmt::Display for Ton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.undef() {
            return write!(f, "undef");
        }
        write!(
            f,
            "{}{} {} ({})",
            self.name(),
            self.accidental(),
            self.mode,
            self.key_signature()
        )
    }
}
