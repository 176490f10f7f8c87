//! A mode anchored at a tonic
//!
//! The pitch class of each degree comes from the semitone distances of the
//! mode, its letter from the letter distances. The accidental is whatever
//! reconciles the two.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::mode::{Mode, ModeName};
use crate::models::{accidental_for, Accidental, NoteName};
use crate::ton::fifths;
use crate::ton::Ton;

/// One degree of a concrete scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Degree {
    pub pitch_class: u8,
    pub name: NoteName,
    pub accidental: Accidental,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    mode: ModeName,
    tonic_pc: u8,
    tonic_name: NoteName,
    degrees: Vec<Degree>,
}

impl Scale {
    /// Scale of `mode` on the tonic spelled `name` with pitch class `pc`.
    ///
    /// Panics when the letter cannot spell the pitch class, or when a degree
    /// of the mode would need more than a double accidental.
    pub fn new(mode: ModeName, pc: u8, name: NoteName) -> Scale {
        let pc = pc % 12;
        assert!(
            accidental_for(pc, name).is_some(),
            "tonic {} cannot be spelled with {}",
            pc,
            name
        );
        let m = Mode::get(mode);
        let degrees = (0..m.size())
            .map(|d| {
                let dpc = (pc + m.semitone_distance(d)) % 12;
                let dname = name.shift(m.letter_distance(d) as i32);
                let accidental = match accidental_for(dpc, dname) {
                    Some(a) => a,
                    None => panic!("degree {} of {} {} {} is unspellable", d, name, pc, mode),
                };
                Degree {
                    pitch_class: dpc,
                    name: dname,
                    accidental,
                }
            })
            .collect();
        Scale {
            mode,
            tonic_pc: pc,
            tonic_name: name,
            degrees,
        }
    }

    pub fn undef() -> Scale {
        Scale {
            mode: ModeName::Undef,
            tonic_pc: 0,
            tonic_name: NoteName::C,
            degrees: Vec::new(),
        }
    }

    /// Concrete scale of a tonality. Undefined Tons give an undefined scale.
    pub fn from_ton(ton: &Ton) -> Scale {
        if ton.undef() {
            Scale::undef()
        } else {
            Scale::new(ton.mode(), ton.pitch_class(), ton.name())
        }
    }

    pub fn mode(&self) -> ModeName {
        self.mode
    }

    pub fn size(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_undef(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn tonic(&self) -> Degree {
        self.degree(0)
    }

    /// Panics when `d >= size()`.
    pub fn degree(&self, d: usize) -> Degree {
        assert!(
            d < self.size(),
            "degree {} out of range for scale of size {}",
            d,
            self.size()
        );
        self.degrees[d]
    }

    pub fn pitch_class(&self, d: usize) -> u8 {
        self.degree(d).pitch_class
    }

    pub fn name(&self, d: usize) -> NoteName {
        self.degree(d).name
    }

    pub fn accidental(&self, d: usize) -> Accidental {
        self.degree(d).accidental
    }

    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Key signature in fifths, for the diatonic family only.
    pub fn fifths(&self) -> Option<i32> {
        if self.is_undef() || !self.mode.is_diatonic() {
            return None;
        }
        let tonic = self.tonic();
        Some(fifths::index(tonic.name, tonic.accidental) - self.mode.tonic_offset())
    }

    /// Whether the spelled pitch class is a degree of this scale.
    pub fn contains(&self, name: NoteName, accidental: Accidental) -> bool {
        self.degrees
            .iter()
            .any(|d| d.name == name && d.accidental == accidental)
    }

    /// Degree spelled with `name`, if any.
    pub fn find(&self, name: NoteName) -> Option<usize> {
        self.degrees.iter().position(|d| d.name == name)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undef() {
            return write!(f, "undef");
        }
        let tonic = self.tonic();
        write!(f, "{}{} {} [", tonic.name, tonic.accidental, self.mode)?;
        for (i, d) in self.degrees.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", d.name, d.accidental)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(scale: &Scale) -> Vec<String> {
        scale
            .degrees()
            .iter()
            .map(|d| format!("{}{}", d.name, d.accidental))
            .collect()
    }

    #[test]
    fn test_c_major() {
        let s = Scale::new(ModeName::Major, 0, NoteName::C);
        assert_eq!(spelled(&s), vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(s.fifths(), Some(0));
    }

    #[test]
    fn test_flat_tonic_keeps_its_accidental() {
        let s = Scale::new(ModeName::Major, 3, NoteName::E);
        assert_eq!(spelled(&s), vec!["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
        assert_eq!(s.tonic().accidental, Accidental::Flat);
        assert_eq!(s.fifths(), Some(-3));
    }

    #[test]
    fn test_harmonic_minor() {
        let s = Scale::new(ModeName::Minor, 0, NoteName::C);
        assert_eq!(spelled(&s), vec!["C", "D", "Eb", "F", "G", "Ab", "B"]);
        assert_eq!(s.fifths(), Some(-3));
        let s = Scale::new(ModeName::Minor, 8, NoteName::G);
        assert_eq!(s.name(6), NoteName::F);
        assert_eq!(s.accidental(6), Accidental::DoubleSharp);
    }

    #[test]
    fn test_modal_key_signature() {
        assert_eq!(Scale::new(ModeName::Dorian, 2, NoteName::D).fifths(), Some(0));
        assert_eq!(Scale::new(ModeName::Lydian, 5, NoteName::F).fifths(), Some(0));
        assert_eq!(Scale::new(ModeName::Mixolydian, 2, NoteName::D).fifths(), Some(1));
    }

    #[test]
    fn test_non_diatonic_has_no_signature() {
        let s = Scale::new(ModeName::MinorBlues, 0, NoteName::C);
        assert_eq!(spelled(&s), vec!["C", "Eb", "F", "Gb", "G", "Bb"]);
        assert_eq!(s.fifths(), None);
        assert_eq!(Scale::undef().fifths(), None);
    }

    #[test]
    fn test_chromatic_reference() {
        let s = Scale::new(ModeName::Chromatic, 0, NoteName::C);
        assert_eq!(
            spelled(&s),
            vec!["C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"]
        );
    }

    #[test]
    fn test_contains() {
        let s = Scale::new(ModeName::Major, 7, NoteName::G);
        assert!(s.contains(NoteName::F, Accidental::Sharp));
        assert!(!s.contains(NoteName::F, Accidental::Natural));
        assert_eq!(s.find(NoteName::F), Some(6));
    }

    #[test]
    fn test_display() {
        let s = Scale::new(ModeName::Major5, 0, NoteName::C);
        assert_eq!(s.to_string(), "C major pentatonic [C D E G A]");
    }

    #[test]
    #[should_panic]
    fn test_degree_out_of_range() {
        Scale::new(ModeName::Major, 0, NoteName::C).degree(7);
    }

    #[test]
    #[should_panic]
    fn test_bad_tonic() {
        Scale::new(ModeName::Major, 6, NoteName::C);
    }
}
