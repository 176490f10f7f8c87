//! Pitch arithmetic: MIDI numbers, pitch classes and spelled pitches
//!
//! A spelled pitch is a letter, an accidental and an octave. Octaves follow
//! the usual convention where MIDI 60 is C4 and the octave number changes
//! between B and C, so MIDI 60 spelled B# is B#3 and MIDI 59 spelled Cb is
//! Cb4.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::accidental::Accidental;
use super::note_name::NoteName;
use crate::error::{Result, SpellError};

/// Lowest accepted input pitch.
pub const MIN_PITCH: i32 = 0;
/// Highest accepted input pitch.
pub const MAX_PITCH: i32 = 128;

/// Validate a raw input pitch.
pub fn check_midi(pitch: i32) -> Result<u8> {
    if (MIN_PITCH..=MAX_PITCH).contains(&pitch) {
        Ok(pitch as u8)
    } else {
        Err(SpellError::InvalidPitch(pitch))
    }
}

pub fn pitch_class(midi: u8) -> u8 {
    midi % 12
}

/// Accidental that turns `name` into pitch class `pc`.
///
/// `None` when the letter is more than two semitones away from the pitch
/// class in either direction.
pub fn accidental_for(pc: u8, name: NoteName) -> Option<Accidental> {
    let mut diff = (pc as i32 - name.pitch_class() as i32).rem_euclid(12);
    if diff > 6 {
        diff -= 12;
    }
    Accidental::from_semitones(diff)
}

/// Octave of `midi` when written as `name` + `accidental`.
///
/// The octave is the one of the unaltered letter, which is what makes
/// B# and C## sit one octave below the C they sound as.
pub fn octave_for(midi: u8, name: NoteName, accidental: Accidental) -> i8 {
    let natural = midi as i32 - accidental.semitones();
    debug_assert_eq!(natural.rem_euclid(12), name.pitch_class() as i32);
    (natural.div_euclid(12) - 1) as i8
}

/// MIDI number of a spelled pitch. May fall outside 0..=128.
pub fn to_midi(name: NoteName, accidental: Accidental, octave: i8) -> i32 {
    (octave as i32 + 1) * 12 + name.pitch_class() as i32 + accidental.semitones()
}

/// Every (letter, accidental) pair that spells pitch class `pc`, in letter
/// order from C.
pub fn enharmonics(pc: u8) -> Vec<(NoteName, Accidental)> {
    NoteName::ALL
        .iter()
        .filter_map(|&n| accidental_for(pc % 12, n).map(|a| (n, a)))
        .collect()
}

/// Resolved name of one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spelling {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: i8,
    /// Whether the accidental is to be printed.
    pub printed: bool,
}

impl Spelling {
    /// Spell `midi` with letter `name`, deriving accidental and octave.
    pub fn for_pitch(midi: u8, name: NoteName) -> Option<Spelling> {
        let accidental = accidental_for(pitch_class(midi), name)?;
        Some(Spelling {
            name,
            accidental,
            octave: octave_for(midi, name, accidental),
            printed: !accidental.is_natural(),
        })
    }

    pub fn midi(&self) -> i32 {
        to_midi(self.name, self.accidental, self.octave)
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.accidental, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_midi_bounds() {
        assert_eq!(check_midi(0).unwrap(), 0);
        assert_eq!(check_midi(128).unwrap(), 128);
        assert_eq!(check_midi(-1), Err(SpellError::InvalidPitch(-1)));
        assert_eq!(check_midi(129), Err(SpellError::InvalidPitch(129)));
    }

    #[test]
    fn test_accidental_for() {
        assert_eq!(accidental_for(1, NoteName::C), Some(Accidental::Sharp));
        assert_eq!(accidental_for(1, NoteName::D), Some(Accidental::Flat));
        assert_eq!(accidental_for(0, NoteName::B), Some(Accidental::Sharp));
        assert_eq!(accidental_for(11, NoteName::C), Some(Accidental::Flat));
        assert_eq!(accidental_for(1, NoteName::B), Some(Accidental::DoubleSharp));
        assert_eq!(accidental_for(10, NoteName::C), Some(Accidental::DoubleFlat));
        assert_eq!(accidental_for(6, NoteName::C), None);
    }

    #[test]
    fn test_octave_changes_at_c() {
        assert_eq!(octave_for(60, NoteName::C, Accidental::Natural), 4);
        assert_eq!(octave_for(60, NoteName::B, Accidental::Sharp), 3);
        assert_eq!(octave_for(61, NoteName::B, Accidental::DoubleSharp), 3);
        assert_eq!(octave_for(59, NoteName::C, Accidental::Flat), 4);
        assert_eq!(octave_for(58, NoteName::C, Accidental::DoubleFlat), 4);
        assert_eq!(octave_for(59, NoteName::B, Accidental::Natural), 3);
    }

    #[test]
    fn test_spelling_round_trip_midi() {
        for midi in 0..=128u8 {
            for (name, _) in enharmonics(pitch_class(midi)) {
                let s = Spelling::for_pitch(midi, name).unwrap();
                assert_eq!(s.midi(), midi as i32, "{}", s);
            }
        }
    }

    #[test]
    fn test_enharmonics() {
        assert_eq!(
            enharmonics(0),
            vec![
                (NoteName::C, Accidental::Natural),
                (NoteName::D, Accidental::DoubleFlat),
                (NoteName::B, Accidental::Sharp),
            ]
        );
        // G#/Ab is the only pitch class with two spellings
        assert_eq!(enharmonics(8).len(), 2);
    }

    #[test]
    fn test_display() {
        let s = Spelling::for_pitch(61, NoteName::D).unwrap();
        assert_eq!(s.to_string(), "Db4");
        assert!(s.printed);
    }
}
