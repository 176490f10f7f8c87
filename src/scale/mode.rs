//! Catalog of scale interval patterns
//!
//! Every mode is a cycle of degrees described by two step tables of equal
//! length: semitones between consecutive degrees and letters between
//! consecutive degrees. The last step wraps back to the tonic, so the
//! semitone steps of a mode always sum to 12 and the letter steps to 7.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SpellError;

/// Names of the modes in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeName {
    Undef,
    Major,
    /// Harmonic minor.
    Minor,
    MinorNat,
    MinorMel,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    Major5,
    Minor5,
    MajorBlues,
    MinorBlues,
    Augmented,
    Diminished,
    DiminishedHW,
    Chromatic,
}

impl ModeName {
    /// Every defined mode, in catalog order.
    pub const ALL: [ModeName; 19] = [
        ModeName::Major,
        ModeName::Minor,
        ModeName::MinorNat,
        ModeName::MinorMel,
        ModeName::Ionian,
        ModeName::Dorian,
        ModeName::Phrygian,
        ModeName::Lydian,
        ModeName::Mixolydian,
        ModeName::Aeolian,
        ModeName::Locrian,
        ModeName::Major5,
        ModeName::Minor5,
        ModeName::MajorBlues,
        ModeName::MinorBlues,
        ModeName::Augmented,
        ModeName::Diminished,
        ModeName::DiminishedHW,
        ModeName::Chromatic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeName::Undef => "undef",
            ModeName::Major => "major",
            ModeName::Minor => "minor",
            ModeName::MinorNat => "minor natural",
            ModeName::MinorMel => "minor melodic",
            ModeName::Ionian => "ionian",
            ModeName::Dorian => "dorian",
            ModeName::Phrygian => "phrygian",
            ModeName::Lydian => "lydian",
            ModeName::Mixolydian => "mixolydian",
            ModeName::Aeolian => "aeolian",
            ModeName::Locrian => "locrian",
            ModeName::Major5 => "major pentatonic",
            ModeName::Minor5 => "minor pentatonic",
            ModeName::MajorBlues => "major blues",
            ModeName::MinorBlues => "minor blues",
            ModeName::Augmented => "augmented",
            ModeName::Diminished => "diminished",
            ModeName::DiminishedHW => "diminished half-whole",
            ModeName::Chromatic => "chromatic",
        }
    }

    /// Major, the three minors and the seven church modes.
    pub fn is_diatonic(self) -> bool {
        matches!(
            self,
            ModeName::Major
                | ModeName::Minor
                | ModeName::MinorNat
                | ModeName::MinorMel
                | ModeName::Ionian
                | ModeName::Dorian
                | ModeName::Phrygian
                | ModeName::Lydian
                | ModeName::Mixolydian
                | ModeName::Aeolian
                | ModeName::Locrian
        )
    }

    /// Modes whose tonic sits a minor third below the relative major.
    pub fn is_minor(self) -> bool {
        matches!(
            self,
            ModeName::Minor
                | ModeName::MinorNat
                | ModeName::MinorMel
                | ModeName::Aeolian
                | ModeName::Minor5
                | ModeName::MinorBlues
        )
    }

    pub fn is_undef(self) -> bool {
        self == ModeName::Undef
    }

    /// Position of the tonic on the line of fifths, relative to the tonic
    /// of the major key with the same key signature.
    ///
    /// Minor keys sit three fifths above their relative major (A vs C),
    /// church modes sit at their rotation of the major scale.
    pub fn tonic_offset(self) -> i32 {
        match self {
            ModeName::Minor
            | ModeName::MinorNat
            | ModeName::MinorMel
            | ModeName::Aeolian
            | ModeName::Minor5
            | ModeName::MinorBlues => 3,
            ModeName::Dorian => 2,
            ModeName::Phrygian => 4,
            ModeName::Lydian => -1,
            ModeName::Mixolydian => 1,
            ModeName::Locrian => 5,
            _ => 0,
        }
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModeName {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let name = match key.as_str() {
            "undef" => ModeName::Undef,
            "major" | "maj" => ModeName::Major,
            "minor" | "min" | "minor harmonic" | "min harm" => ModeName::Minor,
            "minor natural" | "min nat" => ModeName::MinorNat,
            "minor melodic" | "min mel" => ModeName::MinorMel,
            "ionian" => ModeName::Ionian,
            "dorian" => ModeName::Dorian,
            "phrygian" => ModeName::Phrygian,
            "lydian" => ModeName::Lydian,
            "mixolydian" => ModeName::Mixolydian,
            "aeolian" | "eolian" => ModeName::Aeolian,
            "locrian" => ModeName::Locrian,
            "major pentatonic" | "maj5" => ModeName::Major5,
            "minor pentatonic" | "min5" => ModeName::Minor5,
            "major blues" | "maj blues" => ModeName::MajorBlues,
            "minor blues" | "min blues" => ModeName::MinorBlues,
            "augmented" | "aug" => ModeName::Augmented,
            "diminished" | "dim" => ModeName::Diminished,
            "diminished half-whole" | "dim hw" => ModeName::DiminishedHW,
            "chromatic" => ModeName::Chromatic,
            _ => {
                log::warn!("unknown mode name '{}'", s);
                return Err(SpellError::UnknownMode(s.to_string()));
            }
        };
        Ok(name)
    }
}

/// Step tables of a mode: (semitones, letters) per degree.
fn steps(name: ModeName) -> (&'static [u8], &'static [u8]) {
    use ModeName as M;
    match name {
        M::Undef => (&[], &[]),
        M::Major | M::Ionian => (&[2, 2, 1, 2, 2, 2, 1], &[1; 7]),
        M::Minor => (&[2, 1, 2, 2, 1, 3, 1], &[1; 7]),
        M::MinorNat | M::Aeolian => (&[2, 1, 2, 2, 1, 2, 2], &[1; 7]),
        M::MinorMel => (&[2, 1, 2, 2, 2, 2, 1], &[1; 7]),
        M::Dorian => (&[2, 1, 2, 2, 2, 1, 2], &[1; 7]),
        M::Phrygian => (&[1, 2, 2, 2, 1, 2, 2], &[1; 7]),
        M::Lydian => (&[2, 2, 2, 1, 2, 2, 1], &[1; 7]),
        M::Mixolydian => (&[2, 2, 1, 2, 2, 1, 2], &[1; 7]),
        M::Locrian => (&[1, 2, 2, 1, 2, 2, 2], &[1; 7]),
        // Pentatonic, blues and augmented letters follow the common textbook
        // spelling written above each row (major blues: C D Eb E G A).
        // C D E G A
        M::Major5 => (&[2, 2, 3, 2, 3], &[1, 1, 2, 1, 2]),
        // A C D E G
        M::Minor5 => (&[3, 2, 2, 3, 2], &[2, 1, 1, 2, 1]),
        // C D Eb E G A
        M::MajorBlues => (&[2, 1, 1, 3, 2, 3], &[1, 1, 0, 2, 1, 2]),
        // C Eb F Gb G Bb
        M::MinorBlues => (&[3, 2, 1, 1, 3, 2], &[2, 1, 1, 0, 2, 1]),
        // C Eb E G Ab B
        M::Augmented => (&[3, 1, 3, 1, 3, 1], &[2, 0, 2, 1, 1, 1]),
        // C D Eb F Gb Ab A B
        M::Diminished => (&[2, 1, 2, 1, 2, 1, 2, 1], &[1, 1, 1, 1, 1, 0, 1, 1]),
        // C Db Eb E F# G A Bb
        M::DiminishedHW => (&[1, 2, 1, 2, 1, 2, 1, 2], &[1, 1, 0, 1, 1, 1, 1, 1]),
        // C C# D Eb E F F# G Ab A Bb B
        M::Chromatic => (&[1; 12], &[1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1]),
    }
}

/// A mode of the catalog with its cumulative distances precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    name: ModeName,
    semitones: Vec<u8>,
    letters: Vec<u8>,
    // distances from degree 0
    semitone_dist: Vec<u8>,
    letter_dist: Vec<u8>,
}

static CATALOG: Lazy<HashMap<ModeName, Mode>> = Lazy::new(|| {
    ModeName::ALL
        .iter()
        .chain(std::iter::once(&ModeName::Undef))
        .map(|&n| {
            let (semi, letters) = steps(n);
            (n, Mode::from_steps(n, semi, letters))
        })
        .collect()
});

impl Mode {
    /// Mode from the catalog.
    pub fn new(name: ModeName) -> Mode {
        match CATALOG.get(&name) {
            Some(mode) => mode.clone(),
            None => Mode::undef(),
        }
    }

    /// Shared catalog entry, without cloning.
    pub fn get(name: ModeName) -> &'static Mode {
        &CATALOG[&name]
    }

    /// Mode looked up by its textual name.
    pub fn from_name(name: &str) -> Result<Mode, SpellError> {
        Ok(Mode::new(name.parse::<ModeName>()?))
    }

    pub fn undef() -> Mode {
        Mode::from_steps(ModeName::Undef, &[], &[])
    }

    /// Build a mode from raw step tables.
    ///
    /// Panics when the two tables differ in length.
    pub fn from_steps(name: ModeName, semitones: &[u8], letters: &[u8]) -> Mode {
        assert_eq!(
            semitones.len(),
            letters.len(),
            "mode {}: step tables of different length",
            name
        );
        let cumulate = |steps: &[u8]| -> Vec<u8> {
            let mut acc = 0u8;
            let mut dist = Vec::with_capacity(steps.len());
            for &s in steps {
                dist.push(acc);
                acc += s;
            }
            dist
        };
        Mode {
            name,
            semitone_dist: cumulate(semitones),
            letter_dist: cumulate(letters),
            semitones: semitones.to_vec(),
            letters: letters.to_vec(),
        }
    }

    pub fn name(&self) -> ModeName {
        self.name
    }

    /// Number of degrees.
    pub fn size(&self) -> usize {
        self.semitones.len()
    }

    pub fn is_undef(&self) -> bool {
        self.semitones.is_empty()
    }

    /// Semitones from degree `d` to the next one.
    pub fn semitones(&self, d: usize) -> u8 {
        assert!(d < self.size(), "degree {} out of range for {}", d, self.name);
        self.semitones[d]
    }

    /// Letter steps from degree `d` to the next one.
    pub fn letters(&self, d: usize) -> u8 {
        assert!(d < self.size(), "degree {} out of range for {}", d, self.name);
        self.letters[d]
    }

    /// Semitones from the tonic to degree `d`.
    pub fn semitone_distance(&self, d: usize) -> u8 {
        assert!(d < self.size(), "degree {} out of range for {}", d, self.name);
        self.semitone_dist[d]
    }

    /// Letter steps from the tonic to degree `d`.
    pub fn letter_distance(&self, d: usize) -> u8 {
        assert!(d < self.size(), "degree {} out of range for {}", d, self.name);
        self.letter_dist[d]
    }
}
