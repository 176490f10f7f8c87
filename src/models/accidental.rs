//! Accidentals, from double flat to double sharp

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Default for Accidental {
    fn default() -> Self {
        Accidental::Natural
    }
}

impl Accidental {
    pub const ALL: [Accidental; 5] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// Signed semitone offset applied to the natural letter.
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for a semitone offset in -2..=2.
    pub fn from_semitones(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    pub fn is_natural(self) -> bool {
        self == Accidental::Natural
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Accidental {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bb" | "♭♭" | "𝄫" => Ok(Accidental::DoubleFlat),
            "b" | "♭" => Ok(Accidental::Flat),
            "" | "n" | "♮" => Ok(Accidental::Natural),
            "#" | "♯" => Ok(Accidental::Sharp),
            "##" | "x" | "𝄪" => Ok(Accidental::DoubleSharp),
            _ => Err(SpellError::UnknownAccidental(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitone_round_trip() {
        for a in Accidental::ALL {
            assert_eq!(Accidental::from_semitones(a.semitones()), Some(a));
        }
        assert_eq!(Accidental::from_semitones(3), None);
        assert_eq!(Accidental::from_semitones(-3), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("#".parse::<Accidental>().unwrap(), Accidental::Sharp);
        assert_eq!("x".parse::<Accidental>().unwrap(), Accidental::DoubleSharp);
        assert_eq!("".parse::<Accidental>().unwrap(), Accidental::Natural);
        assert!("###".parse::<Accidental>().is_err());
    }
}
