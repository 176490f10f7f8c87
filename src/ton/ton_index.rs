//! Ordered catalogs of candidate tonalities
//!
//! Spellers that rank tonal hypotheses address them by position in a
//! `TonIndex`. The generated catalogs list one mode after the other, each
//! by increasing key signature, so index 0 is always the flattest major.

use std::ops::Index;

use super::ton::Ton;
use crate::error::{Result, SpellError};
use crate::scale::ModeName;

/// Modes of the 104-entry catalog (key signatures -6..=6).
const MODES_104: [ModeName; 8] = [
    ModeName::Major,
    ModeName::Minor,
    ModeName::Dorian,
    ModeName::Phrygian,
    ModeName::Lydian,
    ModeName::Mixolydian,
    ModeName::Aeolian,
    ModeName::Locrian,
];

/// Modes of the 135-entry catalog (key signatures -7..=7).
const MODES_135: [ModeName; 9] = [
    ModeName::Major,
    ModeName::Minor,
    ModeName::MinorMel,
    ModeName::Dorian,
    ModeName::Phrygian,
    ModeName::Lydian,
    ModeName::Mixolydian,
    ModeName::Aeolian,
    ModeName::Locrian,
];

/// Modes of the 165-entry catalog (key signatures -7..=7).
const MODES_165: [ModeName; 11] = [
    ModeName::Major,
    ModeName::Minor,
    ModeName::MinorMel,
    ModeName::Dorian,
    ModeName::Phrygian,
    ModeName::Lydian,
    ModeName::Mixolydian,
    ModeName::Aeolian,
    ModeName::Locrian,
    ModeName::MajorBlues,
    ModeName::MinorBlues,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TonIndex {
    tons: Vec<Ton>,
}

impl TonIndex {
    /// Index value meaning "no tonality selected".
    pub const UNDEF: usize = usize::MAX;

    /// Generate the catalog of `n` tonalities.
    ///
    /// - 0: empty
    /// - 25: major -4..=7 then minor -6..=6
    /// - 2 * (2k + 1), k in 0..=7: major then harmonic minor, -k..=k
    /// - 104, 135, 165: several modes, see the mode tables
    pub fn new(n: usize) -> Result<TonIndex> {
        let mut index = TonIndex::default();
        match n {
            0 => {}
            25 => {
                index.add_range(ModeName::Major, -4, 7);
                index.add_range(ModeName::Minor, -6, 6);
            }
            104 => {
                for mode in MODES_104 {
                    index.add_range(mode, -6, 6);
                }
            }
            135 => {
                for mode in MODES_135 {
                    index.add_range(mode, -7, 7);
                }
            }
            165 => {
                for mode in MODES_165 {
                    index.add_range(mode, -7, 7);
                }
            }
            n if n % 4 == 2 && n <= 30 => {
                let k = ((n / 2 - 1) / 2) as i32;
                index.add_range(ModeName::Major, -k, k);
                index.add_range(ModeName::Minor, -k, k);
            }
            _ => {
                log::warn!("unsupported number of tonalities: {}", n);
                return Err(SpellError::UnsupportedTonCount(n));
            }
        }
        debug_assert_eq!(index.size(), n);
        Ok(index)
    }

    fn add_range(&mut self, mode: ModeName, from: i32, to: i32) {
        for ks in from..=to {
            self.tons.push(Ton::new(ks, mode));
        }
    }

    pub fn size(&self) -> usize {
        self.tons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tons.is_empty()
    }

    /// Panics when `i >= size()`.
    pub fn ton(&self, i: usize) -> &Ton {
        assert!(i < self.size(), "tonality index {} out of range", i);
        &self.tons[i]
    }

    /// Append a tonality at the end of the catalog.
    pub fn add(&mut self, ton: Ton) {
        self.tons.push(ton);
    }

    /// Position of `ton`, or [`TonIndex::UNDEF`].
    pub fn find(&self, ton: &Ton) -> usize {
        self.tons
            .iter()
            .position(|t| t == ton)
            .unwrap_or(TonIndex::UNDEF)
    }

    pub fn clear(&mut self) {
        log::trace!("emptying tonality index");
        self.tons.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ton> {
        self.tons.iter()
    }
}

impl Index<usize> for TonIndex {
    type Output = Ton;

    fn index(&self, i: usize) -> &Ton {
        self.ton(i)
    }
}

impl<'a> IntoIterator for &'a TonIndex {
    type Item = &'a Ton;
    type IntoIter = std::slice::Iter<'a, Ton>;

    fn into_iter(self) -> Self::IntoIter {
        self.tons.iter()
    }
}
