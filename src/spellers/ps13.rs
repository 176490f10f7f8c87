//! PS13: spelling by local vote over chromatic scales
//!
//! For every note, each pitch class p of the neighbourhood votes for the
//! letter the note would take in the chromatic scale built on p. A vote
//! weighs as many notes of pitch class p as the window around the note
//! holds. The letter with the most votes wins.

use once_cell::sync::Lazy;

use super::{Algo, Speller};
use crate::config::{SpellerConfig, DEFAULT_KPOST, DEFAULT_KPRE};
use crate::error::Result;
use crate::models::{pitch_class, NoteName};
use crate::notes::Enumerator;
use crate::scale::{ModeName, Scale};
use crate::ton::{Ton, TonIndex};

/// Tonic letters of the reference chromatic scales, by pitch class.
const TONIC_NAMES: [NoteName; 12] = [
    NoteName::C,
    NoteName::D,
    NoteName::D,
    NoteName::E,
    NoteName::E,
    NoteName::F,
    NoteName::F,
    NoteName::G,
    NoteName::A,
    NoteName::A,
    NoteName::B,
    NoteName::B,
];

/// One chromatic scale per tonic pitch class.
static CHROMATIC_SCALES: Lazy<Vec<Scale>> = Lazy::new(|| {
    TONIC_NAMES
        .iter()
        .enumerate()
        .map(|(pc, &name)| Scale::new(ModeName::Chromatic, pc as u8, name))
        .collect()
});

/// Number of tonic hypotheses voting for each note. Pitch class 11 does
/// not vote.
const VOTERS: u8 = 11;

#[derive(Debug, Clone)]
pub struct PS13 {
    notes: Enumerator,
    index: TonIndex,
    kpre: usize,
    kpost: usize,
    debug: bool,
    rewrite: bool,
}

impl Default for PS13 {
    fn default() -> Self {
        PS13::new(DEFAULT_KPRE, DEFAULT_KPOST)
    }
}

impl PS13 {
    /// Speller with window `[n - kpre, n + kpost)` around each note.
    pub fn new(kpre: usize, kpost: usize) -> PS13 {
        PS13 {
            notes: Enumerator::new(),
            index: TonIndex::default(),
            kpre,
            kpost,
            debug: false,
            rewrite: false,
        }
    }

    pub fn with_config(config: &SpellerConfig) -> Result<PS13> {
        Ok(PS13 {
            notes: Enumerator::new(),
            index: TonIndex::new(config.tons)?,
            kpre: config.kpre,
            kpost: config.kpost,
            debug: config.debug,
            rewrite: config.rewrite_passing,
        })
    }

    /// Speller over an existing note store.
    pub fn with_notes(mut self, notes: Enumerator) -> PS13 {
        self.notes = notes;
        self
    }

    pub fn kpre(&self) -> usize {
        self.kpre
    }

    pub fn kpost(&self) -> usize {
        self.kpost
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn set_rewrite_passing(&mut self, rewrite: bool) {
        self.rewrite = rewrite;
    }

    pub fn into_notes(self) -> Enumerator {
        self.notes
    }

    /// Letter elected for note `n`.
    fn vote(&self, n: usize) -> Result<NoteName> {
        let c = pitch_class(self.notes.midipitch(n)?);
        let mut tally = [0usize; 7];
        let mut best: Option<NoteName> = None;
        for p in 0..VOTERS {
            let deg = ((c + 12 - p) % 12) as usize;
            let letter = CHROMATIC_SCALES[p as usize].name(deg);
            tally[letter.index()] += self.notes.count(p, n, self.kpre, self.kpost);
            // first letter to reach the maximum keeps it
            if best.map_or(true, |b| tally[letter.index()] > tally[b.index()]) {
                best = Some(letter);
            }
        }
        if self.debug {
            log::debug!("PS13 note {} (pc {}): votes {:?}", n, c, tally);
        }
        Ok(best.unwrap_or(NoteName::C))
    }
}

impl Speller for PS13 {
    fn algo(&self) -> Algo {
        Algo::PS13
    }

    fn notes(&self) -> &Enumerator {
        &self.notes
    }

    fn notes_mut(&mut self) -> &mut Enumerator {
        &mut self.notes
    }

    fn index(&self) -> &TonIndex {
        &self.index
    }

    fn spell(&mut self) -> Result<()> {
        let (first, stop) = (self.notes.first(), self.notes.stop());
        for n in first..stop {
            let letter = self.vote(n)?;
            self.notes.rename(n, letter)?;
            if self.debug {
                log::debug!("PS13 note {} -> {}", n, self.notes.spelling(n)?);
            }
        }
        let rewritten = if self.rewrite {
            self.notes.rewrite_passing()
        } else {
            0
        };
        log::info!(
            "PS13 spelled {} notes (window {}/{}), {} passing notes rewritten",
            stop - first,
            self.kpre,
            self.kpost,
            rewritten
        );
        Ok(())
    }

    fn global(&self) -> Ton {
        Ton::default()
    }
}
