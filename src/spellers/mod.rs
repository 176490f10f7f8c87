//! Spelling algorithms
//!
//! A speller owns a note store and a catalog of candidate tonalities.
//! `spell()` names every note of the store; callers then read the names
//! back through the store or the provided accessors.

pub mod ps13;
pub mod rewrite_passing;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellError};
use crate::models::{Accidental, NoteName};
use crate::notes::Enumerator;
use crate::ton::{Ton, TonIndex};

pub use ps13::PS13;
pub use rewrite_passing::RewritePassing;

/// Names of the available algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algo {
    Undef,
    PS13,
    RewritePassing,
}

impl Algo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algo::Undef => "undef",
            Algo::PS13 => "PS13",
            Algo::RewritePassing => "RewritePassing",
        }
    }
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Algo {
    type Err = SpellError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ps13" => Ok(Algo::PS13),
            "rewritepassing" | "rewrite_passing" => Ok(Algo::RewritePassing),
            "undef" => Ok(Algo::Undef),
            _ => Err(SpellError::Config(format!("unknown algorithm: {}", s))),
        }
    }
}

/// Contract shared by the spelling algorithms.
pub trait Speller {
    fn algo(&self) -> Algo;

    fn notes(&self) -> &Enumerator;

    fn notes_mut(&mut self) -> &mut Enumerator;

    /// Candidate tonalities, possibly empty.
    fn index(&self) -> &TonIndex;

    /// Name every note in the active range of the store.
    fn spell(&mut self) -> Result<()>;

    /// Estimated global tonality; undefined for purely local methods.
    fn global(&self) -> Ton;

    /// Position of [`Speller::global`] in [`Speller::index`], or
    /// [`TonIndex::UNDEF`].
    fn iglobal(&self) -> usize {
        let g = self.global();
        if g.undef() {
            TonIndex::UNDEF
        } else {
            self.index().find(&g)
        }
    }

    fn add(&mut self, pitch: i32, measure: i32, simultaneous: bool) -> Result<()> {
        self.notes_mut().add(pitch, measure, simultaneous)
    }

    fn len(&self) -> usize {
        self.notes().len()
    }

    fn is_empty(&self) -> bool {
        self.notes().is_empty()
    }

    fn name(&self, i: usize) -> Result<NoteName> {
        self.notes().name(i)
    }

    fn accidental(&self, i: usize) -> Result<Accidental> {
        self.notes().accidental(i)
    }

    fn octave(&self, i: usize) -> Result<i8> {
        self.notes().octave(i)
    }

    fn printed(&self, i: usize) -> Result<bool> {
        self.notes().printed(i)
    }

    /// Repair passing notes; returns how many were respelled.
    fn rewrite_passing(&mut self) -> usize {
        self.notes_mut().rewrite_passing()
    }
}
