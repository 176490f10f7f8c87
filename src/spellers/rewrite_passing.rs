//! A speller that only repairs passing notes of an already spelled store

use super::{Algo, Speller};
use crate::error::Result;
use crate::notes::Enumerator;
use crate::ton::{Ton, TonIndex};

#[derive(Debug, Clone, Default)]
pub struct RewritePassing {
    notes: Enumerator,
    index: TonIndex,
    rewritten: usize,
}

impl RewritePassing {
    pub fn new(notes: Enumerator) -> RewritePassing {
        RewritePassing {
            notes,
            index: TonIndex::default(),
            rewritten: 0,
        }
    }

    /// Take over the notes and tonalities of another speller.
    pub fn from_speller(other: &dyn Speller) -> RewritePassing {
        log::trace!("passing-note rewrite after {}", other.algo());
        RewritePassing {
            notes: other.notes().clone(),
            index: other.index().clone(),
            rewritten: 0,
        }
    }

    /// Notes rewritten by the last `spell()`.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }

    pub fn into_notes(self) -> Enumerator {
        self.notes
    }
}

impl Speller for RewritePassing {
    fn algo(&self) -> Algo {
        Algo::RewritePassing
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
        self.rewritten = self.notes.rewrite_passing();
        log::info!("rewrote {} passing notes", self.rewritten);
        Ok(())
    }

    fn global(&self) -> Ton {
        Ton::default()
    }
}
