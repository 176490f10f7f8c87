//! The note store
//!
//! Notes are appended in input order with their pitch, bar number and a
//! flag telling whether they sound together with the previous note. A
//! speller later fills in a spelling for each of them. Entries are never
//! removed; only their spelling is overwritten.

use num_rational::Rational32;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::models::{check_midi, pitch_class, to_midi, Accidental, NoteName, Spelling};

/// One input note and its spelling, once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub pitch: u8,
    pub measure: i32,
    pub simultaneous: bool,
    /// Duration in bars.
    pub duration: Rational32,
    pub spelling: Option<Spelling>,
}

/// Snapshot of one note, for consumers of the spelled sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpelledNote {
    pub index: usize,
    pub pitch: u8,
    pub measure: i32,
    pub simultaneous: bool,
    pub duration: Rational32,
    pub spelling: Option<Spelling>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumerator {
    notes: Vec<NoteEntry>,
    // explicit active range set by reset()
    range: Option<(usize, usize)>,
    capacity: Option<usize>,
    closed: bool,
}

impl Enumerator {
    /// Empty store accepting any number of notes until closed.
    pub fn new() -> Enumerator {
        Enumerator::default()
    }

    /// Empty store that closes itself once it holds `n` notes.
    pub fn with_capacity(n: usize) -> Enumerator {
        Enumerator {
            notes: Vec::with_capacity(n),
            range: None,
            capacity: Some(n),
            closed: n == 0,
        }
    }

    /// Append a note with zero duration.
    pub fn add(&mut self, pitch: i32, measure: i32, simultaneous: bool) -> Result<()> {
        self.add_with_duration(pitch, measure, simultaneous, Rational32::from_integer(0))
    }

    /// Append a note. Fails on a closed store or an invalid pitch.
    pub fn add_with_duration(
        &mut self,
        pitch: i32,
        measure: i32,
        simultaneous: bool,
        duration: Rational32,
    ) -> Result<()> {
        if self.closed {
            return Err(SpellError::StoreClosed);
        }
        let pitch = check_midi(pitch)?;
        self.notes.push(NoteEntry {
            pitch,
            measure,
            simultaneous,
            duration,
            spelling: None,
        });
        if self.capacity == Some(self.notes.len()) {
            log::trace!("note store full at {} notes", self.notes.len());
            self.closed = true;
        }
        Ok(())
    }

    /// Refuse further appends.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// How many more notes the store accepts, `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        if self.closed {
            return Some(0);
        }
        self.capacity.map(|n| n.saturating_sub(self.notes.len()))
    }

    /// Number of stored notes, active or not.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// First index of the active range.
    pub fn first(&self) -> usize {
        match self.range {
            Some((first, _)) => first.min(self.notes.len()),
            None => 0,
        }
    }

    /// One past the last index of the active range.
    pub fn stop(&self) -> usize {
        match self.range {
            Some((_, stop)) => stop.min(self.notes.len()),
            None => self.notes.len(),
        }
    }

    /// Restrict the active range to `[first, stop)`.
    ///
    /// Panics when `first > stop`.
    pub fn reset(&mut self, first: usize, stop: usize) {
        assert!(first <= stop, "empty range [{}, {})", first, stop);
        self.range = Some((first, stop));
    }

    pub fn inside(&self, i: usize) -> bool {
        self.first() <= i && i < self.stop()
    }

    fn entry(&self, i: usize) -> Result<&NoteEntry> {
        if self.inside(i) {
            Ok(&self.notes[i])
        } else {
            Err(SpellError::OutOfRange {
                index: i,
                first: self.first(),
                stop: self.stop(),
            })
        }
    }

    fn entry_mut(&mut self, i: usize) -> Result<&mut NoteEntry> {
        if self.inside(i) {
            Ok(&mut self.notes[i])
        } else {
            Err(SpellError::OutOfRange {
                index: i,
                first: self.first(),
                stop: self.stop(),
            })
        }
    }

    pub fn midipitch(&self, i: usize) -> Result<u8> {
        Ok(self.entry(i)?.pitch)
    }

    pub fn measure(&self, i: usize) -> Result<i32> {
        Ok(self.entry(i)?.measure)
    }

    pub fn simultaneous(&self, i: usize) -> Result<bool> {
        Ok(self.entry(i)?.simultaneous)
    }

    pub fn duration(&self, i: usize) -> Result<Rational32> {
        Ok(self.entry(i)?.duration)
    }

    /// Spelling of note `i`; fails if it has not been renamed yet.
    pub fn spelling(&self, i: usize) -> Result<Spelling> {
        self.entry(i)?.spelling.ok_or(SpellError::Unspelled(i))
    }

    pub fn name(&self, i: usize) -> Result<NoteName> {
        Ok(self.spelling(i)?.name)
    }

    pub fn accidental(&self, i: usize) -> Result<Accidental> {
        Ok(self.spelling(i)?.accidental)
    }

    pub fn octave(&self, i: usize) -> Result<i8> {
        Ok(self.spelling(i)?.octave)
    }

    pub fn printed(&self, i: usize) -> Result<bool> {
        Ok(self.spelling(i)?.printed)
    }

    pub fn is_spelled(&self, i: usize) -> bool {
        matches!(self.entry(i), Ok(e) if e.spelling.is_some())
    }

    /// Spell note `i` with letter `name`; accidental and octave follow from
    /// the stored pitch.
    pub fn rename(&mut self, i: usize, name: NoteName) -> Result<()> {
        let entry = self.entry_mut(i)?;
        let spelling = Spelling::for_pitch(entry.pitch, name).ok_or(SpellError::Unnameable {
            pitch: entry.pitch,
            name: name.as_char(),
        })?;
        entry.spelling = Some(spelling);
        Ok(())
    }

    /// Store a complete spelling for note `i`. It must sound as the stored
    /// pitch.
    pub fn rename_full(
        &mut self,
        i: usize,
        name: NoteName,
        accidental: Accidental,
        octave: i8,
        printed: bool,
    ) -> Result<()> {
        let entry = self.entry_mut(i)?;
        if to_midi(name, accidental, octave) != entry.pitch as i32 {
            return Err(SpellError::Unnameable {
                pitch: entry.pitch,
                name: name.as_char(),
            });
        }
        entry.spelling = Some(Spelling {
            name,
            accidental,
            octave,
            printed,
        });
        Ok(())
    }

    /// Number of notes in `[i - pre, i + post)`, clipped to the active
    /// range, whose pitch class is `pc`.
    ///
    /// Panics when `pc >= 12`.
    pub fn count(&self, pc: u8, i: usize, pre: usize, post: usize) -> usize {
        assert!(pc < 12, "pitch class {} out of range", pc);
        let left = i.saturating_sub(pre).max(self.first());
        let right = i.saturating_add(post).min(self.stop());
        if left >= right {
            return 0;
        }
        self.notes[left..right]
            .iter()
            .filter(|e| pitch_class(e.pitch) == pc)
            .count()
    }

    /// Clear every spelling in the active range.
    pub fn unspell(&mut self) {
        let (first, stop) = (self.first(), self.stop());
        for e in &mut self.notes[first..stop] {
            e.spelling = None;
        }
    }

    /// The active range as a serializable sequence.
    pub fn spelled(&self) -> Vec<SpelledNote> {
        (self.first()..self.stop())
            .map(|i| {
                let e = &self.notes[i];
                SpelledNote {
                    index: i,
                    pitch: e.pitch,
                    measure: e.measure,
                    simultaneous: e.simultaneous,
                    duration: e.duration,
                    spelling: e.spelling,
                }
            })
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoteEntry> {
        let (first, stop) = (self.first(), self.stop());
        self.notes[first..stop].iter()
    }
}
