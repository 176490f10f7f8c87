//! Repair of passing and neighbour notes
//!
//! Scans the spelled sequence three notes at a time. When the middle note
//! moves by step between its neighbours but keeps the letter of one of
//! them (C Cb C, C Cb A, A A# C), it is respelled with the adjacent letter
//! so that the line moves letter by letter (C B C, C B A, A Bb C).

use super::enumerator::Enumerator;
use crate::models::NoteName;

/// Letter change to apply to the middle note of a trigram.
fn trigram_shift(d0: i32, d1: i32, n0: NoteName, n1: NoteName, n2: NoteName) -> Option<i32> {
    if d0 == 0 || d1 == 0 || d0.abs() > 2 || d1.abs() > 2 {
        return None;
    }
    // lower neighbour
    if d0 == -1 && d1 == 1 && n1 == n0 && n2 == n0 {
        return Some(-1);
    }
    // upper neighbour
    if d0 == 1 && d1 == -1 && n1 == n0 && n2 == n0 {
        return Some(1);
    }
    // descending, middle note keeps the first letter
    if (d0 == -1 || d0 == -2) && d1 == -2 && n1 == n0 && n2 == n0.shift(-2) {
        return Some(-1);
    }
    // ascending, middle note keeps the first letter
    if (d0 == 1 || d0 == 2) && d1 == 2 && n1 == n0 && n2 == n0.shift(2) {
        return Some(1);
    }
    // descending, middle note takes the last letter
    if d0 == -2 && (d1 == -1 || d1 == -2) && n2 == n1 && n2 == n0.shift(-2) {
        return Some(1);
    }
    // ascending, middle note takes the last letter
    if d0 == 2 && (d1 == 1 || d1 == 2) && n2 == n1 && n2 == n0.shift(2) {
        return Some(-1);
    }
    None
}

impl Enumerator {
    /// Respell passing and neighbour notes in the active range.
    ///
    /// Returns the number of notes rewritten. Trigrams with an unspelled
    /// note are skipped.
    pub fn rewrite_passing(&mut self) -> usize {
        let mut rewritten = 0;
        let mut i = self.first();
        while self.inside(i + 2) {
            if self.rewrite_trigram(i) {
                rewritten += 1;
            }
            i += 1;
        }
        if rewritten > 0 {
            log::debug!("rewrote {} passing notes", rewritten);
        }
        rewritten
    }

    fn rewrite_trigram(&mut self, i: usize) -> bool {
        let (p0, p1, p2) = match (self.midipitch(i), self.midipitch(i + 1), self.midipitch(i + 2)) {
            (Ok(p0), Ok(p1), Ok(p2)) => (p0 as i32, p1 as i32, p2 as i32),
            _ => return false,
        };
        let (n0, n1, n2) = match (self.name(i), self.name(i + 1), self.name(i + 2)) {
            (Ok(n0), Ok(n1), Ok(n2)) => (n0, n1, n2),
            _ => return false,
        };
        let shift = match trigram_shift(p1 - p0, p2 - p1, n0, n1, n2) {
            Some(s) => s,
            None => return false,
        };
        let target = n1.shift(shift);
        let before = self.spelling(i + 1).map(|s| s.to_string()).unwrap_or_default();
        if self.rename(i + 1, target).is_err() {
            return false;
        }
        log::debug!(
            "passing note {}: {} -> {}",
            i + 1,
            before,
            self.spelling(i + 1).map(|s| s.to_string()).unwrap_or_default()
        );
        true
    }
}
