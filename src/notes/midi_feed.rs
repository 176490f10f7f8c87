//! Standard MIDI File input
//!
//! Reads note-on events from every track of a MIDI file, merges them by
//! onset and appends them to a note store with their bar number and
//! duration in bars.

use std::collections::{HashMap, VecDeque};

use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};
use num_rational::Rational32;

use super::enumerator::Enumerator;
use crate::error::{Result, SpellError};

/// Ticks per quarter used for timecode-based files.
const DEFAULT_PPQ: u32 = 480;

#[derive(Debug, Clone)]
struct Onset {
    tick: u32,
    end: Option<u32>,
    key: u8,
    order: usize,
}

/// Append the notes of a MIDI file to `notes`, returning how many were
/// added.
///
/// Notes starting on the same tick are flagged simultaneous. Bars follow the
/// first time signature of the file (4/4 if none). A file with more notes
/// than the store has room for is rejected with `StoreClosed` before any
/// note is appended.
pub fn load_smf(bytes: &[u8], notes: &mut Enumerator) -> Result<usize> {
    let smf = Smf::parse(bytes)?;
    let ppq = match smf.header.timing {
        Timing::Metrical(t) => t.as_int() as u32,
        Timing::Timecode(fps, subframe) => {
            log::warn!(
                "timecode file ({} fps, {} ticks per frame): bars assume {} ticks per quarter",
                fps.as_int(),
                subframe,
                DEFAULT_PPQ
            );
            DEFAULT_PPQ
        }
    };
    if ppq == 0 {
        return Err(SpellError::Midi("zero ticks per quarter".to_string()));
    }

    let mut onsets: Vec<Onset> = Vec::new();
    let mut time_sig: Option<(u32, u8, u8)> = None;

    for track in &smf.tracks {
        let mut tick = 0u32;
        let mut pending: HashMap<(u8, u8), VecDeque<usize>> = HashMap::new();

        for event in track {
            tick = tick.saturating_add(event.delta.as_int());
            match event.kind {
                TrackEventKind::Midi { channel, message } => {
                    let ch = channel.as_int();
                    match message {
                        MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                            pending
                                .entry((ch, key.as_int()))
                                .or_default()
                                .push_back(onsets.len());
                            onsets.push(Onset {
                                tick,
                                end: None,
                                key: key.as_int(),
                                order: onsets.len(),
                            });
                        }
                        MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                            if let Some(i) = pending
                                .get_mut(&(ch, key.as_int()))
                                .and_then(|q| q.pop_front())
                            {
                                onsets[i].end = Some(tick);
                            }
                        }
                        _ => {}
                    }
                }
                TrackEventKind::Meta(MetaMessage::TimeSignature(num, den_pow, _, _)) => {
                    if time_sig.map_or(true, |(t, _, _)| tick < t) {
                        time_sig = Some((tick, num, den_pow));
                    }
                }
                _ => {}
            }
        }
        // unterminated notes last until the end of their track
        for queue in pending.values() {
            for &i in queue {
                onsets[i].end = Some(tick);
            }
        }
    }

    let (num, den_pow) = match time_sig {
        Some((_, num, den_pow)) if num > 0 && den_pow <= 6 => (num as u32, den_pow as u32),
        _ => (4, 2),
    };
    let bar_ticks = (ppq * 4 * num) >> den_pow;
    if bar_ticks == 0 {
        return Err(SpellError::Midi("bar of zero ticks".to_string()));
    }
    log::debug!(
        "midi input: {} notes, {} ticks per quarter, {}/{} bars",
        onsets.len(),
        ppq,
        num,
        1u32 << den_pow
    );

    onsets.sort_by_key(|o| (o.tick, o.key, o.order));

    let mut entries = Vec::with_capacity(onsets.len());
    let mut prev_tick: Option<u32> = None;
    for onset in &onsets {
        let length = onset.end.unwrap_or(onset.tick).saturating_sub(onset.tick);
        let duration = Rational32::new(
            i32::try_from(length).map_err(|e| SpellError::Midi(e.to_string()))?,
            i32::try_from(bar_ticks).map_err(|e| SpellError::Midi(e.to_string()))?,
        );
        let bar = i32::try_from(onset.tick / bar_ticks).map_err(|e| SpellError::Midi(e.to_string()))?;
        entries.push((onset.key as i32, bar, prev_tick == Some(onset.tick), duration));
        prev_tick = Some(onset.tick);
    }

    if !entries.is_empty() && notes.remaining().map_or(false, |room| room < entries.len()) {
        log::warn!(
            "midi input: {} notes do not fit in the note store ({} left)",
            entries.len(),
            notes.remaining().unwrap_or(0)
        );
        return Err(SpellError::StoreClosed);
    }
    for (pitch, bar, simultaneous, duration) in entries {
        notes.add_with_duration(pitch, bar, simultaneous, duration)?;
    }
    Ok(onsets.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use midly::{Format, Fps, Header, TrackEvent};

    fn note(delta: u32, key: u8, on: bool) -> TrackEvent<'static> {
        TrackEvent {
            delta: delta.into(),
            kind: TrackEventKind::Midi {
                channel: 0.into(),
                message: if on {
                    MidiMessage::NoteOn {
                        key: key.into(),
                        vel: 80.into(),
                    }
                } else {
                    MidiMessage::NoteOff {
                        key: key.into(),
                        vel: 0.into(),
                    }
                },
            },
        }
    }

    fn write(tracks: Vec<Vec<TrackEvent<'static>>>) -> Vec<u8> {
        let format = if tracks.len() > 1 {
            Format::Parallel
        } else {
            Format::SingleTrack
        };
        let mut smf = Smf {
            header: Header {
                format,
                timing: Timing::Metrical(480.into()),
            },
            tracks: Vec::new(),
        };
        for mut track in tracks {
            track.push(TrackEvent {
                delta: 0.into(),
                kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
            });
            smf.tracks.push(track);
        }
        let mut out = Vec::new();
        smf.write(&mut out).unwrap();
        out
    }

    #[test]
    fn test_melody_bars_and_durations() {
        // four quarters in 4/4, then a half note in bar 1
        let track = vec![
            note(0, 60, true),
            note(480, 60, false),
            note(0, 62, true),
            note(480, 62, false),
            note(0, 64, true),
            note(480, 64, false),
            note(0, 65, true),
            note(480, 65, false),
            note(0, 67, true),
            note(960, 67, false),
        ];
        let mut e = Enumerator::new();
        assert_eq!(load_smf(&write(vec![track]), &mut e).unwrap(), 5);
        assert_eq!(e.len(), 5);
        assert_eq!(e.measure(3).unwrap(), 0);
        assert_eq!(e.measure(4).unwrap(), 1);
        assert_eq!(e.duration(0).unwrap(), Rational32::new(1, 4));
        assert_eq!(e.duration(4).unwrap(), Rational32::new(1, 2));
        assert!(!e.simultaneous(1).unwrap());
    }

    #[test]
    fn test_tracks_merge_into_chords() {
        let upper = vec![note(0, 64, true), note(480, 64, false)];
        let lower = vec![note(0, 48, true), note(480, 48, false)];
        let mut e = Enumerator::new();
        load_smf(&write(vec![upper, lower]), &mut e).unwrap();
        assert_eq!(e.midipitch(0).unwrap(), 48);
        assert_eq!(e.midipitch(1).unwrap(), 64);
        assert!(!e.simultaneous(0).unwrap());
        assert!(e.simultaneous(1).unwrap());
    }

    #[test]
    fn test_time_signature_sets_bar_length() {
        let track = vec![
            TrackEvent {
                delta: 0.into(),
                kind: TrackEventKind::Meta(MetaMessage::TimeSignature(3, 2, 24, 8)),
            },
            note(0, 60, true),
            note(480, 60, false),
            note(960, 62, true),
            note(480, 62, false),
        ];
        let mut e = Enumerator::new();
        load_smf(&write(vec![track]), &mut e).unwrap();
        assert_eq!(e.measure(1).unwrap(), 1);
        assert_eq!(e.duration(0).unwrap(), Rational32::new(1, 3));
    }

    #[test]
    fn test_file_larger_than_store_adds_nothing() {
        let track = vec![
            note(0, 60, true),
            note(480, 60, false),
            note(0, 62, true),
            note(480, 62, false),
            note(0, 64, true),
            note(480, 64, false),
        ];
        let bytes = write(vec![track]);

        let mut small = Enumerator::with_capacity(2);
        assert_eq!(load_smf(&bytes, &mut small), Err(SpellError::StoreClosed));
        assert!(small.is_empty());
        assert!(small.is_open());

        let mut exact = Enumerator::with_capacity(3);
        assert_eq!(load_smf(&bytes, &mut exact).unwrap(), 3);
        assert!(!exact.is_open());

        let mut closed = Enumerator::new();
        closed.close();
        assert_eq!(load_smf(&bytes, &mut closed), Err(SpellError::StoreClosed));
        assert!(closed.is_empty());
    }

    #[test]
    fn test_timecode_file_uses_default_quarter() {
        let track = vec![
            note(0, 60, true),
            note(DEFAULT_PPQ, 60, false),
            note(3 * DEFAULT_PPQ, 62, true),
            note(DEFAULT_PPQ, 62, false),
        ];
        let metrical = write(vec![track]);
        let mut smf = Smf::parse(&metrical).unwrap();
        smf.header.timing = Timing::Timecode(Fps::Fps25, 40);
        let mut bytes = Vec::new();
        smf.write(&mut bytes).unwrap();

        let mut e = Enumerator::new();
        assert_eq!(load_smf(&bytes, &mut e).unwrap(), 2);
        assert_eq!(e.measure(0).unwrap(), 0);
        assert_eq!(e.measure(1).unwrap(), 1);
        assert_eq!(e.duration(0).unwrap(), Rational32::new(1, 4));
    }

    #[test]
    fn test_garbage_is_midi_error() {
        let mut e = Enumerator::new();
        assert!(matches!(
            load_smf(b"not a midi file", &mut e),
            Err(SpellError::Midi(_))
        ));
    }
}
