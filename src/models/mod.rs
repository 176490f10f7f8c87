//! Pitch value types
//!
//! Letters, accidentals and spelled pitches shared by the scale catalog,
//! the note store and the spellers.

pub mod accidental;
pub mod note_name;
pub mod pitch;

// Re-export commonly used types
pub use accidental::Accidental;
pub use note_name::NoteName;
pub use pitch::{
    accidental_for, check_midi, enharmonics, octave_for, pitch_class, to_midi, Spelling,
    MAX_PITCH, MIN_PITCH,
};
