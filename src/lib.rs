//! Pitch spelling engine
//!
//! Assigns letter names, accidentals and octaves to notes known only by
//! their MIDI pitch, using the tonal context around each note.
//!
//! Notes go into an [`Enumerator`], a [`Speller`] such as [`PS13`] names
//! them, and the spelled sequence is read back from the store.
//! [`Scale`], [`Ton`] and [`TonIndex`] model the tonal context.

pub mod config;
pub mod error;
pub mod models;
pub mod notes;
pub mod scale;
pub mod spellers;
pub mod ton;

// Re-export commonly used types
pub use config::SpellerConfig;
pub use error::{Result, SpellError};
pub use models::{Accidental, NoteName, Spelling};
pub use notes::{Enumerator, SpelledNote};
pub use scale::{Mode, ModeName, Scale};
pub use spellers::{Algo, RewritePassing, Speller, PS13};
pub use ton::{KeySignature, Ton, TonIndex};
