//! Note store and input feeds

pub mod enumerator;
pub mod midi_feed;
pub mod rewrite;

pub use enumerator::{Enumerator, NoteEntry, SpelledNote};
pub use midi_feed::load_smf;
