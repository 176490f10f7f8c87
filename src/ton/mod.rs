//! Tonalities and catalogs of tonalities

pub mod fifths;
#[allow(clippy::module_inception)]
pub mod ton;
pub mod ton_index;

pub use fifths::KeySignature;
pub use ton::Ton;
pub use ton_index::TonIndex;
