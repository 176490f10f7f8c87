//! Mode catalog and concrete scales

pub mod mode;
#[allow(clippy::module_inception)]
pub mod scale;

pub use mode::{Mode, ModeName};
pub use scale::{Degree, Scale};
