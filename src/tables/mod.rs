//! Hand-authored catalogs that the generators index into.

mod celestial;
mod personnel;
mod races;
mod structures;

pub use celestial::*;
pub use personnel::*;
pub use races::*;
pub use structures::*;
