#[macro_use]
extern crate lazy_static;

pub mod properties;

mod error;
mod range;
mod unicode;

pub use error::ExtractError;
pub use properties::Codepoint;
pub use range::RangeMarker;
pub use unicode::{extract, Extraction};
