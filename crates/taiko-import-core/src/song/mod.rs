//! The unified song record and its construction.
//!
//! - `SongRecord` - one song as imported by the front-end database
//! - `LanguageStrings` - localized title/subtitle variants
//! - `SongRecordBuilder` - normalization shared by both source formats

mod builder;
mod record;

pub use builder::*;
pub use record::*;
