//! Line-format chart (`.tja`) support.
//!
//! - `TjaDocument` - decoded chart text split into lines
//! - `string_field`, `float_field` - `name:value` lookups
//! - `parse` - chart to `SongRecord`
//! - `content_hash` - stable highscore key derived from the chart text

mod document;
mod fields;
mod hash;
mod parser;

pub use document::*;
pub use fields::*;
pub use hash::*;
pub use parser::*;
