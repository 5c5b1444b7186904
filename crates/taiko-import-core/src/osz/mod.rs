//! Beatmap archive (`.osz`) support.
//!
//! - `IniDocument` - tolerant `key: value` reader for beatmap files
//! - `OszParser` - archive to `SongRecord` plus the files to extract

mod ini;
mod parser;

pub use ini::*;
pub use parser::*;
